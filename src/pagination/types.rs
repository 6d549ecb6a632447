//! List and search result envelopes

use crate::client::Client;
use crate::config::RequestContext;
use crate::error::Result;
use crate::object::ApiObject;
use crate::params::{ListParams, SearchParams};
use futures::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

// ============================================================================
// List
// ============================================================================

/// One page of a list response: `{"object": "list", "data": [...],
/// "has_more": bool, "url": ...}`.
///
/// The page remembers the [`ListParams`] that produced it; follow-up pages
/// reuse those filters with an updated boundary cursor derived from the
/// page's edge item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `"list"`
    pub object: String,
    /// Items in server-reported order
    pub data: Vec<T>,
    /// Whether more items exist beyond this page
    pub has_more: bool,
    /// Path this page was fetched from
    #[serde(default)]
    pub url: String,
    /// Total collection size, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(skip)]
    pub(crate) params: ListParams,
}

impl<T> List<T> {
    /// An exhausted page carrying the same filters, returned when the
    /// caller pages past the end
    fn exhausted(&self) -> Self {
        Self {
            object: "list".to_string(),
            data: Vec::new(),
            has_more: false,
            url: self.url.clone(),
            total_count: None,
            params: self.params.clone(),
        }
    }
}

impl<T: ApiObject> List<T> {
    pub(crate) fn attach(&mut self, params: ListParams, context: &RequestContext) {
        self.params = params;
        for item in &mut self.data {
            item.set_context(context.clone());
        }
    }

    /// Parameters for the follow-up page, or `None` when exhausted.
    ///
    /// Forward pagination moves `starting_after` to the last item's id;
    /// when the originating params paged backward with `ending_before`,
    /// the boundary moves to the first item's id instead.
    pub fn next_params(&self) -> Option<ListParams> {
        if !self.has_more {
            return None;
        }
        let mut params = self.params.clone();
        if params.ending_before.is_some() {
            let first = self.data.first().and_then(ApiObject::id)?;
            params.ending_before = Some(first.to_string());
            params.starting_after = None;
        } else {
            let last = self.data.last().and_then(ApiObject::id)?;
            params.starting_after = Some(last.to_string());
            params.ending_before = None;
        }
        Some(params)
    }
}

impl<T: ApiObject + DeserializeOwned> List<T> {
    /// Fetch the next page with one follow-up request.
    ///
    /// On an exhausted page this returns an empty list without issuing a
    /// network call.
    pub async fn next_page(&self, client: &Client) -> Result<List<T>> {
        match self.next_params() {
            Some(params) => client.request_list(&self.url, &params).await,
            None => Ok(self.exhausted()),
        }
    }

    /// Iterate the whole collection lazily, fetching pages on demand.
    ///
    /// Items arrive in server-reported order with no local re-sorting. The
    /// stream is restartable only by listing from scratch, not mid-stream.
    pub fn paginate<'a>(self, client: &'a Client) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        let state = PageState {
            next: self.next_params(),
            url: self.url,
            queue: self.data.into(),
        };
        futures::stream::try_unfold(state, move |mut state| async move {
            loop {
                if let Some(item) = state.queue.pop_front() {
                    return Ok(Some((item, state)));
                }
                let Some(params) = state.next.take() else {
                    return Ok(None);
                };
                let page: List<T> = client.request_list(&state.url, &params).await?;
                state.next = page.next_params();
                if !page.url.is_empty() {
                    state.url = page.url;
                }
                state.queue = page.data.into();
            }
        })
    }
}

struct PageState<T, P> {
    queue: VecDeque<T>,
    next: Option<P>,
    url: String,
}

// ============================================================================
// Search
// ============================================================================

/// One page of a search response.
///
/// Search pagination continues through the opaque `next_page` token rather
/// than boundary ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchList<T> {
    /// Always `"search_result"`
    pub object: String,
    /// Items in server-reported relevance order
    pub data: Vec<T>,
    /// Whether more items exist beyond this page
    pub has_more: bool,
    /// Path this page was fetched from
    #[serde(default)]
    pub url: String,
    /// Continuation token for the follow-up page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    /// Total match count, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(skip)]
    pub(crate) params: SearchParams,
}

impl<T> SearchList<T> {
    fn exhausted(&self) -> Self {
        Self {
            object: "search_result".to_string(),
            data: Vec::new(),
            has_more: false,
            url: self.url.clone(),
            next_page: None,
            total_count: None,
            params: self.params.clone(),
        }
    }

    /// Parameters for the follow-up page, or `None` when exhausted
    pub fn next_params(&self) -> Option<SearchParams> {
        if !self.has_more {
            return None;
        }
        let token = self.next_page.as_ref()?;
        let mut params = self.params.clone();
        params.page = Some(token.clone());
        Some(params)
    }
}

impl<T: ApiObject> SearchList<T> {
    pub(crate) fn attach(&mut self, params: SearchParams, context: &RequestContext) {
        self.params = params;
        for item in &mut self.data {
            item.set_context(context.clone());
        }
    }
}

impl<T: ApiObject + DeserializeOwned> SearchList<T> {
    /// Fetch the next search page with one follow-up request.
    ///
    /// On an exhausted page this returns an empty result without issuing a
    /// network call.
    pub async fn next_page(&self, client: &Client) -> Result<SearchList<T>> {
        match self.next_params() {
            Some(params) => client.request_search(&self.url, &params).await,
            None => Ok(self.exhausted()),
        }
    }

    /// Iterate all matches lazily, fetching pages on demand
    pub fn paginate<'a>(self, client: &'a Client) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        let state = PageState {
            next: self.next_params(),
            url: self.url,
            queue: self.data.into(),
        };
        futures::stream::try_unfold(state, move |mut state| async move {
            loop {
                if let Some(item) = state.queue.pop_front() {
                    return Ok(Some((item, state)));
                }
                let Some(params) = state.next.take() else {
                    return Ok(None);
                };
                let page: SearchList<T> = client.request_search(&state.url, &params).await?;
                state.next = page.next_params();
                if !page.url.is_empty() {
                    state.url = page.url;
                }
                state.queue = page.data.into();
            }
        })
    }
}
