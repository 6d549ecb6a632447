//! Capability traits
//!
//! Each resource type opts into the operations it supports by implementing
//! the matching trait; the default method bodies carry the whole
//! implementation. Dispatch is a direct call through the trait, and a type
//! that does not declare a capability simply does not have the method.
//! Every operation issues exactly one HTTP call; only required-field
//! presence is validated locally.

use crate::client::Client;
use crate::error::Result;
use crate::object::{ApiResource, Deleted};
use crate::pagination::{List, SearchList};
use crate::params::{
    encode_id, CreateParams, DeleteParams, ListParams, RetrieveParams, SearchParams, UpdateParams,
};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

fn class_path<T: ApiResource>() -> String {
    format!("/v1/{}", T::CLASS_PATH)
}

fn instance_path<T: ApiResource>(id: &str) -> String {
    format!("/v1/{}/{}", T::CLASS_PATH, encode_id(id))
}

/// Resources that can be created
#[async_trait]
pub trait Createable: ApiResource + DeserializeOwned + Send + Sized {
    /// Create a new object from the given body fields
    async fn create(client: &Client, params: CreateParams) -> Result<Self> {
        client
            .request_object(
                Method::POST,
                &class_path::<Self>(),
                &params.to_query(),
                Some(&params.to_body()),
                &params.options,
            )
            .await
    }
}

/// Resources that can be fetched by id
#[async_trait]
pub trait Retrievable: ApiResource + DeserializeOwned + Send + Sized {
    /// Retrieve the object with the given id
    async fn retrieve(client: &Client, id: &str, params: RetrieveParams) -> Result<Self> {
        client
            .request_object(
                Method::GET,
                &instance_path::<Self>(id),
                &params.to_query(),
                None,
                &params.options,
            )
            .await
    }
}

/// Resources that can be updated in place
#[async_trait]
pub trait Updateable: ApiResource + DeserializeOwned + Send + Sized {
    /// Update the object with the given id, returning its new state
    async fn update(client: &Client, id: &str, params: UpdateParams) -> Result<Self> {
        client
            .request_object(
                Method::POST,
                &instance_path::<Self>(id),
                &params.to_query(),
                Some(&params.to_body()),
                &params.options,
            )
            .await
    }
}

/// Resources that can be deleted
#[async_trait]
pub trait Deletable: ApiResource + DeserializeOwned + Send + Sized {
    /// Delete the object with the given id
    async fn delete(client: &Client, id: &str, params: DeleteParams) -> Result<Deleted> {
        client
            .request_json(
                Method::DELETE,
                &instance_path::<Self>(id),
                &[],
                None,
                &params.options,
            )
            .await
    }
}

/// Resources with a listable top-level collection
#[async_trait]
pub trait Listable: ApiResource + DeserializeOwned + Send + Sized {
    /// Fetch one page of the collection
    async fn list(client: &Client, params: ListParams) -> Result<List<Self>> {
        client.request_list(&class_path::<Self>(), &params).await
    }
}

/// Resources with a search endpoint
#[async_trait]
pub trait Searchable: ApiResource + DeserializeOwned + Send + Sized {
    /// Fetch one page of search results
    async fn search(client: &Client, params: SearchParams) -> Result<SearchList<Self>> {
        client
            .request_search(&format!("{}/search", class_path::<Self>()), &params)
            .await
    }
}
