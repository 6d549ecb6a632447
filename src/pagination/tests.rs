use super::*;
use crate::config::RequestContext;
use crate::object::ApiObject;
use crate::params::{ListParams, SearchParams};
use crate::resources::Customer;
use pretty_assertions::assert_eq;
use serde_json::json;

fn customer_page(ids: &[&str], has_more: bool) -> List<Customer> {
    let data: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "object": "customer"}))
        .collect();
    serde_json::from_value(json!({
        "object": "list",
        "data": data,
        "has_more": has_more,
        "url": "/v1/customers"
    }))
    .unwrap()
}

#[test]
fn test_deserialize_list_envelope() {
    let page: List<Customer> = serde_json::from_value(json!({
        "object": "list",
        "data": [{"id": "cus_1", "object": "customer"}],
        "has_more": true,
        "url": "/v1/customers",
        "total_count": 12
    }))
    .unwrap();

    assert_eq!(page.object, "list");
    assert_eq!(page.data.len(), 1);
    assert!(page.has_more);
    assert_eq!(page.url, "/v1/customers");
    assert_eq!(page.total_count, Some(12));
}

#[test]
fn test_next_params_moves_forward_boundary() {
    let mut page = customer_page(&["cus_1", "cus_2", "cus_3"], true);
    page.attach(
        ListParams::new().limit(3).filter("email", "a@example.com"),
        &RequestContext::default(),
    );

    let next = page.next_params().expect("more pages exist");
    assert_eq!(next.starting_after.as_deref(), Some("cus_3"));
    assert_eq!(next.ending_before, None);
    // Filters survive the boundary move.
    assert_eq!(next.limit, Some(3));
    assert_eq!(
        next.filters,
        vec![("email".to_string(), "a@example.com".to_string())]
    );
}

#[test]
fn test_next_params_moves_backward_boundary() {
    let mut page = customer_page(&["cus_4", "cus_5"], true);
    page.attach(
        ListParams::new().ending_before("cus_6"),
        &RequestContext::default(),
    );

    let next = page.next_params().expect("more pages exist");
    assert_eq!(next.ending_before.as_deref(), Some("cus_4"));
    assert_eq!(next.starting_after, None);
}

#[test]
fn test_next_params_exhausted() {
    let mut page = customer_page(&["cus_1"], false);
    page.attach(ListParams::new(), &RequestContext::default());
    assert!(page.next_params().is_none());
}

#[test]
fn test_attach_propagates_context_to_items() {
    let mut page = customer_page(&["cus_1", "cus_2"], false);
    let context = RequestContext {
        request_id: Some("req_7".to_string()),
        ..RequestContext::default()
    };
    page.attach(ListParams::new(), &context);

    for item in &page.data {
        assert_eq!(item.context().request_id.as_deref(), Some("req_7"));
    }
}

#[test]
fn test_search_next_params_uses_token() {
    let mut page: SearchList<Customer> = serde_json::from_value(json!({
        "object": "search_result",
        "data": [{"id": "cus_1", "object": "customer"}],
        "has_more": true,
        "url": "/v1/customers/search",
        "next_page": "tok_abc"
    }))
    .unwrap();
    page.attach(
        SearchParams::new("email:'a@example.com'").limit(1),
        &RequestContext::default(),
    );

    let next = page.next_params().expect("token present");
    assert_eq!(next.page.as_deref(), Some("tok_abc"));
    assert_eq!(next.query, "email:'a@example.com'");
    assert_eq!(next.limit, Some(1));
}

#[test]
fn test_search_next_params_requires_token() {
    let page: SearchList<Customer> = serde_json::from_value(json!({
        "object": "search_result",
        "data": [],
        "has_more": true,
        "url": "/v1/customers/search"
    }))
    .unwrap();
    // has_more without a token cannot continue.
    assert!(page.next_params().is_none());

    let page: SearchList<Customer> = serde_json::from_value(json!({
        "object": "search_result",
        "data": [],
        "has_more": false,
        "url": "/v1/customers/search",
        "next_page": "tok_stale"
    }))
    .unwrap();
    // A stale token on an exhausted page is ignored.
    assert!(page.next_params().is_none());
}
