use super::*;
use crate::config::RequestContext;
use pretty_assertions::assert_eq;
use serde_json::json;

fn context() -> RequestContext {
    RequestContext {
        api_key: Some("sk_test_1".to_string()),
        api_version: Some("2024-06-20".to_string()),
        account: None,
        request_id: Some("req_42".to_string()),
    }
}

#[test]
fn test_convert_recognized_tag_to_typed_resource() {
    let value = json!({
        "id": "ch_1",
        "object": "charge",
        "amount": 1500,
        "currency": "usd",
        "status": "succeeded"
    });

    let converted = convert(value, &context());
    let resource = converted.as_resource().expect("typed resource");
    assert_eq!(resource.object_name(), "charge");
    assert_eq!(resource.id(), Some("ch_1"));
    assert_eq!(resource.context().request_id.as_deref(), Some("req_42"));

    let AnyObject::Charge(charge) = resource else {
        panic!("expected a charge, got {resource:?}");
    };
    assert_eq!(charge.amount, 1500);
    assert_eq!(charge.currency, "usd");
    assert_eq!(charge.status.as_deref(), Some("succeeded"));
}

#[test]
fn test_convert_unknown_tag_to_generic() {
    let value = json!({
        "id": "sub_1",
        "object": "subscription",
        "plan": "starter",
        "quantity": 3
    });

    let converted = convert(value, &context());
    let generic = converted.as_generic().expect("generic object");
    assert_eq!(generic.object_name(), Some("subscription"));
    assert_eq!(generic.id(), Some("sub_1"));
    assert_eq!(generic.len(), 4);
    assert_eq!(
        generic.get("plan").and_then(Converted::as_scalar),
        Some(&json!("starter"))
    );
    assert_eq!(
        generic.get("quantity").and_then(Converted::as_scalar),
        Some(&json!(3))
    );
}

#[test]
fn test_convert_recurses_into_untagged_mappings() {
    let value = json!({
        "latest_charge": {"id": "ch_2", "object": "charge", "amount": 99, "currency": "eur"},
        "customers": [
            {"id": "cus_1", "object": "customer"},
            {"id": "cus_2", "object": "customer"}
        ],
        "count": 2
    });

    let converted = convert(value, &context());
    let generic = converted.as_generic().expect("no tag at the top level");

    let nested = generic
        .get("latest_charge")
        .and_then(Converted::as_resource)
        .expect("nested charge is typed");
    assert_eq!(nested.object_name(), "charge");

    let customers = generic
        .get("customers")
        .and_then(Converted::as_sequence)
        .expect("sequence converted element-wise");
    assert_eq!(customers.len(), 2);
    for (customer, id) in customers.iter().zip(["cus_1", "cus_2"]) {
        let resource = customer.as_resource().expect("typed customer");
        assert_eq!(resource.object_name(), "customer");
        assert_eq!(resource.id(), Some(id));
    }

    assert_eq!(
        generic.get("count").and_then(Converted::as_scalar),
        Some(&json!(2))
    );
}

#[test]
fn test_malformed_known_tag_falls_back_to_generic() {
    // The tag says charge, but the required amount field is a string.
    let value = json!({
        "id": "ch_3",
        "object": "charge",
        "amount": "not-a-number",
        "currency": "usd"
    });

    let converted = convert(value, &context());
    let generic = converted.as_generic().expect("shape mismatch keeps fields");
    assert_eq!(generic.object_name(), Some("charge"));
    assert_eq!(
        generic.get("amount").and_then(Converted::as_scalar),
        Some(&json!("not-a-number"))
    );
}

#[test]
fn test_convert_round_trips_to_original_json() {
    let original = json!({
        "id": "cus_5",
        "object": "customer",
        "email": "jenny@example.com",
        "livemode": false,
        "preferences": {"locale": "en", "object": "unknown_thing"},
        "tags": ["vip", 7, null]
    });

    let converted = convert(original.clone(), &context());
    assert_eq!(serde_json::to_value(&converted).unwrap(), original);
}

#[test]
fn test_scalars_pass_through() {
    let converted = convert(json!(42), &context());
    assert_eq!(converted.as_scalar(), Some(&json!(42)));

    let converted = convert(json!(null), &context());
    assert_eq!(converted.as_scalar(), Some(&json!(null)));
}

#[test]
fn test_expandable_variants() {
    let bare: Expandable<crate::resources::Customer> =
        serde_json::from_value(json!("cus_9")).unwrap();
    assert!(!bare.is_expanded());
    assert_eq!(bare.id(), Some("cus_9"));
    assert!(bare.as_object().is_none());

    let expanded: Expandable<crate::resources::Customer> =
        serde_json::from_value(json!({"id": "cus_9", "object": "customer"})).unwrap();
    assert!(expanded.is_expanded());
    assert_eq!(expanded.id(), Some("cus_9"));
    assert_eq!(expanded.into_object().unwrap().id, "cus_9");
}

#[test]
fn test_registry_capabilities() {
    assert!(supports("customer", Capability::Delete));
    assert!(supports("customer", Capability::Search));
    assert!(!supports("charge", Capability::Delete));
    assert!(supports("card", Capability::Delete));
    assert!(!supports("card", Capability::List));
    assert!(!supports("unknown_tag", Capability::Retrieve));

    let card = lookup("card").expect("card is registered");
    assert!(card.collection_path.is_none());
    let customer = lookup("customer").expect("customer is registered");
    assert_eq!(customer.collection_path, Some("customers"));
}

#[test]
fn test_deleted_envelope() {
    let deleted: Deleted =
        serde_json::from_value(json!({"id": "cus_1", "object": "customer", "deleted": true}))
            .unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.id, "cus_1");
}
