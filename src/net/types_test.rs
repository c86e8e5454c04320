use super::*;

// =============================================================
// PendingInput wire contract
// =============================================================

#[test]
fn pending_input_uses_activity_id_not_id() {
    // The schema comment in the API once suggested `id`; the documented
    // contract is `activity_id`. Pin it so a silent rename fails loudly.
    let json = serde_json::json!({
        "activity_id": "a1",
        "created_at": "2025-11-02T10:00:00Z",
        "required_fields": ["title", "description"]
    });
    let input: PendingInput = serde_json::from_value(json).expect("deserialize");
    assert_eq!(input.activity_id, "a1");
    assert_eq!(input.created_at.as_deref(), Some("2025-11-02T10:00:00Z"));
    assert_eq!(
        input.required_fields,
        Some(vec!["title".to_owned(), "description".to_owned()])
    );
}

#[test]
fn pending_input_id_alone_is_rejected() {
    let json = serde_json::json!({ "id": "a1" });
    assert!(serde_json::from_value::<PendingInput>(json).is_err());
}

#[test]
fn pending_input_optional_fields_may_be_absent() {
    let json = serde_json::json!({ "activity_id": "a2" });
    let input: PendingInput = serde_json::from_value(json).expect("deserialize");
    assert!(input.created_at.is_none());
    assert!(input.required_fields.is_none());
}

#[test]
fn inputs_response_defaults_to_empty_list() {
    let resp: InputsResponse = serde_json::from_value(serde_json::json!({})).expect("deserialize");
    assert!(resp.inputs.is_empty());
}

// =============================================================
// ResolveRequest wire contract
// =============================================================

#[test]
fn resolve_request_serializes_documented_shape() {
    let mut input_data = std::collections::BTreeMap::new();
    input_data.insert("title".to_owned(), "Picnic".to_owned());
    input_data.insert("description".to_owned(), String::new());

    let req = ResolveRequest {
        activity_id: "a1".to_owned(),
        input_data,
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "activity_id": "a1",
            "input_data": { "description": "", "title": "Picnic" }
        })
    );
}

// =============================================================
// Waitlist bodies
// =============================================================

#[test]
fn waitlist_request_carries_honeypot_verbatim() {
    let req = WaitlistRequest {
        email: "a@b.c".to_owned(),
        website_url: "http://spam.example".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "email": "a@b.c", "website_url": "http://spam.example" })
    );
}

#[test]
fn error_body_tolerates_missing_error_field() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({})).expect("deserialize");
    assert!(body.error.is_none());

    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({ "error": "Already joined" })).expect("deserialize");
    assert_eq!(body.error.as_deref(), Some("Already joined"));
}
