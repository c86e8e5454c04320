use super::*;
use crate::net::types::PendingInput;

fn record(activity_id: &str, fields: Option<&[&str]>) -> PendingInput {
    PendingInput {
        activity_id: activity_id.to_owned(),
        created_at: None,
        required_fields: fields.map(|f| f.iter().map(|s| (*s).to_owned()).collect()),
    }
}

// =============================================================
// Field controls & labels
// =============================================================

#[test]
fn description_field_is_multi_line() {
    assert_eq!(field_control("description"), FieldControl::MultiLine);
}

#[test]
fn other_fields_are_single_line() {
    assert_eq!(field_control("title"), FieldControl::SingleLine);
    assert_eq!(field_control("location"), FieldControl::SingleLine);
    // Only the literal name counts.
    assert_eq!(field_control("Description"), FieldControl::SingleLine);
    assert_eq!(field_control("description_long"), FieldControl::SingleLine);
}

#[test]
fn field_label_capitalizes_first_char() {
    assert_eq!(field_label("title"), "Title");
    assert_eq!(field_label("description"), "Description");
    assert_eq!(field_label(""), "");
}

// =============================================================
// Card construction (filter invariant, ordering)
// =============================================================

#[test]
fn record_without_required_fields_produces_no_card() {
    assert!(InputCard::from_record(record("a2", None)).is_none());
}

#[test]
fn record_with_empty_required_fields_produces_no_card() {
    assert!(InputCard::from_record(record("a3", Some(&[]))).is_none());
}

#[test]
fn field_order_matches_server_order() {
    let card = InputCard::from_record(record("a1", Some(&["zeta", "alpha", "middle"])))
        .expect("card");
    let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "middle"]);
}

#[test]
fn single_record_renders_title_and_description_controls() {
    let cards = cards_from_response(vec![record("a1", Some(&["title", "description"]))]);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].fields[0].name, "title");
    assert_eq!(cards[0].fields[0].control, FieldControl::SingleLine);
    assert_eq!(cards[0].fields[1].name, "description");
    assert_eq!(cards[0].fields[1].control, FieldControl::MultiLine);
}

#[test]
fn malformed_records_are_dropped_valid_kept() {
    let cards = cards_from_response(vec![
        record("a1", Some(&["title"])),
        record("a2", None),
        record("a3", Some(&["when"])),
    ]);
    let ids: Vec<&str> = cards.iter().map(|c| c.activity_id.as_str()).collect();
    assert_eq!(ids, ["a1", "a3"]);
}

// =============================================================
// List phase transitions
// =============================================================

#[test]
fn loaded_with_only_malformed_record_is_empty_state() {
    let mut state = InputsState::default();
    state.apply_loaded(vec![record("a2", None)]);
    assert_eq!(state.phase, ListPhase::Loaded);
    assert!(state.is_empty_state());
}

#[test]
fn load_error_is_not_empty_state() {
    let mut state = InputsState::default();
    state.apply_load_error();
    assert_eq!(state.phase, ListPhase::Failed);
    assert!(!state.is_empty_state());
}

// =============================================================
// Submission lifecycle
// =============================================================

fn loaded_state() -> InputsState {
    let mut state = InputsState::default();
    state.apply_loaded(vec![
        record("a1", Some(&["title", "description"])),
        record("a2", Some(&["when"])),
    ]);
    state
}

#[test]
fn begin_submit_disables_card_and_changes_label() {
    let mut state = loaded_state();
    assert!(state.begin_submit("a1"));
    let card = &state.cards[0];
    assert_eq!(card.phase, CardPhase::Submitting);
    assert_eq!(card.button_label(), "Processing...");
}

#[test]
fn begin_submit_rejects_second_attempt_in_flight() {
    let mut state = loaded_state();
    assert!(state.begin_submit("a1"));
    assert!(!state.begin_submit("a1"));
}

#[test]
fn begin_submit_rejects_unknown_card() {
    let mut state = loaded_state();
    assert!(!state.begin_submit("a404"));
}

#[test]
fn successful_resolution_removes_card() {
    let mut state = loaded_state();
    state.begin_submit("a1");
    state.apply_submit_ok("a1");
    assert!(state.cards.iter().all(|c| c.activity_id != "a1"));
    assert!(!state.is_empty_state());
}

#[test]
fn resolving_last_card_shows_empty_state() {
    let mut state = loaded_state();
    state.apply_submit_ok("a1");
    state.apply_submit_ok("a2");
    assert!(state.is_empty_state());
}

#[test]
fn failed_resolution_returns_to_idle_and_keeps_values() {
    let mut state = loaded_state();
    state.set_field_value("a1", "title", "Picnic".to_owned());
    state.set_field_value("a1", "description", "In the park".to_owned());
    state.begin_submit("a1");
    state.apply_submit_err("a1");

    let card = state.cards.iter().find(|c| c.activity_id == "a1").expect("card a1");
    assert_eq!(card.phase, CardPhase::Idle);
    assert_eq!(card.button_label(), "Resolve & Process");
    assert_eq!(card.fields[0].value, "Picnic");
    assert_eq!(card.fields[1].value, "In the park");
}

// =============================================================
// Resolution payload
// =============================================================

#[test]
fn resolve_request_collects_all_fields_including_empty() {
    let mut state = loaded_state();
    state.set_field_value("a1", "title", "Picnic".to_owned());
    // description left empty on purpose

    let card = state.cards.iter().find(|c| c.activity_id == "a1").expect("card a1");
    let req = card.resolve_request();
    assert_eq!(req.activity_id, "a1");
    assert_eq!(req.input_data.get("title").map(String::as_str), Some("Picnic"));
    assert_eq!(req.input_data.get("description").map(String::as_str), Some(""));
    assert_eq!(req.input_data.len(), 2);
}

#[test]
fn set_field_value_ignores_unknown_field() {
    let mut state = loaded_state();
    state.set_field_value("a1", "nope", "x".to_owned());
    let card = state.cards.iter().find(|c| c.activity_id == "a1").expect("card a1");
    assert!(card.fields.iter().all(|f| f.value.is_empty()));
}
