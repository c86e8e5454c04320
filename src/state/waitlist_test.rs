use super::*;

// =============================================================
// Client-side validation
// =============================================================

#[test]
fn empty_email_blocks_submission_with_message() {
    let mut state = WaitlistState::default();
    assert!(!state.begin_submit());
    assert_eq!(state.phase, WaitlistPhase::Editing);
    assert_eq!(state.error.as_deref(), Some("Please enter your email."));
}

#[test]
fn non_empty_email_starts_submission_and_clears_error() {
    let mut state = WaitlistState {
        email: "a@b.c".to_owned(),
        error: Some("old".to_owned()),
        ..WaitlistState::default()
    };
    assert!(state.begin_submit());
    assert_eq!(state.phase, WaitlistPhase::Submitting);
    assert!(state.error.is_none());
    assert_eq!(state.button_label(), "Joining...");
    assert!(state.submitting());
}

#[test]
fn begin_submit_rejects_while_in_flight() {
    let mut state = WaitlistState {
        email: "a@b.c".to_owned(),
        ..WaitlistState::default()
    };
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
}

// =============================================================
// Outcome handling — cleanup runs in every branch
// =============================================================

fn submitting_state() -> WaitlistState {
    let mut state = WaitlistState {
        email: "a@b.c".to_owned(),
        ..WaitlistState::default()
    };
    assert!(state.begin_submit());
    state
}

#[test]
fn accepted_swaps_form_for_success() {
    let mut state = submitting_state();
    state.finish(SubmitOutcome::Accepted);
    assert_eq!(state.phase, WaitlistPhase::Joined);
    assert!(state.error.is_none());
    assert!(!state.submitting());
}

#[test]
fn rejected_with_server_message_shows_it() {
    let mut state = submitting_state();
    state.finish(SubmitOutcome::Rejected(Some("Already joined".to_owned())));
    assert_eq!(state.phase, WaitlistPhase::Editing);
    assert_eq!(state.error.as_deref(), Some("Already joined"));
    assert_eq!(state.button_label(), "Join Waitlist");
}

#[test]
fn rejected_without_message_shows_generic_fallback() {
    let mut state = submitting_state();
    state.finish(SubmitOutcome::Rejected(None));
    assert_eq!(
        state.error.as_deref(),
        Some("Something went wrong. Please try again.")
    );
    assert_eq!(state.button_label(), "Join Waitlist");
}

#[test]
fn network_error_shows_generic_network_message() {
    let mut state = submitting_state();
    state.finish(SubmitOutcome::NetworkError);
    assert_eq!(state.phase, WaitlistPhase::Editing);
    assert_eq!(
        state.error.as_deref(),
        Some("Network error. Please try again later.")
    );
}

#[test]
fn control_re_enabled_after_every_outcome() {
    for outcome in [
        SubmitOutcome::Accepted,
        SubmitOutcome::Rejected(None),
        SubmitOutcome::NetworkError,
    ] {
        let mut state = submitting_state();
        state.finish(outcome);
        assert!(!state.submitting());
    }
}

#[test]
fn entered_email_survives_a_failed_attempt() {
    let mut state = submitting_state();
    state.finish(SubmitOutcome::Rejected(None));
    assert_eq!(state.email, "a@b.c");
    assert!(state.begin_submit());
}
