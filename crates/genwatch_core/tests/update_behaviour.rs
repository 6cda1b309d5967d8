use std::sync::Once;

use genwatch_core::{
    update, AppState, BarTint, Effect, Msg, SessionPhase, StatusCategory, WAITING_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(watch_logging::initialize_for_tests);
}

fn submit_idea(state: AppState, idea: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::IdeaEdited(idea.to_string()));
    update(state, Msg::IdeaSubmitted)
}

fn start_polling(state: AppState, session_id: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::SessionStarted {
            session_id: session_id.to_string(),
        },
    )
}

fn snapshot(status: &str) -> Msg {
    Msg::StatusArrived {
        status: Some(status.to_string()),
        download_url: None,
    }
}

#[test]
fn submission_resets_ui_and_requests_start() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = submit_idea(state, "a calculator app");
    let view = next.view();

    assert_eq!(view.phase, SessionPhase::Submitting);
    assert!(view.status_line.is_none());
    assert_eq!(view.percent, 0);
    assert_eq!(view.bar_label, WAITING_LABEL);
    assert_eq!(view.bar_tint, BarTint::Primary);
    assert!(view.spinner_visible);
    assert!(view.download_url.is_none());
    assert!(!view.submit_enabled);
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::StartGeneration {
            idea: "a calculator app".to_string(),
        }]
    );
}

#[test]
fn session_started_begins_polling() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = submit_idea(state, "a calculator app");

    let (state, effects) = start_polling(state, "1");

    assert_eq!(state.phase(), SessionPhase::Polling);
    assert_eq!(state.session_id(), Some("1"));
    assert_eq!(
        effects,
        vec![Effect::BeginPolling {
            session_id: "1".to_string(),
        }]
    );
}

#[test]
fn stale_session_started_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = start_polling(state, "99");

    assert_eq!(state.phase(), SessionPhase::Idle);
    assert!(state.session_id().is_none());
    assert!(effects.is_empty());
}

#[test]
fn status_snapshot_updates_line_and_percent() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, effects) = update(state, snapshot("Generating System Design..."));
    let view = state.view();

    let line = view.status_line.expect("status line");
    assert_eq!(line.message, "Generating System Design...");
    assert_eq!(line.category, StatusCategory::Info);
    assert_eq!(view.percent, 30);
    assert_eq!(view.bar_label, "Generating System Design...");
    assert_eq!(view.bar_tint, BarTint::Primary);
    assert!(view.spinner_visible);
    assert!(effects.is_empty());
}

#[test]
fn missing_status_defaults_to_processing() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, effects) = update(
        state,
        Msg::StatusArrived {
            status: None,
            download_url: None,
        },
    );

    let view = state.view();
    assert_eq!(view.status_line.unwrap().message, "Processing...");
    assert_eq!(view.percent, 10);
    assert!(effects.is_empty());
}

#[test]
fn only_latest_status_is_shown() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, _) = update(state, snapshot("Generating System Design..."));
    let (state, _) = update(state, snapshot("calculator.py generated."));

    let view = state.view();
    let line = view.status_line.expect("status line");
    assert_eq!(line.message, "calculator.py generated.");
    assert_eq!(line.category, StatusCategory::Success);
    assert_eq!(view.bar_tint, BarTint::Success);
    assert_eq!(view.percent, 10);
}

#[test]
fn download_url_is_retained_across_snapshots() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, _) = update(
        state,
        Msg::StatusArrived {
            status: Some("calculator.py generated.".to_string()),
            download_url: Some("/download/1".to_string()),
        },
    );
    assert_eq!(state.view().download_url.as_deref(), Some("/download/1"));

    // A later snapshot without the URL does not clear it.
    let (state, _) = update(state, snapshot("Writing unit tests"));
    assert_eq!(state.view().download_url.as_deref(), Some("/download/1"));
}

#[test]
fn terminal_completion_stops_polling() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, effects) = update(state, snapshot("Project generation complete!"));
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopPolling]);
    assert_eq!(view.phase, SessionPhase::Idle);
    let line = view.status_line.expect("status line");
    assert_eq!(line.category, StatusCategory::Complete);
    assert_eq!(view.bar_tint, BarTint::Warning);
    assert_eq!(view.percent, 100);
    assert!(!view.spinner_visible);
    assert!(view.submit_enabled);
}

#[test]
fn terminal_error_keeps_default_percent() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");
    let (state, _) = update(state, snapshot("Writing unit tests"));
    assert_eq!(state.view().percent, 75);

    let (state, effects) = update(state, snapshot("Could not fix remaining errors"));
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopPolling]);
    let line = view.status_line.expect("status line");
    assert_eq!(line.category, StatusCategory::Error);
    assert_eq!(view.bar_tint, BarTint::Danger);
    // No stage keyword matched: the stateless mapping falls back to 10.
    assert_eq!(view.percent, 10);
    assert_eq!(view.phase, SessionPhase::Idle);
}

#[test]
fn snapshots_after_terminal_are_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");
    let (state, _) = update(state, snapshot("Project generation complete!"));

    let (state, effects) = update(state, snapshot("Writing unit tests"));

    assert!(effects.is_empty());
    assert_eq!(
        state.view().status_line.unwrap().message,
        "Project generation complete!"
    );
}

#[test]
fn start_failure_returns_to_idle_with_error_line() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");

    let (state, effects) = update(
        state,
        Msg::StartFailed {
            message: "network error: connection refused".to_string(),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, SessionPhase::Idle);
    assert_eq!(view.status_line.unwrap().category, StatusCategory::Error);
    assert!(!view.spinner_visible);
    assert!(view.submit_enabled);
}

#[test]
fn poll_failure_stops_polling_with_error_line() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "idea");
    let (state, _) = start_polling(state, "1");

    let (state, effects) = update(
        state,
        Msg::PollFailed {
            message: "http status 500".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopPolling]);
    assert_eq!(view.phase, SessionPhase::Idle);
    assert_eq!(view.status_line.unwrap().category, StatusCategory::Error);
    assert!(view.submit_enabled);
}

#[test]
fn resubmission_resets_regardless_of_prior_state() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "first idea");
    let (state, _) = start_polling(state, "1");
    let (state, _) = update(
        state,
        Msg::StatusArrived {
            status: Some("Project generation complete!".to_string()),
            download_url: Some("/download/1".to_string()),
        },
    );

    let (state, effects) = submit_idea(state, "second idea");
    let view = state.view();

    assert_eq!(
        effects,
        vec![Effect::StartGeneration {
            idea: "second idea".to_string(),
        }]
    );
    assert!(view.status_line.is_none());
    assert_eq!(view.percent, 0);
    assert_eq!(view.bar_label, WAITING_LABEL);
    assert_eq!(view.bar_tint, BarTint::Primary);
    assert!(view.download_url.is_none());
    assert!(state.session_id().is_none());
}

#[test]
fn resubmission_mid_poll_supersedes_previous_session() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit_idea(state, "first idea");
    let (state, _) = start_polling(state, "1");

    // Resubmit before the prior poll terminates.
    let (state, effects) = submit_idea(state, "second idea");
    assert_eq!(state.phase(), SessionPhase::Submitting);
    assert_eq!(
        effects,
        vec![Effect::StartGeneration {
            idea: "second idea".to_string(),
        }]
    );

    // A snapshot from the superseded poll arriving late is dropped.
    let (state, effects) = update(state, snapshot("Writing unit tests"));
    assert!(effects.is_empty());
    assert!(state.view().status_line.is_none());
}

#[test]
fn tick_and_noop_change_nothing() {
    init_logging();
    let mut state = AppState::new();
    assert!(!state.consume_dirty());
    let before = state.view();

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    let (mut state, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}
