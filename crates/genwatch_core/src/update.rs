use crate::{AppState, Effect, Msg, SessionPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::IdeaEdited(text) => {
            state.set_idea(text);
            Vec::new()
        }
        Msg::IdeaSubmitted => {
            // A resubmission supersedes any run in flight; the engine cancels
            // the previous poll task before issuing the new start call.
            let idea = state.idea().to_string();
            state.begin_submission();
            vec![Effect::StartGeneration { idea }]
        }
        Msg::SessionStarted { session_id } => {
            if state.phase() == SessionPhase::Submitting {
                state.begin_polling(session_id.clone());
                vec![Effect::BeginPolling { session_id }]
            } else {
                // Stale acknowledgement from a superseded submission.
                Vec::new()
            }
        }
        Msg::StartFailed { message } => {
            if state.phase() == SessionPhase::Submitting {
                state.fail(message);
            }
            Vec::new()
        }
        Msg::StatusArrived {
            status,
            download_url,
        } => {
            if state.phase() == SessionPhase::Polling && state.apply_snapshot(status, download_url)
            {
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::PollFailed { message } => {
            if state.phase() == SessionPhase::Polling {
                state.fail(message);
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
