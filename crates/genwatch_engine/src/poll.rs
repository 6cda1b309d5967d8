use std::sync::{mpsc, Arc};
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::client::StatusApi;
use crate::EngineEvent;

/// Repeating status poll for one session.
///
/// Matches the original timer semantics: the first request goes out one full
/// interval after polling begins, and a hung request delays the next tick
/// rather than piling up requests. The loop ends when a call fails (no retry),
/// when the event channel closes, or when the owning task is aborted.
pub(crate) async fn poll_loop(
    api: Arc<dyn StatusApi>,
    session_id: String,
    interval: Duration,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately; consume it.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match api.status(&session_id).await {
            Ok(snapshot) => {
                if event_tx.send(EngineEvent::Status { snapshot }).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = event_tx.send(EngineEvent::PollFailed(err));
                break;
            }
        }
    }
}
