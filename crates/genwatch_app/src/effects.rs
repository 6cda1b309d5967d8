use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use genwatch_core::{Effect, Msg};
use genwatch_engine::{ClientSettings, EngineEvent, EngineHandle};
use watch_logging::{watch_info, watch_warn};

/// Bridges the pure core and the engine: effects out, messages back in.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartGeneration { idea } => {
                    watch_info!("StartGeneration idea_len={}", idea.len());
                    self.engine.start(idea);
                }
                Effect::BeginPolling { session_id } => {
                    watch_info!("BeginPolling session_id={}", session_id);
                    self.engine.poll(session_id);
                }
                Effect::StopPolling => {
                    self.engine.stop_polling();
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::SessionStarted { session_id } => {
                        Msg::SessionStarted { session_id }
                    }
                    EngineEvent::StartFailed(err) => {
                        watch_warn!("start failed: {}", err);
                        Msg::StartFailed {
                            message: err.to_string(),
                        }
                    }
                    EngineEvent::Status { snapshot } => Msg::StatusArrived {
                        status: snapshot.status,
                        download_url: snapshot.download_url,
                    },
                    EngineEvent::PollFailed(err) => {
                        watch_warn!("poll failed: {}", err);
                        Msg::PollFailed {
                            message: err.to_string(),
                        }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
