use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use watch_logging::{watch_error, watch_info};

use crate::client::{ClientSettings, ReqwestStatusApi, StatusApi};
use crate::poll::poll_loop;
use crate::EngineEvent;

enum EngineCommand {
    Start { idea: String },
    Poll { session_id: String },
    StopPolling,
}

/// Handle to the engine thread owning the Tokio runtime.
///
/// Commands go in over an mpsc channel; events come back via [`Self::try_recv`].
/// Cloning shares both channels, so one clone can pump events on a forwarder
/// thread while another enqueues commands.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let poll_interval = settings.poll_interval;

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    watch_error!("engine runtime failed to start: {}", err);
                    return;
                }
            };
            let api: Arc<dyn StatusApi> = match ReqwestStatusApi::new(settings) {
                Ok(api) => Arc::new(api),
                Err(err) => {
                    watch_error!("engine http client failed to build: {}", err);
                    return;
                }
            };

            // Invariant: at most one poll task is alive at any time. Both a
            // new start call and an explicit stop cancel the current one.
            let mut poll_task: Option<tokio::task::JoinHandle<()>> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Start { idea } => {
                        if let Some(task) = poll_task.take() {
                            watch_info!("superseding active poll for new submission");
                            task.abort();
                        }
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let event = match api.start(&idea).await {
                                Ok(session_id) => EngineEvent::SessionStarted { session_id },
                                Err(err) => EngineEvent::StartFailed(err),
                            };
                            let _ = event_tx.send(event);
                        });
                    }
                    EngineCommand::Poll { session_id } => {
                        if let Some(task) = poll_task.take() {
                            task.abort();
                        }
                        poll_task = Some(runtime.spawn(poll_loop(
                            api.clone(),
                            session_id,
                            poll_interval,
                            event_tx.clone(),
                        )));
                    }
                    EngineCommand::StopPolling => {
                        if let Some(task) = poll_task.take() {
                            task.abort();
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn start(&self, idea: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Start { idea: idea.into() });
    }

    pub fn poll(&self, session_id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Poll {
            session_id: session_id.into(),
        });
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopPolling);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}
