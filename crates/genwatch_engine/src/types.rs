use serde::Deserialize;
use thiserror::Error;

/// Opaque identifier handed out by the start endpoint.
pub type SessionId = String;

/// Wire shape of the `POST /start` response.
///
/// `session_id` is optional on purpose: the service is not under our control,
/// and a response without it must surface as a start failure rather than a
/// poll against a nonsense path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartResponse {
    #[serde(default)]
    pub session_id: Option<SessionId>,
}

/// Wire shape of one `GET /status/{session_id}` response.
///
/// The service attaches extra fields (log, project_dir) that the client does
/// not consume; serde ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// A failed start or status call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("network error")]
    Network,
    #[error("timeout")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response")]
    MalformedResponse,
    #[error("start response had no session_id")]
    MissingSessionId,
}

/// Events reported back to the UI layer over the engine's event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SessionStarted { session_id: SessionId },
    StartFailed(ClientError),
    Status { snapshot: StatusSnapshot },
    PollFailed(ClientError),
}
