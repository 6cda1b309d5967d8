#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the idea input box (full text).
    IdeaEdited(String),
    /// User submitted the current idea for generation.
    IdeaSubmitted,
    /// Engine acknowledged the start call with a session id.
    SessionStarted { session_id: String },
    /// The start call failed (network, HTTP, or malformed response).
    StartFailed { message: String },
    /// A status snapshot arrived from the poll loop.
    StatusArrived {
        status: Option<String>,
        download_url: Option<String>,
    },
    /// The poll loop failed (network, HTTP, or malformed response).
    PollFailed { message: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
