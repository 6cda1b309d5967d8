#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any active poll, then POST the idea to the start endpoint.
    StartGeneration { idea: String },
    /// Begin the repeating status poll for a session.
    BeginPolling { session_id: String },
    /// Cancel the active poll, if any.
    StopPolling,
}
