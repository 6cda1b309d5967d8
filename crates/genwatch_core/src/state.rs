use crate::classify::{classify, is_terminal, progress_percent, StatusCategory, DEFAULT_STATUS};
use crate::view_model::{AppViewModel, BarTint, WAITING_LABEL};

/// Opaque identifier handed out by the start endpoint.
pub type SessionId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No run in flight; submit is enabled.
    #[default]
    Idle,
    /// Start call issued, waiting for a session id.
    Submitting,
    /// Repeating status poll active.
    Polling,
}

/// The one visible status entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub category: StatusCategory,
}

/// Controller-owned session state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: SessionPhase,
    idea_input: String,
    session_id: Option<SessionId>,
    latest: Option<StatusLine>,
    percent: u8,
    download_url: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let bar_label = match &self.latest {
            Some(line) => line.message.clone(),
            None => WAITING_LABEL.to_string(),
        };
        let bar_tint = self
            .latest
            .as_ref()
            .map(|line| BarTint::for_category(line.category))
            .unwrap_or_default();
        AppViewModel {
            phase: self.phase,
            idea_input: self.idea_input.clone(),
            status_line: self.latest.clone(),
            percent: self.percent,
            bar_label,
            bar_tint,
            spinner_visible: matches!(self.phase, SessionPhase::Submitting | SessionPhase::Polling),
            download_url: self.download_url.clone(),
            submit_enabled: self.phase == SessionPhase::Idle,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; used to coalesce rendering.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_idea(&mut self, text: String) {
        if self.idea_input != text {
            self.idea_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn idea(&self) -> &str {
        &self.idea_input
    }

    /// Reset the UI to its baseline and enter `Submitting`.
    ///
    /// Baseline: no status entry, 0% / "Waiting..." with default tint, no
    /// download target. Applied on every new submission regardless of prior
    /// state; the prior session id is dropped here so a superseded poll can
    /// never be mistaken for the new run.
    pub(crate) fn begin_submission(&mut self) {
        self.phase = SessionPhase::Submitting;
        self.session_id = None;
        self.latest = None;
        self.percent = 0;
        self.download_url = None;
        self.dirty = true;
    }

    pub(crate) fn begin_polling(&mut self, session_id: SessionId) {
        self.phase = SessionPhase::Polling;
        self.session_id = Some(session_id);
        self.dirty = true;
    }

    /// Apply one status snapshot; returns true when the status is terminal.
    ///
    /// The percent is recomputed from the status text alone, and a snapshot
    /// without a download URL keeps any previously revealed one.
    pub(crate) fn apply_snapshot(
        &mut self,
        status: Option<String>,
        download_url: Option<String>,
    ) -> bool {
        let message = status.unwrap_or_else(|| DEFAULT_STATUS.to_string());
        let category = classify(&message);
        self.percent = progress_percent(&message);
        if download_url.is_some() {
            self.download_url = download_url;
        }
        let terminal = is_terminal(&message);
        self.latest = Some(StatusLine { message, category });
        if terminal {
            self.phase = SessionPhase::Idle;
        }
        self.dirty = true;
        terminal
    }

    /// Surface a start or poll failure as an error entry and return to `Idle`.
    pub(crate) fn fail(&mut self, message: String) {
        self.latest = Some(StatusLine {
            message,
            category: StatusCategory::Error,
        });
        self.phase = SessionPhase::Idle;
        self.dirty = true;
    }
}
