use crate::classify::StatusCategory;
use crate::state::{SessionPhase, StatusLine};

/// Progress bar label shown before any status has arrived.
pub const WAITING_LABEL: &str = "Waiting...";

/// Visual tint of the progress bar, derived from the latest status category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarTint {
    /// Default tint while no special category applies.
    #[default]
    Primary,
    /// Failure-indicating status.
    Danger,
    /// Success-indicating status.
    Success,
    /// Run-level completion.
    Warning,
}

impl BarTint {
    pub fn for_category(category: StatusCategory) -> Self {
        match category {
            StatusCategory::Info => BarTint::Primary,
            StatusCategory::Error => BarTint::Danger,
            StatusCategory::Success => BarTint::Success,
            StatusCategory::Complete => BarTint::Warning,
        }
    }
}

/// Derived render data; never stored, rebuilt from [`crate::AppState`] on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SessionPhase,
    pub idea_input: String,
    /// The single visible status entry; prior entries are discarded.
    pub status_line: Option<StatusLine>,
    pub percent: u8,
    pub bar_label: String,
    pub bar_tint: BarTint,
    pub spinner_visible: bool,
    pub download_url: Option<String>,
    pub submit_enabled: bool,
    pub dirty: bool,
}
