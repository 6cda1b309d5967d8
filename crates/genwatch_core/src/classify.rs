//! Status-text classification.
//!
//! The generation service reports progress as free-form status strings, so the
//! client recognizes them by ordered, case-insensitive substring matching. The
//! vocabularies below are wire-compatible with the service and must not be
//! reordered: classification precedence is success, then error, then complete,
//! then info, and the percent mapping is first-match-wins.

/// Placeholder shown when a status snapshot carries no text.
pub const DEFAULT_STATUS: &str = "Processing...";

/// Coarse category of a status string, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCategory {
    /// Ordinary progress message.
    #[default]
    Info,
    /// A step finished (file saved, tests passed, ...).
    Success,
    /// A step failed or could not be fixed.
    Error,
    /// The whole run reported completion.
    Complete,
}

const SUCCESS_MARKERS: &[&str] = &["saved to", "generated", "updated by code fixer", "tests passed"];
const ERROR_MARKERS: &[&str] = &["could not fix", "failed", "error"];
const TERMINAL_MARKERS: &[&str] = &["complete", "error", "could not fix", "failed", "success"];

fn contains_any(lowered: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| lowered.contains(marker))
}

/// Classify a status string into its display category.
pub fn classify(status: &str) -> StatusCategory {
    let lowered = status.to_lowercase();
    if contains_any(&lowered, SUCCESS_MARKERS) {
        StatusCategory::Success
    } else if contains_any(&lowered, ERROR_MARKERS) {
        StatusCategory::Error
    } else if lowered.contains("complete") {
        StatusCategory::Complete
    } else {
        StatusCategory::Info
    }
}

/// Map a status string to a coarse progress percentage.
///
/// Stateless: recomputed from scratch for every snapshot. The first matching
/// stage keyword wins, so a message naming several stages reports the earliest.
pub fn progress_percent(status: &str) -> u8 {
    let lowered = status.to_lowercase();
    if lowered.contains("system design") {
        30
    } else if lowered.contains("break") {
        45
    } else if lowered.contains("code files") {
        60
    } else if lowered.contains("unit tests") {
        75
    } else if lowered.contains("tests and fixing") {
        85
    } else if lowered.contains("complete") || lowered.contains("success") {
        100
    } else {
        10
    }
}

/// Whether a status string ends the poll cycle.
///
/// Deliberately narrower than [`classify`]: a per-file success ("saved to",
/// "generated") keeps polling, only run-level completion or failure stops it.
pub fn is_terminal(status: &str) -> bool {
    let lowered = status.to_lowercase();
    contains_any(&lowered, TERMINAL_MARKERS)
}
