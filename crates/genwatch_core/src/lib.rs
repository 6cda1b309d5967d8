//! Genwatch core: pure interaction state machine and view-model helpers.
mod classify;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use classify::{classify, is_terminal, progress_percent, StatusCategory, DEFAULT_STATUS};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, SessionId, SessionPhase, StatusLine};
pub use update::update;
pub use view_model::{AppViewModel, BarTint, WAITING_LABEL};
