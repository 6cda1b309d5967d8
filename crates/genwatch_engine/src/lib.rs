//! Genwatch engine: effect execution against the generation service.
mod client;
mod engine;
mod poll;
mod types;

pub use client::{ClientSettings, ReqwestStatusApi, StatusApi};
pub use engine::EngineHandle;
pub use types::{
    ClientError, EngineEvent, FailureKind, SessionId, StartResponse, StatusSnapshot,
};
