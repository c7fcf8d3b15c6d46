//! Error type for the text-facing surfaces (command parsing, parameter
//! loading, snapshot encoding). The numerical core itself cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpicycleError {
    /// Family name not recognised
    #[error("unknown wave family: {0:?} (expected \"square\" or \"sawtooth\")")]
    UnknownFamily(String),

    /// Command text not recognised
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// Simulation parameters out of range
    #[error("invalid simulation parameters: {0}")]
    InvalidParams(String),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EpicycleError>;
