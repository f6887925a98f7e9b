//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentraError {
    #[error("REQUEST/{0}")]
    RequestError(String),

    #[error("EXTRACT/{0}")]
    ExtractError(String),

    #[error("GATE/{0}")]
    GateError(String),

    #[error("STORE/{0}")]
    StoreError(String),

    #[error("INTERNAL/{0}")]
    InternalError(String),
}
