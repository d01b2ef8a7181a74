//! Errors raised while rendering a session

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DisplayError {
    /// Every stored session has at least one entry; anything else is corrupt data
    #[error("unexpected application state: session {0} has no entries")]
    EmptySession(Uuid),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DisplayError>;
