use crate::query::QueryValidationError;
use crate::tags::TagValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VgError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("No View selected")]
    NoViewSelected,

    #[error("View '{0}' has no GUID (legacy View?). Please recreate the View.")]
    MissingGuid(String),

    #[error("{0}")]
    InvalidTag(#[from] TagValidationError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryValidationError),

    #[error("Tag '{0}' uses the reserved 'view-' prefix")]
    ReservedTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VgError>;
