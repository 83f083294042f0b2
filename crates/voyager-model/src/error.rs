use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown env type: {0} (expected: dev|staging|prod)")]
    UnknownEnvType(String),

    #[error("invalid resource name {name:?}: {reason}")]
    InvalidResourceName { name: String, reason: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
