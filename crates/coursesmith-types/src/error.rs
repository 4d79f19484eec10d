use thiserror::Error;

/// Errors from repository operations (used by trait definitions in coursesmith-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to session load/save operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for SessionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => SessionError::NotFound,
            other => SessionError::Storage(other.to_string()),
        }
    }
}

/// Errors related to template operations.
///
/// A structural duplicate on the create path is deliberately NOT an error:
/// it is a confirmable outcome surfaced by the template service.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for TemplateError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => TemplateError::NotFound,
            other => TemplateError::Storage(other.to_string()),
        }
    }
}
