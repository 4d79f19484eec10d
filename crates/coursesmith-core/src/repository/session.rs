//! Session repository trait definition.

use coursesmith_types::error::RepositoryError;
use coursesmith_types::session::{Session, SessionId};

/// Repository trait for session persistence.
///
/// Implementations live in coursesmith-infra (e.g., SqliteSessionRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait SessionRepository: Send + Sync {
    /// Load a session by id. `None` when no such session exists.
    fn load(
        &self,
        id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Option<Session>, RepositoryError>> + Send;

    /// Save a session, creating or fully replacing the stored record.
    fn save(
        &self,
        id: &SessionId,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Permanently delete a session by id.
    fn delete(
        &self,
        id: &SessionId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
