//! Template repository trait definition.

use coursesmith_types::error::RepositoryError;
use coursesmith_types::template::{Template, TemplateId, TemplateScreen};

/// Filter criteria for listing templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    /// Filter by active flag.
    pub is_active: Option<bool>,
    /// Filter by session type.
    pub session_type: Option<String>,
}

/// Repository trait for template persistence.
///
/// Implementations live in coursesmith-infra (e.g., SqliteTemplateRepository).
pub trait TemplateRepository: Send + Sync {
    /// List templates with optional filtering.
    fn list(
        &self,
        filter: Option<TemplateFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<Template>, RepositoryError>> + Send;

    /// Get a template by its unique ID.
    fn get_by_id(
        &self,
        id: &TemplateId,
    ) -> impl std::future::Future<Output = Result<Option<Template>, RepositoryError>> + Send;

    /// Create a new template. Returns the created template.
    fn create(
        &self,
        template: &Template,
    ) -> impl std::future::Future<Output = Result<Template, RepositoryError>> + Send;

    /// Update an existing template. Returns the updated template.
    fn update(
        &self,
        template: &Template,
    ) -> impl std::future::Future<Output = Result<Template, RepositoryError>> + Send;

    /// Permanently delete a template by ID.
    fn delete(
        &self,
        id: &TemplateId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Whether a stored template of the given type and active flag is
    /// structurally equivalent to `screens` (same screen count, identical
    /// ordered per-screen tag lists).
    fn exists_with_signature(
        &self,
        session_type: &str,
        is_active: bool,
        screens: &[TemplateScreen],
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
