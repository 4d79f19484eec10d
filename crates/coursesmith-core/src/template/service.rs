//! Template management service.
//!
//! Orchestrates listing, creation (with the confirmable structural
//! duplicate check), overwriting, and deletion of templates over a generic
//! [`TemplateRepository`].

use chrono::Utc;

use coursesmith_types::error::TemplateError;
use coursesmith_types::template::{CreateTemplateRequest, Template, TemplateId};

use crate::repository::template::{TemplateFilter, TemplateRepository};

/// Result of the checked create path.
#[derive(Debug)]
pub enum CreateOutcome {
    /// The template was created.
    Created(Template),
    /// A structurally equivalent template of the same type and active flag
    /// already exists. Not an error: the caller surfaces a confirmation
    /// prompt and, on explicit confirmation, calls
    /// [`TemplateService::create_confirmed`].
    DuplicateFound,
}

/// Service orchestrating template CRUD and the duplicate check.
pub struct TemplateService<R: TemplateRepository> {
    repo: R,
}

impl<R: TemplateRepository> TemplateService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List templates, optionally filtered by active flag and session type.
    pub async fn list(&self, filter: Option<TemplateFilter>) -> Result<Vec<Template>, TemplateError> {
        Ok(self.repo.list(filter).await?)
    }

    /// Get one template by id.
    pub async fn get(&self, id: &TemplateId) -> Result<Template, TemplateError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(TemplateError::NotFound)
    }

    /// Create a new template after running the structural duplicate check.
    ///
    /// The check compares the candidate signature against templates already
    /// filtered by `{session_type, is_active}`; a hit is a soft outcome, not
    /// a rejection.
    pub async fn create(&self, request: CreateTemplateRequest) -> Result<CreateOutcome, TemplateError> {
        let exists = self
            .repo
            .exists_with_signature(&request.session_type, request.is_active, &request.screens)
            .await?;
        if exists {
            tracing::debug!(
                session_type = %request.session_type,
                "structurally equivalent template exists, awaiting confirmation"
            );
            return Ok(CreateOutcome::DuplicateFound);
        }
        let template = self.create_confirmed(request).await?;
        Ok(CreateOutcome::Created(template))
    }

    /// Create a new template without the duplicate check.
    ///
    /// Used after the caller obtained explicit user confirmation for a
    /// detected duplicate.
    pub async fn create_confirmed(
        &self,
        request: CreateTemplateRequest,
    ) -> Result<Template, TemplateError> {
        let now = Utc::now();
        let template = Template {
            id: TemplateId::new(),
            name: request.name,
            session_type: request.session_type,
            is_active: request.is_active,
            screens: request.screens,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.create(&template).await?;
        tracing::info!(id = %created.id, name = %created.name, "template created");
        Ok(created)
    }

    /// Overwrite an existing template's signature and metadata
    /// unconditionally. The duplicate check is skipped entirely on this
    /// path.
    pub async fn overwrite(
        &self,
        id: &TemplateId,
        request: CreateTemplateRequest,
    ) -> Result<Template, TemplateError> {
        let existing = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(TemplateError::NotFound)?;
        let template = Template {
            id: existing.id,
            name: request.name,
            session_type: request.session_type,
            is_active: request.is_active,
            screens: request.screens,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        let updated = self.repo.update(&template).await?;
        tracing::info!(id = %updated.id, "template overwritten");
        Ok(updated)
    }

    /// Permanently delete a template.
    pub async fn delete(&self, id: &TemplateId) -> Result<(), TemplateError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
