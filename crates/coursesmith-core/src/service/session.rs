//! Session editing service.
//!
//! Bridges the persistence seam and the builder engine: loading hydrates a
//! persisted session into an [`EditorSession`] with fresh ephemeral state,
//! saving flattens the builder back into a plain payload. Load failure falls
//! back to an empty default document rather than a partially-populated one;
//! save failure leaves in-memory edits untouched so the user can retry.

use coursesmith_types::config::GlobalConfig;
use coursesmith_types::error::SessionError;
use coursesmith_types::session::{CefrLevel, Session, SessionId};

use crate::builder::SessionBuilder;
use crate::repository::session::SessionRepository;

/// One open session: its metadata plus the mutable document model.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub name: String,
    pub session_type: String,
    pub cefr_level: CefrLevel,
    pub is_active: bool,
    pub builder: SessionBuilder,
}

impl EditorSession {
    /// Empty document seeded from the configured authoring defaults.
    pub fn empty(config: &GlobalConfig) -> Self {
        Self {
            name: String::new(),
            session_type: config.default_session_type.clone(),
            cefr_level: config.default_cefr_level,
            is_active: true,
            builder: SessionBuilder::new(),
        }
    }

    /// Hydrate from a persisted session, assigning fresh ephemeral ids.
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            session_type: session.session_type.clone(),
            cefr_level: session.cefr_level,
            is_active: session.is_active,
            builder: SessionBuilder::from_screens(&session.screens),
        }
    }

    /// Flatten to the persistence-ready shape, recomputing all sequences.
    pub fn to_session(&self) -> Session {
        Session {
            name: self.name.clone(),
            session_type: self.session_type.clone(),
            cefr_level: self.cefr_level,
            is_active: self.is_active,
            screens: self.builder.screens_payload(),
        }
    }
}

/// Service orchestrating session load/save over a generic repository.
pub struct SessionService<R: SessionRepository> {
    repo: R,
}

impl<R: SessionRepository> SessionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load and hydrate a session for editing.
    pub async fn open(&self, id: &SessionId) -> Result<EditorSession, SessionError> {
        let session = self.repo.load(id).await?.ok_or(SessionError::NotFound)?;
        Ok(EditorSession::from_session(&session))
    }

    /// Load a session, falling back to an empty default document when the
    /// load fails. The failure is logged and surfaced to the user as a
    /// transient notification by the caller; the model is never left
    /// partially populated.
    pub async fn open_or_empty(&self, id: &SessionId, config: &GlobalConfig) -> EditorSession {
        match self.open(id).await {
            Ok(editor) => editor,
            Err(err) => {
                tracing::warn!(session = %id, error = %err, "session load failed, starting empty");
                EditorSession::empty(config)
            }
        }
    }

    /// Persist the current document. On failure the in-memory edits remain
    /// untouched (no rollback, no automatic retry).
    pub async fn save(&self, id: &SessionId, editor: &EditorSession) -> Result<(), SessionError> {
        let session = editor.to_session();
        self.repo.save(id, &session).await?;
        tracing::info!(session = %id, screens = session.screens.len(), "session saved");
        Ok(())
    }

    /// Permanently delete a session.
    pub async fn delete(&self, id: &SessionId) -> Result<(), SessionError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursesmith_types::action::ActionType;
    use coursesmith_types::error::RepositoryError;

    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySessionRepository {
        sessions: Mutex<HashMap<SessionId, Session>>,
        fail_loads: bool,
        fail_saves: bool,
    }

    impl SessionRepository for MemorySessionRepository {
        async fn load(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError> {
            if self.fail_loads {
                return Err(RepositoryError::Connection);
            }
            Ok(self.sessions.lock().unwrap().get(id).cloned())
        }

        async fn save(&self, id: &SessionId, session: &Session) -> Result<(), RepositoryError> {
            if self.fail_saves {
                return Err(RepositoryError::Query("disk full".to_string()));
            }
            self.sessions.lock().unwrap().insert(id.clone(), session.clone());
            Ok(())
        }

        async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError> {
            self.sessions.lock().unwrap().remove(id);
            Ok(())
        }
    }

    fn sample_editor() -> EditorSession {
        let mut editor = EditorSession {
            name: "Greetings".to_string(),
            session_type: "lesson".to_string(),
            cefr_level: CefrLevel::A1,
            is_active: true,
            builder: SessionBuilder::new(),
        };
        let screen = editor.builder.add_screen();
        editor.builder.add_action(screen, ActionType::Explain);
        editor.builder.add_action(screen, ActionType::Audio);
        editor
    }

    #[tokio::test]
    async fn save_then_open_round_trips_the_document() {
        let service = SessionService::new(MemorySessionRepository::default());
        let id = SessionId::new();
        let editor = sample_editor();

        service.save(&id, &editor).await.unwrap();
        let reopened = service.open(&id).await.unwrap();

        assert_eq!(reopened.name, "Greetings");
        assert_eq!(reopened.builder.screens().len(), 1);
        assert_eq!(
            reopened.builder.screens()[0].actions[1].content,
            ActionType::Audio.default_content()
        );
        // ephemeral state is fresh, not restored
        assert!(reopened.builder.find_active_action().is_none());
    }

    #[tokio::test]
    async fn open_missing_session_is_not_found() {
        let service = SessionService::new(MemorySessionRepository::default());
        let err = service.open(&SessionId::new()).await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound));
    }

    #[tokio::test]
    async fn open_or_empty_falls_back_to_configured_defaults() {
        let repo = MemorySessionRepository {
            fail_loads: true,
            ..Default::default()
        };
        let service = SessionService::new(repo);
        let config = GlobalConfig::default();

        let editor = service.open_or_empty(&SessionId::new(), &config).await;
        assert!(editor.builder.is_empty());
        assert_eq!(editor.session_type, config.default_session_type);
        assert_eq!(editor.cefr_level, config.default_cefr_level);
    }

    #[tokio::test]
    async fn failed_save_leaves_in_memory_edits_intact() {
        let repo = MemorySessionRepository {
            fail_saves: true,
            ..Default::default()
        };
        let service = SessionService::new(repo);
        let editor = sample_editor();

        let err = service.save(&SessionId::new(), &editor).await.unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        // the document the user was editing is untouched and retryable
        assert_eq!(editor.builder.screens()[0].actions.len(), 2);
    }

    #[tokio::test]
    async fn later_load_overwrites_the_whole_document() {
        let service = SessionService::new(MemorySessionRepository::default());
        let id = SessionId::new();
        service.save(&id, &sample_editor()).await.unwrap();

        // a second writer replaces the record wholesale (last-load-wins)
        let mut other = sample_editor();
        other.name = "Replaced".to_string();
        other.builder.add_screen();
        service.save(&id, &other).await.unwrap();

        let reopened = service.open(&id).await.unwrap();
        assert_eq!(reopened.name, "Replaced");
        assert_eq!(reopened.builder.screens().len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_the_session() {
        let service = SessionService::new(MemorySessionRepository::default());
        let id = SessionId::new();
        service.save(&id, &sample_editor()).await.unwrap();
        service.delete(&id).await.unwrap();
        assert!(matches!(
            service.open(&id).await.unwrap_err(),
            SessionError::NotFound
        ));
    }
}
