//! SQLite session repository implementation.
//!
//! Implements `SessionRepository` from `coursesmith-core` using sqlx. The
//! ordered screens payload is stored as a JSON column; metadata columns stay
//! flat for listing in the surrounding console.

use chrono::Utc;
use sqlx::Row;

use coursesmith_core::repository::session::SessionRepository;
use coursesmith_types::error::RepositoryError;
use coursesmith_types::session::{CefrLevel, ScreenPayload, Session, SessionId};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SessionRepository`.
pub struct SqliteSessionRepository {
    pool: DatabasePool,
}

impl SqliteSessionRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to a domain Session.
struct SessionRow {
    name: String,
    session_type: String,
    cefr_level: String,
    is_active: bool,
    screens: String,
}

impl SessionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            name: row.try_get("name")?,
            session_type: row.try_get("session_type")?,
            cefr_level: row.try_get("cefr_level")?,
            is_active: row.try_get("is_active")?,
            screens: row.try_get("screens")?,
        })
    }

    fn into_session(self) -> Result<Session, RepositoryError> {
        let cefr_level: CefrLevel = self
            .cefr_level
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        let screens: Vec<ScreenPayload> = serde_json::from_str(&self.screens)
            .map_err(|e| RepositoryError::Query(format!("invalid screens JSON: {e}")))?;

        Ok(Session {
            name: self.name,
            session_type: self.session_type,
            cefr_level,
            is_active: self.is_active,
            screens,
        })
    }
}

impl SessionRepository for SqliteSessionRepository {
    async fn load(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query(
            "SELECT name, session_type, cefr_level, is_active, screens FROM sessions WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let session = SessionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_session()?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, id: &SessionId, session: &Session) -> Result<(), RepositoryError> {
        let screens_json = serde_json::to_string(&session.screens)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO sessions (id, name, session_type, cefr_level, is_active, screens, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 session_type = excluded.session_type,
                 cefr_level = excluded.cefr_level,
                 is_active = excluded.is_active,
                 screens = excluded.screens,
                 updated_at = excluded.updated_at",
        )
        .bind(id.to_string())
        .bind(&session.name)
        .bind(&session.session_type)
        .bind(session.cefr_level.to_string())
        .bind(session.is_active)
        .bind(&screens_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
