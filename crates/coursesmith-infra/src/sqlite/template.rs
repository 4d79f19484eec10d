//! SQLite template repository implementation.
//!
//! Stores only structural signatures (per-screen action-type lists as a JSON
//! column) plus naming metadata. The duplicate check narrows candidates with
//! the `(session_type, is_active)` index and compares signatures in Rust via
//! `coursesmith_core::template::structurally_equal`, keeping the equality
//! algorithm in core.

use chrono::{DateTime, Utc};
use sqlx::Row;

use coursesmith_core::repository::template::{TemplateFilter, TemplateRepository};
use coursesmith_core::template::structurally_equal;
use coursesmith_types::error::RepositoryError;
use coursesmith_types::template::{Template, TemplateId, TemplateScreen};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TemplateRepository`.
pub struct SqliteTemplateRepository {
    pool: DatabasePool,
}

impl SqliteTemplateRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to a domain Template.
struct TemplateRow {
    id: String,
    name: String,
    session_type: String,
    is_active: bool,
    screens: String,
    created_at: String,
    updated_at: String,
}

impl TemplateRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            session_type: row.try_get("session_type")?,
            is_active: row.try_get("is_active")?,
            screens: row.try_get("screens")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_template(self) -> Result<Template, RepositoryError> {
        let id = self
            .id
            .parse::<TemplateId>()
            .map_err(|e| RepositoryError::Query(format!("invalid template id: {e}")))?;

        let screens: Vec<TemplateScreen> = serde_json::from_str(&self.screens)
            .map_err(|e| RepositoryError::Query(format!("invalid screens JSON: {e}")))?;

        Ok(Template {
            id,
            name: self.name,
            session_type: self.session_type,
            is_active: self.is_active,
            screens,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn screens_json(screens: &[TemplateScreen]) -> Result<String, RepositoryError> {
    serde_json::to_string(screens).map_err(|e| RepositoryError::Query(e.to_string()))
}

impl TemplateRepository for SqliteTemplateRepository {
    async fn list(&self, filter: Option<TemplateFilter>) -> Result<Vec<Template>, RepositoryError> {
        let filter = filter.unwrap_or_default();

        let mut sql = String::from(
            "SELECT id, name, session_type, is_active, screens, created_at, updated_at FROM templates",
        );
        let mut clauses: Vec<&str> = Vec::new();
        if filter.is_active.is_some() {
            clauses.push("is_active = ?");
        }
        if filter.session_type.is_some() {
            clauses.push("session_type = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query(&sql);
        if let Some(is_active) = filter.is_active {
            query = query.bind(is_active);
        }
        if let Some(session_type) = &filter.session_type {
            query = query.bind(session_type);
        }

        let rows = query
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                TemplateRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_template()
            })
            .collect()
    }

    async fn get_by_id(&self, id: &TemplateId) -> Result<Option<Template>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, session_type, is_active, screens, created_at, updated_at FROM templates WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let template = TemplateRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_template()?;
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, template: &Template) -> Result<Template, RepositoryError> {
        sqlx::query(
            "INSERT INTO templates (id, name, session_type, is_active, screens, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(template.id.to_string())
        .bind(&template.name)
        .bind(&template.session_type)
        .bind(template.is_active)
        .bind(screens_json(&template.screens)?)
        .bind(template.created_at.to_rfc3339())
        .bind(template.updated_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict(format!("template id '{}' already exists", template.id))
            }
            _ => RepositoryError::Query(e.to_string()),
        })?;

        Ok(template.clone())
    }

    async fn update(&self, template: &Template) -> Result<Template, RepositoryError> {
        let result = sqlx::query(
            "UPDATE templates SET name = ?, session_type = ?, is_active = ?, screens = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&template.name)
        .bind(&template.session_type)
        .bind(template.is_active)
        .bind(screens_json(&template.screens)?)
        .bind(template.updated_at.to_rfc3339())
        .bind(template.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(template.clone())
    }

    async fn delete(&self, id: &TemplateId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists_with_signature(
        &self,
        session_type: &str,
        is_active: bool,
        screens: &[TemplateScreen],
    ) -> Result<bool, RepositoryError> {
        let rows = sqlx::query("SELECT screens FROM templates WHERE session_type = ? AND is_active = ?")
            .bind(session_type)
            .bind(is_active)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        for row in rows {
            let stored: String = row
                .try_get("screens")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let candidate: Vec<TemplateScreen> = serde_json::from_str(&stored)
                .map_err(|e| RepositoryError::Query(format!("invalid screens JSON: {e}")))?;
            if structurally_equal(&candidate, screens) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursesmith_types::action::ActionType;

    async fn test_repo() -> (tempfile::TempDir, SqliteTemplateRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteTemplateRepository::new(pool))
    }

    fn template(name: &str, session_type: &str, signature: &[&[ActionType]]) -> Template {
        let now = Utc::now();
        Template {
            id: TemplateId::new(),
            name: name.to_string(),
            session_type: session_type.to_string(),
            is_active: true,
            screens: signature
                .iter()
                .enumerate()
                .map(|(index, types)| TemplateScreen {
                    sequence: index as u32,
                    action_types: types.to_vec(),
                })
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let (_dir, repo) = test_repo().await;
        let t = template("intro", "lesson", &[&[ActionType::Explain, ActionType::Audio]]);

        repo.create(&t).await.unwrap();
        let loaded = repo.get_by_id(&t.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "intro");
        assert_eq!(loaded.screens, t.screens);
    }

    #[tokio::test]
    async fn list_filters_by_type_and_active() {
        let (_dir, repo) = test_repo().await;
        repo.create(&template("a", "lesson", &[&[ActionType::Explain]]))
            .await
            .unwrap();
        repo.create(&template("b", "review", &[&[ActionType::Choice]]))
            .await
            .unwrap();
        let mut inactive = template("c", "lesson", &[&[ActionType::Image]]);
        inactive.is_active = false;
        repo.create(&inactive).await.unwrap();

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let active_lessons = repo
            .list(Some(TemplateFilter {
                is_active: Some(true),
                session_type: Some("lesson".to_string()),
            }))
            .await
            .unwrap();
        assert_eq!(active_lessons.len(), 1);
        assert_eq!(active_lessons[0].name, "a");
    }

    #[tokio::test]
    async fn duplicate_check_matches_only_same_type_and_flag() {
        let (_dir, repo) = test_repo().await;
        let signature: &[&[ActionType]] = &[&[ActionType::Explain, ActionType::Reading]];
        repo.create(&template("base", "lesson", signature)).await.unwrap();

        let screens = template("probe", "lesson", signature).screens;
        assert!(repo.exists_with_signature("lesson", true, &screens).await.unwrap());
        // different type or flag: no hit
        assert!(!repo.exists_with_signature("review", true, &screens).await.unwrap());
        assert!(!repo.exists_with_signature("lesson", false, &screens).await.unwrap());

        // reordered tags: structurally different
        let reordered = template("r", "lesson", &[&[ActionType::Reading, ActionType::Explain]]).screens;
        assert!(!repo.exists_with_signature("lesson", true, &reordered).await.unwrap());
    }

    #[tokio::test]
    async fn update_overwrites_and_reports_missing() {
        let (_dir, repo) = test_repo().await;
        let mut t = template("orig", "lesson", &[&[ActionType::Explain]]);
        repo.create(&t).await.unwrap();

        t.name = "renamed".to_string();
        t.screens = template("x", "lesson", &[&[ActionType::Audio], &[ActionType::Image]]).screens;
        repo.update(&t).await.unwrap();

        let loaded = repo.get_by_id(&t.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "renamed");
        assert_eq!(loaded.screens.len(), 2);

        let ghost = template("ghost", "lesson", &[]);
        assert!(matches!(
            repo.update(&ghost).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn delete_removes_template() {
        let (_dir, repo) = test_repo().await;
        let t = template("gone", "lesson", &[&[ActionType::MatchCard]]);
        repo.create(&t).await.unwrap();
        repo.delete(&t.id).await.unwrap();
        assert!(repo.get_by_id(&t.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&t.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }
}
