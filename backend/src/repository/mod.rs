//! # Template Repository
//!
//! SQLite persistence for templates. One table holds every template; the
//! layout and sample data are stored as JSON text and decoded on read.
//!
//! The repository owns a single connection behind a `Mutex` and is shared with
//! the handlers as `web::Data`. Every method is blocking, so handlers call them
//! through `web::block`.

pub mod seed;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use common::model::{Template, TemplateLayout};
use common::requests::{CreateTemplateRequest, UpdateTemplateRequest};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::Value;
use thiserror::Error;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS templates (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT,
    layout      TEXT NOT NULL,
    sample_data TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)";

const COLUMNS: &str = "id, name, description, layout, sample_data, created_at, updated_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored layout or sample data column is not valid JSON.
    #[error("corrupt template JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("database lock poisoned")]
    Poisoned,
}

pub struct TemplateRepository {
    conn: Mutex<Connection>,
}

/// A `templates` row before its JSON columns are decoded.
struct TemplateRow {
    id: i64,
    name: String,
    description: Option<String>,
    layout: String,
    sample_data: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TemplateRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            layout: row.get(3)?,
            sample_data: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn decode(self) -> Result<Template, StoreError> {
        let layout: TemplateLayout = serde_json::from_str(&self.layout)?;
        let sample_data: Value = serde_json::from_str(&self.sample_data)?;
        Ok(Template {
            id: self.id,
            name: self.name,
            description: self.description,
            layout,
            sample_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl TemplateRepository {
    /// Opens (or creates) a database file and makes sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// All templates, least recently updated first.
    pub fn list(&self) -> Result<Vec<Template>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM templates ORDER BY updated_at ASC, id ASC",
            COLUMNS
        ))?;
        let rows = stmt
            .query_map([], TemplateRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(TemplateRow::decode).collect()
    }

    pub fn get(&self, id: i64) -> Result<Option<Template>, StoreError> {
        let conn = self.conn()?;
        Self::fetch(&conn, id)
    }

    fn fetch(conn: &Connection, id: i64) -> Result<Option<Template>, StoreError> {
        conn.query_row(
            &format!("SELECT {} FROM templates WHERE id = ?1", COLUMNS),
            params![id],
            TemplateRow::from_row,
        )
        .optional()?
        .map(TemplateRow::decode)
        .transpose()
    }

    pub fn create(&self, request: &CreateTemplateRequest) -> Result<Template, StoreError> {
        let layout = serde_json::to_string(&request.layout)?;
        let sample_data = serde_json::to_string(&request.sample_data)?;
        let now = Utc::now();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO templates (name, description, layout, sample_data, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![request.name, request.description, layout, sample_data, now],
        )?;

        Ok(Template {
            id: conn.last_insert_rowid(),
            name: request.name.clone(),
            description: request.description.clone(),
            layout: request.layout.clone(),
            sample_data: request.sample_data.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies the fields present in `patch` and bumps `updated_at`.
    ///
    /// Returns `None` when no template has this id.
    pub fn update(
        &self,
        id: i64,
        patch: &UpdateTemplateRequest,
    ) -> Result<Option<Template>, StoreError> {
        let conn = self.conn()?;
        let Some(mut template) = Self::fetch(&conn, id)? else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            template.name = name.clone();
        }
        if let Some(description) = &patch.description {
            template.description = description.clone();
        }
        if let Some(layout) = &patch.layout {
            template.layout = layout.clone();
        }
        if let Some(sample_data) = &patch.sample_data {
            template.sample_data = sample_data.clone();
        }
        template.updated_at = Utc::now();

        conn.execute(
            "UPDATE templates
             SET name = ?1, description = ?2, layout = ?3, sample_data = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                template.name,
                template.description,
                serde_json::to_string(&template.layout)?,
                serde_json::to_string(&template.sample_data)?,
                template.updated_at,
                id
            ],
        )?;
        Ok(Some(template))
    }

    /// Removes a template. Returns whether a row was deleted.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM templates WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::ElementType;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::thread;
    use std::time::Duration;

    fn request(name: &str) -> CreateTemplateRequest {
        CreateTemplateRequest {
            name: name.to_string(),
            description: Some("desc".to_string()),
            layout: common::presets::default_layout(),
            sample_data: json!({ "total": 10 }),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let created = repo.create(&request("Invoice")).unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.get(created.id + 1).unwrap(), None);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let created = repo.create(&request("Invoice")).unwrap();

        let mut layout = created.layout.clone();
        layout.add_element(ElementType::Badge);
        let patch = UpdateTemplateRequest {
            description: Some(None),
            layout: Some(layout.clone()),
            ..UpdateTemplateRequest::default()
        };
        let updated = repo.update(created.id, &patch).unwrap().unwrap();

        assert_eq!(updated.name, "Invoice");
        assert_eq!(updated.description, None);
        assert_eq!(updated.layout, layout);
        assert_eq!(updated.sample_data, json!({ "total": 10 }));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.get(created.id).unwrap().unwrap(), updated);
    }

    #[test]
    fn update_of_unknown_id_is_none() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let patch = UpdateTemplateRequest {
            name: Some("x".into()),
            ..UpdateTemplateRequest::default()
        };
        assert_eq!(repo.update(42, &patch).unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let created = repo.create(&request("Invoice")).unwrap();
        assert!(repo.delete(created.id).unwrap());
        assert!(!repo.delete(created.id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn list_orders_by_last_update() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let first = repo.create(&request("First")).unwrap();
        thread::sleep(Duration::from_millis(2));
        repo.create(&request("Second")).unwrap();
        thread::sleep(Duration::from_millis(2));
        let patch = UpdateTemplateRequest {
            name: Some("First, edited".into()),
            ..UpdateTemplateRequest::default()
        };
        repo.update(first.id, &patch).unwrap();

        let names: Vec<_> = repo.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Second", "First, edited"]);
    }

    #[test]
    fn file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.sqlite");

        let id = {
            let repo = TemplateRepository::open(&path).unwrap();
            repo.create(&request("Persisted")).unwrap().id
        };

        let repo = TemplateRepository::open(&path).unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().name, "Persisted");
    }

    #[test]
    fn corrupt_json_is_reported() {
        let repo = TemplateRepository::open_in_memory().unwrap();
        let created = repo.create(&request("Invoice")).unwrap();
        repo.conn()
            .unwrap()
            .execute(
                "UPDATE templates SET layout = 'not json' WHERE id = ?1",
                params![created.id],
            )
            .unwrap();
        assert!(matches!(repo.get(created.id), Err(StoreError::Corrupt(_))));
    }
}
