//! SQLite persistence for template snapshots.
//!
//! Each vendor page stores one row holding the `Template` as JSON. A fresh
//! connection is opened per call, and the schema is created on first use.

use common::model::page::Page;
use common::model::template::Template;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<Connection, String> {
        let conn = Connection::open(&self.path).map_err(|e| e.to_string())?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS templates (
                vendor_id TEXT NOT NULL,
                page      TEXT NOT NULL,
                body      TEXT NOT NULL,
                PRIMARY KEY (vendor_id, page)
            )",
        )
        .map_err(|e| e.to_string())?;
        Ok(conn)
    }

    /// `Ok(None)` when the vendor has no template for that page yet.
    pub fn load(&self, vendor_id: &str, page: Page) -> Result<Option<Template>, String> {
        let conn = self.connect()?;
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM templates WHERE vendor_id = ?1 AND page = ?2",
                params![vendor_id, page.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| e.to_string())?;

        body.map(|body| serde_json::from_str(&body).map_err(|e| e.to_string()))
            .transpose()
    }

    pub fn save(&self, template: &Template) -> Result<(), String> {
        if template.vendor_id.trim().is_empty() {
            return Err("Template vendorId must not be empty".to_string());
        }
        let body = serde_json::to_string(template).map_err(|e| e.to_string())?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT OR REPLACE INTO templates (vendor_id, page, body) VALUES (?1, ?2, ?3)",
            params![&template.vendor_id, template.page.as_str(), body],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }
}
