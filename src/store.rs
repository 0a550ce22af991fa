//! Template persistence.
//!
//! One pretty-printed JSON file per template, named after its id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::design::DesignStructure;
use crate::error::{FigInvoiceError, Result};
use crate::mapping::MappingTable;

/// A stored template: an imported design plus its element bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_file_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_url: Option<String>,
    pub structure: DesignStructure,
    #[serde(default)]
    pub mappings: MappingTable,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TemplateRecord {
    /// New record with a fresh id; page size is taken from the structure.
    pub fn new(name: impl Into<String>, structure: DesignStructure, mappings: MappingTable) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            figma_file_key: None,
            figma_node_id: None,
            figma_url: None,
            width: structure.width,
            height: structure.height,
            structure,
            mappings,
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

pub trait TemplateStore {
    fn save(&self, record: &TemplateRecord) -> Result<()>;
    fn load(&self, id: &str) -> Result<TemplateRecord>;
    /// Every readable record, most recently updated first.
    fn list(&self) -> Result<Vec<TemplateRecord>>;
    fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn thumbnail_path(&self, id: &str) -> Result<PathBuf> {
        Ok(self.dir.join(format!("{}.png", checked_id(id)?)))
    }

    fn record_path(&self, id: &str) -> Result<PathBuf> {
        Ok(self.dir.join(format!("{}.json", checked_id(id)?)))
    }
}

/// Ids become file names, so anything that could escape the directory is
/// treated as unknown.
fn checked_id(id: &str) -> Result<&str> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(FigInvoiceError::TemplateNotFound(id.to_string()))
    }
}

impl TemplateStore for FsTemplateStore {
    fn save(&self, record: &TemplateRecord) -> Result<()> {
        let path = self.record_path(&record.id)?;
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        debug!(id = %record.id, path = %path.display(), "saved template");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<TemplateRecord> {
        let path = self.record_path(id)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FigInvoiceError::TemplateNotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn list(&self) -> Result<Vec<TemplateRecord>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(FigInvoiceError::from)
                .and_then(|raw| serde_json::from_str::<TemplateRecord>(&raw).map_err(Into::into));
            match parsed {
                Ok(record) => records.push(record),
                Err(err) => debug!(path = %path.display(), error = %err, "skipping unreadable template"),
            }
        }
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.record_path(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FigInvoiceError::TemplateNotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        }
        let thumbnail = self.thumbnail_path(id)?;
        if thumbnail.exists() {
            fs::remove_file(thumbnail)?;
        }
        Ok(())
    }
}
