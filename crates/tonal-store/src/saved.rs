//! Saved palettes: parameter records behind a small store trait.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tonal_model::PaletteParams;

use crate::error::{Result, StoreError};

/// One saved palette: an id, the generating parameters, and a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    pub id: String,
    #[serde(flatten)]
    pub params: PaletteParams,
    pub created_at: DateTime<Utc>,
}

impl SavedPalette {
    /// Stamp a new record with the current time. The id is derived from
    /// the timestamp, matching the studio's save behavior.
    pub fn new(params: PaletteParams) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            params,
            created_at: now,
        }
    }
}

/// Save-count policy. The free tier caps saved palettes; the paid tier
/// does not. The store enforces the cap so every front-end gets the same
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLimits {
    pub max_saves: Option<usize>,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self::pro()
    }
}

impl StoreLimits {
    /// Free tier: two saved palettes.
    pub fn free() -> Self {
        Self { max_saves: Some(2) }
    }

    /// Paid tier: unlimited saves.
    pub fn pro() -> Self {
        Self { max_saves: None }
    }

    fn check(&self, current: usize) -> Result<()> {
        match self.max_saves {
            Some(max) if current >= max => Err(StoreError::LimitReached(max)),
            _ => Ok(()),
        }
    }
}

/// Storage contract for saved palettes. Implementations persist records
/// ordered newest first.
pub trait PaletteStore {
    fn save(&mut self, palette: SavedPalette) -> Result<()>;
    fn list(&self) -> Result<Vec<SavedPalette>>;
    fn load(&self, id: &str) -> Result<Option<SavedPalette>>;
    /// Returns true when a record was removed.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    limits: StoreLimits,
    records: Vec<SavedPalette>,
}

impl MemoryStore {
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            limits,
            records: Vec::new(),
        }
    }
}

impl PaletteStore for MemoryStore {
    fn save(&mut self, palette: SavedPalette) -> Result<()> {
        self.limits.check(self.records.len())?;
        self.records.insert(0, palette);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SavedPalette>> {
        Ok(self.records.clone())
    }

    fn load(&self, id: &str) -> Result<Option<SavedPalette>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        Ok(self.records.len() != before)
    }
}

/// JSON-file store: a pretty-printed array of records at a fixed path.
/// A missing file reads as an empty store; writes replace the whole file
/// through a sibling temp file so a failed write never truncates data.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    limits: StoreLimits,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, limits: StoreLimits) -> Self {
        Self {
            path: path.into(),
            limits,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<SavedPalette>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_records(&self, records: &[SavedPalette]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote palette store");
        Ok(())
    }
}

impl PaletteStore for JsonFileStore {
    fn save(&mut self, palette: SavedPalette) -> Result<()> {
        let mut records = self.read_records()?;
        self.limits.check(records.len())?;
        records.insert(0, palette);
        self.write_records(&records)
    }

    fn list(&self) -> Result<Vec<SavedPalette>> {
        self.read_records()
    }

    fn load(&self, id: &str) -> Result<Option<SavedPalette>> {
        Ok(self
            .read_records()?
            .into_iter()
            .find(|record| record.id == id))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        let removed = records.len() != before;
        if removed {
            self.write_records(&records)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PaletteParams {
        PaletteParams::default()
    }

    #[test]
    fn memory_store_lists_newest_first() {
        let mut store = MemoryStore::new(StoreLimits::pro());
        let mut first = SavedPalette::new(params());
        first.id = "first".to_string();
        let mut second = SavedPalette::new(params());
        second.id = "second".to_string();
        store.save(first).expect("save first");
        store.save(second).expect("save second");

        let listed = store.list().expect("list");
        assert_eq!(listed[0].id, "second");
        assert_eq!(listed[1].id, "first");
    }

    #[test]
    fn free_tier_cap_is_enforced() {
        let mut store = MemoryStore::new(StoreLimits::free());
        store.save(SavedPalette::new(params())).expect("first save");
        store.save(SavedPalette::new(params())).expect("second save");
        let third = store.save(SavedPalette::new(params()));
        assert!(matches!(third, Err(StoreError::LimitReached(2))));
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let mut store = MemoryStore::new(StoreLimits::pro());
        let mut record = SavedPalette::new(params());
        record.id = "keep".to_string();
        store.save(record).expect("save");
        assert!(store.delete("keep").expect("delete existing"));
        assert!(!store.delete("keep").expect("delete missing"));
    }
}
