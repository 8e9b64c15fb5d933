//! File-backed placeholder cache.
//!
//! One flat JSON object maps document ids to their extracted placeholder
//! sequences, so re-opening a template doesn't re-fetch the document.
//! The table is read and rewritten whole on every write - fine at this
//! scale (tens to low hundreds of templates). There is no locking: two
//! concurrent writers can race on the read-modify-write cycle and one
//! update can be lost, an accepted limitation of the single-operator
//! usage model.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};

/// Placeholder cache keyed by document id.
///
/// An entry's value is exactly the most recent successful extraction for
/// that id: `put` overwrites wholesale and never merges. Entries are
/// never expired; callers decide when a cached entry is stale.
#[derive(Debug, Clone)]
pub struct PlaceholderCache {
    path: PathBuf,
}

impl PlaceholderCache {
    /// Create a cache backed by the file at `path`.
    ///
    /// The file is not touched until the first read or write; an absent
    /// file is equivalent to an empty table.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the cached placeholder sequence for a document.
    pub fn get(&self, document_id: &str) -> Result<Option<Vec<String>>> {
        let mut table = self.read_table()?;
        Ok(table.remove(document_id))
    }

    /// Store the placeholder sequence for a document, replacing any
    /// previous entry.
    ///
    /// An empty sequence is a no-op: it neither creates nor clears an
    /// entry, preserving the last good extraction when a later attempt
    /// yields nothing.
    pub fn put(&self, document_id: &str, placeholders: &[String]) -> Result<()> {
        if placeholders.is_empty() {
            tracing::debug!(document_id, "Skipping empty placeholder sequence");
            return Ok(());
        }

        let mut table = self.read_table()?;
        table.insert(document_id.to_string(), placeholders.to_vec());
        self.write_table(&table)
    }

    /// Read the whole table from disk.
    fn read_table(&self) -> Result<BTreeMap<String, Vec<String>>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| {
            GeneratorError::CachePersistence {
                path: self.path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| GeneratorError::CacheFormat {
            path: self.path.clone(),
            source,
        })
    }

    /// Rewrite the whole table to disk.
    fn write_table(&self, table: &BTreeMap<String, Vec<String>>) -> Result<()> {
        let json = serde_json::to_string(table).map_err(|source| GeneratorError::CacheFormat {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(|source| GeneratorError::CachePersistence {
            path: self.path.clone(),
            source,
        })
    }
}
