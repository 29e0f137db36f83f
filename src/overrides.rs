// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Local app-id to game-name override table

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::{Result, ShotsortError};

/// Read-only app-id to game-name mapping, loaded once per run
///
/// The backing store is a flat JSON object: `{"<app id>": "<game name>"}`.
/// Values are raw names; sanitization happens downstream.
#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    /// Load the table from a JSON document.
    ///
    /// A missing file is an empty table; a file that exists but cannot be
    /// read or parsed aborts the run, since any app id might depend on it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No override table at {:?}, continuing without one", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ShotsortError::ConfigUnavailable(format!("cannot read {path:?}: {e}"))
        })?;

        let entries: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            ShotsortError::ConfigUnavailable(format!("cannot parse {path:?}: {e}"))
        })?;

        info!("Loaded {} overrides from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Build a table directly from entries.
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Look up the name for an app id.
    pub fn get(&self, app_id: &str) -> Option<&str> {
        self.entries.get(app_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_lookup() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overrides.json");
        std::fs::write(&path, r#"{"100": "My:Game", "620": "Portal 2"}"#).unwrap();

        let table = OverrideTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("100"), Some("My:Game"));
        assert_eq!(table.get("999"), None);
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let tmp = TempDir::new().unwrap();
        let table = OverrideTable::load(&tmp.path().join("nope.json")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_unparsable_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overrides.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = OverrideTable::load(&path).unwrap_err();
        assert!(matches!(err, ShotsortError::ConfigUnavailable(_)));
    }
}
