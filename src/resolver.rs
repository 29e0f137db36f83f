// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! App-id resolution: override table first, Steam storefront second

use async_trait::async_trait;
use tracing::debug;

use crate::overrides::OverrideTable;
use crate::sanitize::sanitize;
use crate::Result;

/// Where a resolved game name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Override,
    Remote,
}

/// A resolved app id, alive only between resolution and relocation
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub app_id: String,
    /// Raw game name, exactly as the source supplied it.
    pub name: String,
    pub provenance: Provenance,
}

impl GameRecord {
    /// Folder-safe form of the game name.
    pub fn folder_name(&self) -> String {
        sanitize(&self.name)
    }
}

/// Remote name-lookup service
#[async_trait]
pub trait AppLookup: Send + Sync {
    async fn fetch_name(&self, app_id: &str) -> Result<String>;
}

/// Resolves app ids to game names
pub struct Resolver<'a> {
    overrides: &'a OverrideTable,
    lookup: &'a dyn AppLookup,
}

impl<'a> Resolver<'a> {
    pub fn new(overrides: &'a OverrideTable, lookup: &'a dyn AppLookup) -> Self {
        Self { overrides, lookup }
    }

    /// Resolve one app id. The scanner hands over each id exactly once per
    /// run, so no memoization layer is needed here.
    pub async fn resolve(&self, app_id: &str) -> Result<GameRecord> {
        if let Some(name) = self.overrides.get(app_id) {
            debug!("App id {} resolved from override table", app_id);
            return Ok(GameRecord {
                app_id: app_id.to_string(),
                name: name.to_string(),
                provenance: Provenance::Override,
            });
        }

        let name = self.lookup.fetch_name(app_id).await?;
        Ok(GameRecord {
            app_id: app_id.to_string(),
            name,
            provenance: Provenance::Remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShotsortError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub lookup that counts how often the remote service is hit.
    struct StubLookup {
        name: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn returning(name: Option<&'static str>) -> Self {
            Self {
                name,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AppLookup for StubLookup {
        async fn fetch_name(&self, app_id: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.name {
                Some(name) => Ok(name.to_string()),
                None => Err(ShotsortError::NotFound(app_id.to_string())),
            }
        }
    }

    fn table(entries: &[(&str, &str)]) -> OverrideTable {
        OverrideTable::from_entries(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_override_hit_never_calls_remote() {
        let overrides = table(&[("100", "My:Game")]);
        let lookup = StubLookup::returning(Some("Wrong Name"));
        let resolver = Resolver::new(&overrides, &lookup);

        let record = resolver.resolve("100").await.unwrap();
        assert_eq!(record.name, "My:Game");
        assert_eq!(record.provenance, Provenance::Override);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_fallback() {
        let overrides = table(&[]);
        let lookup = StubLookup::returning(Some("Portal 2"));
        let resolver = Resolver::new(&overrides, &lookup);

        let record = resolver.resolve("620").await.unwrap();
        assert_eq!(record.name, "Portal 2");
        assert_eq!(record.provenance, Provenance::Remote);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let overrides = table(&[]);
        let lookup = StubLookup::returning(None);
        let resolver = Resolver::new(&overrides, &lookup);

        let err = resolver.resolve("999").await.unwrap_err();
        assert!(matches!(err, ShotsortError::NotFound(_)));
    }

    #[test]
    fn test_folder_name_is_sanitized() {
        let record = GameRecord {
            app_id: "100".to_string(),
            name: "My:Game".to_string(),
            provenance: Provenance::Override,
        };
        assert_eq!(record.folder_name(), "My_Game");
    }
}
