// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Steam storefront API client for app-id to game-name lookups

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::resolver::AppLookup;
use crate::{Result, ShotsortError};

/// Steam storefront API client
pub struct SteamClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct AppDetailsEntry {
    success: bool,
    data: Option<AppData>,
}

#[derive(Deserialize)]
struct AppData {
    name: String,
}

impl SteamClient {
    /// Create a new storefront client
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ShotsortError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Fetch the appdetails record for one app id.
    async fn fetch(&self, app_id: &str) -> Result<String> {
        // The storefront only accepts numeric app ids.
        if app_id.parse::<u32>().is_err() {
            return Err(ShotsortError::InvalidIdentifier(app_id.to_string()));
        }

        let url = format!(
            "{}/api/appdetails?appids={}&filters=basic",
            self.base_url, app_id
        );

        debug!("Querying Steam storefront for app id {}", app_id);

        let lookup_failed = |reason: String| ShotsortError::LookupFailed {
            app_id: app_id.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(lookup_failed(format!(
                "storefront returned status {}",
                response.status()
            )));
        }

        let body: HashMap<String, AppDetailsEntry> = response
            .json()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?;

        let entry = body
            .get(app_id)
            .ok_or_else(|| lookup_failed("app id missing from response".to_string()))?;

        if !entry.success {
            return Err(ShotsortError::NotFound(app_id.to_string()));
        }

        entry
            .data
            .as_ref()
            .map(|d| d.name.clone())
            .ok_or_else(|| lookup_failed("record has no data field".to_string()))
    }
}

#[async_trait]
impl AppLookup for SteamClient {
    async fn fetch_name(&self, app_id: &str) -> Result<String> {
        self.fetch(app_id).await
    }
}
