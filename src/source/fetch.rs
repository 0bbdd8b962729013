// src/source/fetch.rs
// =============================================================================
// This module fetches the owner's project records from the upstream source.
//
// Strategy:
// - Build the endpoint once at startup: {base}/users/{account}/projects
// - GET it with a shared reqwest Client
// - Treat any non-2xx status as "source unavailable"
// - Decode the JSON body into ProjectRecords, keeping upstream order
// - Keep the result in a RevalidatingCache so most requests skip the network
//
// What we do NOT do:
// - No retries. A failed fetch fails the request.
// - No explicit timeout. A slow upstream makes the request slow.
// - Failures are never cached; the next request tries again.
// =============================================================================

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use super::cache::{Freshness, RevalidatingCache};
use crate::error::ProjectError;
use crate::projects::{self, ProjectRecord, View};

/// Where the project list lives and how long a fetched copy stays good
#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Base URL of the upstream API (e.g. "https://api.example.com/v1")
    pub base_url: String,
    /// Account whose projects we show
    pub account: String,
    pub freshness: Freshness,
}

// Upstream sends either a bare array or an object wrapping one
#[derive(Deserialize)]
#[serde(untagged)]
enum SourcePayload {
    List(Vec<ProjectRecord>),
    Wrapped { projects: Vec<ProjectRecord> },
}

impl SourcePayload {
    fn into_records(self) -> Vec<ProjectRecord> {
        match self {
            SourcePayload::List(records) => records,
            SourcePayload::Wrapped { projects } => projects,
        }
    }
}

#[derive(Debug)]
pub struct ProjectSource {
    client: Client,
    endpoint: Url,
    cache: RevalidatingCache<Vec<ProjectRecord>>,
}

impl ProjectSource {
    /// Validates the settings and prepares the HTTP client.
    ///
    /// Fails only on bad configuration (unparseable base URL); nothing is
    /// fetched here.
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let endpoint = projects_endpoint(&settings.base_url, &settings.account)?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            cache: RevalidatingCache::new(settings.freshness),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Every project for the configured account, in upstream order.
    ///
    /// Served from the cache while it is fresh.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<ProjectRecord>>, ProjectError> {
        if let Some(cached) = self.cache.get().await {
            return Ok(cached);
        }

        let records = self.fetch_from_upstream().await.map_err(|e| {
            warn!("Could not fetch projects from {}: {}", self.endpoint, e);
            e
        })?;

        info!("Fetched {} project(s) from {}", records.len(), self.endpoint);
        Ok(self.cache.store(records).await)
    }

    /// Fetches, then keeps only the records for `view`
    pub async fn fetch_view(&self, view: View) -> Result<Vec<ProjectRecord>, ProjectError> {
        let all = self.fetch_all().await?;
        Ok(projects::select(&all, view))
    }

    async fn fetch_from_upstream(&self) -> Result<Vec<ProjectRecord>, ProjectError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ProjectError::SourceUnavailable(format!(
                "{} answered HTTP {}",
                self.endpoint,
                response.status()
            )));
        }

        let payload: SourcePayload = response.json().await?;
        Ok(payload.into_records())
    }
}

// Builds {base}/users/{account}/projects
//
// Examples:
//   ("https://api.example.com", "alice")     -> https://api.example.com/users/alice/projects
//   ("https://api.example.com/v1/", "alice") -> https://api.example.com/v1/users/alice/projects
fn projects_endpoint(base_url: &str, account: &str) -> Result<Url> {
    if account.trim().is_empty() {
        return Err(anyhow!("Account must not be empty"));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| anyhow!("Invalid source URL '{}': {}", base_url, e))?;

    url.path_segments_mut()
        .map_err(|_| anyhow!("Source URL cannot be a base: {}", base_url))?
        .pop_if_empty()
        .extend(["users", account, "projects"]);

    Ok(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two error types (anyhow and ProjectError)?
//    - new() runs at startup; a bad URL there should stop the program, and
//      anyhow gives a readable message with context
//    - fetch_all() runs per request; its caller needs to know WHICH failure
//      happened to pick a status code, so it gets a typed enum
//
// 2. What does #[serde(untagged)] do?
//    - serde tries each variant in order until one fits the JSON
//    - Here: first "is it an array?", then "is it an object with projects?"
//
// 3. What is Arc<Vec<ProjectRecord>>?
//    - Arc = atomically reference-counted pointer
//    - Many requests can hold the same cached list without copying it
//    - The list is freed when the last holder drops it
//
// 4. What does path_segments_mut() do?
//    - Gives mutable access to the URL path as a list of segments
//    - extend() percent-encodes each segment, so an odd account name
//      cannot break out of its segment
// -----------------------------------------------------------------------------
