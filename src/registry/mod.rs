//! npm registry client
//!
//! One metadata document is fetched per resolved name+version pair; there is
//! no caching layer because the walker already guarantees each package key is
//! fetched at most once per run.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Default public registry.
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("registry returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed registry payload: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Metadata document for one concrete package version.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMetadata {
    /// Concrete version the registry resolved, also for tag requests.
    pub version: String,
    /// Declared SPDX license, absent for unlicensed packages.
    #[serde(default)]
    pub license: Option<String>,
    /// Runtime dependencies as name -> requested range.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    pub dist: Dist,
}

/// Distribution block of the metadata document.
#[derive(Debug, Clone, Deserialize)]
pub struct Dist {
    /// Archive URL for this version.
    pub tarball: String,
}

/// Thin client over `GET {base}/{name}/{version}`.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Wrap a shared HTTP client with a registry base URL.
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the metadata document for `name` at `version` (or a dist-tag).
    ///
    /// Scoped names keep their `/` in the request path; npm registries accept
    /// both the escaped and unescaped form.
    pub async fn fetch(&self, name: &str, version: &str) -> Result<PackageMetadata, RegistryError> {
        let url = format!("{}/{}/{}", self.base_url, name, version);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status { status, url });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(RegistryError::Payload)
    }
}
