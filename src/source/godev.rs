//! go.dev downloads feed.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::http::HttpClient;
use crate::release::Release;

use super::ReleaseSource;

/// The official Go downloads feed.
pub const GO_DOWNLOADS_URL: &str = "https://go.dev/dl/?mode=json";

/// Release source backed by the go.dev JSON feed.
pub struct GoDevSource {
    http_client: HttpClient,
    url: String,
}

impl GoDevSource {
    /// Create a source for the official feed.
    pub fn new(client: Client) -> Self {
        Self::from_http_client(HttpClient::new(client), GO_DOWNLOADS_URL)
    }

    /// Create from an existing HttpClient, pointing at `url`.
    pub fn from_http_client(http_client: HttpClient, url: &str) -> Self {
        Self {
            http_client,
            url: url.to_string(),
        }
    }

    /// The URL releases are fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReleaseSource for GoDevSource {
    async fn get_releases(&self) -> Result<Vec<Release>> {
        debug!("Fetching releases from {}...", self.url);
        let releases: Vec<Release> = self
            .http_client
            .get_json(&self.url)
            .await
            .with_context(|| format!("Failed to fetch Go releases from {}", self.url))?;
        debug!("Decoded {} release(s)", releases.len());
        Ok(releases)
    }
}
