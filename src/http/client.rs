//! HTTP client for single-shot JSON requests.

use anyhow::Result;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Thin wrapper over a reqwest Client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// The body is read in full before decoding, so the response is released
    /// whether or not decoding succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HttpError::from_request)?;

        let response = response
            .error_for_status()
            .map_err(HttpError::from_request)?;

        let body = response.bytes().await.map_err(HttpError::from_request)?;
        debug!("Received {} bytes", body.len());

        let result = serde_json::from_slice(&body).map_err(HttpError::from_decode)?;
        Ok(result)
    }
}
