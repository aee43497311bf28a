//! Upstream API Client
//!
//! Fetches menus from the DineOnCampus API over HTTP.

use std::time::Duration;

use reqwest::{header::ACCEPT, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

/// Accept header sent on every upstream request.
const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// Errors that can occur when fetching a menu from upstream.
///
/// Callers collapse both variants to the same unresolved-slot outcome; the
/// distinction exists only for logging.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, timeout, body read, JSON decode)
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(StatusCode),
}

// == Menu API Client ==
/// Client for the DineOnCampus menu API.
#[derive(Debug, Clone)]
pub struct MenuApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl MenuApiClient {
    // == Constructor ==
    /// Creates a new client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        // Normalize so path joining below is uniform
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
            timeout,
        }
    }

    /// Creates a new client from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.upstream_base_url.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    // == Fetch Menu ==
    /// Fetches the menu for `(location, period?, date)`.
    ///
    /// Requests `GET {base}/locations/{location}/periods/{period?}?date={date}`
    /// with the period path segment omitted when absent and the date
    /// URL-encoded. Any non-2xx status is a failure regardless of body.
    pub async fn fetch_menu(
        &self,
        location: &str,
        period: Option<&str>,
        date: &str,
    ) -> Result<Value, UpstreamError> {
        let mut url = format!("{}/locations/{}/periods/", self.base_url, location);
        if let Some(period) = period {
            url.push_str(period);
        }

        let response = self
            .client
            .get(&url)
            .query(&[("date", date)])
            .header(ACCEPT, ACCEPT_VALUE)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
