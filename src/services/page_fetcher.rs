//! Outbound HTTP client for response sheet pages.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::core::config::Settings;

/// Shared HTTP client for fetching portal pages. Built once from settings
/// and cloned freely; `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub(crate) struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub(crate) fn from_settings(settings: &Settings) -> Result<Self> {
        let fetch = settings.fetch();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(fetch.connect_timeout_seconds))
            .timeout(Duration::from_secs(fetch.timeout_seconds))
            .user_agent(fetch.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET one page and return its body. Non-2xx statuses and transport
    /// errors surface as errors; the caller decides how a failed part
    /// degrades. No retries.
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("Non-success status from {url}"))?;

        response.text().await.with_context(|| format!("Failed to read body from {url}"))
    }
}
