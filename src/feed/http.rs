use super::types::HeadlineRecord;
use super::HeadlineFeed;
use crate::config::FeedConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

pub struct HttpHeadlineFeed {
    client: Client,
    url: String,
}

impl HttpHeadlineFeed {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self {
            client,
            url: config.url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Decode a `/headlines` body: a JSON array of headline objects.
pub fn decode_headlines(body: &[u8]) -> Result<Vec<HeadlineRecord>> {
    serde_json::from_slice(body).context("failed to parse headlines response")
}

#[async_trait]
impl HeadlineFeed for HttpHeadlineFeed {
    async fn fetch_headlines(&self) -> Result<Vec<HeadlineRecord>> {
        let resp = self.client.get(&self.url).send().await
            .with_context(|| format!("headlines request to {} failed", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("headlines endpoint returned {}: {}", status, body);
        }

        let body = resp.bytes().await
            .context("failed to read headlines response body")?;

        let records = decode_headlines(&body)?;
        tracing::debug!(url = %self.url, count = records.len(), "headlines fetched");
        Ok(records)
    }
}
