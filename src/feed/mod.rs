pub mod http;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use types::HeadlineRecord;

/// A source of headline records, fetched once at startup.
#[async_trait]
pub trait HeadlineFeed: Send + Sync {
    async fn fetch_headlines(&self) -> Result<Vec<HeadlineRecord>>;
}
