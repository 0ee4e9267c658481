//! News sources.
//!
//! `NewsSource` is the seam where a real API client would plug in. The only
//! implementation today is `MockNewsSource`, which waits a fixed delay and
//! then hands back the embedded dataset.

use super::dataset;
use super::types::{LoadError, NewsItem};
use std::future::Future;
use std::time::Duration;

/// Simulated network latency before the mock data becomes available.
pub const LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Something that can produce the full article collection once.
pub trait NewsSource: Send + Sync + 'static {
    /// Fetch every article. Called at most once per view activation.
    fn fetch(&self) -> impl Future<Output = Result<Vec<NewsItem>, LoadError>> + Send;
}

/// Embedded dataset behind an artificial delay.
#[derive(Debug, Clone)]
pub struct MockNewsSource {
    delay: Duration,
}

impl MockNewsSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockNewsSource {
    fn default() -> Self {
        Self::new(LOAD_DELAY)
    }
}

impl NewsSource for MockNewsSource {
    async fn fetch(&self) -> Result<Vec<NewsItem>, LoadError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulating news fetch");
        tokio::time::sleep(self.delay).await;
        dataset::embedded()
    }
}
