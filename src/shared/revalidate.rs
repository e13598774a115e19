use async_trait::async_trait;
use tracing::info;

/// Outgoing port for the presentation layer's cache invalidation.
///
/// Every successful mutation marks the paths whose cached listings went
/// stale. The consumer (the page-level data fetcher) lives outside this
/// service; the production adapter only records the signal.
#[async_trait]
pub trait RevalidationHook: Send + Sync {
    async fn mark_stale(&self, path: &str);
}

/// Default adapter: logs the stale path for the external fetcher.
#[derive(Clone, Default)]
pub struct LoggingRevalidator;

#[async_trait]
impl RevalidationHook for LoggingRevalidator {
    async fn mark_stale(&self, path: &str) {
        info!(path, "listing marked stale");
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every path marked stale, for asserting hook calls.
    #[derive(Default)]
    pub struct RecordingRevalidator {
        pub paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RevalidationHook for RecordingRevalidator {
        async fn mark_stale(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }
}
