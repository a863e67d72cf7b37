//! In-memory artifact sink.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use conspects_core::error::AppError;
use conspects_core::result::AppResult;

use super::artifact::DownloadableArtifact;
use super::sink::ArtifactSink;

/// Keeps delivered artifacts in memory. Useful when embedding the client
/// in a process that forwards the bytes itself.
#[derive(Debug, Default)]
pub struct MemorySink {
    next_id: AtomicU64,
    staged: DashMap<String, DownloadableArtifact>,
    delivered: DashMap<String, DownloadableArtifact>,
    revoked: AtomicU64,
    fail_trigger: bool,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `trigger` always fails, for exercising release paths.
    pub fn failing_trigger() -> Self {
        Self {
            fail_trigger: true,
            ..Self::default()
        }
    }

    /// A delivered artifact by filename.
    pub fn delivered(&self, filename: &str) -> Option<DownloadableArtifact> {
        self.delivered.get(filename).map(|entry| entry.value().clone())
    }

    /// Number of delivered artifacts.
    pub fn delivered_count(&self) -> usize {
        self.delivered.len()
    }

    /// Number of URLs created and not yet revoked.
    pub fn live_urls(&self) -> usize {
        self.staged.len()
    }

    /// Number of revocations performed.
    pub fn revoked_count(&self) -> u64 {
        self.revoked.load(Ordering::SeqCst)
    }
}

impl ArtifactSink for MemorySink {
    fn create_object_url(&self, artifact: &DownloadableArtifact) -> AppResult<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = format!("blob:memory/{id}");
        self.staged.insert(url.clone(), artifact.clone());
        Ok(url)
    }

    fn trigger(&self, url: &str, filename: &str) -> AppResult<()> {
        if self.fail_trigger {
            return Err(AppError::storage(format!("Download of {url} was rejected")));
        }
        let artifact = self
            .staged
            .get(url)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Unknown object URL: {url}")))?;
        self.delivered.insert(filename.to_string(), artifact);
        Ok(())
    }

    fn revoke(&self, url: &str) {
        if self.staged.remove(url).is_some() {
            self.revoked.fetch_add(1, Ordering::SeqCst);
        }
    }
}
