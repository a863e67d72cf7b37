//! Artifact sink trait and the scoped object URL guard.

use std::fmt;

use conspects_core::result::AppResult;

use super::artifact::DownloadableArtifact;

/// Destination for downloaded artifacts.
///
/// Mirrors the object-URL lifecycle: stage the artifact under a URL,
/// trigger the download of that URL, then revoke it.
pub trait ArtifactSink: Send + Sync + fmt::Debug {
    /// Stage an artifact and return a URL naming it.
    fn create_object_url(&self, artifact: &DownloadableArtifact) -> AppResult<String>;

    /// Deliver the staged artifact under `filename`.
    fn trigger(&self, url: &str, filename: &str) -> AppResult<()>;

    /// Release a staged URL. Must tolerate unknown or already-revoked URLs.
    fn revoke(&self, url: &str);
}

/// A staged URL that is revoked when dropped.
pub struct ObjectUrl<'a> {
    sink: &'a dyn ArtifactSink,
    url: String,
}

impl<'a> ObjectUrl<'a> {
    /// Stage `artifact` in `sink`.
    pub fn acquire(sink: &'a dyn ArtifactSink, artifact: &DownloadableArtifact) -> AppResult<Self> {
        let url = sink.create_object_url(artifact)?;
        tracing::trace!(url = %url, "Object URL created");
        Ok(Self { sink, url })
    }

    /// The staged URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Trigger the download under `filename`.
    pub fn trigger(&self, filename: &str) -> AppResult<()> {
        self.sink.trigger(&self.url, filename)
    }
}

impl fmt::Debug for ObjectUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectUrl").field("url", &self.url).finish()
    }
}

impl Drop for ObjectUrl<'_> {
    fn drop(&mut self) {
        self.sink.revoke(&self.url);
        tracing::trace!(url = %self.url, "Object URL revoked");
    }
}
