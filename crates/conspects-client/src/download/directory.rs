//! Artifact sink that saves downloads into a directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tempfile::TempPath;

use conspects_core::error::{AppError, ErrorKind};
use conspects_core::result::AppResult;

use super::artifact::DownloadableArtifact;
use super::sink::ArtifactSink;

/// Name used when a suggested filename has no usable component.
const FALLBACK_FILENAME: &str = "download";

/// Stages artifacts as temp files inside the target directory and copies
/// them to their final name on trigger. Revoking deletes the staged file.
#[derive(Debug)]
pub struct DirectorySink {
    directory: PathBuf,
    next_id: AtomicU64,
    staged: DashMap<String, TempPath>,
}

impl DirectorySink {
    /// Create a sink writing into `directory`. The directory is created on
    /// first use.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next_id: AtomicU64::new(0),
            staged: DashMap::new(),
        }
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Where an artifact named `filename` ends up.
    pub fn destination(&self, filename: &str) -> PathBuf {
        self.directory.join(sanitize_filename(filename))
    }
}

/// Reduce a server-suggested filename to a single safe path component.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"');

    let cleaned: String = last
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '<' | '>' | ':' | '|' | '?' | '*'))
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned
    }
}

impl ArtifactSink for DirectorySink {
    fn create_object_url(&self, artifact: &DownloadableArtifact) -> AppResult<String> {
        std::fs::create_dir_all(&self.directory)?;

        let mut staged = tempfile::Builder::new()
            .prefix(".conspects-")
            .suffix(".part")
            .tempfile_in(&self.directory)?;
        staged.write_all(&artifact.data)?;
        staged.flush()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = format!("blob:{}/{id}", self.directory.display());
        self.staged.insert(url.clone(), staged.into_temp_path());
        Ok(url)
    }

    fn trigger(&self, url: &str, filename: &str) -> AppResult<()> {
        let staged = self
            .staged
            .get(url)
            .ok_or_else(|| AppError::not_found(format!("Unknown object URL: {url}")))?;

        let destination = self.destination(filename);
        std::fs::copy(staged.value(), &destination).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write {}: {e}", destination.display()),
                e,
            )
        })?;

        tracing::info!(path = %destination.display(), "Download saved");
        Ok(())
    }

    fn revoke(&self, url: &str) {
        if let Some((_, staged)) = self.staged.remove(url) {
            if let Err(e) = staged.close() {
                tracing::warn!(url, error = %e, "Failed to remove staged download");
            }
        }
    }
}
