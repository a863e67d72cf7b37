//! Transient binary artifacts.

use bytes::Bytes;

/// Media type of edition exports.
pub const ZIP_MEDIA_TYPE: &str = "application/zip";

/// A client-local binary object that exists only to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadableArtifact {
    /// Suggested filename.
    pub filename: String,
    /// Declared media type.
    pub media_type: String,
    /// Raw bytes.
    pub data: Bytes,
}

impl DownloadableArtifact {
    /// A zip archive.
    pub fn zip(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            media_type: ZIP_MEDIA_TYPE.to_string(),
            data: data.into(),
        }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the artifact has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
