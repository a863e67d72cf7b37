//! File descriptor model.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use conspects_core::types::FileId;

/// Metadata plus base64 payload for one managed file.
///
/// Handed to the renderer as an immutable value. The backend stays the
/// source of truth after a save; nothing in the client mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Unique file identifier.
    pub id: FileId,
    /// Base filename without extension.
    pub name: String,
    /// Lowercase extension, e.g. `txt`, `png`.
    pub extension: String,
    /// File payload as base64 text.
    #[serde(default)]
    pub content: String,
    /// Whether the backend allows editing.
    #[serde(default)]
    pub can_be_edited: bool,
    /// Whether the backend allows previewing.
    #[serde(default)]
    pub can_be_previewed: bool,
    /// Whether this file is an attachment.
    #[serde(default)]
    pub is_attachment: bool,
}

impl FileDescriptor {
    /// `"<name>.<extension>"`.
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Decode the base64 payload into raw bytes.
    pub fn decoded_content(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.content.as_bytes())
    }
}
