//! File update request body.

use serde::{Deserialize, Serialize};

use super::model::FileDescriptor;

/// Body of `PATCH /files/{id}/`.
///
/// Always carries `name` and `extension` alongside `content`: the backend
/// treats the body as a full-field replace, so omitting a field would
/// overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFileRequest {
    /// Unchanged base name.
    pub name: String,
    /// Unchanged extension.
    pub extension: String,
    /// New base64 payload.
    pub content: String,
}

impl UpdateFileRequest {
    /// Build an update that replaces only the content of `file`.
    pub fn replace_content(file: &FileDescriptor, content: impl Into<String>) -> Self {
        Self {
            name: file.name.clone(),
            extension: file.extension.clone(),
            content: content.into(),
        }
    }
}
