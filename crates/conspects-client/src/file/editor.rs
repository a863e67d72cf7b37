//! Text editing session for `txt` and `md` files.
//!
//! The session owns the decoded text. The descriptor it was opened from
//! is never touched; saving sends [`TextEditSession::encoded`] instead.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use conspects_core::types::FileId;
use conspects_entity::file::FileDescriptor;

use crate::error::RenderError;
use crate::render::FileKind;

/// Editable UTF-8 text decoded from a file payload.
#[derive(Debug, Clone)]
pub struct TextEditSession {
    file_id: FileId,
    kind: FileKind,
    original: String,
    text: String,
}

impl TextEditSession {
    /// Open a session on a text file.
    pub fn open(file: &FileDescriptor) -> Result<Self, RenderError> {
        let kind = FileKind::from_extension(&file.extension);
        if !kind.is_editable() {
            return Err(RenderError::NotText {
                file: file.display_name(),
            });
        }

        let bytes = file
            .decoded_content()
            .map_err(|e| RenderError::Undecodable {
                file: file.display_name(),
                reason: e.to_string(),
            })?;
        let text = String::from_utf8(bytes).map_err(|e| RenderError::Undecodable {
            file: file.display_name(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            file_id: file.id,
            kind,
            original: text.clone(),
            text,
        })
    }

    /// The file this session edits.
    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// Plain text or markdown.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the text differs from what was loaded.
    pub fn is_dirty(&self) -> bool {
        self.text != self.original
    }

    /// Drop local edits.
    pub fn revert(&mut self) {
        self.text = self.original.clone();
    }

    /// Mark the current text as persisted.
    pub fn mark_saved(&mut self) {
        self.original = self.text.clone();
    }

    /// Current text as the base64 payload the backend expects.
    pub fn encoded(&self) -> String {
        STANDARD.encode(self.text.as_bytes())
    }

    /// HTML preview for markdown sessions.
    pub fn markdown_preview(&self) -> Option<String> {
        match self.kind {
            FileKind::Markdown => Some(markdown::to_html(&self.text)),
            _ => None,
        }
    }
}
