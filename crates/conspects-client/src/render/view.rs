//! The content view for the current selection.

use serde::Serialize;

use conspects_entity::file::FileDescriptor;

use super::strategy::RenderStrategy;

/// Capability summary shown above the file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDetails {
    /// `"<name>.<extension>"`.
    pub display_name: String,
    /// Whether the backend allows editing.
    pub can_be_edited: bool,
    /// Whether the backend allows previewing.
    pub can_be_previewed: bool,
    /// Whether this file is an attachment.
    pub is_attachment: bool,
}

impl From<&FileDescriptor> for FileDetails {
    fn from(file: &FileDescriptor) -> Self {
        Self {
            display_name: file.display_name(),
            can_be_edited: file.can_be_edited,
            can_be_previewed: file.can_be_previewed,
            is_attachment: file.is_attachment,
        }
    }
}

/// What the content view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedView {
    /// Nothing is selected.
    NoSelection,
    /// A file with its details and strategy.
    File {
        /// Capability summary.
        details: FileDetails,
        /// How the content is shown.
        strategy: RenderStrategy,
    },
}

impl RenderedView {
    /// Build the view for an optional selection.
    pub fn for_selection(selected: Option<&FileDescriptor>) -> Self {
        match selected {
            None => Self::NoSelection,
            Some(file) => Self::File {
                details: FileDetails::from(file),
                strategy: RenderStrategy::for_file(file),
            },
        }
    }
}
