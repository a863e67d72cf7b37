//! File rendering and persistence service.

use std::sync::Arc;

use conspects_core::{AppError, AppResult};
use conspects_core::traits::transport::{ApiRequest, HttpTransport};
use conspects_core::types::FileId;
use conspects_entity::file::{FileDescriptor, UpdateFileRequest};

use crate::endpoints;
use crate::error::{RenderError, SaveError};
use crate::file::editor::TextEditSession;
use crate::render::{FileKind, RenderedView};

/// Chooses how a file is shown and pushes edits back to the backend.
#[derive(Clone)]
pub struct FileRenderer {
    /// Injected HTTP transport.
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for FileRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRenderer").finish()
    }
}

impl FileRenderer {
    /// Creates a new file renderer.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetches a file descriptor, including its payload.
    pub async fn fetch(&self, file_id: FileId) -> AppResult<FileDescriptor> {
        let response = self
            .transport
            .send(ApiRequest::get(endpoints::file(file_id)))
            .await?;

        if response.status == 404 {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }
        if !response.is_success() {
            return Err(AppError::transport(format!(
                "Fetching file {file_id} failed (HTTP {}): {}",
                response.status,
                response.body_text()
            )));
        }

        response.json()
    }

    /// Builds the content view for the current selection.
    pub fn render(&self, selected: Option<&FileDescriptor>) -> RenderedView {
        RenderedView::for_selection(selected)
    }

    /// Opens a text editing session for a `txt` or `md` file.
    pub fn open_editor(&self, file: &FileDescriptor) -> Result<TextEditSession, RenderError> {
        TextEditSession::open(file)
    }

    /// Saves new content for a file.
    ///
    /// Sends `name` and `extension` unchanged next to the new content; the
    /// backend replaces all three. The descriptor is not modified; callers
    /// re-fetch to see the stored value.
    pub async fn save(
        &self,
        file: &FileDescriptor,
        updated_content_base64: &str,
    ) -> Result<(), SaveError> {
        if !FileKind::from_extension(&file.extension).is_editable() {
            return Err(SaveError::NotEditable {
                extension: file.extension.clone(),
            });
        }

        let body = UpdateFileRequest::replace_content(file, updated_content_base64);
        let body = serde_json::to_value(&body).map_err(|e| SaveError::TransportFailure {
            status: None,
            body: e.to_string(),
        })?;

        let response = match self
            .transport
            .send(ApiRequest::patch(endpoints::file(file.id), body))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(file_id = %file.id, error = %e, "Failed to save the file");
                return Err(SaveError::TransportFailure {
                    status: None,
                    body: e.message,
                });
            }
        };

        if !response.is_success() {
            tracing::warn!(
                file_id = %file.id,
                status = response.status,
                "Failed to save the file"
            );
            return Err(SaveError::TransportFailure {
                status: Some(response.status),
                body: response.body_text(),
            });
        }

        tracing::info!(
            file_id = %file.id,
            file = %file.display_name(),
            "File saved"
        );
        Ok(())
    }

    /// Encodes the session's text and saves it.
    ///
    /// The session must have been opened on `file`; otherwise nothing is
    /// sent and [`SaveError::SessionMismatch`] is returned.
    pub async fn save_session(
        &self,
        file: &FileDescriptor,
        session: &TextEditSession,
    ) -> Result<(), SaveError> {
        if session.file_id() != file.id {
            tracing::warn!(
                session_file_id = %session.file_id(),
                file_id = %file.id,
                "Refusing to save an edit session into another file"
            );
            return Err(SaveError::SessionMismatch {
                session: session.file_id(),
                file: file.id,
            });
        }
        self.save(file, &session.encoded()).await
    }
}
