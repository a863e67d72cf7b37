//! Listing and creating the editions of a subject.

use std::sync::Arc;

use conspects_core::traits::transport::{ApiRequest, ApiResponse, HttpTransport};
use conspects_core::types::{EditionId, SubjectId};
use conspects_entity::edition::{CreateEditionRequest, Edition};

use crate::endpoints;
use crate::error::TransferError;

/// Reads and extends a subject's edition list.
#[derive(Clone)]
pub struct EditionCatalog {
    /// Injected HTTP transport.
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for EditionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditionCatalog").finish()
    }
}

impl EditionCatalog {
    /// Creates a new catalog.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// All editions of a subject visible to the current user.
    pub async fn list(&self, subject_id: SubjectId) -> Result<Vec<Edition>, TransferError> {
        let response = self
            .send(ApiRequest::get(endpoints::subject_editions(subject_id)))
            .await?;

        response.json().map_err(|e| TransferError::CatalogFailed {
            status: Some(response.status),
            body: e.message,
        })
    }

    /// One edition of a subject, looked up through the list.
    pub async fn find(
        &self,
        subject_id: SubjectId,
        edition_id: EditionId,
    ) -> Result<Option<Edition>, TransferError> {
        Ok(self
            .list(subject_id)
            .await?
            .into_iter()
            .find(|edition| edition.id == edition_id))
    }

    /// Creates an edition under a subject.
    pub async fn create(
        &self,
        subject_id: SubjectId,
        name: &str,
        year: i32,
    ) -> Result<(), TransferError> {
        let body = serde_json::to_value(CreateEditionRequest {
            name: name.to_string(),
            year,
        })
        .map_err(|e| TransferError::CatalogFailed {
            status: None,
            body: e.to_string(),
        })?;

        self.send(ApiRequest::post(endpoints::subject_editions(subject_id), body))
            .await?;

        tracing::info!(subject_id = %subject_id, name, year, "Edition created");
        Ok(())
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransferError> {
        let path = request.path.clone();
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| TransferError::CatalogFailed {
                status: None,
                body: e.message,
            })?;

        if !response.is_success() {
            tracing::warn!(path = %path, status = response.status, "Edition request failed");
            return Err(TransferError::CatalogFailed {
                status: Some(response.status),
                body: response.body_text(),
            });
        }
        Ok(response)
    }
}
