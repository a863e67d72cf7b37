//! Edition duplicate and zip export.

use std::sync::Arc;

use tokio::sync::watch;

use conspects_core::traits::transport::{ApiRequest, ApiResponse, HttpTransport};
use conspects_core::types::EditionId;
use conspects_entity::edition::{DuplicateEditionRequest, Edition};

use crate::download::{ArtifactSink, DownloadableArtifact, ObjectUrl};
use crate::edition::filename::recover_filename;
use crate::edition::form::DuplicateEditionForm;
use crate::edition::progress::ProgressGuard;
use crate::endpoints;
use crate::error::TransferError;

/// Duplicates editions server-side and exports them as zip archives.
pub struct EditionTransferManager {
    /// Injected HTTP transport.
    transport: Arc<dyn HttpTransport>,
    /// Where exported archives are delivered.
    sink: Arc<dyn ArtifactSink>,
    /// Number of exports in flight.
    exporting: watch::Sender<usize>,
}

impl std::fmt::Debug for EditionTransferManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditionTransferManager")
            .field("exporting", &*self.exporting.borrow())
            .finish()
    }
}

impl EditionTransferManager {
    /// Creates a new transfer manager.
    pub fn new(transport: Arc<dyn HttpTransport>, sink: Arc<dyn ArtifactSink>) -> Self {
        let (exporting, _) = watch::channel(0);
        Self {
            transport,
            sink,
            exporting,
        }
    }

    /// Whether at least one export request is in flight.
    pub fn is_exporting(&self) -> bool {
        *self.exporting.borrow() > 0
    }

    /// Observe the number of exports in flight; zero means idle.
    pub fn subscribe_progress(&self) -> watch::Receiver<usize> {
        self.exporting.subscribe()
    }

    /// Asks the backend to copy `base_edition_id` under a new name and year.
    ///
    /// Success carries no payload; callers refresh their edition list.
    pub async fn duplicate(
        &self,
        base_edition_id: EditionId,
        new_name: &str,
        new_year: i32,
    ) -> Result<(), TransferError> {
        let request = DuplicateEditionRequest {
            base_edition_id,
            new_edition_name: new_name.to_string(),
            new_edition_year: new_year,
        };
        let body = serde_json::to_value(&request).map_err(|e| TransferError::DuplicateFailed {
            status: None,
            body: e.to_string(),
        })?;

        let response = self
            .transport
            .send(ApiRequest::post(endpoints::duplicate_edition(), body))
            .await
            .map_err(|e| TransferError::DuplicateFailed {
                status: None,
                body: e.message,
            })?;

        if !response.is_success() {
            tracing::warn!(
                edition_id = %base_edition_id,
                status = response.status,
                "Failed to duplicate the edition"
            );
            return Err(TransferError::DuplicateFailed {
                status: Some(response.status),
                body: response.body_text(),
            });
        }

        tracing::info!(
            edition_id = %base_edition_id,
            new_name,
            new_year,
            "Edition duplicated"
        );
        Ok(())
    }

    /// Validates the form's year and submits the duplicate request.
    ///
    /// Invalid year input fails with [`TransferError::InvalidYear`] before
    /// anything is sent.
    pub async fn duplicate_from_form(
        &self,
        form: &DuplicateEditionForm,
    ) -> Result<(), TransferError> {
        let request = form.to_request()?;
        self.duplicate(
            request.base_edition_id,
            &request.new_edition_name,
            request.new_edition_year,
        )
        .await
    }

    /// Downloads the edition export and delivers it through the sink.
    ///
    /// The call counts as in flight from entry until every exit path, so
    /// overlapping exports keep [`Self::is_exporting`] true until the last
    /// one returns.
    pub async fn export_zip(
        &self,
        edition: &Edition,
    ) -> Result<DownloadableArtifact, TransferError> {
        let _progress = ProgressGuard::begin(&self.exporting);

        let response = self.fetch_export(edition).await?;
        let filename = recover_filename(response.header("content-disposition"), edition);
        let artifact = DownloadableArtifact::zip(filename, response.body);

        self.deliver(&artifact)?;

        tracing::info!(
            edition_id = %edition.id,
            filename = %artifact.filename,
            bytes = artifact.len(),
            "Edition exported"
        );
        Ok(artifact)
    }

    async fn fetch_export(&self, edition: &Edition) -> Result<ApiResponse, TransferError> {
        let response = self
            .transport
            .send(ApiRequest::get(endpoints::export_edition(edition.id)))
            .await
            .map_err(|e| {
                tracing::warn!(
                    edition_id = %edition.id,
                    error = %e,
                    "Failed to download the export"
                );
                TransferError::ExportFailed {
                    status: None,
                    body: e.message,
                }
            })?;

        if !response.is_success() {
            tracing::warn!(
                edition_id = %edition.id,
                status = response.status,
                "Failed to download the export"
            );
            return Err(TransferError::ExportFailed {
                status: Some(response.status),
                body: response.body_text(),
            });
        }

        Ok(response)
    }

    /// Stage, trigger, release. The object URL is revoked when `url` drops,
    /// including when the trigger fails.
    fn deliver(&self, artifact: &DownloadableArtifact) -> Result<(), TransferError> {
        let url = ObjectUrl::acquire(self.sink.as_ref(), artifact)
            .map_err(TransferError::DownloadFailed)?;
        url.trigger(&artifact.filename)
            .map_err(TransferError::DownloadFailed)
    }
}
