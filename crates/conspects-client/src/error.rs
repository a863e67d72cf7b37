//! Error types for file persistence, rendering, and edition transfer.
//!
//! Every operation returns one of these instead of panicking or notifying
//! the user. Each maps into `conspects_core::AppError` for the CLI.

use conspects_core::AppError;
use conspects_core::error::ErrorKind;
use conspects_core::types::FileId;
use thiserror::Error;

/// Failure to persist edited file content.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Network failure or non-2xx status from `PATCH /files/{id}/`.
    #[error("{}", describe_failure("Saving the file failed", *status, body))]
    TransportFailure {
        /// HTTP status, absent when no response was received.
        status: Option<u16>,
        /// Response body, or the transport error text.
        body: String,
    },

    /// An edit session was handed a descriptor for a different file.
    #[error("Edit session for file {session} cannot be saved into file {file}")]
    SessionMismatch {
        /// File the session was opened on.
        session: FileId,
        /// File the save was addressed to.
        file: FileId,
    },

    /// The file's type has no editing strategy.
    #[error("Files with extension '{extension}' cannot be edited")]
    NotEditable {
        /// The rejected extension.
        extension: String,
    },
}

/// Failure to turn a file payload into an editable or viewable form.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Payload is not valid base64, or not UTF-8 text.
    #[error("Content of '{file}' could not be decoded: {reason}")]
    Undecodable {
        /// Display name of the file.
        file: String,
        /// Decoder message.
        reason: String,
    },

    /// A text editor was requested for a non-text file.
    #[error("'{file}' is not a text document")]
    NotText {
        /// Display name of the file.
        file: String,
    },
}

/// Failure of an edition duplicate, export, or create request.
#[derive(Debug, Error)]
pub enum TransferError {
    /// `POST /editions/duplicate/` did not succeed.
    #[error("{}", describe_failure("Duplicating the edition failed", *status, body))]
    DuplicateFailed {
        /// HTTP status, absent when no response was received.
        status: Option<u16>,
        /// Response body, or the transport error text.
        body: String,
    },

    /// `GET /export-edition/{id}` did not succeed.
    #[error("{}", describe_failure("Exporting the edition failed", *status, body))]
    ExportFailed {
        /// HTTP status, absent when no response was received.
        status: Option<u16>,
        /// Response body, or the transport error text.
        body: String,
    },

    /// `POST /courses/{id}/editions/` or the edition list did not succeed.
    #[error("{}", describe_failure("Edition request failed", *status, body))]
    CatalogFailed {
        /// HTTP status, absent when no response was received.
        status: Option<u16>,
        /// Response body, or the transport error text.
        body: String,
    },

    /// Year input that does not parse as an integer.
    #[error("Edition year must be a whole number, got '{input}'")]
    InvalidYear {
        /// The rejected raw input.
        input: String,
    },

    /// The archive was received but could not be handed to the sink.
    #[error("Delivering the downloaded archive failed: {0}")]
    DownloadFailed(#[source] AppError),
}

fn describe_failure(what: &str, status: Option<u16>, body: &str) -> String {
    match (status, body.is_empty()) {
        (Some(code), true) => format!("{what} (HTTP {code})"),
        (Some(code), false) => format!("{what} (HTTP {code}): {body}"),
        (None, _) => format!("{what}: {body}"),
    }
}

impl From<SaveError> for AppError {
    fn from(err: SaveError) -> Self {
        match &err {
            SaveError::TransportFailure { status: Some(404), .. } => {
                AppError::not_found(err.to_string())
            }
            SaveError::TransportFailure { .. } => AppError::transport(err.to_string()),
            SaveError::NotEditable { .. } | SaveError::SessionMismatch { .. } => {
                AppError::validation(err.to_string())
            }
        }
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::new(ErrorKind::Validation, err.to_string())
    }
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InvalidYear { .. } => AppError::validation(err.to_string()),
            TransferError::DownloadFailed(inner) => AppError::with_source(
                ErrorKind::Storage,
                format!("Delivering the downloaded archive failed: {}", inner.message),
                inner,
            ),
            TransferError::DuplicateFailed { status: Some(404), .. }
            | TransferError::ExportFailed { status: Some(404), .. }
            | TransferError::CatalogFailed { status: Some(404), .. } => {
                AppError::not_found(err.to_string())
            }
            _ => AppError::transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_message() {
        let err = SaveError::TransportFailure {
            status: Some(500),
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Saving the file failed (HTTP 500): boom");

        let err = TransferError::ExportFailed {
            status: None,
            body: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Exporting the edition failed: connection refused"
        );
    }

    #[test]
    fn test_maps_into_app_error() {
        let app: AppError = TransferError::InvalidYear {
            input: "abc".to_string(),
        }
        .into();
        assert_eq!(app.kind, ErrorKind::Validation);

        let app: AppError = SaveError::TransportFailure {
            status: Some(404),
            body: String::new(),
        }
        .into();
        assert_eq!(app.kind, ErrorKind::NotFound);
    }
}
