//! # conspects-client
//!
//! Client-side logic for the Conspects course-content backend:
//!
//! - [`file::FileRenderer`] decides how a file is shown or edited from its
//!   extension and pushes edited content back with `PATCH /files/{id}/`.
//! - [`edition::EditionTransferManager`] duplicates editions and exports
//!   them as zip archives delivered through an [`download::ArtifactSink`].
//! - [`edition::EditionCatalog`] lists and creates editions of a subject.
//!
//! All components take an injected [`conspects_core::traits::HttpTransport`];
//! [`transport::ReqwestTransport`] is the production implementation.

pub mod download;
pub mod edition;
pub mod endpoints;
pub mod error;
pub mod file;
pub mod render;
pub mod transport;

pub use download::{ArtifactSink, DirectorySink, DownloadableArtifact, MemorySink};
pub use edition::{DuplicateEditionForm, EditionCatalog, EditionTransferManager};
pub use error::{RenderError, SaveError, TransferError};
pub use file::{FileRenderer, TextEditSession};
pub use render::{FileKind, RenderStrategy, RenderedView};
pub use transport::ReqwestTransport;
