//! Edition duplicate, export, and catalog operations.

pub mod catalog;
pub mod filename;
pub mod form;
pub mod progress;
pub mod transfer;

pub use catalog::EditionCatalog;
pub use filename::recover_filename;
pub use form::{DuplicateEditionForm, parse_year};
pub use transfer::EditionTransferManager;
