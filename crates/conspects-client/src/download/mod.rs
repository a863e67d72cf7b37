//! Delivery of downloaded artifacts.
//!
//! An [`ArtifactSink`] hands out object URLs for a binary artifact,
//! triggers the download, and releases the URL. [`ObjectUrl`] pairs the
//! acquire with a release in `Drop`, so no path leaks a staged URL.

pub mod artifact;
pub mod directory;
pub mod memory;
pub mod sink;

pub use artifact::DownloadableArtifact;
pub use directory::DirectorySink;
pub use memory::MemorySink;
pub use sink::{ArtifactSink, ObjectUrl};
