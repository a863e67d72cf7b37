//! Extension-keyed rendering strategies.
//!
//! [`FileKind`] is resolved from a static extension table, then
//! [`RenderStrategy::for_file`] turns a descriptor into a description of
//! what to show: an editor, an inline preview, or a download link.

pub mod kind;
pub mod strategy;
pub mod view;

pub use kind::FileKind;
pub use strategy::{DataUri, DownloadLink, RenderStrategy};
pub use view::{FileDetails, RenderedView};
