//! File domain entities.

pub mod model;
pub mod request;

pub use model::FileDescriptor;
pub use request::UpdateFileRequest;
