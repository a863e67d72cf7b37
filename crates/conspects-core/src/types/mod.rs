//! Shared value types.

pub mod id;

pub use id::{EditionId, FileId, SubjectId};
