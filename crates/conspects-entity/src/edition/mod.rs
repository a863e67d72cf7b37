//! Edition domain entities.

pub mod model;
pub mod permission;
pub mod request;

pub use model::Edition;
pub use permission::EditionPermission;
pub use request::{CreateEditionRequest, DuplicateEditionRequest};
