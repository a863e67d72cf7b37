//! # conspects-entity
//!
//! Domain entity models for the Conspects client. Every struct here
//! mirrors a backend resource or a request body. Entities derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`.

pub mod edition;
pub mod file;
