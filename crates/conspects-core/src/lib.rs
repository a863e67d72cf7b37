//! # conspects-core
//!
//! Core crate for the Conspects client. Contains the injected HTTP
//! transport trait, configuration schemas, typed identifiers, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Conspects crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
