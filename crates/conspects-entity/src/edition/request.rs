//! Edition request bodies.

use serde::{Deserialize, Serialize};

use conspects_core::types::EditionId;

/// Body of `POST /editions/duplicate/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEditionRequest {
    /// Edition to copy from.
    pub base_edition_id: EditionId,
    /// Name of the new edition.
    pub new_edition_name: String,
    /// Year of the new edition.
    pub new_edition_year: i32,
}

/// Body of `POST /courses/{subject_id}/editions/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEditionRequest {
    /// Edition name.
    pub name: String,
    /// Edition year.
    pub year: i32,
}
