//! Duplicate-edition form state and year parsing.

use conspects_core::types::EditionId;
use conspects_entity::edition::{DuplicateEditionRequest, Edition};

use crate::error::TransferError;

/// Parse free-text year input.
///
/// Blank or non-numeric input is rejected instead of being sent to the
/// backend as a corrupted value.
pub fn parse_year(input: &str) -> Result<i32, TransferError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| TransferError::InvalidYear {
            input: input.to_string(),
        })
}

/// User-editable parameters of a duplicate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEditionForm {
    base_edition_id: EditionId,
    name: String,
    year_input: String,
}

impl DuplicateEditionForm {
    /// Prefill from the edition being copied: `"<name> copy"` and its year.
    pub fn for_edition(edition: &Edition) -> Self {
        Self {
            base_edition_id: edition.id,
            name: edition.default_copy_name(),
            year_input: edition.year.to_string(),
        }
    }

    /// Edition being copied.
    pub fn base_edition_id(&self) -> EditionId {
        self.base_edition_id
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current raw year input.
    pub fn year_input(&self) -> &str {
        &self.year_input
    }

    /// Replace the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the raw year input.
    pub fn set_year_input(&mut self, year: impl Into<String>) {
        self.year_input = year.into();
    }

    /// Validate the form into a request body.
    pub fn to_request(&self) -> Result<DuplicateEditionRequest, TransferError> {
        Ok(DuplicateEditionRequest {
            base_edition_id: self.base_edition_id,
            new_edition_name: self.name.clone(),
            new_edition_year: parse_year(&self.year_input)?,
        })
    }
}
