//! Backend endpoint paths, relative to the configured base URL.

use conspects_core::types::{EditionId, FileId, SubjectId};

/// `/files/{id}/`: fetch and partial update of one file.
pub fn file(id: FileId) -> String {
    format!("/files/{id}/")
}

/// `/editions/duplicate/`: server-side copy of an edition.
pub fn duplicate_edition() -> &'static str {
    "/editions/duplicate/"
}

/// `/export-edition/{id}`: zip export. The backend routes it without a
/// trailing slash.
pub fn export_edition(id: EditionId) -> String {
    format!("/export-edition/{id}")
}

/// `/courses/{id}/editions/`: list and create editions of a subject.
pub fn subject_editions(id: SubjectId) -> String {
    format!("/courses/{id}/editions/")
}
