//! Edition entity model.

use serde::{Deserialize, Serialize};

use conspects_core::types::EditionId;

use super::permission::EditionPermission;

/// A dated offering of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Unique edition identifier.
    pub id: EditionId,
    /// Display name.
    pub name: String,
    /// Academic year.
    pub year: i32,
    /// The current user's permission on this edition.
    pub user_permission: EditionPermission,
}

impl Edition {
    /// Name proposed for a duplicate of this edition.
    pub fn default_copy_name(&self) -> String {
        format!("{} copy", self.name)
    }

    /// Filename used when the export response names none.
    pub fn fallback_archive_name(&self) -> String {
        format!("{}.zip", self.name)
    }
}
