//! Per-edition permission level of the current user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use conspects_core::AppError;

/// Permission the backend reports for the current user on an edition.
///
/// Used for gating client affordances only. The server enforces access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditionPermission {
    /// Read-only access.
    View,
    /// May modify content.
    Edit,
    /// Owner of the edition.
    Owns,
    /// Administrator.
    Admin,
}

impl EditionPermission {
    /// Edit, owns and admin may edit and delete.
    pub fn can_edit(&self) -> bool {
        matches!(self, Self::Edit | Self::Owns | Self::Admin)
    }

    /// Every level may open the edition.
    pub fn can_view(&self) -> bool {
        true
    }

    /// Only the plain view level gets the read-only entry point.
    pub fn is_view_only(&self) -> bool {
        matches!(self, Self::View)
    }

    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Owns => "owns",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for EditionPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EditionPermission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "owns" => Ok(Self::Owns),
            "admin" => Ok(Self::Admin),
            _ => Err(AppError::validation(format!(
                "Invalid edition permission: '{s}'. Expected one of: view, edit, owns, admin"
            ))),
        }
    }
}
