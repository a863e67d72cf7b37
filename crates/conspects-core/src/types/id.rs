//! Newtype wrappers around the backend's integer primary keys.
//!
//! Using distinct types prevents accidentally passing an `EditionId` where
//! a `FileId` is expected when building endpoint paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Return the inner integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a stored file.
    FileId
);

define_id!(
    /// Identifier of an edition (a dated offering of a subject).
    EditionId
);

define_id!(
    /// Identifier of a subject (course).
    SubjectId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FileId(5).to_string(), "5");
    }

    #[test]
    fn test_from_str() {
        let id: EditionId = " 42 ".parse().expect("should parse");
        assert_eq!(id, EditionId(42));
        assert!("forty-two".parse::<EditionId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&SubjectId(7)).expect("serialize");
        assert_eq!(json, "7");
        let parsed: SubjectId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(parsed, SubjectId(7));
    }
}
