//! Roll number normalization.
//!
//! Roll numbers are typed by hand in the field (`mys/35/53`, ` MYS / 35/53 `),
//! so every lookup key is normalized to uppercase with all whitespace removed
//! before it reaches a store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A normalized recipient identifier.
///
/// Constructed only through [`RollNo::parse`], so a `RollNo` value is always
/// non-empty, uppercase, and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollNo(String);

impl RollNo {
    /// Normalize a raw, human-entered roll number.
    ///
    /// Returns [`CoreError::Validation`] if nothing is left after stripping
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        if normalized.is_empty() {
            return Err(CoreError::Validation(
                "Roll number must not be empty".into(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RollNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RollNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RollNo {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RollNo> for String {
    fn from(value: RollNo) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn padded_lowercase_input_normalizes() {
        let padded = RollNo::parse(" mys/35/53 ").unwrap();
        let canonical = RollNo::parse("MYS/35/53").unwrap();

        assert_eq!(padded, canonical);
        assert_eq!(padded.as_str(), "MYS/35/53");
    }

    #[test]
    fn internal_whitespace_is_removed() {
        let roll_no = RollNo::parse("mys / 35\t/ 53").unwrap();
        assert_eq!(roll_no.as_str(), "MYS/35/53");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_matches!(RollNo::parse(""), Err(CoreError::Validation(_)));
        assert_matches!(RollNo::parse("  \t "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn deserializing_normalizes() {
        let roll_no: RollNo = serde_json::from_str("\"abc 12\"").unwrap();
        assert_eq!(roll_no.as_str(), "ABC12");

        let empty: Result<RollNo, _> = serde_json::from_str("\"   \"");
        assert!(empty.is_err());
    }
}
