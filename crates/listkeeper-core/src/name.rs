//! List-name canonicalization.

use serde::{Deserialize, Serialize};

/// The reserved name of the default list.
pub const TODAY: &str = "Today";

/// A canonical list name.
///
/// The canonical form uppercases the first character and lowercases the
/// rest, so two URL path segments differing only in case resolve to the
/// same list. The name `Today` is reserved for the default collection.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ListName(String);

impl ListName {
    /// Creates a canonical list name from a raw path segment.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut chars = raw.chars();
        let canonical = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Self(canonical)
    }

    /// Returns the name of the default list.
    #[must_use]
    pub fn today() -> Self {
        Self(TODAY.to_string())
    }

    /// Returns `true` if this is the default list.
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.0 == TODAY
    }

    /// Returns the canonical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ListName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_first_letter() {
        assert_eq!(ListName::new("groceries").as_str(), "Groceries");
        assert_eq!(ListName::new("Groceries").as_str(), "Groceries");
    }

    #[test]
    fn test_lowercases_remainder() {
        assert_eq!(ListName::new("GROCERIES").as_str(), "Groceries");
        assert_eq!(ListName::new("gRoCeRiEs").as_str(), "Groceries");
    }

    #[test]
    fn test_case_variants_collapse() {
        assert_eq!(ListName::new("foo"), ListName::new("Foo"));
        assert_eq!(ListName::new("foo"), ListName::new("FOO"));
    }

    #[test]
    fn test_today_detection() {
        assert!(ListName::new("today").is_today());
        assert!(ListName::today().is_today());
        assert!(!ListName::new("tomorrow").is_today());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(ListName::new("").as_str(), "");
    }
}
