//! Two-level `section.key` message addresses.

use std::fmt;
use std::str::FromStr;

/// Address of one message: a section name plus a key within it.
///
/// Parses from and displays as `section.key`. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessagePath {
    section: String,
    key: String,
}

impl MessagePath {
    /// Build a path without validation. Either half may name something
    /// absent from a catalog; lookups report that as a miss.
    ///
    /// Paths built from names containing `.` display as text that does not
    /// parse back. Catalogs never contain such names, so paths taken from
    /// [`MessageCatalog::paths`](crate::catalog::MessageCatalog::paths)
    /// always do.
    #[must_use]
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for MessagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

impl FromStr for MessagePath {
    type Err = PathParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (section, key) = input
            .split_once('.')
            .ok_or_else(|| PathParseError::new(input, "expected 'section.key'"))?;
        if section.is_empty() {
            return Err(PathParseError::new(input, "empty section name"));
        }
        if key.is_empty() {
            return Err(PathParseError::new(input, "empty message key"));
        }
        if key.contains('.') {
            return Err(PathParseError::new(input, "paths have exactly two levels"));
        }
        Ok(Self::new(section, key))
    }
}

/// A string that is not a well-formed `section.key` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParseError {
    pub input: String,
    pub reason: &'static str,
}

impl PathParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid message path '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for PathParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_section_and_key() {
        let path: MessagePath = "validations.sizeRequired".parse().unwrap();
        assert_eq!(path.section(), "validations");
        assert_eq!(path.key(), "sizeRequired");
    }

    #[test]
    fn rejects_malformed_paths() {
        let cases = [
            ("validations", "expected 'section.key'"),
            (".sizeRequired", "empty section name"),
            ("validations.", "empty message key"),
            ("a.b.c", "paths have exactly two levels"),
            ("", "expected 'section.key'"),
        ];
        for (input, reason) in cases {
            let err = input.parse::<MessagePath>().unwrap_err();
            assert_eq!(err.reason, reason, "input {input:?}");
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn error_display_names_input() {
        let err = "nope".parse::<MessagePath>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid message path 'nope': expected 'section.key'"
        );
    }

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,15}"
    }

    proptest! {
        #[test]
        fn display_parses_back(section in segment(), key in segment()) {
            let path = MessagePath::new(section, key);
            let reparsed: MessagePath = path.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, path);
        }
    }
}
