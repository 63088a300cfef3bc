//! Immutable message catalog with strict two-level lookup.
//!
//! # Invariants
//!
//! 1. **Unique keys**: section names are unique within a catalog, message
//!    keys are unique within a section. Construction rejects duplicates.
//!
//! 2. **Non-empty text**: every message has a non-empty value.
//!
//! 3. **Addressable names**: section names and keys are non-empty and
//!    contain no `.`, so every `(section, key)` pair displays as a
//!    `section.key` path that parses back to itself.
//!
//! 4. **Immutable**: no method takes `&mut self`. A catalog is `Send + Sync`
//!    and may be shared across threads without locking.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown section | Section name not in catalog | `Err(MissingKeyError)`, kind `Section` |
//! | Unknown key | Key not in the named section | `Err(MissingKeyError)`, kind `Key` |
//! | Duplicate section/key at build | Bad input data | `Err(CatalogError)` |
//! | Empty message text at build | Bad input data | `Err(CatalogError)` |
//! | Empty or dotted name at build | Name would not form a `section.key` path | `Err(CatalogError)` |
//!
//! There is no fallback: a miss is never turned into a default string.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::OnceLock;

use crate::message::{Message, SectionId};
use crate::path::MessagePath;

/// Which level of a lookup path was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Section,
    Key,
}

/// A `(section, key)` pair that does not resolve in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyError {
    pub section: String,
    pub key: String,
    pub kind: Missing,
}

impl MissingKeyError {
    fn new(section: &str, key: &str, kind: Missing) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            kind,
        }
    }

    /// The full path that failed to resolve.
    #[must_use]
    pub fn path(&self) -> MessagePath {
        MessagePath::new(self.section.as_str(), self.key.as_str())
    }
}

impl fmt::Display for MissingKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Missing::Section => write!(
                f,
                "unknown section '{}' (looking up '{}.{}')",
                self.section, self.section, self.key
            ),
            Missing::Key => write!(
                f,
                "unknown message key '{}' in section '{}'",
                self.key, self.section
            ),
        }
    }
}

impl std::error::Error for MissingKeyError {}

/// Errors from building a catalog out of raw section data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same section name was supplied twice.
    DuplicateSection { section: String },
    /// The same key appeared twice in one section.
    DuplicateKey { section: String, key: String },
    /// A message had an empty value.
    EmptyMessage { section: String, key: String },
    /// A section name or key was empty or contained `.`.
    InvalidName { name: String, reason: &'static str },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSection { section } => write!(f, "duplicate section '{section}'"),
            Self::DuplicateKey { section, key } => {
                write!(f, "duplicate key '{key}' in section '{section}'")
            }
            Self::EmptyMessage { section, key } => {
                write!(f, "empty message text for '{section}.{key}'")
            }
            Self::InvalidName { name, reason } => write!(f, "invalid name '{name}': {reason}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Names become one level of a `section.key` path.
fn check_name(name: &str) -> Result<(), CatalogError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('.') {
        "name contains '.'"
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

/// A named group of related messages.
#[derive(Debug, Clone)]
pub struct Section {
    name: &'static str,
    entries: Vec<(&'static str, &'static str)>,
    index: HashMap<&'static str, usize>,
}

impl Section {
    fn build<I>(name: &'static str, messages: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut section = Self {
            name,
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (key, text) in messages {
            check_name(key)?;
            if text.is_empty() {
                return Err(CatalogError::EmptyMessage {
                    section: name.to_string(),
                    key: key.to_string(),
                });
            }
            match section.index.entry(key) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateKey {
                        section: name.to_string(),
                        key: key.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(section.entries.len());
                    section.entries.push((key, text));
                }
            }
        }
        Ok(section)
    }

    /// Section name, e.g. `"validations"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a message by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// `(key, text)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(key, _)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only set of message strings addressed by `(section, key)`.
///
/// # Example
///
/// ```
/// use storefront_messages::catalog::{Missing, MessageCatalog};
///
/// let catalog = MessageCatalog::builtin();
/// assert_eq!(
///     catalog.get("shoppingCart", "emptyAlert"),
///     Ok("Your cart is empty.")
/// );
///
/// let err = catalog.get("shoppingCart", "doesNotExist").unwrap_err();
/// assert_eq!(err.kind, Missing::Key);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    sections: Vec<Section>,
    index: HashMap<&'static str, usize>,
}

impl MessageCatalog {
    /// Build a catalog from `(section, [(key, text)])` data.
    ///
    /// Declaration order is kept for iteration and export.
    pub fn from_sections<I, M>(sections: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'static str, M)>,
        M: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut catalog = Self {
            sections: Vec::new(),
            index: HashMap::new(),
        };
        for (name, messages) in sections {
            check_name(name).inspect_err(|err| {
                tracing::warn!(section = name, error = %err, "rejecting catalog section");
            })?;
            if catalog.index.contains_key(name) {
                tracing::warn!(section = name, "rejecting duplicate catalog section");
                return Err(CatalogError::DuplicateSection {
                    section: name.to_string(),
                });
            }
            let section = Section::build(name, messages).inspect_err(|err| {
                tracing::warn!(section = name, error = %err, "rejecting catalog section");
            })?;
            catalog.index.insert(name, catalog.sections.len());
            catalog.sections.push(section);
        }
        tracing::debug!(
            sections = catalog.sections.len(),
            messages = catalog.message_count(),
            "message catalog built"
        );
        Ok(catalog)
    }

    /// The process-wide catalog of built-in storefront messages.
    ///
    /// Built once on first access from [`Message::ALL`].
    #[must_use]
    pub fn builtin() -> &'static MessageCatalog {
        static BUILTIN: OnceLock<MessageCatalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin_catalog)
    }

    /// Look up a message by exact section name and key.
    pub fn get(&self, section: &str, key: &str) -> Result<&'static str, MissingKeyError> {
        let Some(found) = self.find_section(section) else {
            tracing::trace!(section, key, "message section not found");
            return Err(MissingKeyError::new(section, key, Missing::Section));
        };
        found.get(key).ok_or_else(|| {
            tracing::trace!(section, key, "message key not found");
            MissingKeyError::new(section, key, Missing::Key)
        })
    }

    pub fn get_path(&self, path: &MessagePath) -> Result<&'static str, MissingKeyError> {
        self.get(path.section(), path.key())
    }

    /// Look up a built-in message by its typed identifier.
    ///
    /// Fails only for catalogs that do not carry the built-in data.
    pub fn get_message(&self, message: Message) -> Result<&'static str, MissingKeyError> {
        self.get(message.section().name(), message.key())
    }

    /// Look up a whole section.
    ///
    /// The error carries an empty key, as no message was requested.
    pub fn section(&self, name: &str) -> Result<&Section, MissingKeyError> {
        self.find_section(name).ok_or_else(|| {
            tracing::trace!(section = name, "message section not found");
            MissingKeyError::new(name, "", Missing::Section)
        })
    }

    fn find_section(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&i| &self.sections[i])
    }

    #[must_use]
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.find_section(section)
            .is_some_and(|found| found.contains(key))
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Every message path, in declaration order.
    #[must_use]
    pub fn paths(&self) -> Vec<MessagePath> {
        self.sections
            .iter()
            .flat_map(|s| s.keys().map(move |key| MessagePath::new(s.name(), key)))
            .collect()
    }

    /// Total number of messages across all sections.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Paths from `referenced` that do not resolve here.
    ///
    /// Returns them sorted and deduplicated.
    #[must_use]
    pub fn missing_paths(&self, referenced: &[MessagePath]) -> Vec<MessagePath> {
        let mut missing: Vec<MessagePath> = referenced
            .iter()
            .filter(|path| !self.contains(path.section(), path.key()))
            .cloned()
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

/// Assemble the built-in catalog from `Message`.
///
/// `Message` keeps keys unique per section and texts non-empty, so the
/// error arm is unreachable in practice. It degrades to an empty catalog
/// (every lookup misses) rather than panicking.
fn builtin_catalog() -> MessageCatalog {
    let data = SectionId::ALL.map(|id| (id.name(), id.messages().map(|m| (m.key(), m.text()))));
    match MessageCatalog::from_sections(data) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "built-in message data is inconsistent");
            MessageCatalog {
                sections: Vec::new(),
                index: HashMap::new(),
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Section {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, text) in self.iter() {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MessageCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
