#![forbid(unsafe_code)]

//! Static catalog of user-facing storefront strings.
//!
//! Messages are grouped into named sections (`validations`,
//! `shoppingCart`) and addressed by `(section, key)`. The catalog is built
//! once, never mutated, and lookups fail loudly on unknown paths instead of
//! inventing a default.
//!
//! The catalog renders to the `export default { ... }` module consumed by UI
//! code ([`export`]) and that text can be read back or have its values
//! rewritten line by line ([`source`]).

pub mod catalog;
pub mod export;
pub mod message;
pub mod path;
pub mod source;

pub use catalog::{CatalogError, MessageCatalog, Missing, MissingKeyError, Section};
pub use export::render_module;
#[cfg(feature = "serde")]
pub use export::to_json;
pub use message::{Message, SectionId};
pub use path::{MessagePath, PathParseError};
pub use source::{ModuleParseError, ParsedModule, ParsedSection, parse_module, rewrite_values};

/// Look up a message in the built-in catalog.
///
/// ```
/// assert_eq!(
///     storefront_messages::get("validations", "emailRequired"),
///     Ok("Please enter an email address.")
/// );
/// assert!(storefront_messages::get("doesNotExist", "anyKey").is_err());
/// ```
pub fn get(section: &str, key: &str) -> Result<&'static str, MissingKeyError> {
    MessageCatalog::builtin().get(section, key)
}
