//! Typed identifiers for the built-in storefront messages.
//!
//! `Message` is the single source of truth for the built-in catalog: every
//! variant names its section, its key and its literal text. The string-keyed
//! [`MessageCatalog`](crate::catalog::MessageCatalog) is derived from
//! [`Message::ALL`], so the two can never disagree.

use std::fmt;

use crate::path::MessagePath;

/// A section of the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// Form validation messages.
    Validations,
    /// Shopping-cart labels.
    ShoppingCart,
}

impl SectionId {
    /// All sections, in declaration order.
    pub const ALL: [SectionId; 2] = [SectionId::Validations, SectionId::ShoppingCart];

    /// The section's name as it appears in the exported object.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validations => "validations",
            Self::ShoppingCart => "shoppingCart",
        }
    }

    /// Messages belonging to this section, in declaration order.
    pub fn messages(self) -> impl Iterator<Item = Message> {
        Message::ALL
            .into_iter()
            .filter(move |message| message.section() == self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Message {
    /// `validations.sizeRequired`
    SizeRequired,
    /// `validations.emailRequired`
    EmailRequired,
    /// `shoppingCart.continueShopping`
    ContinueShopping,
    /// `shoppingCart.emptyAlert`
    EmptyAlert,
}

impl Message {
    /// Every built-in message, grouped by section in declaration order.
    pub const ALL: [Message; 4] = [
        Message::SizeRequired,
        Message::EmailRequired,
        Message::ContinueShopping,
        Message::EmptyAlert,
    ];

    /// The section this message belongs to.
    #[must_use]
    pub const fn section(self) -> SectionId {
        match self {
            Self::SizeRequired | Self::EmailRequired => SectionId::Validations,
            Self::ContinueShopping | Self::EmptyAlert => SectionId::ShoppingCart,
        }
    }

    /// The message key within its section.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SizeRequired => "sizeRequired",
            Self::EmailRequired => "emailRequired",
            Self::ContinueShopping => "continueShopping",
            Self::EmptyAlert => "emptyAlert",
        }
    }

    /// The user-facing text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::SizeRequired => "Please choose an available size.",
            Self::EmailRequired => "Please enter an email address.",
            Self::ContinueShopping => "Continue Shopping",
            Self::EmptyAlert => "Your cart is empty.",
        }
    }

    /// The `section.key` address of this message.
    #[must_use]
    pub fn path(self) -> MessagePath {
        MessagePath::new(self.section().name(), self.key())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
