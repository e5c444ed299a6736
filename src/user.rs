use std::fmt;

use serde::{Deserialize, Serialize};

/// A library member
///
/// Members are identified by name only; the premium flag decides whether
/// they may borrow premium books.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct User {
    /// Display name of the member
    name: String,
    /// Whether the member holds a premium membership
    premium: bool,
}

impl User {
    /// Create a member with an explicit premium flag
    #[must_use]
    pub fn new(name: impl Into<String>, premium: bool) -> Self {
        Self { name: name.into(), premium }
    }

    /// Create a regular (non-premium) member
    #[must_use]
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Create a premium member
    #[must_use]
    pub fn premium(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// The member's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the member may borrow premium books
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
