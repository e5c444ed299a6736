use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Events that can cause a book state transition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookEvent {
    /// A member asks to take the book home
    Borrow(User),
    /// The book comes back to the shelf
    Return,
    /// A member asks to hold the book
    Reserve(User),
}

impl BookEvent {
    /// The member acting, if the event has one
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Borrow(user) | Self::Reserve(user) => Some(user),
            Self::Return => None,
        }
    }

    /// Short verb naming the event, without the member
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Borrow(_) => "borrow",
            Self::Return => "return",
            Self::Reserve(_) => "reserve",
        }
    }
}

impl fmt::Display for BookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow(user) => write!(f, "Borrow({user})"),
            Self::Return => f.write_str("Return"),
            Self::Reserve(user) => write!(f, "Reserve({user})"),
        }
    }
}
