//! The notification stream.
//!
//! Every borrow, return or reserve attempt yields exactly one [`Notice`],
//! whether the book moved or not. Building a catalog yields one more.

use std::fmt;

use serde::Serialize;

use crate::{
    book::BookId,
    book_state::{BookState, Refusal},
    error::LibraryError,
    events::BookEvent,
};

/// What became of a transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "refusal", rename_all = "snake_case")]
pub enum Outcome {
    /// The book moved to a new state
    Applied,
    /// The book stayed where it was
    Refused(Refusal),
}

/// Represents one transition attempt on a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTransition {
    /// Which book was targeted
    pub book: BookId,
    /// Title of the book at the time of the attempt
    pub title: String,
    /// The event that was attempted
    pub event: BookEvent,
    /// The state before the attempt
    pub from: BookState,
    /// The state after the attempt; equal to `from` when refused
    pub to: BookState,
    /// Whether the event was applied
    pub outcome: Outcome,
}

impl StateTransition {
    /// Whether the book changed state
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }
}

impl fmt::Display for StateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = &self.title;
        match (self.outcome, &self.event) {
            (Outcome::Refused(refusal), _) => write!(f, "'{title}' {refusal}."),
            (Outcome::Applied, BookEvent::Borrow(user)) => {
                write!(f, "'{title}' is now borrowed by {user}.")
            }
            (Outcome::Applied, BookEvent::Reserve(user)) => {
                write!(f, "'{title}' is now reserved by {user}.")
            }
            (Outcome::Applied, BookEvent::Return) if self.from == BookState::Reserved => {
                write!(f, "'{title}' is now available after being returned.")
            }
            (Outcome::Applied, BookEvent::Return) => {
                write!(f, "'{title}' has been returned and is now available.")
            }
        }
    }
}

/// One line of the library's event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// A catalog was constructed
    CatalogOpened,
    /// A borrow, return or reserve was attempted
    Transition(StateTransition),
}

impl Notice {
    /// The transition this notice reports, if any
    #[must_use]
    pub fn transition(&self) -> Option<&StateTransition> {
        match self {
            Self::Transition(transition) => Some(transition),
            Self::CatalogOpened => None,
        }
    }

    /// Whether this notice reports a refused attempt
    #[must_use]
    pub fn is_refused(&self) -> bool {
        self.transition().is_some_and(|t| !t.is_applied())
    }

    /// Encode the notice as a single JSON line
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::Serialization` if the notice cannot be encoded
    pub fn to_json_line(&self) -> Result<String, LibraryError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogOpened => f.write_str("Library initialized."),
            Self::Transition(transition) => fmt::Display::fmt(transition, f),
        }
    }
}
