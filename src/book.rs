use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    book_state::{BookState, Refusal},
    events::BookEvent,
};

/// Handle to a book held by a catalog
///
/// Ids are handed out by [`Catalog::add_book`](crate::Catalog::add_book) in
/// insertion order and stay valid for the lifetime of that catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct BookId(usize);

impl BookId {
    /// Wrap a position in the catalog
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the book in insertion order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A title on the library's shelves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title; several books may share one
    title: String,
    /// Only premium members may borrow it
    premium: bool,
    /// Current lifecycle state
    state: BookState,
}

impl Book {
    /// Create a book in the [`BookState::Available`] state
    #[must_use]
    pub fn new(title: impl Into<String>, premium: bool) -> Self {
        Self { title: title.into(), premium, state: BookState::Available }
    }

    /// Create a book any member may borrow
    #[must_use]
    pub fn regular(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    /// Create a book reserved to premium members
    #[must_use]
    pub fn premium(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    /// The book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether borrowing requires a premium membership
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium
    }

    /// The book's current state
    #[must_use]
    pub fn state(&self) -> BookState {
        self.state
    }

    /// Run `event` through the state machine and keep the result.
    ///
    /// Returns the state the book was in before, along with either the new
    /// state or the reason it did not move.
    pub(crate) fn apply(&mut self, event: &BookEvent) -> (BookState, Result<BookState, Refusal>) {
        let from = self.state;
        let result = from.next(event, self.premium);
        if let Ok(to) = result {
            self.state = to;
        }
        (from, result)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (State: {})", self.title, self.state)
    }
}
