use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::BookEvent;

/// Represents the possible states of a library book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookState {
    /// Book is on the shelf
    #[default]
    Available,
    /// Book is out with a member
    Borrowed,
    /// Book is held for a member
    Reserved,
}

/// Why an event left a book where it was
///
/// A refusal is an ordinary outcome, not a failure of the call: the book
/// keeps its state and the attempt is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Deserialize, Serialize)]
pub enum Refusal {
    /// Premium book, non-premium member
    #[error("is a premium book. Only premium members can borrow it")]
    PremiumRequired,
    /// Returning a book that is already on the shelf
    #[error("is already available")]
    AlreadyAvailable,
    /// Borrowing a book someone else has
    #[error("is currently borrowed")]
    CurrentlyBorrowed,
    /// Reserving a book someone else has
    #[error("is currently borrowed and cannot be reserved")]
    BorrowedCannotReserve,
    /// Borrowing a book that is on hold
    #[error("is reserved and cannot be borrowed")]
    ReservedCannotBorrow,
    /// Reserving a book that is already on hold
    #[error("is already reserved")]
    AlreadyReserved,
}

impl BookState {
    /// Every state, in declaration order
    pub const ALL: [Self; 3] = [Self::Available, Self::Borrowed, Self::Reserved];

    /// Compute the state that `event` leads to from this one.
    ///
    /// This is the whole transition table. The premium gate is only consulted
    /// when an available book is borrowed; reserving never checks it.
    ///
    /// # Errors
    ///
    /// Returns the [`Refusal`] when the event does not move the book. The
    /// caller is expected to report it, not propagate it.
    pub fn next(self, event: &BookEvent, premium_book: bool) -> Result<Self, Refusal> {
        match (self, event) {
            (Self::Available, BookEvent::Borrow(user)) => {
                if user.is_premium() || !premium_book {
                    Ok(Self::Borrowed)
                } else {
                    Err(Refusal::PremiumRequired)
                }
            }
            (Self::Available, BookEvent::Return) => Err(Refusal::AlreadyAvailable),
            (Self::Available, BookEvent::Reserve(_)) => Ok(Self::Reserved),
            (Self::Borrowed, BookEvent::Borrow(_)) => Err(Refusal::CurrentlyBorrowed),
            (Self::Borrowed | Self::Reserved, BookEvent::Return) => Ok(Self::Available),
            (Self::Borrowed, BookEvent::Reserve(_)) => Err(Refusal::BorrowedCannotReserve),
            (Self::Reserved, BookEvent::Borrow(_)) => Err(Refusal::ReservedCannotBorrow),
            (Self::Reserved, BookEvent::Reserve(_)) => Err(Refusal::AlreadyReserved),
        }
    }

    /// Get a human-readable description of the state
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Available => "Book is available for borrowing",
            Self::Borrowed => "Book is borrowed by a member",
            Self::Reserved => "Book is reserved for a member",
        }
    }
}

impl fmt::Display for BookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
            Self::Reserved => "Reserved",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{BookState, Refusal};
    use crate::{events::BookEvent, user::User};

    fn regular() -> User {
        User::regular("Naldo")
    }

    fn premium() -> User {
        User::premium("Sam")
    }

    #[test]
    fn test_default_is_available() {
        assert_eq!(BookState::default(), BookState::Available);
    }

    #[test]
    fn test_borrow_available_applies_premium_gate() {
        let state = BookState::Available;

        assert_eq!(state.next(&BookEvent::Borrow(regular()), false), Ok(BookState::Borrowed));
        assert_eq!(state.next(&BookEvent::Borrow(premium()), false), Ok(BookState::Borrowed));
        assert_eq!(state.next(&BookEvent::Borrow(premium()), true), Ok(BookState::Borrowed));
        assert_eq!(
            state.next(&BookEvent::Borrow(regular()), true),
            Err(Refusal::PremiumRequired)
        );
    }

    #[test]
    fn test_borrow_refused_when_not_available() {
        for user in [regular(), premium()] {
            for premium_book in [false, true] {
                let event = BookEvent::Borrow(user.clone());
                assert_eq!(
                    BookState::Borrowed.next(&event, premium_book),
                    Err(Refusal::CurrentlyBorrowed)
                );
                assert_eq!(
                    BookState::Reserved.next(&event, premium_book),
                    Err(Refusal::ReservedCannotBorrow)
                );
            }
        }
    }

    #[test]
    fn test_return() {
        for premium_book in [false, true] {
            assert_eq!(
                BookState::Borrowed.next(&BookEvent::Return, premium_book),
                Ok(BookState::Available)
            );
            assert_eq!(
                BookState::Reserved.next(&BookEvent::Return, premium_book),
                Ok(BookState::Available)
            );
            assert_eq!(
                BookState::Available.next(&BookEvent::Return, premium_book),
                Err(Refusal::AlreadyAvailable)
            );
        }
    }

    #[test]
    fn test_reserve_skips_premium_gate() {
        // A regular member can put a premium book on hold.
        assert_eq!(
            BookState::Available.next(&BookEvent::Reserve(regular()), true),
            Ok(BookState::Reserved)
        );
        assert_eq!(
            BookState::Borrowed.next(&BookEvent::Reserve(premium()), false),
            Err(Refusal::BorrowedCannotReserve)
        );
        assert_eq!(
            BookState::Reserved.next(&BookEvent::Reserve(regular()), false),
            Err(Refusal::AlreadyReserved)
        );
    }

    #[test]
    fn test_event_user() {
        assert_eq!(BookEvent::Borrow(regular()).user().map(User::name), Some("Naldo"));
        assert_eq!(BookEvent::Reserve(premium()).user().map(User::is_premium), Some(true));
        assert!(BookEvent::Return.user().is_none());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions: Vec<&str> =
            BookState::ALL.into_iter().map(BookState::description).collect();
        assert_eq!(
            descriptions,
            [
                "Book is available for borrowing",
                "Book is borrowed by a member",
                "Book is reserved for a member"
            ]
        );
    }

    #[test]
    fn test_refusal_messages() {
        assert_eq!(
            Refusal::PremiumRequired.to_string(),
            "is a premium book. Only premium members can borrow it"
        );
        assert_eq!(Refusal::AlreadyReserved.to_string(), "is already reserved");
    }
}
