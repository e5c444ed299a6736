//! Book lifecycle state machine for a small lending library.
//!
//! Books move between [`BookState::Available`], [`BookState::Borrowed`] and
//! [`BookState::Reserved`] as members borrow, return and reserve them. A
//! [`Catalog`] owns the books and reports every attempt as a [`Notice`];
//! a [`LibraryFacade`] builds that catalog once and forwards to it.

pub mod book;
pub mod book_state;
pub mod catalog;
pub mod error;
pub mod events;
pub mod facade;
pub mod iterator;
pub mod notice;
pub mod observers;
pub mod report;
pub mod service;
pub mod user;

pub use book::{Book, BookId};
pub use book_state::{BookState, Refusal};
pub use catalog::{Catalog, CatalogConfig};
pub use error::LibraryError;
pub use events::BookEvent;
pub use facade::LibraryFacade;
pub use iterator::BookIterator;
pub use notice::{Notice, Outcome, StateTransition};
pub use observers::{CatalogObserver, TransitionLogger};
pub use report::Report;
pub use service::LibraryService;
pub use user::User;
