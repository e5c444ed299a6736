use std::{collections::VecDeque, fmt};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    book::{Book, BookId},
    error::LibraryError,
    events::BookEvent,
    iterator::BookIterator,
    notice::{Notice, Outcome, StateTransition},
    observers::CatalogObserver,
    service::LibraryService,
    user::User,
};

/// Default number of notices a catalog retains
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// Settings applied when a catalog is built
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Maximum number of notices kept in the history; the oldest go first
    pub max_history_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { max_history_size: DEFAULT_MAX_HISTORY_SIZE }
    }
}

/// The library's collection of books
///
/// Books are kept in insertion order and never removed. Every borrow, return
/// and reserve goes through here so the attempt can be recorded and handed to
/// the registered observers.
pub struct Catalog {
    /// Books in insertion order
    books: Vec<Book>,
    /// Most recent notices, oldest first
    history: VecDeque<Notice>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Registered notice observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CatalogConfig::default())
    }

    /// Create an empty catalog
    #[must_use]
    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            books: Vec::new(),
            history: VecDeque::new(),
            max_history_size: config.max_history_size,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of every notice
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Append a book and return its handle
    pub fn add_book(&mut self, book: Book) -> BookId {
        let id = BookId::new(self.books.len());
        debug!(book = %id, title = book.title(), premium = book.is_premium(), "adding book");
        self.books.push(book);
        id
    }

    /// Attempt to lend a book to `user`
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` if `id` does not belong to this catalog
    pub fn borrow_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        self.process_event(id, BookEvent::Borrow(user.clone()))
    }

    /// Attempt to put a book back on the shelf
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` if `id` does not belong to this catalog
    pub fn return_book(&mut self, id: BookId) -> Result<Notice, LibraryError> {
        self.process_event(id, BookEvent::Return)
    }

    /// Attempt to hold a book for `user`
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` if `id` does not belong to this catalog
    pub fn reserve_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        self.process_event(id, BookEvent::Reserve(user.clone()))
    }

    /// Process an event against one book
    ///
    /// A refused event still succeeds: the returned notice carries
    /// [`Outcome::Refused`] and the book keeps its state.
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` if `id` does not belong to this catalog
    pub fn process_event(&mut self, id: BookId, event: BookEvent) -> Result<Notice, LibraryError> {
        let book = self.books.get_mut(id.index()).ok_or(LibraryError::UnknownBook(id))?;
        debug!(book = %id, title = book.title(), %event, "processing event");

        let (from, result) = book.apply(&event);
        let (to, outcome) = match result {
            Ok(to) => (to, Outcome::Applied),
            Err(refusal) => (from, Outcome::Refused(refusal)),
        };

        let notice = Notice::Transition(StateTransition {
            book: id,
            title: book.title().to_string(),
            event,
            from,
            to,
            outcome,
        });
        self.emit(notice.clone());

        Ok(notice)
    }

    /// Record a notice and hand it to every observer
    pub(crate) fn emit(&mut self, notice: Notice) {
        for observer in &self.observers {
            observer.on_notice(&notice);
        }

        self.history.push_back(notice);

        // Maintain history size limit
        while self.history.len() > self.max_history_size {
            self.history.pop_front();
        }
    }

    /// All books, in insertion order
    #[must_use]
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by handle
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// Walk the books in insertion order
    #[must_use]
    pub fn iter(&self) -> BookIterator<'_> {
        BookIterator::new(&self.books)
    }

    /// Number of books held
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether no book has been added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Retained notices, oldest first
    #[must_use]
    pub fn history(&self) -> &VecDeque<Notice> {
        &self.history
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl LibraryService for Catalog {
    fn add_book(&mut self, book: Book) -> BookId {
        Self::add_book(self, book)
    }

    fn borrow_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        Self::borrow_book(self, id, user)
    }

    fn return_book(&mut self, id: BookId) -> Result<Notice, LibraryError> {
        Self::return_book(self, id)
    }

    fn reserve_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        Self::reserve_book(self, id, user)
    }

    fn list_books(&mut self) -> &[Book] {
        Self::list_books(self)
    }
}
