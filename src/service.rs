use crate::{
    book::{Book, BookId},
    error::LibraryError,
    notice::Notice,
    user::User,
};

/// Operations shared by the catalog and the facade in front of it
///
/// Implementors route all three transitions through the same boundary;
/// callers never touch a book's state directly.
pub trait LibraryService {
    /// Append a book and return its handle
    fn add_book(&mut self, book: Book) -> BookId;

    /// Attempt to lend a book
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` for a foreign id
    fn borrow_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError>;

    /// Attempt to return a book
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` for a foreign id
    fn return_book(&mut self, id: BookId) -> Result<Notice, LibraryError>;

    /// Attempt to reserve a book
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::UnknownBook` for a foreign id
    fn reserve_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError>;

    /// All books, in insertion order
    fn list_books(&mut self) -> &[Book];
}
