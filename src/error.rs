use thiserror::Error;

use crate::book::BookId;

/// Errors raised by catalog operations
///
/// Refused borrows, returns and reservations are not errors; they are
/// reported through [`Notice`](crate::Notice). These variants cover callers
/// breaking a precondition and output that could not be written.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The id was not handed out by this catalog
    #[error("No book with id {0} in the catalog")]
    UnknownBook(BookId),

    /// A notice or report could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A report could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
