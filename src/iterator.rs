use std::iter::FusedIterator;

use crate::book::Book;

/// Cursor over a sequence of books
///
/// Walks the slice front to back exactly once. There is no reset: once
/// [`has_next`](Self::has_next) turns false it stays false.
#[derive(Debug, Clone)]
pub struct BookIterator<'a> {
    /// The books being walked
    books: &'a [Book],
    /// Index of the next book to hand out
    position: usize,
}

impl<'a> BookIterator<'a> {
    /// Start a traversal at the first book
    #[must_use]
    pub fn new(books: &'a [Book]) -> Self {
        Self { books, position: 0 }
    }

    /// Whether another book remains
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.books.len()
    }

    /// Hand out the current book and advance the cursor
    pub fn next_book(&mut self) -> Option<&'a Book> {
        let book = self.books.get(self.position)?;
        self.position = self.position.saturating_add(1);
        Some(book)
    }

    /// Number of books not yet visited
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.books.len().saturating_sub(self.position)
    }
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_book()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BookIterator<'_> {}

impl FusedIterator for BookIterator<'_> {}
