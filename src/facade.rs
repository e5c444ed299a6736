use std::{collections::VecDeque, fmt};

use tracing::info;

use crate::{
    book::{Book, BookId},
    catalog::{Catalog, CatalogConfig},
    error::LibraryError,
    notice::Notice,
    observers::CatalogObserver,
    service::LibraryService,
    user::User,
};

/// History reported before the catalog exists
static NO_HISTORY: VecDeque<Notice> = VecDeque::new();

/// Access point that builds its catalog at most once
///
/// [`LibraryFacade::new`] defers building until the first operation;
/// [`LibraryFacade::open`] builds straight away. Either way the catalog is
/// constructed a single time per facade and announces itself with
/// [`Notice::CatalogOpened`].
pub struct LibraryFacade {
    /// Settings used when the catalog is built
    config: CatalogConfig,
    /// The backing catalog, once built
    catalog: Option<Catalog>,
    /// Observers waiting for the catalog to exist
    pending_observers: Vec<Box<dyn CatalogObserver>>,
}

impl fmt::Debug for LibraryFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryFacade")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("pending_observers_count", &self.pending_observers.len())
            .finish()
    }
}

impl LibraryFacade {
    /// Create a facade whose catalog is built on first use
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self { config, catalog: None, pending_observers: Vec::new() }
    }

    /// Create a facade and build its catalog immediately
    #[must_use]
    pub fn open(config: CatalogConfig) -> Self {
        let mut facade = Self::new(config);
        facade.catalog();
        facade
    }

    /// Whether the catalog has been built
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.catalog.is_some()
    }

    /// Register an observer
    ///
    /// Observers registered before the catalog exists are attached when it is
    /// built, so they also see [`Notice::CatalogOpened`].
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        match &mut self.catalog {
            Some(catalog) => catalog.register_observer(observer),
            None => self.pending_observers.push(observer),
        }
    }

    /// The backing catalog, built if absent
    pub fn catalog(&mut self) -> &mut Catalog {
        let config = &self.config;
        let pending = &mut self.pending_observers;

        self.catalog.get_or_insert_with(|| {
            let mut catalog = Catalog::with_config(config);
            for observer in pending.drain(..) {
                catalog.register_observer(observer);
            }
            info!(max_history_size = config.max_history_size, "catalog constructed");
            catalog.emit(Notice::CatalogOpened);
            catalog
        })
    }

    /// Retained notices, or nothing if the catalog was never built
    #[must_use]
    pub fn history(&self) -> &VecDeque<Notice> {
        self.catalog.as_ref().map_or(&NO_HISTORY, Catalog::history)
    }

    /// Look up a book by handle without building the catalog
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.catalog.as_ref().and_then(|catalog| catalog.book(id))
    }
}

impl LibraryService for LibraryFacade {
    fn add_book(&mut self, book: Book) -> BookId {
        self.catalog().add_book(book)
    }

    fn borrow_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        self.catalog().borrow_book(id, user)
    }

    fn return_book(&mut self, id: BookId) -> Result<Notice, LibraryError> {
        self.catalog().return_book(id)
    }

    fn reserve_book(&mut self, id: BookId, user: &User) -> Result<Notice, LibraryError> {
        self.catalog().reserve_book(id, user)
    }

    fn list_books(&mut self) -> &[Book] {
        self.catalog().list_books()
    }
}
