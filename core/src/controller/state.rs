use crate::types::{Book, BookId};

pub const LOAD_FAILED: &str = "Failed to load books";
pub const ADD_FAILED: &str = "Failed to add book";
pub const UPDATE_FAILED: &str = "Failed to update book";
pub const DELETE_FAILED: &str = "Failed to delete book";

/// In-memory mirror of the remote collection plus transient UI state.
///
/// `books` keeps server response order. `editing` refers to a book by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionState {
    pub books: Vec<Book>,
    /// True from construction until the first load resolves, and again while
    /// any later load is pending.
    pub loading: bool,
    /// Last user-facing failure message. Cleared when a new action starts.
    pub error: Option<String>,
    pub editing: Option<BookId>,
}

impl Default for CollectionState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            loading: true,
            error: None,
            editing: None,
        }
    }
}

/// What the collection area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionView<'a> {
    Loading,
    Empty,
    Books(&'a [Book]),
}

impl CollectionState {
    pub fn view(&self) -> CollectionView<'_> {
        if self.loading {
            CollectionView::Loading
        } else if self.books.is_empty() {
            CollectionView::Empty
        } else {
            CollectionView::Books(&self.books)
        }
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// The book currently being edited, if it is still in the collection.
    pub fn editing_book(&self) -> Option<&Book> {
        self.editing.and_then(|id| self.find(id))
    }
}
