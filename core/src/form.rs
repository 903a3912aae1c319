//! Client-side validation of user-entered book fields.
//!
//! Everything here runs before a request is built. A form that fails
//! validation yields `None` and the caller must not dispatch anything.

use chrono::Datelike;

use crate::types::{Book, BookPatch, NewBook, DEFAULT_GENRE};

/// Source of the current calendar year, used when the year field is unusable.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock stuck on one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Raw text of the add/edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
}

impl BookForm {
    /// Form prefilled with an existing book, for editing.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            genre: book.genre.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `None` when title or author is blank after trimming.
    pub fn to_new_book(&self, current_year: i32) -> Option<NewBook> {
        let title = required(&self.title)?;
        let author = required(&self.author)?;
        Some(NewBook {
            title,
            author,
            year: parse_year(&self.year, current_year),
            genre: genre_or_default(&self.genre),
        })
    }

    /// Same rules as `to_new_book`, sent as a patch carrying every field.
    pub fn to_patch(&self, current_year: i32) -> Option<BookPatch> {
        let book = self.to_new_book(current_year)?;
        Some(BookPatch {
            title: Some(book.title),
            author: Some(book.author),
            year: Some(book.year),
            genre: Some(book.genre),
        })
    }
}

impl BookPatch {
    /// Trimmed copy of the patch, or `None` if it would blank out the title or
    /// the author. Absent fields stay absent.
    pub fn validated(&self) -> Option<BookPatch> {
        let title = match &self.title {
            Some(title) => Some(required(title)?),
            None => None,
        };
        let author = match &self.author {
            Some(author) => Some(required(author)?),
            None => None,
        };
        Some(BookPatch {
            title,
            author,
            year: self.year,
            genre: self.genre.as_deref().map(genre_or_default),
        })
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_year(value: &str, current_year: i32) -> i32 {
    value.trim().parse().unwrap_or(current_year)
}

fn genre_or_default(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        DEFAULT_GENRE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, author: &str, year: &str, genre: &str) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let book = form("  Dune ", " Frank Herbert", "1965", " SciFi ")
            .to_new_book(2026)
            .unwrap();
        assert_eq!(
            book,
            NewBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: 1965,
                genre: "SciFi".to_string(),
            }
        );
    }

    #[test]
    fn blank_title_or_author_is_rejected() {
        assert!(form("", "B", "2020", "").to_new_book(2026).is_none());
        assert!(form("   ", "B", "2020", "").to_new_book(2026).is_none());
        assert!(form("A", "", "2020", "").to_new_book(2026).is_none());
        assert!(form("A", "\t\n", "2020", "").to_new_book(2026).is_none());
    }

    #[test]
    fn unparsable_year_falls_back_to_current_year() {
        assert_eq!(form("A", "B", "", "").to_new_book(2026).unwrap().year, 2026);
        assert_eq!(form("A", "B", "soon", "").to_new_book(2026).unwrap().year, 2026);
        assert_eq!(form("A", "B", " 1999 ", "").to_new_book(2026).unwrap().year, 1999);
    }

    #[test]
    fn blank_genre_falls_back_to_default() {
        assert_eq!(form("A", "B", "2020", "  ").to_new_book(2026).unwrap().genre, DEFAULT_GENRE);
    }

    #[test]
    fn to_patch_carries_every_field() {
        let patch = form("A", "B", "2020", "Fiction").to_patch(2026).unwrap();
        assert_eq!(patch.title.as_deref(), Some("A"));
        assert_eq!(patch.author.as_deref(), Some("B"));
        assert_eq!(patch.year, Some(2020));
        assert_eq!(patch.genre.as_deref(), Some("Fiction"));
    }

    #[test]
    fn from_book_round_trips_through_to_patch() {
        let book = Book {
            id: 1,
            title: "A".to_string(),
            author: "B".to_string(),
            year: 2020,
            genre: "Fiction".to_string(),
        };
        let patch = BookForm::from_book(&book).to_patch(1900).unwrap();
        assert_eq!(patch.year, Some(2020));
        assert_eq!(patch.genre.as_deref(), Some("Fiction"));
    }

    #[test]
    fn clear_empties_every_field() {
        let mut f = form("A", "B", "2020", "Fiction");
        f.clear();
        assert_eq!(f, BookForm::default());
    }

    #[test]
    fn patch_with_blank_title_is_rejected() {
        let patch = BookPatch {
            title: Some(String::new()),
            ..BookPatch::default()
        };
        assert!(patch.validated().is_none());
    }

    #[test]
    fn partial_patch_keeps_absent_fields_absent() {
        let patch = BookPatch {
            author: Some(" Eliot ".to_string()),
            genre: Some(" ".to_string()),
            ..BookPatch::default()
        };
        let validated = patch.validated().unwrap();
        assert!(validated.title.is_none());
        assert_eq!(validated.author.as_deref(), Some("Eliot"));
        assert!(validated.year.is_none());
        assert_eq!(validated.genre.as_deref(), Some(DEFAULT_GENRE));
    }

    #[test]
    fn fixed_clock_reports_its_year() {
        assert_eq!(FixedClock(2025).current_year(), 2025);
        assert!(SystemClock.current_year() >= 2024);
    }
}
