use serde::{Deserialize, Serialize};

use bookkeeping_core::{DomainError, DomainResult, Entity, Isbn};

/// Copies a book record starts with (or gains) when none are given.
pub const DEFAULT_COPIES: u32 = 1;

/// Input for registering a book with a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookData {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    /// Defaults to [`DEFAULT_COPIES`].
    #[serde(default)]
    pub copies: Option<u32>,
}

impl BookData {
    pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            copies: None,
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = Some(copies);
        self
    }
}

/// A book record: one per ISBN, tracking how many copies are on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    author: String,
    copies: u32,
}

impl Book {
    pub fn new(data: BookData) -> Self {
        Self {
            isbn: data.isbn,
            title: data.title,
            author: data.author,
            copies: data.copies.unwrap_or(DEFAULT_COPIES),
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Copies currently available for lending.
    pub fn copies(&self) -> u32 {
        self.copies
    }

    pub fn add_copies(&mut self, n: u32) -> DomainResult<()> {
        if n == 0 {
            return Err(DomainError::invalid_amount("copies to add must be positive"));
        }
        self.copies = self
            .copies
            .checked_add(n)
            .ok_or_else(|| DomainError::invalid_amount("copy count would overflow"))?;
        Ok(())
    }

    /// Take one copy off the shelf. Returns `false` when none are left.
    pub fn borrow(&mut self) -> bool {
        if self.copies == 0 {
            return false;
        }
        self.copies -= 1;
        true
    }

    /// Put one copy back on the shelf.
    pub fn return_copy(&mut self) -> DomainResult<()> {
        self.add_copies(1)
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) — copies: {}",
            self.title, self.author, self.isbn, self.copies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_copy() {
        let book = Book::new(BookData::new("978-1", "Clean Code", "Robert C. Martin"));
        assert_eq!(book.copies(), 1);
    }

    #[test]
    fn borrow_never_goes_below_zero() {
        let mut book = Book::new(BookData::new("978-2", "YDKJS", "Kyle Simpson"));
        assert!(book.borrow());
        assert!(!book.borrow());
        assert_eq!(book.copies(), 0);

        book.return_copy().unwrap();
        assert_eq!(book.copies(), 1);
    }

    #[test]
    fn copy_count_never_wraps() {
        let mut book = Book::new(BookData::new("978-1", "t", "a").with_copies(u32::MAX));
        assert!(matches!(book.add_copies(1), Err(DomainError::InvalidAmount(_))));
        assert!(matches!(book.return_copy(), Err(DomainError::InvalidAmount(_))));
        assert_eq!(book.copies(), u32::MAX);
    }

    #[test]
    fn add_copies_requires_positive_count() {
        let mut book = Book::new(BookData::new("978-1", "t", "a").with_copies(2));
        assert!(matches!(book.add_copies(0), Err(DomainError::InvalidAmount(_))));
        book.add_copies(3).unwrap();
        assert_eq!(book.copies(), 5);
    }

    #[test]
    fn display_lists_copies() {
        let book = Book::new(BookData::new("978-1", "Clean Code", "Robert C. Martin").with_copies(2));
        assert_eq!(
            book.to_string(),
            "Clean Code by Robert C. Martin (ISBN: 978-1) — copies: 2"
        );
    }

    #[test]
    fn book_data_copies_are_optional_in_json() {
        let data: BookData =
            serde_json::from_str(r#"{"isbn":"978-3","title":"t","author":"a"}"#).unwrap();
        assert_eq!(data.copies, None);
        assert_eq!(Book::new(data).copies(), DEFAULT_COPIES);
    }
}
