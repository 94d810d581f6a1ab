use std::collections::BTreeMap;

use bookkeeping_core::{AggregateRoot, DomainError, DomainResult, Entity, Isbn, MemberId};

use crate::book::{Book, BookData, DEFAULT_COPIES};
use crate::member::Member;

/// Aggregate root: Library.
///
/// Owns every book record (by ISBN) and every member (by id). Lending goes
/// through the library so that shelf counts and members' borrowed sets move
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    books: BTreeMap<Isbn, Book>,
    members: BTreeMap<MemberId, Member>,
    version: u64,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: BTreeMap::new(),
            members: BTreeMap::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a book, or add copies to the record that already has its ISBN.
    pub fn add_book(&mut self, data: BookData) -> DomainResult<()> {
        if let Some(existing) = self.books.get_mut(data.isbn.as_str()) {
            existing.add_copies(data.copies.unwrap_or(DEFAULT_COPIES))?;
            tracing::debug!(isbn = %data.isbn, copies = existing.copies(), "copies added");
        } else {
            let book = Book::new(data);
            tracing::debug!(isbn = %book.isbn(), copies = book.copies(), "book added");
            self.books.insert(book.isbn().clone(), book);
        }
        self.version += 1;
        Ok(())
    }

    /// Register a member. Members join holding no books; lending only
    /// happens through [`Library::borrow_book`].
    pub fn add_member(&mut self, member: Member) -> DomainResult<()> {
        if self.members.contains_key(member.id()) {
            return Err(DomainError::duplicate_member(member.id().as_str()));
        }
        if member.borrowed_count() > 0 {
            return Err(DomainError::invariant(format!(
                "member {} cannot join while holding {} book(s)",
                member.id(),
                member.borrowed_count()
            )));
        }
        tracing::debug!(member_id = %member.id(), "member added");
        self.members.insert(member.id().clone(), member);
        self.version += 1;
        Ok(())
    }

    pub fn find_book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// Lend one copy of `isbn` to `member_id`.
    ///
    /// Returns `Ok(false)` without changing anything when the member is at its
    /// quota, already holds this ISBN, or no copy is left on the shelf.
    pub fn borrow_book(&mut self, member_id: &str, isbn: &str) -> DomainResult<bool> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| DomainError::member_not_found(member_id))?;
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| DomainError::book_not_found(isbn))?;

        if !member.can_borrow() {
            tracing::debug!(member_id, isbn, "borrow refused: quota reached");
            return Ok(false);
        }
        if member.has_borrowed(isbn) {
            tracing::debug!(member_id, isbn, "borrow refused: already held");
            return Ok(false);
        }
        if !book.borrow() {
            tracing::debug!(member_id, isbn, "borrow refused: no copies left");
            return Ok(false);
        }

        member.borrow_book(book.isbn().clone())?;
        self.version += 1;

        tracing::debug!(member_id, isbn, copies = book.copies(), "book borrowed");
        Ok(true)
    }

    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> DomainResult<()> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| DomainError::member_not_found(member_id))?;
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| DomainError::book_not_found(isbn))?;

        if !member.has_borrowed(isbn) {
            return Err(DomainError::not_borrowed(member_id, isbn));
        }
        book.return_copy()?;
        member.return_book(isbn);
        self.version += 1;

        tracing::debug!(member_id, isbn, copies = book.copies(), "book returned");
        Ok(())
    }

    /// Snapshot of every book record, ordered by ISBN.
    pub fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Snapshot of every member, ordered by id.
    pub fn list_members(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }
}

impl AggregateRoot for Library {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}
