//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a caller-input violation. Expected negative outcomes
/// (no copies left, quota reached) are not errors; they surface as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A monetary amount or a copy count was zero, negative, or out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A savings withdrawal asked for more than the balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// A checking withdrawal would take the balance below the overdraft floor.
    #[error("exceeded overdraft limit")]
    OverdraftExceeded,

    /// A member with the same id is already registered.
    #[error("member with id {0} already exists")]
    DuplicateMember(String),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("book not found: {0}")]
    BookNotFound(String),

    /// The member tried to return a book it does not hold.
    #[error("member {member_id} did not borrow {isbn}")]
    NotBorrowed { member_id: String, isbn: String },

    /// The member already holds as many books as its quota allows.
    #[error("{member} has reached borrow limit of {max_borrow}")]
    QuotaExceeded { member: String, max_borrow: usize },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A domain invariant was violated (e.g. operation unsupported by a variant).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn duplicate_member(id: impl Into<String>) -> Self {
        Self::DuplicateMember(id.into())
    }

    pub fn member_not_found(id: impl Into<String>) -> Self {
        Self::MemberNotFound(id.into())
    }

    pub fn book_not_found(isbn: impl Into<String>) -> Self {
        Self::BookNotFound(isbn.into())
    }

    pub fn not_borrowed(member_id: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self::NotBorrowed {
            member_id: member_id.into(),
            isbn: isbn.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
