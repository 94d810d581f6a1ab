//! Library module (books, members, lending).
//!
//! This crate contains the lending rules of a small library, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod book;
pub mod library;
pub mod member;

pub use book::{Book, BookData, DEFAULT_COPIES};
pub use library::Library;
pub use member::{DEFAULT_MAX_BORROW, Member, MemberData};
