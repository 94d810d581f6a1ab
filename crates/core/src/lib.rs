//! `bookkeeping-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the ledger and
//! library modules (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountNumber, Isbn, MemberId};
