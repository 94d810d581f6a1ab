//! Aggregate root trait for in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only entry point for mutating the entities it
/// owns. Callers never hold mutable references into its internals.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing count of successful state changes.
    ///
    /// Rejected operations (errors and soft failures) leave it untouched.
    fn version(&self) -> u64;
}
