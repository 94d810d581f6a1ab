//! Entity trait: objects that keep their identity while their state changes.

/// An object identified by its key rather than by its current field values.
///
/// A book stays the same book while copies come and go; a member stays the
/// same member while its borrowed set changes.
pub trait Entity {
    /// Strongly-typed entity identifier (ordered, so it can key a `BTreeMap`).
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
