use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use bookkeeping_core::{DomainError, DomainResult, Entity, Isbn, MemberId};

/// How many books a member may hold at once when no quota is given.
pub const DEFAULT_MAX_BORROW: usize = 3;

/// Input for registering a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    pub id: MemberId,
    pub name: String,
    /// Defaults to [`DEFAULT_MAX_BORROW`].
    #[serde(default)]
    pub max_borrow: Option<usize>,
}

/// A library member and the set of ISBNs it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed: BTreeSet<Isbn>,
    max_borrow: usize,
}

impl Member {
    pub fn new(data: MemberData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            borrowed: BTreeSet::new(),
            max_borrow: data.max_borrow.unwrap_or(DEFAULT_MAX_BORROW),
        }
    }

    pub fn with_quota(id: impl Into<MemberId>, name: impl Into<String>, max_borrow: usize) -> Self {
        Self::new(MemberData {
            id: id.into(),
            name: name.into(),
            max_borrow: Some(max_borrow),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_borrow(&self) -> usize {
        self.max_borrow
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// ISBNs currently held, in ascending order.
    pub fn borrowed(&self) -> impl Iterator<Item = &Isbn> {
        self.borrowed.iter()
    }

    pub fn can_borrow(&self) -> bool {
        self.borrowed.len() < self.max_borrow
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed.contains(isbn)
    }

    pub fn borrow_book(&mut self, isbn: Isbn) -> DomainResult<()> {
        if !self.can_borrow() {
            return Err(DomainError::QuotaExceeded {
                member: self.name.clone(),
                max_borrow: self.max_borrow,
            });
        }
        self.borrowed.insert(isbn);
        Ok(())
    }

    /// Drop `isbn` from the borrowed set; `false` if it was not there.
    pub fn return_book(&mut self, isbn: &str) -> bool {
        self.borrowed.remove(isbn)
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Member {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (id: {}) - borrowed: {}/{}",
            self.name,
            self.id,
            self.borrowed.len(),
            self.max_borrow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quota_is_three() {
        let member = Member::new(MemberData {
            id: "m1".into(),
            name: "Alice".to_string(),
            max_borrow: None,
        });
        assert_eq!(member.max_borrow(), DEFAULT_MAX_BORROW);
        assert!(member.can_borrow());
    }

    #[test]
    fn borrow_past_quota_fails() {
        let mut member = Member::with_quota("m2", "Bob", 1);
        member.borrow_book("978-1".into()).unwrap();
        assert!(!member.can_borrow());

        let err = member.borrow_book("978-2".into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::QuotaExceeded {
                member: "Bob".to_string(),
                max_borrow: 1
            }
        );
        assert_eq!(member.borrowed_count(), 1);
    }

    #[test]
    fn borrowed_set_holds_unique_isbns() {
        let mut member = Member::with_quota("m1", "Alice", 3);
        member.borrow_book("978-1".into()).unwrap();
        member.borrow_book("978-1".into()).unwrap();
        assert_eq!(member.borrowed_count(), 1);
        assert!(member.has_borrowed("978-1"));

        assert!(member.return_book("978-1"));
        assert!(!member.return_book("978-1"));
        assert_eq!(member.borrowed_count(), 0);
    }

    #[test]
    fn identity_survives_state_changes() {
        let before = Member::with_quota("m1", "Alice", 3);
        let mut after = before.clone();
        after.borrow_book("978-1".into()).unwrap();

        assert_ne!(before, after);
        assert_eq!(before.id(), after.id());
    }

    #[test]
    fn member_data_rejects_blank_id() {
        let err = serde_json::from_str::<MemberData>(r#"{"id":" ","name":"Nobody"}"#).unwrap_err();
        assert!(err.to_string().contains("MemberId"));
    }

    #[test]
    fn display_shows_quota_usage() {
        let mut member = Member::with_quota("m2", "Bob", 2);
        member.borrow_book("978-1".into()).unwrap();
        assert_eq!(member.to_string(), "Bob (id: m2) - borrowed: 1/2");
    }
}
