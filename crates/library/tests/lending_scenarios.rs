//! Black-box lending scenarios against the public library API.

use bookkeeping_core::{AggregateRoot, DomainError};
use bookkeeping_library::{BookData, Library, Member, MemberData};

fn central_library() -> Library {
    let mut library = Library::new("Central Library");
    library
        .add_book(BookData::new("978-1", "Clean Code", "Robert C. Martin").with_copies(2))
        .unwrap();
    library
        .add_book(BookData::new("978-2", "You Don't Know JS", "Kyle Simpson").with_copies(1))
        .unwrap();
    library
        .add_member(Member::new(MemberData {
            id: "m1".into(),
            name: "Alice".to_string(),
            max_borrow: None,
        }))
        .unwrap();
    library
        .add_member(Member::with_quota("m2", "Bob", 2))
        .unwrap();
    library
}

#[test]
fn two_members_share_two_copies() {
    let mut library = central_library();

    assert_eq!(library.borrow_book("m1", "978-1"), Ok(true));
    assert_eq!(library.borrow_book("m2", "978-1"), Ok(true));
    assert_eq!(library.find_book("978-1").unwrap().copies(), 0);

    library.return_book("m2", "978-1").unwrap();
    assert_eq!(library.borrow_book("m2", "978-1"), Ok(true));

    let rendered: Vec<String> = library.list_members().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Alice (id: m1) - borrowed: 1/3",
            "Bob (id: m2) - borrowed: 1/2",
        ]
    );
}

#[test]
fn listing_is_ordered_and_renders_copies() {
    let library = central_library();
    let rendered: Vec<String> = library.list_books().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Clean Code by Robert C. Martin (ISBN: 978-1) — copies: 2",
            "You Don't Know JS by Kyle Simpson (ISBN: 978-2) — copies: 1",
        ]
    );
    assert_eq!(library.name(), "Central Library");
    assert_eq!(library.version(), 4);
}

#[test]
fn hard_and_soft_failures_are_distinct() {
    let mut library = central_library();

    assert_eq!(library.borrow_book("m1", "978-2"), Ok(true));
    assert_eq!(library.borrow_book("m2", "978-2"), Ok(false));
    assert!(matches!(
        library.return_book("m2", "978-2"),
        Err(DomainError::NotBorrowed { .. })
    ));
    assert!(matches!(
        library.borrow_book("m3", "978-2"),
        Err(DomainError::MemberNotFound(_))
    ));
}

#[test]
fn snapshots_serialize_to_json() {
    let mut library = central_library();
    library.borrow_book("m1", "978-2").unwrap();

    let members = serde_json::to_value(library.list_members()).unwrap();
    assert_eq!(members[0]["id"], "m1");
    assert_eq!(members[0]["borrowed"][0], "978-2");

    let books = serde_json::to_value(library.list_books()).unwrap();
    assert_eq!(books[1]["copies"], 0);
}
