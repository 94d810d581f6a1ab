//! Lending walkthrough: two members competing for a limited shelf.

use anyhow::Context;

use bookkeeping_library::{BookData, Library, Member, MemberData};

const CATALOGUE: &str = r#"[
    { "isbn": "978-1", "title": "Clean Code", "author": "Robert C. Martin", "copies": 2 },
    { "isbn": "978-2", "title": "You Don't Know JS", "author": "Kyle Simpson" }
]"#;

const MEMBERS: &str = r#"[
    { "id": "m1", "name": "Alice" },
    { "id": "m2", "name": "Bob", "max_borrow": 2 }
]"#;

pub fn run(name: &str) -> anyhow::Result<()> {
    let mut library = Library::new(name);

    let books: Vec<BookData> = serde_json::from_str(CATALOGUE).context("parsing catalogue")?;
    for book in books {
        library.add_book(book)?;
    }
    let members: Vec<MemberData> = serde_json::from_str(MEMBERS).context("parsing members")?;
    for member in members {
        library.add_member(Member::new(member))?;
    }

    print_state(&library, "Initial")?;

    println!("\nBorrowing attempts:");
    println!("Alice borrows 978-1: {}", library.borrow_book("m1", "978-1")?);
    println!("Bob borrows 978-1: {}", library.borrow_book("m2", "978-1")?);
    println!("Alice borrows 978-2: {}", library.borrow_book("m1", "978-2")?);
    println!("Bob tries 978-2: {}", library.borrow_book("m2", "978-2")?);

    println!("\nReturn:");
    library.return_book("m1", "978-2")?;
    println!("Bob tries 978-2 again: {}", library.borrow_book("m2", "978-2")?);

    print_state(&library, "Final")?;

    tracing::info!(library = library.name(), "library demo finished");
    Ok(())
}

fn print_state(library: &Library, label: &str) -> anyhow::Result<()> {
    println!("\n{label} books:");
    for book in library.list_books() {
        println!("{book}");
    }

    println!("\n{label} members:");
    for member in library.list_members() {
        println!("{member}");
    }

    tracing::debug!(
        books = %serde_json::to_string(&library.list_books())?,
        "library snapshot"
    );
    Ok(())
}
