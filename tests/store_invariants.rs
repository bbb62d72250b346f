//! Store invariants exercised through the public crate API.
//!
//! - at most one book per identifier
//! - insertion order preserved by list, update, and delete
//! - failed operations leave the store unmodified

use bookrack::store::{Book, BookStore, StoreError};

fn book(id: &str) -> Book {
    Book::new(id, format!("author-{}", id), format!("name-{}", id))
}

#[test]
fn test_identifier_uniqueness_holds_across_operations() {
    let store = BookStore::new();

    store.add(book("1")).unwrap();
    assert_eq!(
        store.add(Book::new("1", "other", "other")),
        Err(StoreError::DuplicateId("1".to_string()))
    );

    // Delete frees the identifier for reuse
    store.delete("1").unwrap();
    store.add(book("1")).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_failed_update_is_atomic() {
    let store = BookStore::new();
    store.add(book("1")).unwrap();
    store.add(book("2")).unwrap();

    let before = store.list().unwrap();
    assert!(store.update(book("3")).is_err());
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn test_failed_delete_is_atomic() {
    let store = BookStore::new();
    store.add(book("1")).unwrap();

    let before = store.list().unwrap();
    assert!(store.delete("2").is_err());
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn test_order_preserved_through_interleaved_mutations() {
    let store = BookStore::new();
    for id in ["a", "b", "c", "d"] {
        store.add(book(id)).unwrap();
    }

    store.delete("b").unwrap();
    store.update(Book::new("c", "changed", "changed")).unwrap();
    store.add(book("e")).unwrap();

    let ids: Vec<_> = store.list().unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["a", "c", "d", "e"]);
}

#[test]
fn test_list_returns_snapshot_not_alias() {
    let store = BookStore::new();
    store.add(book("1")).unwrap();

    let mut snapshot = store.list().unwrap();
    snapshot.clear();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_update_does_not_change_identity() {
    let store = BookStore::new();
    store.add(book("1")).unwrap();

    store.update(Book::new("1", "new author", "new name")).unwrap();

    let found = store.find_by_id("1").unwrap().unwrap();
    assert_eq!(found.id, "1");
    assert_eq!(found.author, "new author");
    assert_eq!(found.name, "new name");
}
