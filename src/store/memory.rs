//! In-memory book store.
//!
//! A `RwLock` over an ordered `Vec` keeps concurrent handlers
//! linearizable: readers share the lock, every mutation takes it
//! exclusively. Insertion order is observable through `list()` and must
//! be preserved by every operation.

use std::sync::RwLock;

use super::book::Book;
use super::errors::{StoreError, StoreResult};

/// Ordered, identifier-unique collection of books
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a book by identifier (linear scan, first match)
    ///
    /// Absence is not an error; callers decide how to surface it.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    /// Snapshot of the current contents in insertion order
    pub fn list(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(books.clone())
    }

    /// Append a book; fails when the identifier is already taken
    pub fn add(&self, book: Book) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        if books.iter().any(|b| b.id == book.id) {
            return Err(StoreError::DuplicateId(book.id));
        }

        books.push(book);
        Ok(())
    }

    /// Replace the existing record with the same identifier, in place
    pub fn update(&self, book: Book) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        if let Some(existing) = books.iter_mut().find(|b| b.id == book.id) {
            *existing = book;
            Ok(())
        } else {
            Err(StoreError::NotFound(book.id))
        }
    }

    /// Remove the record with the given identifier
    ///
    /// Remaining records keep their relative order.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::LockPoisoned)?;

        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.read().map(|b| b.len()).unwrap_or(0)
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str) -> Book {
        Book::new(id, "author", "name")
    }

    #[test]
    fn test_add_then_find_round_trips() {
        let store = BookStore::new();
        let b = Book::new("1", "X", "Y");

        store.add(b.clone()).unwrap();

        let found = store.find_by_id("1").unwrap();
        assert_eq!(found, Some(b));
    }

    #[test]
    fn test_find_missing_is_none_not_error() {
        let store = BookStore::new();
        assert_eq!(store.find_by_id("nope").unwrap(), None);
    }

    #[test]
    fn test_duplicate_add_keeps_first_entry() {
        let store = BookStore::new();
        store.add(Book::new("1", "first", "first")).unwrap();

        let err = store.add(Book::new("1", "second", "second")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".to_string()));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id("1").unwrap().unwrap().author, "first");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = BookStore::new();
        store.add(book("1")).unwrap();
        store.add(book("2")).unwrap();

        store.update(Book::new("1", "new", "new")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed[0], Book::new("1", "new", "new"));
        assert_eq!(listed[1], book("2"));
    }

    #[test]
    fn test_update_missing_leaves_store_unmodified() {
        let store = BookStore::new();
        store.add(book("1")).unwrap();

        let err = store.update(book("2")).unwrap_err();
        assert_eq!(err, StoreError::NotFound("2".to_string()));
        assert_eq!(store.list().unwrap(), vec![book("1")]);
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let store = BookStore::new();
        store.add(book("a")).unwrap();
        store.add(book("b")).unwrap();
        store.add(book("c")).unwrap();

        store.delete("b").unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_missing_fails() {
        let store = BookStore::new();
        let err = store.delete("1").unwrap_err();
        assert_eq!(err, StoreError::NotFound("1".to_string()));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = BookStore::new();
        for id in ["3", "1", "2"] {
            store.add(book(id)).unwrap();
        }

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_concurrent_adds_all_land() {
        use std::sync::Arc;

        let store = Arc::new(BookStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.add(book(&i.to_string())))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(store.len(), 8);
    }
}
