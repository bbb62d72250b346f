//! # Book Store
//!
//! In-memory storage for the book catalog.
//!
//! The store is an ordered collection of [`Book`] records, unique by
//! identifier, with insertion order preserved. It lives for the whole
//! process and is never persisted.

mod book;
mod errors;
mod memory;

pub use book::Book;
pub use errors::{StoreError, StoreResult};
pub use memory::BookStore;
