//! Storage seam between the interactive session and SQLite. The session only
//! talks to [`BookStore`], so its state machine can be driven in tests by an
//! in-memory fake while production wires in [`SqliteStore`].

use anyhow::Result;
use rusqlite::Connection;

use crate::db;
use crate::models::{Book, BookStatus};

/// The operations the interactive session needs from its backing store. Reads
/// take `&self`, mutations take `&mut self`; the session re-fetches after
/// every successful mutation instead of patching its cached list.
pub trait BookStore {
    /// Snapshot of every book in display order.
    fn fetch_all(&self) -> Result<Vec<Book>>;

    /// Persist a new book. The id is assigned by the store.
    fn insert(&mut self, title: &str, author: &str, year: i64, status: BookStatus) -> Result<()>;

    /// Set the status of the book with `id`, erroring when it does not exist.
    fn update_status(&mut self, id: i64, status: BookStatus) -> Result<()>;

    /// Remove the book with `id`, erroring when it does not exist.
    fn delete(&mut self, id: i64) -> Result<()>;

    /// Total number of books.
    fn count_all(&self) -> Result<i64>;

    /// Number of books with the given status.
    fn count_by_status(&self, status: BookStatus) -> Result<i64>;
}

/// Production store backed by the embedded SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl BookStore for SqliteStore {
    fn fetch_all(&self) -> Result<Vec<Book>> {
        db::fetch_books(&self.conn)
    }

    fn insert(&mut self, title: &str, author: &str, year: i64, status: BookStatus) -> Result<()> {
        db::insert_book(&self.conn, title, author, year, status)
    }

    fn update_status(&mut self, id: i64, status: BookStatus) -> Result<()> {
        db::update_status(&self.conn, id, status)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        db::delete_book(&self.conn, id)
    }

    fn count_all(&self) -> Result<i64> {
        db::count_books(&self.conn)
    }

    fn count_by_status(&self, status: BookStatus) -> Result<i64> {
        db::count_by_status(&self.conn, status)
    }
}
