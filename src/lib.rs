//! Core library surface for the book tracker. The public modules stay an
//! intentionally small API so the `bin` target as well as the tests can reuse
//! the same pieces: persistence in `db`, the storage seam in `store`, the
//! one-shot runners in `cli`, and the interactive session in `ui`.

pub mod cli;
pub mod db;
pub mod models;
pub mod store;
pub mod ui;

/// Entry point to the persistence layer; opens the embedded SQLite store.
pub use db::ensure_schema;

/// The domain types every layer manipulates.
pub use models::{Book, BookStatus};

/// The storage seam and its production implementation.
pub use store::{BookStore, SqliteStore};

/// The interactive session: state container, event loop, and styles.
pub use ui::{run_app, App, Theme};
