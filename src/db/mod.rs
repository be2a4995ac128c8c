//! Persistence module split across logical submodules.

mod books;
mod connection;

pub use books::{
    author_counts, count_books, count_by_status, delete_book, fetch_books, fetch_books_by_status,
    insert_book, status_counts, update_status, year_counts,
};
pub use connection::ensure_schema;

#[cfg(test)]
pub(crate) use connection::create_tables;
