use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::{Book, BookStatus};

/// Retrieve every book in insertion (rowid) order. The interactive session
/// treats this order as the display order, so no ORDER BY is applied.
pub fn fetch_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare("SELECT id, title, author, published_year, status FROM books")
        .context("failed to prepare book query")?;

    let books = stmt
        .query_map([], book_from_row)
        .context("failed to load books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}

/// Retrieve only the books matching `status`, in insertion order.
pub fn fetch_books_by_status(conn: &Connection, status: BookStatus) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare("SELECT id, title, author, published_year, status FROM books WHERE status = ?1")
        .context("failed to prepare filtered book query")?;

    let books = stmt
        .query_map(params![status.as_str()], book_from_row)
        .context("failed to load books by status")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books by status")?;

    Ok(books)
}

/// Insert a new book row. Callers re-fetch the list instead of patching it,
/// so nothing is hydrated or returned here.
pub fn insert_book(
    conn: &Connection,
    title: &str,
    author: &str,
    year: i64,
    status: BookStatus,
) -> Result<()> {
    conn.execute(
        "INSERT INTO books (title, author, published_year, status) VALUES (?1, ?2, ?3, ?4)",
        params![title, author, year, status.as_str()],
    )
    .context("failed to insert book")?;

    Ok(())
}

/// Set the status of an existing book. We surface a custom error when nothing
/// was updated so callers can show a friendly message instead of silently
/// continuing.
pub fn update_status(conn: &Connection, id: i64, status: BookStatus) -> Result<()> {
    let updated = conn
        .execute(
            "UPDATE books SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )
        .context("failed to update book status")?;

    if updated == 0 {
        Err(anyhow!("book with ID {id} not found"))
    } else {
        Ok(())
    }
}

/// Remove a book row, erroring when the id does not exist.
pub fn delete_book(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM books WHERE id = ?1", params![id])
        .context("failed to delete book")?;

    if deleted == 0 {
        Err(anyhow!("book with ID {id} not found"))
    } else {
        Ok(())
    }
}

/// Total number of books in the store.
pub fn count_books(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .context("failed to count books")
}

/// Number of books with the given status.
pub fn count_by_status(conn: &Connection, status: BookStatus) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM books WHERE status = ?1",
        params![status.as_str()],
        |row| row.get(0),
    )
    .context("failed to count books by status")
}

/// Book counts grouped by publication year, newest years first.
pub fn year_counts(conn: &Connection) -> Result<Vec<(i64, i64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT published_year, COUNT(*) AS count FROM books
             GROUP BY published_year ORDER BY published_year DESC",
        )
        .context("failed to prepare year stats query")?;

    let counts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .context("failed to load year stats")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect year stats")?;

    Ok(counts)
}

/// Book counts grouped by author, most prolific first.
pub fn author_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT author, COUNT(*) AS count FROM books
             GROUP BY author ORDER BY count DESC",
        )
        .context("failed to prepare author stats query")?;

    let counts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .context("failed to load author stats")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect author stats")?;

    Ok(counts)
}

/// Book counts grouped by the raw status column. Grouping works on the stored
/// text, so rows with unexpected status values show up as their own group
/// instead of being folded into `unread`.
pub fn status_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT status, COUNT(*) AS count FROM books
             GROUP BY status ORDER BY status",
        )
        .context("failed to prepare status stats query")?;

    let counts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .context("failed to load status stats")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect status stats")?;

    Ok(counts)
}

/// Map a full `books` row onto the domain struct. Unknown status text decodes
/// to `unread` rather than failing the whole fetch.
fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        published_year: row.get(3)?,
        status: row.get::<_, String>(4)?.parse().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_tables;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn insert_then_fetch_round_trips() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();

        let books = fetch_books(&conn).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].status, BookStatus::Unread);
        assert_eq!(books[1].author, "Jane Austen");
        assert_eq!(books[1].status, BookStatus::Read);
        // Ids are assigned in insertion order, which is also fetch order.
        assert!(books[0].id < books[1].id);
    }

    #[test]
    fn fetch_by_status_filters_rows() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();

        let read = fetch_books_by_status(&conn, BookStatus::Read).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].title, "Emma");

        let unread = fetch_books_by_status(&conn, BookStatus::Unread).unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].title, "Dune");
    }

    #[test]
    fn update_status_rewrites_the_row() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        let id = fetch_books(&conn).unwrap()[0].id;

        update_status(&conn, id, BookStatus::Read).unwrap();
        assert_eq!(fetch_books(&conn).unwrap()[0].status, BookStatus::Read);
    }

    #[test]
    fn update_status_errors_on_missing_id() {
        let conn = test_conn();
        let err = update_status(&conn, 42, BookStatus::Read).unwrap_err();
        assert_eq!(err.to_string(), "book with ID 42 not found");
    }

    #[test]
    fn delete_removes_the_row_and_errors_when_absent() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        let id = fetch_books(&conn).unwrap()[0].id;

        delete_book(&conn, id).unwrap();
        assert!(fetch_books(&conn).unwrap().is_empty());

        let err = delete_book(&conn, id).unwrap_err();
        assert_eq!(err.to_string(), format!("book with ID {id} not found"));
    }

    #[test]
    fn counts_split_by_status() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();
        insert_book(&conn, "Persuasion", "Jane Austen", 1817, BookStatus::Read).unwrap();

        assert_eq!(count_books(&conn).unwrap(), 3);
        assert_eq!(count_by_status(&conn, BookStatus::Read).unwrap(), 2);
        assert_eq!(count_by_status(&conn, BookStatus::Unread).unwrap(), 1);
    }

    #[test]
    fn year_counts_sort_newest_first() {
        let conn = test_conn();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        insert_book(&conn, "Dune Messiah", "Frank Herbert", 1969, BookStatus::Unread).unwrap();

        let counts = year_counts(&conn).unwrap();
        assert_eq!(counts, vec![(1969, 1), (1965, 1), (1815, 1)]);
    }

    #[test]
    fn author_counts_sort_by_volume() {
        let conn = test_conn();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();
        insert_book(&conn, "Persuasion", "Jane Austen", 1817, BookStatus::Read).unwrap();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();

        let counts = author_counts(&conn).unwrap();
        assert_eq!(counts[0], ("Jane Austen".to_string(), 2));
        assert_eq!(counts[1], ("Frank Herbert".to_string(), 1));
    }

    #[test]
    fn status_counts_group_raw_column_values() {
        let conn = test_conn();
        insert_book(&conn, "Dune", "Frank Herbert", 1965, BookStatus::Unread).unwrap();
        insert_book(&conn, "Emma", "Jane Austen", 1815, BookStatus::Read).unwrap();
        insert_book(&conn, "Persuasion", "Jane Austen", 1817, BookStatus::Read).unwrap();

        let counts = status_counts(&conn).unwrap();
        assert_eq!(
            counts,
            vec![("read".to_string(), 2), ("unread".to_string(), 1)]
        );
    }

    #[test]
    fn unknown_status_text_decodes_to_unread() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO books (title, author, published_year, status)
             VALUES ('Odd', 'Nobody', 2000, 'finished')",
            [],
        )
        .unwrap();

        let books = fetch_books(&conn).unwrap();
        assert_eq!(books[0].status, BookStatus::Unread);
    }
}
