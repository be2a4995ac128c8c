//! One-shot subcommand runners. Each performs a single store operation against
//! an open connection, prints plain text, and returns; failures propagate to
//! `main` for a nonzero exit. Output assembly is split from printing so the
//! exact text can be asserted in tests.

use anyhow::Result;
use rusqlite::Connection;

use crate::db;
use crate::models::{percent, Book, BookStatus};

/// `add`: insert one book and confirm.
pub fn run_add(
    conn: &Connection,
    title: &str,
    author: &str,
    year: i64,
    status: BookStatus,
) -> Result<()> {
    db::insert_book(conn, title, author, year, status)?;
    println!("Book added successfully!");
    Ok(())
}

/// `list`: print every book, one line each.
pub fn run_list(conn: &Connection) -> Result<()> {
    let books = db::fetch_books(conn)?;
    println!("{}", list_output(&books));
    Ok(())
}

/// `delete <id>`: remove a book, erroring when the id is unknown.
pub fn run_delete(conn: &Connection, id: i64) -> Result<()> {
    db::delete_book(conn, id)?;
    println!("Book with ID {id} deleted successfully");
    Ok(())
}

/// `update <id>`: mark a book as read, erroring when the id is unknown.
pub fn run_update(conn: &Connection, id: i64) -> Result<()> {
    db::update_status(conn, id, BookStatus::Read)?;
    println!("Book with ID {id} marked as read");
    Ok(())
}

/// `find-by-status`: print the books matching one status.
pub fn run_find_by_status(conn: &Connection, status: BookStatus) -> Result<()> {
    let books = db::fetch_books_by_status(conn, status)?;
    println!("{}", filtered_output(status, &books));
    Ok(())
}

/// `stats`: the basic read/unread table, plus any grouped breakdowns that were
/// requested by flag.
pub fn run_stats(conn: &Connection, by_year: bool, by_author: bool, by_status: bool) -> Result<()> {
    if !by_year && !by_author && !by_status {
        let total = db::count_books(conn)?;
        let read = db::count_by_status(conn, BookStatus::Read)?;
        println!("{}", basic_stats_output(total, read));
        return Ok(());
    }

    if by_year {
        println!("{}", year_stats_output(&db::year_counts(conn)?));
    }
    if by_author {
        println!("{}", author_stats_output(&db::author_counts(conn)?));
    }
    if by_status {
        println!("{}", status_stats_output(&db::status_counts(conn)?));
    }
    Ok(())
}

fn list_output(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found".to_string();
    }
    books
        .iter()
        .map(|book| {
            format!(
                "- ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
                book.id, book.title, book.author, book.published_year, book.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn filtered_output(status: BookStatus, books: &[Book]) -> String {
    if books.is_empty() {
        return format!("No books found with status: {status}");
    }
    let mut lines = vec![format!("Books with status '{status}':")];
    lines.extend(books.iter().map(|book| {
        format!(
            "- ID: {}, Title: {}, Author: {}, Year: {}",
            book.id, book.title, book.author, book.published_year
        )
    }));
    lines.join("\n")
}

fn basic_stats_output(total: i64, read: i64) -> String {
    let unread = total - read;
    format_table(
        ("STATISTIC", "VALUE"),
        &[
            ("Total books".to_string(), total.to_string()),
            ("Read".to_string(), count_with_share(read, total)),
            ("Unread".to_string(), count_with_share(unread, total)),
        ],
    )
}

fn year_stats_output(counts: &[(i64, i64)]) -> String {
    let rows = counts
        .iter()
        .map(|(year, count)| (year.to_string(), count.to_string()))
        .collect::<Vec<_>>();
    format_table(("YEAR", "COUNT"), &rows)
}

fn author_stats_output(counts: &[(String, i64)]) -> String {
    let rows = counts
        .iter()
        .map(|(author, count)| (author.clone(), count.to_string()))
        .collect::<Vec<_>>();
    format_table(("AUTHOR", "COUNT"), &rows)
}

fn status_stats_output(counts: &[(String, i64)]) -> String {
    let rows = counts
        .iter()
        .map(|(status, count)| (status.clone(), count.to_string()))
        .collect::<Vec<_>>();
    format_table(("STATUS", "COUNT"), &rows)
}

/// `N (P%)`, zero-guarded against an empty collection.
fn count_with_share(count: i64, total: i64) -> String {
    format!("{count} ({:.0}%)", percent(count, total))
}

/// Two aligned columns with a dashed rule under the header, the first column
/// padded to its widest entry plus a two-space gutter.
fn format_table(header: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .chain([header.0.len()])
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{:<width$}  {}", header.0, header.1));
    lines.push(format!(
        "{:<width$}  {}",
        "-".repeat(header.0.len()),
        "-".repeat(header.1.len()),
    ));
    for (left, right) in rows {
        lines.push(format!("{left:<width$}  {right}"));
    }
    lines.join("\n")
}
