use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-tracker";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "books.sqlite";

/// Ensure the database file exists, run lazy migrations, and return a live
/// connection. Every entry point (one-shot commands and the interactive
/// session) goes through here, so a fresh install never sees a missing table.
pub fn ensure_schema() -> Result<Connection> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    create_tables(&conn)?;

    Ok(conn)
}

/// Apply the schema to an already opened connection. Split out so tests can
/// run against `Connection::open_in_memory()`.
pub(crate) fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            published_year INTEGER,
            status TEXT DEFAULT 'unread'
        )",
        [],
    )
    .context("failed to create books table")?;

    Ok(())
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
