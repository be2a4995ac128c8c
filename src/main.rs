//! Binary entry point: parse the subcommand, bring up the SQLite store, and
//! either run one CRUD operation or hand the connection to the interactive
//! session. Every path returns `anyhow::Result` so initialization failures
//! print a readable cause instead of crashing silently.

use anyhow::Result;
use clap::{Parser, Subcommand};

use book_tracker::{cli, ensure_schema, run_app, App, BookStatus, SqliteStore, Theme};

/// A personal book collection tracker.
#[derive(Parser, Debug)]
#[command(name = "book-tracker")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new book
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,
        /// Book author
        #[arg(short, long)]
        author: String,
        /// Published year
        #[arg(short, long)]
        year: i64,
        /// Book status (read/unread)
        #[arg(short, long, default_value = "unread")]
        status: BookStatus,
    },

    /// List every book in the collection
    List,

    /// Delete a book by ID
    Delete {
        /// ID of the book to delete
        id: i64,
    },

    /// Mark a book as read by ID
    Update {
        /// ID of the book to update
        id: i64,
    },

    /// Find books by status (read/unread)
    FindByStatus {
        /// Filter by status (read/unread)
        #[arg(short, long)]
        status: BookStatus,
    },

    /// Show book statistics
    Stats {
        /// Show statistics by publication year
        #[arg(short = 'y', long)]
        by_year: bool,
        /// Show statistics by author
        #[arg(short = 'a', long)]
        by_author: bool,
        /// Show read/unread statistics
        #[arg(short = 's', long)]
        by_status: bool,
    },

    /// Browse the collection in a full-screen terminal session
    Interactive,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let conn = ensure_schema()?;

    match args.command {
        Commands::Add {
            title,
            author,
            year,
            status,
        } => cli::run_add(&conn, &title, &author, year, status),
        Commands::List => cli::run_list(&conn),
        Commands::Delete { id } => cli::run_delete(&conn, id),
        Commands::Update { id } => cli::run_update(&conn, id),
        Commands::FindByStatus { status } => cli::run_find_by_status(&conn, status),
        Commands::Stats {
            by_year,
            by_author,
            by_status,
        } => cli::run_stats(&conn, by_year, by_author, by_status),
        Commands::Interactive => {
            let mut app = App::new(SqliteStore::new(conn), Theme::default())?;
            run_app(&mut app)
        }
    }
}
