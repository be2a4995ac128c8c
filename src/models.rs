//! Domain models that mirror the SQLite schema and travel through every layer
//! of the application. These types stay light-weight data holders so the
//! session, the renderer, and the persistence code can share them freely.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One tracked book, exactly as it exists in the store. The session keeps a
/// cached `Vec<Book>` and re-fetches it after every mutation rather than
/// patching the cache by hand.
pub struct Book {
    /// Primary key from the database. Mutations (delete, status toggle) bubble
    /// this id back to the persistence layer.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year. Kept as an integer so the stats grouping stays
    /// numeric instead of lexicographic.
    pub published_year: i64,
    pub status: BookStatus,
}

impl Book {
    /// Compose the `Title by Author (Year)` line used wherever a book is shown
    /// as a single row.
    pub fn summary(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.published_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Read state of a book. Stored as lowercase text in SQLite; anything the
/// decoder does not recognize collapses to [`BookStatus::Unread`].
pub enum BookStatus {
    Read,
    Unread,
}

impl BookStatus {
    /// The exact string persisted in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::Read => "read",
            BookStatus::Unread => "unread",
        }
    }

    /// The opposite state. Toggling is the only status transition the
    /// interactive session performs.
    pub fn toggled(self) -> Self {
        match self {
            BookStatus::Read => BookStatus::Unread,
            BookStatus::Unread => BookStatus::Read,
        }
    }
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Unread
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown status {0:?} (expected \"read\" or \"unread\")")]
/// Raised when parsing a status string that is neither `read` nor `unread`.
/// Callers that read from the database side-step this with
/// `parse().unwrap_or_default()`; the CLI surfaces it to the user instead.
pub struct ParseStatusError(String);

impl FromStr for BookStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(BookStatus::Read),
            "unread" => Ok(BookStatus::Unread),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Share of `part` in `total` as a 0-100 value. An empty collection counts as
/// 0% so stats displays never divide by zero.
pub fn percent(part: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_round_trips() {
        assert_eq!(BookStatus::Unread.toggled(), BookStatus::Read);
        assert_eq!(BookStatus::Unread.toggled().toggled(), BookStatus::Unread);
    }

    #[test]
    fn parses_known_statuses_and_rejects_the_rest() {
        assert_eq!("read".parse::<BookStatus>().unwrap(), BookStatus::Read);
        assert_eq!("unread".parse::<BookStatus>().unwrap(), BookStatus::Unread);
        assert!("Read".parse::<BookStatus>().is_err());
        assert!("".parse::<BookStatus>().is_err());
    }

    #[test]
    fn unknown_status_decodes_to_unread_via_default() {
        let status: BookStatus = "finished".parse().unwrap_or_default();
        assert_eq!(status, BookStatus::Unread);
    }

    #[test]
    fn summary_formats_a_single_row() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            published_year: 1965,
            status: BookStatus::Read,
        };
        assert_eq!(book.summary(), "Dune by Frank Herbert (1965)");
    }

    #[test]
    fn percent_of_empty_collection_is_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn percent_of_half_is_fifty() {
        assert!((percent(2, 4) - 50.0).abs() < f64::EPSILON);
    }
}
