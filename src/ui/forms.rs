use anyhow::{anyhow, Result};

use crate::models::BookStatus;

/// Fields of the add-book form, in tab order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Author,
    Year,
    Status,
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Title
    }
}

impl FormField {
    /// The field after this one, wrapping from Status back to Title.
    pub(crate) fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Year,
            FormField::Year => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    /// The field before this one, wrapping from Title back to Status.
    pub(crate) fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Author => FormField::Title,
            FormField::Year => FormField::Author,
            FormField::Status => FormField::Year,
        }
    }
}

/// Buffers and focus for the add-book form. A successful submission clears
/// the three text buffers but leaves the status choice; re-entering the form
/// from the list resets everything, status included.
#[derive(Debug, Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) status: BookStatus,
    pub(crate) active: FormField,
}

impl BookForm {
    /// Return the form to its pristine state: empty buffers, status unread,
    /// focus on Title. Runs every time the form is entered from the list.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move focus to the next field in tab order.
    pub(crate) fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    /// Move focus to the previous field in tab order.
    pub(crate) fn focus_previous(&mut self) {
        self.active = self.active.previous();
    }

    /// Append a printable character to the active field, validating allowed
    /// input. Year accepts digits only; Status takes no text at all.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            FormField::Title => {
                if !ch.is_control() {
                    self.title.push(ch);
                    true
                } else {
                    false
                }
            }
            FormField::Author => {
                if !ch.is_control() {
                    self.author.push(ch);
                    true
                } else {
                    false
                }
            }
            FormField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                    true
                } else {
                    false
                }
            }
            FormField::Status => false,
        }
    }

    /// Append a literal space to the active text field. Space reaches the
    /// year buffer too, even though digits are otherwise the only input it
    /// takes; the resulting value fails parsing at submit time.
    pub(crate) fn push_space(&mut self) {
        match self.active {
            FormField::Title => self.title.push(' '),
            FormField::Author => self.author.push(' '),
            FormField::Year => self.year.push(' '),
            FormField::Status => {}
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Author => {
                self.author.pop();
            }
            FormField::Year => {
                self.year.pop();
            }
            FormField::Status => {}
        }
    }

    /// Clear the three text buffers. Runs on successful submission and on
    /// cancel; the status choice and focus are left as they are.
    pub(crate) fn clear_text(&mut self) {
        self.title.clear();
        self.author.clear();
        self.year.clear();
    }

    /// Validate the inputs and return typed values ready for persistence.
    /// Title and author are trimmed; the year string is parsed as typed, so
    /// stray spaces make it invalid rather than being silently dropped.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, i64)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(anyhow!("Title cannot be empty"));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(anyhow!("Author cannot be empty"));
        }
        if self.year.trim().is_empty() {
            return Err(anyhow!("Year cannot be empty"));
        }
        let year = self
            .year
            .parse::<i64>()
            .map_err(|_| anyhow!("Invalid year format"))?;

        Ok((title.to_string(), author.to_string(), year))
    }

    /// Character count of the requested field, used for cursor placement.
    pub(crate) fn value_len(&self, field: FormField) -> usize {
        match field {
            FormField::Title => self.title.chars().count(),
            FormField::Author => self.author.chars().count(),
            FormField::Year => self.year.chars().count(),
            FormField::Status => 0,
        }
    }
}
