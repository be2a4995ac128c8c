//! Session state and the key-event state machine behind the interactive view.
//! Every input funnels through [`App::handle_key`], which mutates the state and
//! tells the event loop whether the user asked to leave. The app never touches
//! SQLite directly; it goes through the injected [`BookStore`] so the whole
//! machine can be exercised in tests with an in-memory fake.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::Frame;

use crate::models::{Book, BookStatus};
use crate::store::BookStore;

use super::forms::{BookForm, FormField};
use super::render;
use super::theme::Theme;

/// Which screen the session is currently showing. The mode decides both the
/// key table in effect and the draw function used for the next frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    List,
    AddForm,
    Stats,
}

/// Holds the footer message text plus its severity.
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) kind: StatusKind,
}

/// Severity levels shown in the footer.
pub(crate) enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    /// Pick the footer style for this severity from the theme.
    pub(crate) fn style(&self, theme: &Theme) -> Style {
        match self {
            StatusKind::Info => theme.info,
            StatusKind::Error => theme.error,
        }
    }
}

/// Central state of the interactive session: the cached book list, the cursor,
/// the add-book form, and the footer message. Owned exclusively by the event
/// loop; one key event is processed to completion before the next is read.
pub struct App<S: BookStore> {
    store: S,
    books: Vec<Book>,
    cursor: usize,
    mode: Mode,
    form: BookForm,
    status: Option<StatusMessage>,
    theme: Theme,
}

impl<S: BookStore> App<S> {
    /// Build the initial session state with a first fetch from the store. A
    /// failing fetch here is fatal: there is no sensible screen to show before
    /// the list has loaded at least once.
    pub fn new(store: S, theme: Theme) -> Result<Self> {
        let books = store.fetch_all()?;
        Ok(Self {
            store,
            books,
            cursor: 0,
            mode: Mode::List,
            form: BookForm::default(),
            status: None,
            theme,
        })
    }

    /// Top-level key dispatcher. Cancel (Esc or Ctrl+C) is checked before any
    /// mode-specific handling: from the form it backs out to the list, from
    /// every other mode it ends the session. The boolean result tells the
    /// outer loop whether the user requested an exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if is_cancel(&key) {
            return Ok(self.handle_cancel());
        }

        match self.mode {
            Mode::List => self.handle_list_key(key.code),
            Mode::AddForm => self.handle_form_key(key),
            // Stats reacts to nothing but cancel, which was handled above.
            Mode::Stats => {}
        }

        Ok(false)
    }

    /// Cancel semantics: leaving the form discards its text buffers and drops
    /// back to a freshly fetched list; anywhere else the session ends. Note
    /// the Stats asymmetry: Esc there quits outright instead of returning to
    /// the list, matching the tool's historical behavior.
    fn handle_cancel(&mut self) -> bool {
        if self.mode == Mode::AddForm {
            self.form.clear_text();
            self.mode = Mode::List;
            self.clear_status();
            self.refresh_books();
            false
        } else {
            true
        }
    }

    /// Key table for the list screen.
    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.books.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('a') => {
                self.form.reset();
                self.clear_status();
                self.mode = Mode::AddForm;
            }
            KeyCode::Char('s') => {
                self.clear_status();
                self.mode = Mode::Stats;
            }
            KeyCode::Char('d') => self.delete_current(),
            KeyCode::Char('t') => self.toggle_current(),
            // Enter is deliberately inert on the list screen.
            _ => {}
        }
    }

    /// Remove the book under the cursor. On failure the stale list stays on
    /// screen; the next successful operation refreshes it.
    fn delete_current(&mut self) {
        let Some(book) = self.books.get(self.cursor) else {
            return;
        };
        let id = book.id;
        match self.store.delete(id) {
            Ok(()) => {
                self.clear_status();
                self.refresh_books();
            }
            Err(err) => {
                let message = format!("Error deleting book: {}", surface_error(&err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// Flip the read/unread status of the book under the cursor.
    fn toggle_current(&mut self) {
        let Some(book) = self.books.get(self.cursor) else {
            return;
        };
        let id = book.id;
        let toggled = book.status.toggled();
        match self.store.update_status(id, toggled) {
            Ok(()) => {
                self.clear_status();
                self.refresh_books();
            }
            Err(err) => {
                let message = format!("Error updating status: {}", surface_error(&err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// Key table for the add-book form. Tab order wraps in both directions;
    /// space doubles as the status toggle when that field has focus and as a
    /// literal character everywhere else.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_previous(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(' ') => {
                if self.form.active == FormField::Status {
                    self.form.status = self.form.status.toggled();
                } else {
                    self.form.push_space();
                }
            }
            KeyCode::Char(ch) => {
                // Chorded keys are commands, never text.
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.form.push_char(ch);
                }
            }
            _ => {}
        }
    }

    /// Validate and persist the form. Validation and store failures both keep
    /// the form open with its buffers intact so the user can correct and
    /// resubmit; only a successful insert returns to the list. The status
    /// selection survives a successful submit (only re-entering the form via
    /// `a` resets it).
    fn submit_form(&mut self) {
        let (title, author, year) = match self.form.parse_inputs() {
            Ok(parsed) => parsed,
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                return;
            }
        };

        match self.store.insert(&title, &author, year, self.form.status) {
            Ok(()) => {
                self.form.clear_text();
                self.mode = Mode::List;
                self.clear_status();
                self.refresh_books();
            }
            Err(err) => {
                let message = format!("Error adding book: {}", surface_error(&err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// Replace the cached list with a fresh store snapshot and keep the cursor
    /// inside it. Runs after every successful mutation instead of patching
    /// the cache in place, so the screen always shows what the store holds.
    fn refresh_books(&mut self) {
        match self.store.fetch_all() {
            Ok(books) => {
                self.books = books;
                if self.cursor >= self.books.len() {
                    self.cursor = self.books.len().saturating_sub(1);
                }
            }
            Err(err) => {
                let message = format!("Error loading books: {}", surface_error(&err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// Render the current mode plus the footer. The two Stats aggregates are
    /// the only store reads issued outside a transition; if they fail the
    /// screen shows zeros rather than interrupting the frame.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let (content_area, footer_area) = render::split_footer(area);

        match self.mode {
            Mode::List => {
                render::draw_list(frame, content_area, &self.theme, &self.books, self.cursor)
            }
            Mode::AddForm => render::draw_form(frame, content_area, &self.theme, &self.form),
            Mode::Stats => {
                let total = self.store.count_all().unwrap_or(0);
                let read = self.store.count_by_status(BookStatus::Read).unwrap_or(0);
                render::draw_stats(frame, content_area, &self.theme, total, read);
            }
        }

        if let Some(status) = &self.status {
            render::draw_footer(frame, footer_area, &self.theme, status);
        }
    }

    /// Set a status message that will appear in the footer on the next draw
    /// call.
    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Clear any existing status from the footer.
    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Both cancel aliases: the Escape key and the Ctrl+C interrupt chord.
fn is_cancel(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

/// Extract the most relevant error message from a chained error.
fn surface_error(err: &anyhow::Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
