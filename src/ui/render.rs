//! Draw functions for the three session screens. Each one is a pure mapping
//! from state plus [`Theme`] to widgets; nothing in here mutates the app or
//! talks to the store.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::models::{percent, Book, BookStatus};

use super::app::StatusMessage;
use super::forms::{BookForm, FormField};
use super::theme::Theme;

/// Rows reserved at the bottom of the screen for status messages.
const FOOTER_HEIGHT: u16 = 1;

const LIST_HELP: &str =
    "↑/↓: Navigate • a: Add • d: Delete • t: Toggle status • s: Stats • Esc: Quit";
const FORM_HELP: &str =
    "Tab/Shift+Tab: Move between fields • Space: Toggle status • Enter: Save • Esc: Cancel";
const STATS_HELP: &str = "Esc: Quit";

/// Split the frame into content and a one-line footer. Tiny terminals get the
/// whole area as content and the footer overlaps.
pub(crate) fn split_footer(area: Rect) -> (Rect, Rect) {
    if area.height > FOOTER_HEIGHT {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        (area, area)
    }
}

/// Render the book list: a heading, one row per book with its status glyph,
/// and the key help line. The row under the cursor is highlighted.
pub(crate) fn draw_list(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    books: &[Book],
    cursor: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let heading = Paragraph::new("Your Book Collection").style(theme.title);
    frame.render_widget(heading, chunks[0]);

    if books.is_empty() {
        let message = Paragraph::new("No books yet. Press 'a' to add one.").style(theme.normal);
        frame.render_widget(message, chunks[1]);
    } else {
        let items = books
            .iter()
            .map(|book| {
                let glyph = match book.status {
                    BookStatus::Read => Span::styled("✓ ", theme.read),
                    BookStatus::Unread => Span::styled("✗ ", theme.unread),
                };
                ListItem::new(Line::from(vec![
                    glyph,
                    Span::styled(book.summary(), theme.normal),
                ]))
            })
            .collect::<Vec<_>>();

        let list = List::new(items).highlight_style(theme.selected);
        let mut state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    frame.render_widget(Paragraph::new(LIST_HELP).style(theme.help), chunks[2]);
}

/// Render the add-book form: the four labeled fields in tab order with the
/// active label emphasized, plus the terminal cursor parked at the end of the
/// active text buffer.
pub(crate) fn draw_form(frame: &mut Frame, area: Rect, theme: &Theme, form: &BookForm) {
    let label_style = |field: FormField| {
        if form.active == field {
            theme.active_field
        } else {
            theme.normal
        }
    };

    let status_value = if form.active == FormField::Status {
        Span::styled(form.status.to_string(), theme.active_field)
    } else {
        Span::styled(form.status.to_string(), theme.normal)
    };

    let lines = vec![
        Line::styled("Add New Book", theme.title),
        Line::default(),
        Line::from(vec![
            Span::styled("Title:", label_style(FormField::Title)),
            Span::raw(" "),
            Span::raw(form.title.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Author:", label_style(FormField::Author)),
            Span::raw(" "),
            Span::raw(form.author.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Year:", label_style(FormField::Year)),
            Span::raw(" "),
            Span::raw(form.year.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Status:", label_style(FormField::Status)),
            Span::raw(" "),
            status_value,
        ]),
        Line::default(),
        Line::styled(FORM_HELP, theme.help),
    ];

    frame.render_widget(Paragraph::new(lines), area);

    // Park the terminal cursor after the text being edited. The status field
    // is toggled, not typed, so it gets no cursor.
    if let Some((row, label_width)) = match form.active {
        FormField::Title => Some((2, "Title:".len())),
        FormField::Author => Some((3, "Author:".len())),
        FormField::Year => Some((4, "Year:".len())),
        FormField::Status => None,
    } {
        let x = area.x + (label_width + 1 + form.value_len(form.active)) as u16;
        let y = area.y + row;
        if x < area.right() && y < area.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

/// Render the statistics screen from the two aggregate counts.
pub(crate) fn draw_stats(frame: &mut Frame, area: Rect, theme: &Theme, total: i64, read: i64) {
    let unread = total - read;
    let lines = vec![
        Line::styled("Statistics", theme.title),
        Line::default(),
        Line::styled(format!("Total books: {total}"), theme.normal),
        Line::styled(
            format!("Read:       {}", count_with_share(read, total)),
            theme.normal,
        ),
        Line::styled(
            format!("Unread:     {}", count_with_share(unread, total)),
            theme.normal,
        ),
        Line::default(),
        Line::styled(STATS_HELP, theme.help),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the footer status line in the severity's color.
pub(crate) fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme, status: &StatusMessage) {
    let line = Paragraph::new(status.text.as_str()).style(status.kind.style(theme));
    frame.render_widget(line, area);
}

/// `N (P%)` with the share rounded to whole percent. An empty collection reads
/// as 0% instead of dividing by zero.
fn count_with_share(count: i64, total: i64) -> String {
    format!("{count} ({:.0}%)", percent(count, total))
}
