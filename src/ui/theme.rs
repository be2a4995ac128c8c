//! Style bundle consumed by the renderer. Keeping every style in one value
//! (instead of constants scattered through draw code) lets the renderer stay
//! a pure function of session state plus theme.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
/// Styles for every visual role the session renders. The defaults use the
/// same 256-color palette indexes the application has always shipped with.
pub struct Theme {
    /// Screen headings ("Your Book Collection", "Add New Book", ...).
    pub title: Style,
    /// The list row under the cursor.
    pub selected: Style,
    /// Unselected list rows and ordinary text.
    pub normal: Style,
    /// The check glyph next to read books.
    pub read: Style,
    /// The cross glyph next to unread books.
    pub unread: Style,
    /// Key-binding help line at the bottom of each screen.
    pub help: Style,
    /// Label of the form field that currently has focus.
    pub active_field: Style,
    /// Informational footer messages.
    pub info: Style,
    /// Error footer messages.
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Indexed(62))
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Indexed(230)).bg(Color::Indexed(62)),
            normal: Style::default(),
            read: Style::default().fg(Color::Indexed(10)),
            unread: Style::default().fg(Color::Indexed(9)),
            help: Style::default().fg(Color::Indexed(240)),
            active_field: Style::default()
                .fg(Color::Indexed(39))
                .add_modifier(Modifier::BOLD),
            info: Style::default().fg(Color::Indexed(10)),
            error: Style::default().fg(Color::Indexed(9)),
        }
    }
}
