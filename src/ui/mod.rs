//! The interactive full-screen session: a single-threaded view/update loop
//! over the book collection. `app` owns the state machine, `render` draws it,
//! `terminal` hosts the crossterm event loop, and `theme` carries every style
//! the renderer uses.

mod app;
mod forms;
mod render;
mod terminal;
mod theme;

pub use app::App;
pub use terminal::run_app;
pub use theme::Theme;
