pub mod app;
mod calendar_view;
mod insights_view;
mod journal_view;
mod profile_view;
mod today_view;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};
use std::io::{self, Stdout};

/// Accent used for selections and highlights across all tabs.
pub(crate) const ACCENT: Color = Color::Rgb(0xFF, 0x6B, 0x9D);
pub(crate) const MUTED: Color = Color::Rgb(0x71, 0x80, 0x96);

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// `#RRGGBB` to a terminal color; unparseable input renders grey.
pub(crate) fn hex_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Gray)
}
