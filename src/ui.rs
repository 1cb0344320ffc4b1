// src/ui.rs

pub mod chat;
pub mod console;
pub mod footer;
pub mod header;
pub mod message;
pub mod quit_confirm;

use crate::app::{App, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
    Frame,
};

/// Draws one full frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1), // Header
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(size);

    header::draw_header(f, vertical_chunks[0], app);

    if app.console.visible {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(vertical_chunks[1]);
        chat::draw_chat(f, body_chunks[0], app);
        console::draw_console(f, body_chunks[1], &app.console);
    } else {
        chat::draw_chat(f, vertical_chunks[1], app);
    }

    footer::draw_footer(f, vertical_chunks[2], app);

    if app.state == AppState::QuitConfirm {
        let area = centered_rect(50, 30, size);
        f.render_widget(Clear, area);
        quit_confirm::draw_quit_confirm(f, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
