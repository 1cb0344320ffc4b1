use crate::app::App;
use crate::constants::APP_TITLE;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(APP_TITLE.len() as u16 + 2), Constraint::Min(1)].as_ref())
        .split(area);

    let title = Paragraph::new(APP_TITLE).style(
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    let endpoint = Paragraph::new(format!("→ {}", app.webhook_url()))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(endpoint, chunks[1]);
}
