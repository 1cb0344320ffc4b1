use crate::app::App;
use crate::constants::INITIAL_PROMPT;
use crate::ui::message::render_message;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Typing indicator
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(area);

    draw_messages(f, chunks[0], app);

    let send_enabled = app.session.can_send();
    app.status_indicator.render(f, chunks[1], send_enabled);

    draw_input(f, chunks[2], app);
}

fn draw_messages(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title("Chat");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.session.show_initial_prompt() {
        let prompt = Paragraph::new(INITIAL_PROMPT)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, inner);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in app.session.transcript().iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, inner.width));
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(inner.height);
    let scroll = app.session.sync_scroll(max_scroll);

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App) {
    let input = app.session.input();
    let waiting = app.session.is_waiting();

    let border_style = if waiting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::LightYellow)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Input")
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prefix = "→ ";
    let text_width = u16::try_from(input.width()).unwrap_or(u16::MAX);
    let visible_width = inner.width.saturating_sub(prefix.width() as u16 + 1);
    let scroll_offset = text_width.saturating_sub(visible_width);

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(line).scroll((0, scroll_offset)), inner);

    let cursor_x = inner
        .x
        .saturating_add(prefix.width() as u16)
        .saturating_add(text_width - scroll_offset);
    f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}
