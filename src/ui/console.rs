use crate::console::DevConsole;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the developer console, pinned to its newest entries.
pub fn draw_console(f: &mut Frame<'_>, area: Rect, console: &DevConsole) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Console")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = inner.height as usize;
    let skip = console.entries.len().saturating_sub(visible);
    let log_lines: Vec<Line> = console
        .entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para, inner);
}
