use crate::constants::{AI_ICON, USER_ICON};
use crate::models::{Message, MessageKind, Sender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Lays out one transcript message as boxed, wrapped lines for a pane of
/// `width` columns. Fenced code blocks are kept unwrapped.
pub fn render_message(message: &Message, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message);
    let indent = indent(message.sender);

    render_header(&mut lines, message, style, indent);
    render_content(&mut lines, message, width, style, indent);
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn indent(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "  ",
        Sender::Ai => "",
    }
}

fn base_style(message: &Message) -> Style {
    match (message.sender, message.kind) {
        (_, MessageKind::Error) => Style::default().fg(Color::LightRed),
        (Sender::User, _) => Style::default().fg(Color::Rgb(255, 223, 128)),
        (Sender::Ai, _) => Style::default().fg(Color::Rgb(144, 238, 144)),
    }
}

fn render_header(lines: &mut Vec<Line<'static>>, message: &Message, style: Style, indent: &str) {
    let icon = match message.sender {
        Sender::User => USER_ICON,
        Sender::Ai => AI_ICON,
    };

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(icon.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".to_string(), style),
        Span::styled(
            message.timestamp.format("%H:%M").to_string(),
            style.add_modifier(Modifier::DIM),
        ),
    ]));
}

fn render_content(
    lines: &mut Vec<Line<'static>>,
    message: &Message,
    width: u16,
    style: Style,
    indent: &str,
) {
    let wrap_width = (width as usize).saturating_sub(indent.len() + 2).max(1);
    let mut in_code_block = false;
    let mut text_buffer = String::new();
    let mut code_buffer = String::new();

    for line in message.text.lines() {
        if line.trim().starts_with("```") {
            flush_text(lines, &text_buffer, wrap_width, style, indent);
            flush_code(lines, &code_buffer, style, indent);
            text_buffer.clear();
            code_buffer.clear();
            in_code_block = !in_code_block;
            continue;
        }

        let buffer = if in_code_block {
            &mut code_buffer
        } else {
            &mut text_buffer
        };
        buffer.push_str(line);
        buffer.push('\n');
    }

    flush_text(lines, &text_buffer, wrap_width, style, indent);
    flush_code(lines, &code_buffer, style, indent);
}

fn flush_text(
    lines: &mut Vec<Line<'static>>,
    buffer: &str,
    wrap_width: usize,
    style: Style,
    indent: &str,
) {
    for paragraph in buffer.lines() {
        for wrapped in wrap(paragraph, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.to_string(), style),
            ]));
        }
    }
}

fn flush_code(lines: &mut Vec<Line<'static>>, buffer: &str, style: Style, indent: &str) {
    let code_style = Style::default()
        .fg(Color::Rgb(209, 154, 102))
        .add_modifier(Modifier::BOLD);

    for code_line in buffer.lines() {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled("▎".to_string(), Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {}", code_line), code_style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn long_text_is_wrapped_inside_a_box() {
        let message = Message::new(Sender::Ai, "one two three four five six", MessageKind::Normal);
        let lines = render_message(&message, 12);

        assert!(plain(&lines[0]).starts_with("┌─ AI"));
        assert_eq!(plain(lines.last().unwrap()), "╰─");
        let body: Vec<String> = lines[1..lines.len() - 1].iter().map(plain).collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|l| l.starts_with("│ ")));
        assert_eq!(
            body.iter().map(|l| l.trim_start_matches("│ ")).collect::<Vec<_>>().join(" "),
            "one two three four five six"
        );
    }

    #[test]
    fn code_fences_are_not_wrapped() {
        let text = "look:\n```\nlet very_long_identifier_name = 1;\n```";
        let message = Message::new(Sender::Ai, text, MessageKind::Normal);
        let lines = render_message(&message, 16);

        assert!(lines
            .iter()
            .map(plain)
            .any(|l| l.ends_with("▎ let very_long_identifier_name = 1;")));
    }

    #[test]
    fn user_messages_are_indented() {
        let message = Message::new(Sender::User, "hi", MessageKind::Normal);
        let lines = render_message(&message, 40);

        assert!(plain(&lines[0]).starts_with("  ┌─ U"));
        assert_eq!(plain(&lines[1]), "  │ hi");
    }
}
