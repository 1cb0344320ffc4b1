use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TYPING_FRAMES: [&str; 4] = ["·  ", "·· ", "···", " ··"];

/// The typing indicator shown while the webhook is answering.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    waiting: bool,
    status_text: String,
    frame_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_waiting(&mut self, waiting: bool) {
        self.waiting = waiting;
        if !waiting {
            self.frame_idx = 0;
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn clear_status(&mut self) {
        self.status_text.clear();
    }

    pub fn tick(&mut self) {
        if self.waiting {
            self.frame_idx = self.frame_idx.wrapping_add(1);
        }
    }

    pub fn frame(&self) -> &'static str {
        if self.waiting {
            TYPING_FRAMES[self.frame_idx % TYPING_FRAMES.len()]
        } else {
            "   "
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, send_enabled: bool) {
        let (text, color) = if self.waiting {
            ("AI is typing", Color::DarkGray)
        } else if !self.status_text.is_empty() {
            (self.status_text.as_str(), Color::Yellow)
        } else {
            ("", Color::DarkGray)
        };

        let send_marker = if send_enabled {
            Span::styled("[send ⏎]", Style::default().fg(Color::Green))
        } else {
            Span::styled("[send ⏎]", Style::default().fg(Color::DarkGray))
        };

        let status = Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text.to_string(), Style::default().fg(color)),
            Span::raw("  "),
            send_marker,
        ]);

        frame.render_widget(Paragraph::new(status).alignment(Alignment::Left), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animates_only_while_waiting() {
        let mut indicator = StatusIndicator::new();
        indicator.tick();
        assert_eq!(indicator.frame(), "   ");

        indicator.set_waiting(true);
        let first = indicator.frame();
        indicator.tick();
        assert_ne!(indicator.frame(), first);

        indicator.set_waiting(false);
        assert_eq!(indicator.frame(), "   ");
    }
}
