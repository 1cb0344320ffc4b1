//! The request/response turn: input buffer, send gate and transcript.

use crate::models::Sender;
use crate::reply::Reply;
use crate::transcript::Transcript;

#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    input: String,
    in_flight: bool,
    scroll: u16,
    follow_tail: bool,
    max_scroll: u16,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            follow_tail: true,
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight
    }

    /// The send control is enabled when there is something to send and no
    /// request is outstanding.
    pub fn can_send(&self) -> bool {
        !self.in_flight && !self.input.trim().is_empty()
    }

    /// The welcome prompt is only shown before the first message.
    pub fn show_initial_prompt(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Starts a turn. Returns the trimmed query to post, or `None` when the
    /// send control is disabled, in which case nothing changes.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }

        let query = self.input.trim().to_string();
        self.input.clear();
        self.transcript.push(Sender::User, query.clone());
        self.in_flight = true;
        self.follow_tail = true;

        Some(query)
    }

    /// Finishes the turn with exactly one AI message and re-enables sending.
    pub fn complete(&mut self, reply: Reply) {
        if reply.is_error() {
            self.transcript.push_error(reply.into_text());
        } else {
            self.transcript.push(Sender::Ai, reply.into_text());
        }
        self.in_flight = false;
        self.follow_tail = true;
    }

    pub fn scroll_up(&mut self) {
        self.follow_tail = false;
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
        if self.scroll >= self.max_scroll {
            self.follow_tail = true;
        }
    }

    pub fn is_following_tail(&self) -> bool {
        self.follow_tail
    }

    /// Called by the renderer with the largest valid offset for the current
    /// frame. Returns the offset to draw with.
    pub fn sync_scroll(&mut self, max_scroll: u16) -> u16 {
        self.max_scroll = max_scroll;
        if self.follow_tail || self.scroll > max_scroll {
            self.scroll = max_scroll;
        }
        self.scroll
    }
}
