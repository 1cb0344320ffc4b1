// src/models.rs

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Normal,
    Error,
}

/// A single rendered line of conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub kind: MessageKind,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            sender,
            text: text.into(),
            kind,
            timestamp: Local::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Body of the webhook POST.
#[derive(Debug, Serialize)]
pub struct WebhookRequest<'a> {
    pub query: &'a str,
}

/// Details of one webhook exchange, written to the log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
    pub outcome: String,
}
