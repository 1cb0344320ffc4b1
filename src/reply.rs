//! Classification of webhook responses.
//!
//! Every exchange ends in exactly one [`Reply`], and every `Reply` renders to
//! exactly one line of text for the transcript. Nothing here can fail.

use crate::constants::{
    EMPTY_BODY_MESSAGE, MISSING_ANSWER_MESSAGE, NOT_JSON_PREFIX, RAW_EXCERPT_CHARS,
    TRANSPORT_ERROR_PREFIX, TRANSPORT_ERROR_SUFFIX,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The webhook returned an answer; shown verbatim.
    Answer(String),
    /// Non-2xx status.
    HttpStatus(u16),
    /// 2xx with nothing in the body.
    EmptyBody,
    /// Body present but not JSON. Holds the leading characters of the raw text.
    NotJson { excerpt: String },
    /// JSON without `answer` or `data.answer`.
    MissingAnswer,
    /// The request never completed (DNS, connect, timeout, body read).
    Network(String),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        !matches!(self, Reply::Answer(_))
    }

    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Reply::Answer(_) => "answer",
            Reply::HttpStatus(_) => "http-status",
            Reply::EmptyBody => "empty-body",
            Reply::NotJson { .. } => "not-json",
            Reply::MissingAnswer => "missing-answer",
            Reply::Network(_) => "network",
        }
    }

    /// What went wrong, for the developer console. `None` for answers and
    /// for failures that carry no extra information.
    pub fn detail(&self) -> Option<String> {
        match self {
            Reply::HttpStatus(status) => Some(format!("status {}", status)),
            Reply::NotJson { excerpt } => Some(format!("\"{}\"", excerpt)),
            Reply::Network(detail) => Some(detail.clone()),
            Reply::Answer(_) | Reply::EmptyBody | Reply::MissingAnswer => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Reply::Answer(answer) => answer,
            Reply::HttpStatus(status) => {
                transport_message(&format!("HTTP error! status: {}", status))
            }
            Reply::EmptyBody => EMPTY_BODY_MESSAGE.to_string(),
            Reply::NotJson { excerpt } => format!("{} \"{}...\"", NOT_JSON_PREFIX, excerpt),
            Reply::MissingAnswer => MISSING_ANSWER_MESSAGE.to_string(),
            Reply::Network(detail) => transport_message(&detail),
        }
    }
}

fn transport_message(detail: &str) -> String {
    format!(
        "{} {}. {}",
        TRANSPORT_ERROR_PREFIX, detail, TRANSPORT_ERROR_SUFFIX
    )
}

/// Maps a completed HTTP exchange to a [`Reply`].
pub fn classify(status: u16, body: &str) -> Reply {
    if !(200..300).contains(&status) {
        return Reply::HttpStatus(status);
    }

    if body.trim().is_empty() {
        return Reply::EmptyBody;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract_answer(&value)
            .map(Reply::Answer)
            .unwrap_or(Reply::MissingAnswer),
        Err(e) => {
            log::error!("JSON parsing failed: {} - raw text: {}", e, body);
            Reply::NotJson {
                excerpt: excerpt(body),
            }
        }
    }
}

/// Looks for `answer`, then `data.answer`. Only truthy values count.
pub fn extract_answer(value: &Value) -> Option<String> {
    [value.get("answer"), value.pointer("/data/answer")]
        .into_iter()
        .flatten()
        .find(|candidate| is_truthy(candidate))
        .map(|answer| match answer {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First [`RAW_EXCERPT_CHARS`] characters of `raw`, cut on a char boundary.
pub fn excerpt(raw: &str) -> String {
    raw.chars().take(RAW_EXCERPT_CHARS).collect()
}
