use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

impl ChatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }

    pub fn http_error(msg: impl Into<String>) -> Self {
        ChatError::Http(msg.into())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::http_error(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn terminal_io_failures_surface_as_io_errors() {
        let err: ChatError = io::Error::new(io::ErrorKind::Unsupported, "no tty").into();
        assert!(matches!(err, ChatError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: no tty");
    }

    #[test]
    fn helper_constructors_pick_the_variant() {
        assert!(matches!(ChatError::config_error("x"), ChatError::Config(_)));
        assert_eq!(ChatError::http_error("down").to_string(), "HTTP client error: down");
    }
}
