// src/logging.rs

use crate::config::Config;
use crate::errors::ChatResult;
use crate::models::ExchangeLog;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. Keep the returned handle alive until exit.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let mut file_spec = FileSpec::default()
        .basename("webhook-chat")
        .suppress_timestamp();
    if let Some(dir) = &config.log_dir {
        file_spec = file_spec.directory(dir);
    }

    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(file_spec)
        .append()
        .format(detailed_format)
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    Ok(handle)
}

pub fn format_exchange(log: &ExchangeLog) -> String {
    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms - Outcome: {}",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms,
        log.outcome
    )
}

/// Logs a webhook exchange at `info`, or `warn` when it did not produce an answer.
pub fn log_exchange(log: &ExchangeLog) {
    if log.outcome == "answer" {
        log::info!("{}", format_exchange(log));
    } else {
        log::warn!("{}", format_exchange(log));
    }
}
