use crate::{
    config::Config,
    errors::ChatResult,
    logging::log_exchange,
    models::{ExchangeLog, WebhookRequest},
    reply::{classify, Reply},
};
use chrono::Utc;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Posts queries to a single webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> ChatResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> ChatResult<Self> {
        Self::new(config.webhook_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one query and classifies whatever comes back. Never retries and
    /// never fails: transport errors become [`Reply::Network`].
    pub async fn send_query(&self, query: &str) -> Reply {
        let start_time = Instant::now();

        let (status, reply) = match self.exchange(query).await {
            Ok((status, body)) => (status, classify(status, &body)),
            Err(e) => (
                e.status().map(|s| s.as_u16()).unwrap_or(0),
                Reply::Network(describe_transport_error(&e)),
            ),
        };

        log_exchange(&ExchangeLog {
            timestamp: Utc::now(),
            endpoint: self.url.clone(),
            request_summary: format!("query ({} chars)", query.chars().count()),
            response_status: status,
            response_time_ms: start_time.elapsed().as_millis(),
            outcome: reply.label().to_string(),
        });

        reply
    }

    async fn exchange(&self, query: &str) -> Result<(u16, String), reqwest::Error> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status.as_u16(), String::new()));
        }

        let body = response.text().await?;
        Ok((status.as_u16(), body))
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "could not connect"
    } else if err.is_body() || err.is_decode() {
        "failed to read response body"
    } else {
        "request failed"
    };
    log::error!("Error sending message: {} ({})", err, kind);
    format!("{} ({})", err, kind)
}
