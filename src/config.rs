use crate::constants::DEFAULT_WEBHOOK_URL;
use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock, time::Duration};

pub const URL_ENV_VAR: &str = "WEBHOOK_CHAT_URL";
pub const LOG_LEVEL_ENV_VAR: &str = "WEBHOOK_CHAT_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub webhook_url: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (creating it with defaults when absent), applies
/// environment overrides and installs the result as the global config.
pub fn initialize_config() -> ChatResult<()> {
    dotenv::dotenv().ok();

    let config_path = get_config_path()?;
    let config = load_config_from(&config_path)?;
    let config = apply_overrides(
        config,
        env::var(URL_ENV_VAR).ok(),
        env::var(LOG_LEVEL_ENV_VAR).ok(),
    );
    install_config(config)
}

/// Validates `config` and makes it the one returned by [`get_config`].
pub fn install_config(config: Config) -> ChatResult<()> {
    validate_config(&config)?;
    *CONFIG.write().unwrap_or_else(|e| e.into_inner()) = config;
    Ok(())
}

pub fn load_config_from(path: &Path) -> ChatResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let config = Config::default();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ChatError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)?;
        fs::write(path, config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }
}

pub fn apply_overrides(mut config: Config, url: Option<String>, log_level: Option<String>) -> Config {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        config.webhook_url = url.trim().to_string();
    }
    if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
        config.log_level = level.trim().to_lowercase();
    }
    config
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("webhook-chat").join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = reqwest::Url::parse(&config.webhook_url)
        .map_err(|e| ChatError::config_error(format!("Invalid webhook URL: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ChatError::config_error(format!(
            "Webhook URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ChatError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ChatError::config_error(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_non_http_scheme() {
        let config = Config {
            webhook_url: "ftp://example.com/hook".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_garbage_url() {
        let config = Config {
            webhook_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: Some(0),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_unknown_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_writes_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = load_config_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
        let written: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_load_config_reads_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "webhook_url": "http://localhost:5678/webhook/chat", "request_timeout_secs": 30 }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.webhook_url, "http://localhost:5678/webhook/chat");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_config_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_installed_config_is_returned_by_get_config() {
        let config = Config {
            webhook_url: "http://127.0.0.1:5678/webhook/installed".to_string(),
            request_timeout_secs: Some(15),
            ..Config::default()
        };

        install_config(config.clone()).unwrap();
        assert_eq!(get_config(), config);

        let invalid = Config {
            webhook_url: "ftp://nowhere".to_string(),
            ..Config::default()
        };
        assert!(install_config(invalid).is_err());
        assert_eq!(get_config(), config);
    }

    #[test]
    fn test_overrides_replace_non_empty_values_only() {
        let config = apply_overrides(
            Config::default(),
            Some(" http://127.0.0.1:9000/hook ".to_string()),
            Some("".to_string()),
        );
        assert_eq!(config.webhook_url, "http://127.0.0.1:9000/hook");
        assert_eq!(config.log_level, "info");

        let config = apply_overrides(config, None, Some("DEBUG".to_string()));
        assert_eq!(config.log_level, "debug");
    }
}
