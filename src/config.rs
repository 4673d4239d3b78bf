use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub base_url: String,
    pub page_limit: u32,
    pub project_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("SNYK_TOKEN")
            .map_err(|_| Error::Config("SNYK_TOKEN environment variable not set".to_string()))?;

        let base_url =
            env::var("SNYK_API_URL").unwrap_or_else(|_| "https://api.snyk.io".to_string());

        let page_limit = env::var("SNYK_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let project_delay_ms = env::var("SNYK_PROJECT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            api_token,
            base_url,
            page_limit,
            project_delay_ms,
        })
    }
}

/// Traversal knobs, decoupled from how they were supplied.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub group_id: Option<String>,
    pub project_delay: Duration,
}

impl From<&Config> for WalkerConfig {
    fn from(config: &Config) -> Self {
        Self {
            group_id: None,
            project_delay: Duration::from_millis(config.project_delay_ms),
        }
    }
}
