use std::time::Duration;

use reqwest::Client;

use crate::error::{MetadataError, Result};

pub const USER_AGENT_VAR: &str = "HTML_METADATA_USER_AGENT";
pub const TIMEOUT_VAR: &str = "HTML_METADATA_TIMEOUT_SECS";

const DEFAULT_USER_AGENT: &str = concat!("html-metadata/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(ua) = std::env::var(USER_AGENT_VAR) {
            if !ua.trim().is_empty() {
                cfg.user_agent = ua;
            }
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_VAR) {
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = Duration::from_secs(parsed);
            }
        }
        cfg
    }
}

pub fn client(cfg: &FetchConfig) -> Result<Client> {
    Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(cfg.timeout)
        .build()
        .map_err(|e| MetadataError::invalid(format!("cannot build HTTP client: {e}")))
}

/// GETs `url` and returns the body; non-2xx statuses are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|e| MetadataError::invalid(format!("bad url {url:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(MetadataError::invalid(format!("unsupported scheme: {}", parsed.scheme())));
    }
    let fetch_err = |source| MetadataError::Fetch { url: url.to_string(), source };
    let text = client
        .get(parsed)
        .send()
        .await
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?
        .text()
        .await
        .map_err(fetch_err)?;
    Ok(text)
}
