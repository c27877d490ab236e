use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::configuration::EnrichmentSettings;

/// User agent presented to target websites.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; VentureLensBot/1.0)";

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch website: request timed out.")]
    Timeout,
    #[error("Failed to fetch website: site unreachable.")]
    Unreachable,
    #[error("Failed to fetch website (HTTP {0}).")]
    BadStatus(u16),
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(settings: &EnrichmentSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.fetch_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client.");
        Self { client }
    }

    /// Raw HTML of the page at `website`. Any transport problem maps to a
    /// [`FetchError`], including non-2xx statuses.
    pub async fn fetch_page(&self, website: &str) -> Result<String, FetchError> {
        let host = log_host(website);
        log::info!("Fetching content for host: {}", host);

        let response = match self.client.get(website).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                log::error!("Request to {} timed out", host);
                return Err(FetchError::Timeout);
            }
            Err(e) => {
                log::error!("Request to {} failed: {}", host, e);
                return Err(FetchError::Unreachable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::error!("Host {} answered HTTP {}", host, status.as_u16());
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) if e.is_timeout() => Err(FetchError::Timeout),
            Err(_) => Err(FetchError::Unreachable),
        }
    }
}

/// Host component for log lines, falling back to the raw input when it does
/// not parse as a URL. Full untrusted URLs stay out of the logs.
pub fn log_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| url.to_string())
}
