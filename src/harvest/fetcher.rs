//! HTTP fetcher implementation
//!
//! This module downloads book texts from Project Gutenberg:
//! - Building the HTTP client with timeouts and user agent
//! - Building the primary and fallback URLs for a book id
//! - Classifying failed attempts
//! - The two-attempt fallback policy

use crate::config::SourceConfig;
use crate::harvest::{BookId, DocumentSource};
use crate::{AttemptError, FetchError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// Requests are HTTPS-only when the base URL uses `https`. Redirects are
/// followed, since Gutenberg mirrors redirect between hosts.
///
/// # Arguments
///
/// * `config` - The download source configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &SourceConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .https_only(config.base_url.starts_with("https://"))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads the plain text of one URL
///
/// Any non-2xx status is a failure. The response is consumed or dropped
/// before returning on every path.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AttemptError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AttemptError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> AttemptError {
    if error.is_timeout() {
        AttemptError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        AttemptError::Network {
            url: url.to_string(),
            message: format!("connection failed: {}", describe_error(&error)),
        }
    } else {
        AttemptError::Network {
            url: url.to_string(),
            message: describe_error(&error),
        }
    }
}

/// Flattens an error and its source chain into one line
///
/// reqwest's own message only names the URL; the DNS, TLS or socket cause
/// lives further down the chain.
fn describe_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Project Gutenberg as a [`DocumentSource`]
///
/// Each book is tried at `<base>/files/<id>/<id>-0.txt` first, then once at
/// `<base>/cache/epub/<id>/pg<id>.txt`. There is no backoff and no third
/// attempt.
#[derive(Debug, Clone)]
pub struct GutenbergClient {
    client: Client,
    base_url: String,
}

impl GutenbergClient {
    /// Creates a client for the configured mirror
    ///
    /// # Example
    ///
    /// ```
    /// use gutenberg_freq::config::SourceConfig;
    /// use gutenberg_freq::GutenbergClient;
    ///
    /// let client = GutenbergClient::new(&SourceConfig::default()).unwrap();
    /// assert_eq!(client.primary_url(84), "https://www.gutenberg.org/files/84/84-0.txt");
    /// ```
    pub fn new(config: &SourceConfig) -> crate::Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let client = build_http_client(config)?;
        Ok(Self {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// URL tried first for a book
    pub fn primary_url(&self, id: BookId) -> String {
        format!("{}/files/{id}/{id}-0.txt", self.base_url)
    }

    /// URL tried when the primary attempt fails
    pub fn fallback_url(&self, id: BookId) -> String {
        format!("{}/cache/epub/{id}/pg{id}.txt", self.base_url)
    }
}

impl DocumentSource for GutenbergClient {
    async fn fetch(&self, id: BookId) -> Result<String, FetchError> {
        let primary = match fetch_text(&self.client, &self.primary_url(id)).await {
            Ok(body) => return Ok(body),
            Err(e) => e,
        };
        tracing::debug!("Book {}: {}; trying fallback URL", id, primary);

        match fetch_text(&self.client, &self.fallback_url(id)).await {
            Ok(body) => Ok(body),
            Err(fallback) => Err(FetchError::Exhausted {
                id,
                primary,
                fallback,
            }),
        }
    }
}
