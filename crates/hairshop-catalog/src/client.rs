//! HTTP client for a spreadsheet's published CSV export.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FetchError;

/// Thin wrapper over `reqwest` that fetches one CSV document per call.
///
/// There is no retry and no caching: every call is exactly one GET. Request
/// timeouts are a property of the transport and are fixed when the client is
/// built.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Performs a single GET against `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` does not parse.
    /// - [`FetchError::Status`] for any non-2xx response.
    /// - [`FetchError::Transport`] on network failure or an undecodable body.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::debug!(%url, "fetching catalog CSV");

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/csv,text/plain;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog fetch rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(%url, bytes = body.len(), "catalog CSV received");
        Ok(body)
    }
}
