use thiserror::Error;

/// Failure to retrieve the raw CSV export.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, TLS or body-decoding failure from the underlying HTTP client.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// HTTP status code carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            FetchError::InvalidUrl { .. } => None,
        }
    }
}

/// Terminal outcome of one catalog load attempt.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch catalog: {0}")]
    Fetch(#[from] FetchError),

    /// The source had no data rows, or none of the recognised columns.
    #[error("catalog source produced no products")]
    EmptyCatalog,
}
