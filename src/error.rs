use thiserror::Error;

/// Why a folder listing could not be obtained. A missing folder is not an
/// error: the fetcher reports it as an empty listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("contents API rate limit hit (HTTP {status})")]
    RateLimited { status: u16, reset_at: Option<u64> },
    #[error("contents API error: {status} {reason}")]
    Remote { status: u16, reason: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected listing payload: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited { .. })
    }

    /// Text shown inside the gallery's error placeholder.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::RateLimited { reset_at: Some(ts), .. } => format!(
                "Rate limit exceeded, retry later (limit resets at unix time {})",
                ts
            ),
            FetchError::RateLimited { .. } => "Rate limit exceeded, retry later".to_string(),
            FetchError::Remote { status, reason } if reason.is_empty() => {
                format!("API error: {}", status)
            }
            FetchError::Remote { status, reason } => format!("API error: {} {}", status, reason),
            FetchError::Network(detail) => format!("Network error: {}", detail),
            FetchError::Decode(detail) => format!("Unexpected response from API: {}", detail),
        }
    }
}
