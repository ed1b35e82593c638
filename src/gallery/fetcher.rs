use super::types::RemoteEntry;
use crate::config::SiteConfig;
use crate::error::FetchError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};

const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Anything that can list the entries of a remote folder.
#[async_trait]
pub trait FolderSource: Send + Sync {
    async fn fetch_folder(&self, folder_path: &str) -> Result<Vec<RemoteEntry>, FetchError>;
}

/// Lists folders through a hosted repository's contents API.
pub struct ContentsApiFetcher {
    client: Client,
    api_base: String,
}

#[derive(Debug, PartialEq, Eq)]
enum StatusOutcome {
    Listing,
    Missing,
}

impl ContentsApiFetcher {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("folio-gallery/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Failed to create HTTP client")?,
            api_base: config.api_base(),
        })
    }

    pub fn folder_url(&self, folder_path: &str) -> String {
        format!("{}/{}", self.api_base, folder_path.trim_matches('/'))
    }
}

#[async_trait]
impl FolderSource for ContentsApiFetcher {
    async fn fetch_folder(&self, folder_path: &str) -> Result<Vec<RemoteEntry>, FetchError> {
        let url = self.folder_url(folder_path);
        tracing::debug!("Fetching from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(describe_transport_error(&e)))?;

        let status = response.status();
        match classify_status(status, response.headers())? {
            StatusOutcome::Missing => {
                tracing::info!("Folder {:?} not found, treating as empty", folder_path);
                return Ok(Vec::new());
            }
            StatusOutcome::Listing => {}
        }

        let entries: Vec<RemoteEntry> = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Network(describe_transport_error(&e))
            }
        })?;

        tracing::debug!("Listed {} entries in {}/", entries.len(), folder_path);
        Ok(entries)
    }
}

fn classify_status(status: StatusCode, headers: &HeaderMap) -> Result<StatusOutcome, FetchError> {
    if status.is_success() {
        return Ok(StatusOutcome::Listing);
    }
    match status {
        StatusCode::NOT_FOUND => Ok(StatusOutcome::Missing),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            let reset_at = headers
                .get(RATE_LIMIT_RESET)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            tracing::warn!(
                "Contents API rate limit may be exceeded. Status: {}",
                status.as_u16()
            );
            Err(FetchError::RateLimited {
                status: status.as_u16(),
                reset_at,
            })
        }
        _ => Err(FetchError::Remote {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }),
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("could not connect: {}", err)
    } else {
        err.to_string()
    }
}
