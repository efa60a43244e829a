//! Dataset Loader
//!
//! Fetches the static company list once, over HTTP or from disk. A payload
//! that is not a complete array of records fails the whole load; nothing is
//! ever returned partially.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::LOAD_TIMEOUT_SECS;
use crate::domain::company::CompanyRecord;
use crate::error::{Error, Result};

/// Where the dataset lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    /// `http://` or `https://` URL
    Url(String),
    /// Local JSON file
    File(PathBuf),
}

impl DatasetSource {
    /// URLs are recognized by scheme; anything else is a path
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decode a dataset payload
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<CompanyRecord>> {
    serde_json::from_slice(bytes).map_err(|source| Error::Parse { source })
}

/// Load the full dataset from `source`
pub async fn load(source: &DatasetSource) -> Result<Vec<CompanyRecord>> {
    tracing::info!("Loading dataset from {}", source);
    let bytes = match source {
        DatasetSource::Url(url) => fetch(url).await?,
        DatasetSource::File(path) => tokio::fs::read(path).await.map_err(|e| Error::Load {
            message: format!("{}: {e}", path.display()),
        })?,
    };

    let records = parse_dataset(&bytes)?;
    tracing::info!("Loaded {} companies from {}", records.len(), source);
    Ok(records)
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(LOAD_TIMEOUT_SECS))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Load {
            message: format!("HTTP error! status: {status}"),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
