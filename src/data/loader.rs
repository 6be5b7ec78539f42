use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use super::model::Dataset;

/// Where the reference dataset lives.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request Failed! (HTTP {status})")]
    RequestFailed { status: StatusCode },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the dataset with a single GET. No retries.
///
/// Expected body:
///
/// ```json
/// {
///   "baseTemperature": 8.66,
///   "monthlyVariance": [
///     { "year": 1753, "month": 1, "variance": -1.366 },
///     ...
///   ]
/// }
/// ```
pub fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    fetch_with(&client, url)
}

fn fetch_with(client: &Client, url: &str) -> Result<Dataset, LoadError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::RequestFailed { status });
    }

    let body = response.text()?;
    parse_dataset(&body)
}

/// Load the same JSON document from disk.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&text)
}

pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    Ok(serde_json::from_str(text)?)
}

// ---------------------------------------------------------------------------
// Source selection
// ---------------------------------------------------------------------------

/// Where a load request reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(std::path::PathBuf),
}

impl Source {
    pub fn load(&self) -> Result<Dataset, LoadError> {
        match self {
            Source::Url(url) => fetch_dataset(url),
            Source::File(path) => load_file(path),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DATASET_URL.to_string())
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
