use anyhow::Context;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// Where the city polygons come from: fetched over HTTP(S) or read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Remote(Url),
    File(PathBuf),
}

impl DatasetSource {
    pub async fn fetch(&self) -> anyhow::Result<String> {
        match self {
            DatasetSource::Remote(url) => reqwest::get(url.clone())
                .await
                .with_context(|| format!("Failed to request `{url}`."))?
                .error_for_status()
                .with_context(|| format!("`{url}` answered with an error status."))?
                .text()
                .await
                .with_context(|| format!("Failed to read the response body from `{url}`.")),
            DatasetSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read `{}`.", path.display())),
        }
    }
}

impl FromStr for DatasetSource {
    type Err = url::ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Url::parse(raw).map(DatasetSource::Remote)
        } else {
            Ok(DatasetSource::File(PathBuf::from(raw)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Remote(url) => write!(f, "{url}"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
