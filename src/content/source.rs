//! Where the primary home content document comes from.

use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::HomeContent;
use crate::dom::Document;
use crate::error::{ContentError, Result};
use crate::page::ids;

/// Path of the home content document, relative to the page origin.
pub const HOME_CONTENT_PATH: &str = "data/home.json";

/// A provider of the primary home content document.
#[async_trait]
pub trait ContentSource: Debug + Send + Sync {
    /// Retrieve and parse the document.
    async fn fetch(&self) -> Result<HomeContent>;

    /// Human-readable location for log lines.
    fn location(&self) -> String;
}

/// Fetches [`HOME_CONTENT_PATH`] relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpContentSource {
    /// Create a source for `base` (the page origin).
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base)?;
        let url = base.join(HOME_CONTENT_PATH)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// The resolved document URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<HomeContent> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(HomeContent::from_json(&body)?)
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the document from a file.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch(&self) -> Result<HomeContent> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(HomeContent::from_json(&body)?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse the copy of the home content embedded in the page markup.
pub fn embedded_content(doc: &Document) -> Result<HomeContent> {
    let node = doc
        .element_by_id(ids::HOME_DATA)
        .ok_or(ContentError::EmbeddedMissing(ids::HOME_DATA))?;
    let json = doc.text(node).unwrap_or_default();
    Ok(HomeContent::from_json(json)?)
}
