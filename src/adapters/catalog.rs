use crate::domain::model::Service;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{BookingError, Result};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Catalog served over HTTP(S) as a JSON array.
pub struct HttpCatalogSource {
    endpoint: String,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Service>> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            return Err(BookingError::CatalogUnavailable {
                reason: format!("HTTP {}", response.status()),
            });
        }

        Ok(response.json::<Vec<Service>>().await?)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Catalog read from a JSON file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Service>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// `http://` and `https://` locations go over the network, anything else is
/// treated as a file path.
pub fn catalog_source_for(source: &str, timeout: Duration) -> Result<Box<dyn CatalogSource>> {
    if is_http_source(source) {
        Ok(Box::new(HttpCatalogSource::new(source, timeout)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(source)))
    }
}
