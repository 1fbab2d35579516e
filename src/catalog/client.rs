use async_trait::async_trait;
use thiserror::Error;

use super::types::{CatalogEntry, SearchPayload};

pub const DEFAULT_CATALOG_URL: &str = "https://itunes.apple.com";

/// The single error kind at the catalog boundary. Network failures,
/// non-success statuses, and payload decode failures are indistinguishable
/// to callers.
#[derive(Debug, Error)]
#[error("catalog unavailable: {reason}")]
pub struct CatalogUnavailable {
    reason: String,
}

impl CatalogUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for CatalogUnavailable {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Contract for one remote lookup by search term.
///
/// The term is passed verbatim; no trimming, case-folding, or validation
/// happens on this side of the boundary. Implementations perform no retries
/// and impose no timeout of their own.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<Vec<CatalogEntry>, CatalogUnavailable>;
}

/// Catalog client backed by the iTunes Search API.
pub struct ItunesCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl ItunesCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ItunesCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl Catalog for ItunesCatalog {
    async fn lookup(&self, term: &str) -> Result<Vec<CatalogEntry>, CatalogUnavailable> {
        let url = format!("{}/search", self.base_url);
        let payload: SearchPayload = self
            .http
            .get(url)
            .query(&[("media", "podcast"), ("term", term)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload.results)
    }
}
