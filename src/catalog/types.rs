//! Catalog Data Types
//!
//! Raw entry shapes as the remote catalog serves them, plus the normalizer
//! that turns them into internal records.

use serde::Deserialize;

use crate::search::types::Record;

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_AUTHOR: &str = "Unknown Artist";

/// One candidate entry as returned by the catalog's search endpoint.
///
/// Only the numeric collection identifier is required; every string field
/// may be absent or null in the wire payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "collectionId")]
    pub collection_id: u64,
    #[serde(rename = "collectionName")]
    pub collection_name: Option<String>,
    #[serde(rename = "artistName")]
    pub artist_name: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Option<String>,
    #[serde(rename = "feedUrl")]
    pub feed_url: Option<String>,
    #[serde(rename = "collectionViewUrl")]
    pub collection_view_url: Option<String>,
}

/// Top-level search response payload.
#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// Maps a raw catalog entry into the internal record shape. Total: every
/// missing optional field gets its documented default, and `description` is
/// always empty since no catalog field maps to it.
pub fn normalize(entry: CatalogEntry) -> Record {
    Record {
        id: entry.collection_id.to_string(),
        title: entry
            .collection_name
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: entry
            .artist_name
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        image_url: entry.artwork_url.unwrap_or_default(),
        description: String::new(),
        feed_url: entry.feed_url.unwrap_or_default(),
        external_url: entry.collection_view_url.unwrap_or_default(),
    }
}
