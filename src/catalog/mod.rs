//! Catalog Module
//!
//! The boundary to the remote podcast catalog (the iTunes Search API).
//!
//! ## Workflow
//! 1. **Lookup**: Fetches candidate entries for a free-text term over HTTP.
//! 2. **Decode**: Deserializes the catalog's JSON payload into raw entries.
//! 3. **Normalize**: Maps each raw entry into the internal [`Record`] shape,
//!    substituting defaults for missing optional fields.
//!
//! Transport, status, and decode failures all fold into the single
//! [`CatalogUnavailable`] error kind at this boundary; the client performs no
//! retries of its own.
//!
//! [`Record`]: crate::search::types::Record
//! [`CatalogUnavailable`]: client::CatalogUnavailable

pub mod client;
pub mod types;
