//! User Library Module
//!
//! Two independently managed membership sets ("saved" and "favourite")
//! living alongside the search results but never derived from them.
//!
//! ## Responsibilities
//! - **Membership**: Idempotent add/remove keyed by record identity; append
//!   order is the only ordering promised.
//! - **Publication**: Every mutation is immediately visible to observers of
//!   the shelf's published state.
//! - **API**: Exposing the shelf commands via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`shelf`**: The deduplicated, observable record collection.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod shelf;
