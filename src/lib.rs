//! Podcast Catalog Search Service Library
//!
//! This library crate defines the core modules of the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`catalog`**: The remote catalog boundary. Defines the asynchronous
//!   lookup contract, the iTunes Search API client, and the normalizer that
//!   maps raw catalog entries into the internal record shape.
//! - **`search`**: The filter/sort pipeline. Contains the domain types
//!   (`Record`, `SortKey`), the structural and pattern predicates, and the
//!   stable sort over the selected field.
//! - **`library`**: The user library. Two independently managed shelves
//!   ("saved" and "favourite") with idempotent add/remove keyed by record
//!   identity, published as observable state.
//! - **`orchestrator`**: The coordination layer. A state machine that drives
//!   the asynchronous catalog fetch through the pipeline and publishes the
//!   refined results, discarding completions that arrive out of order.

pub mod catalog;
pub mod library;
pub mod orchestrator;
pub mod search;
