use serde::Deserialize;

use crate::search::types::{Record, SortKey};

/// Lifecycle of one search cycle.
///
/// A cycle leaves `Idle` when issued, spends the catalog lookup in
/// `Fetching`, runs the local refine in `Publishing`, and is back to `Idle`
/// once it published or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Fetching,
    Publishing,
}

/// One search command as accepted from the presentation layer.
///
/// The term goes to the catalog verbatim. The pattern is optional; the sort
/// key defaults to title ascending and only affects this cycle's output
/// (re-sorting requires issuing a new command).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub term: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

/// The published results snapshot, replaced wholesale on every completed
/// cycle. `sequence` records the issue order of the cycle that produced it,
/// which is what lets stale completions be rejected.
#[derive(Debug, Clone, Default)]
pub struct ResultsSnapshot {
    pub sequence: u64,
    pub records: Vec<Record>,
}
