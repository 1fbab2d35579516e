use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use super::service::SearchOrchestrator;
use super::types::SearchRequest;
use crate::search::types::Record;

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub count: usize,
    pub results: Vec<Record>,
}

/// Runs one full search cycle, then replies with whatever snapshot is
/// published once the cycle has finished. A failed lookup is not an HTTP
/// error; the reply simply carries the empty results it published.
pub async fn handle_search(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
    Json(request): Json<SearchRequest>,
) -> Json<ResultsResponse> {
    let cycle = orchestrator.search(request);
    if let Err(err) = cycle.await {
        tracing::error!(%err, "search cycle aborted");
    }

    Json(results_response(&orchestrator))
}

pub async fn handle_results(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
) -> Json<ResultsResponse> {
    Json(results_response(&orchestrator))
}

fn results_response(orchestrator: &SearchOrchestrator) -> ResultsResponse {
    let results = orchestrator.current_results();
    ResultsResponse {
        count: results.len(),
        results,
    }
}
