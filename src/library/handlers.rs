use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::library::shelf::Shelf;
use crate::orchestrator::service::SearchOrchestrator;
use crate::search::types::Record;

#[derive(Debug, Serialize)]
pub struct ShelfSnapshotResponse {
    pub shelf: &'static str,
    pub count: usize,
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct ShelfUpdateResponse {
    pub shelf: &'static str,
    pub id: String,
    pub status: String,
}

pub async fn handle_list_saved(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
) -> Json<ShelfSnapshotResponse> {
    Json(snapshot_response(orchestrator.saved()))
}

pub async fn handle_add_saved(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
    Json(record): Json<Record>,
) -> (StatusCode, Json<ShelfUpdateResponse>) {
    add_to_shelf(orchestrator.saved(), record)
}

pub async fn handle_remove_saved(
    Path(id): Path<String>,
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
) -> (StatusCode, Json<ShelfUpdateResponse>) {
    remove_from_shelf(orchestrator.saved(), id)
}

pub async fn handle_list_favourite(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
) -> Json<ShelfSnapshotResponse> {
    Json(snapshot_response(orchestrator.favourite()))
}

pub async fn handle_add_favourite(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
    Json(record): Json<Record>,
) -> (StatusCode, Json<ShelfUpdateResponse>) {
    add_to_shelf(orchestrator.favourite(), record)
}

pub async fn handle_remove_favourite(
    Path(id): Path<String>,
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
) -> (StatusCode, Json<ShelfUpdateResponse>) {
    remove_from_shelf(orchestrator.favourite(), id)
}

fn snapshot_response(shelf: &Shelf) -> ShelfSnapshotResponse {
    let records = shelf.snapshot();
    ShelfSnapshotResponse {
        shelf: shelf.name(),
        count: records.len(),
        records,
    }
}

fn add_to_shelf(shelf: &Shelf, record: Record) -> (StatusCode, Json<ShelfUpdateResponse>) {
    let id = record.id.clone();

    // Records arriving over the wire are not guaranteed to have been
    // normalized; an empty id would break membership identity.
    if id.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ShelfUpdateResponse {
                shelf: shelf.name(),
                id,
                status: "invalid_record".to_string(),
            }),
        );
    }

    let (code, status) = if shelf.add(record) {
        (StatusCode::CREATED, "added")
    } else {
        (StatusCode::OK, "already_present")
    };

    (
        code,
        Json(ShelfUpdateResponse {
            shelf: shelf.name(),
            id,
            status: status.to_string(),
        }),
    )
}

fn remove_from_shelf(shelf: &Shelf, id: String) -> (StatusCode, Json<ShelfUpdateResponse>) {
    let status = if shelf.remove(&id) {
        "removed"
    } else {
        "not_present"
    };

    (
        StatusCode::OK,
        Json(ShelfUpdateResponse {
            shelf: shelf.name(),
            id,
            status: status.to_string(),
        }),
    )
}
