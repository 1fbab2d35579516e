use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::types::{ResultsSnapshot, SearchPhase, SearchRequest};
use crate::catalog::client::Catalog;
use crate::catalog::types::normalize;
use crate::library::shelf::Shelf;
use crate::search::filter::{self, PatternFilter};
use crate::search::sort::sort_records;
use crate::search::types::Record;

/// Coordinates the query pipeline and owns all published state.
///
/// The orchestrator is the sole writer of the results snapshot; the shelves
/// are written only through the membership commands. One instance per
/// composition root: construct it where the presentation layer is wired.
pub struct SearchOrchestrator {
    catalog: Arc<dyn Catalog>,
    results: watch::Sender<ResultsSnapshot>,
    saved: Shelf,
    favourite: Shelf,
    issued: AtomicU64,
}

impl SearchOrchestrator {
    pub fn new(catalog: Arc<dyn Catalog>) -> Arc<Self> {
        let (results, _) = watch::channel(ResultsSnapshot::default());
        Arc::new(Self {
            catalog,
            results,
            saved: Shelf::new("saved"),
            favourite: Shelf::new("favourite"),
            issued: AtomicU64::new(0),
        })
    }

    /// Issues an independent search cycle and returns its handle.
    ///
    /// The caller is not blocked; the cycle fetches, refines, and publishes
    /// on its own task. Overlapping cycles are permitted; each is tagged
    /// with a sequence number at issue time, and the publish step rejects
    /// completions older than what is already published.
    pub fn search(&self, request: SearchRequest) -> JoinHandle<()> {
        let sequence = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        let catalog = Arc::clone(&self.catalog);
        let results = self.results.clone();
        tokio::spawn(async move { run_cycle(catalog, results, sequence, request).await })
    }

    /// Observer handle for the results snapshot; readers always see the
    /// most recent publish.
    pub fn observe_results(&self) -> watch::Receiver<ResultsSnapshot> {
        self.results.subscribe()
    }

    /// The currently published results, in their published order.
    pub fn current_results(&self) -> Vec<Record> {
        self.results.borrow().records.clone()
    }

    pub fn saved(&self) -> &Shelf {
        &self.saved
    }

    pub fn favourite(&self) -> &Shelf {
        &self.favourite
    }

    pub fn add_to_saved(&self, record: Record) -> bool {
        self.saved.add(record)
    }

    pub fn remove_from_saved(&self, id: &str) -> bool {
        self.saved.remove(id)
    }

    pub fn add_to_favourite(&self, record: Record) -> bool {
        self.favourite.add(record)
    }

    pub fn remove_from_favourite(&self, id: &str) -> bool {
        self.favourite.remove(id)
    }
}

/// One full search cycle: fetch, normalize, filter, sort, publish. A failed
/// lookup resets the published results to empty; the log carries the
/// failure detail, observers only ever see the empty set.
async fn run_cycle(
    catalog: Arc<dyn Catalog>,
    results: watch::Sender<ResultsSnapshot>,
    sequence: u64,
    request: SearchRequest,
) {
    tracing::debug!(
        sequence,
        term = %request.term,
        phase = ?SearchPhase::Fetching,
        "dispatching catalog lookup"
    );

    let entries = match catalog.lookup(&request.term).await {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(
                sequence,
                term = %request.term,
                %err,
                "catalog lookup failed, resetting results"
            );
            publish(&results, sequence, Vec::new());
            return;
        }
    };

    tracing::debug!(
        sequence,
        candidates = entries.len(),
        phase = ?SearchPhase::Publishing,
        "refining candidates"
    );

    let pattern = PatternFilter::compile(request.pattern.as_deref());
    let mut records: Vec<Record> = entries.into_iter().map(normalize).collect();
    records.retain(|record| filter::passes(record, &pattern));
    sort_records(&mut records, request.sort);

    tracing::info!(
        sequence,
        term = %request.term,
        results = records.len(),
        "search complete"
    );
    publish(&results, sequence, records);
}

/// Replaces the published snapshot wholesale, unless a cycle issued later
/// has already published, in which case this completion is stale and is
/// dropped.
/// The comparison and the swap happen under the channel's own lock, so
/// observers never see a partial or out-of-order update.
fn publish(results: &watch::Sender<ResultsSnapshot>, sequence: u64, records: Vec<Record>) {
    let published = results.send_if_modified(|snapshot| {
        if sequence < snapshot.sequence {
            return false;
        }
        snapshot.sequence = sequence;
        snapshot.records = records;
        true
    });

    if published {
        tracing::debug!(sequence, phase = ?SearchPhase::Idle, "cycle finished");
    } else {
        tracing::debug!(
            sequence,
            phase = ?SearchPhase::Idle,
            "stale completion discarded"
        );
    }
}
