use tokio::sync::watch;

use crate::search::types::Record;

/// A named, deduplicated collection of records published as observable
/// state.
///
/// Members are unique by `id`; insertion order is preserved for
/// presentation. A shelf starts empty, is mutated only through
/// [`add`](Shelf::add)/[`remove`](Shelf::remove), and is never cleared
/// automatically.
pub struct Shelf {
    name: &'static str,
    records: watch::Sender<Vec<Record>>,
}

impl Shelf {
    pub fn new(name: &'static str) -> Self {
        let (records, _) = watch::channel(Vec::new());
        Self { name, records }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Appends the record unless a member with the same `id` is already
    /// present. Returns whether the shelf changed; observers see the change
    /// before this returns.
    pub fn add(&self, record: Record) -> bool {
        let id = record.id.clone();
        let changed = self.records.send_if_modified(|records| {
            if records.iter().any(|member| member.id == record.id) {
                return false;
            }
            records.push(record);
            true
        });
        if changed {
            tracing::debug!(shelf = self.name, id = %id, "record added");
        }
        changed
    }

    /// Removes any member with the matching `id`; no-op if absent. Returns
    /// whether the shelf changed.
    pub fn remove(&self, id: &str) -> bool {
        let changed = self.records.send_if_modified(|records| {
            let before = records.len();
            records.retain(|member| member.id != id);
            records.len() != before
        });
        if changed {
            tracing::debug!(shelf = self.name, id, "record removed");
        }
        changed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.borrow().iter().any(|member| member.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// The latest published members, in append order.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Observer handle; readers always see the most recent publish.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Record>> {
        self.records.subscribe()
    }
}
