use super::types::{Record, SortKey};

/// Orders records in place by the selected field and direction.
///
/// The comparison key is the lower-cased field value; the underlying sort is
/// stable, so records with equal keys keep their relative input order in
/// both directions.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    records.sort_by(|a, b| {
        let ordering = key
            .field(a)
            .to_lowercase()
            .cmp(&key.field(b).to_lowercase());
        if key.is_descending() {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
