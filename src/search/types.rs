use serde::{Deserialize, Serialize};

/// A normalized catalog entry.
///
/// Immutable once constructed; `id` carries the catalog's native numeric
/// identifier in decimal form and is never empty. Missing source fields are
/// substituted at normalization time, so every field here is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub description: String,
    pub feed_url: String,
    pub external_url: String,
}

/// Field/direction pair selecting how search results are ordered.
///
/// Comparison is case-insensitive lexicographic on the chosen field. The
/// default mirrors the initial ordering of the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    TitleAscending,
    TitleDescending,
    AuthorAscending,
    AuthorDescending,
}

impl SortKey {
    /// The field this key compares on.
    pub fn field<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SortKey::TitleAscending | SortKey::TitleDescending => &record.title,
            SortKey::AuthorAscending | SortKey::AuthorDescending => &record.author,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortKey::TitleDescending | SortKey::AuthorDescending)
    }
}
