//! Search Pipeline Tests
//!
//! Validates the deterministic filter/sort transformation.
//!
//! ## Test Scopes
//! - **Filter**: The title word-count rule, the optional pattern rule, and
//!   their conjunction, including invalid-pattern degradation.
//! - **Sort**: All four key variants, case-insensitivity, and stability.

#[cfg(test)]
mod tests {
    use crate::search::filter::{self, PatternFilter};
    use crate::search::sort::sort_records;
    use crate::search::types::{Record, SortKey};

    fn record(id: &str, title: &str, author: &str) -> Record {
        Record {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image_url: String::new(),
            description: String::new(),
            feed_url: String::new(),
            external_url: String::new(),
        }
    }

    // ============================================================
    // FILTER TESTS - structural rule
    // ============================================================

    #[test]
    fn test_five_word_title_is_rejected() {
        let record = record("1", "One Two Three Four Five", "Anyone");
        let pattern = PatternFilter::compile(None);

        assert!(!filter::passes(&record, &pattern));
    }

    #[test]
    fn test_six_word_title_passes() {
        let record = record("1", "One Two Three Four Five Six", "Anyone");
        let pattern = PatternFilter::compile(None);

        assert!(filter::passes(&record, &pattern));
    }

    #[test]
    fn test_word_count_splits_on_single_spaces() {
        // Consecutive spaces produce empty tokens that still count.
        let record = record("1", "Alpha  Beta  Gamma Delta", "Anyone");
        let pattern = PatternFilter::compile(None);

        assert!(filter::passes(&record, &pattern));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let record = record("1", "", "Anyone");
        let pattern = PatternFilter::compile(None);

        assert!(!filter::passes(&record, &pattern));
    }

    // ============================================================
    // FILTER TESTS - pattern rule
    // ============================================================

    #[test]
    fn test_empty_pattern_behaves_like_absent() {
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");

        assert!(filter::passes(&record, &PatternFilter::compile(None)));
        assert!(filter::passes(&record, &PatternFilter::compile(Some(""))));
    }

    #[test]
    fn test_pattern_matches_within_title() {
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");
        let pattern = PatternFilter::compile(Some("technology"));

        assert!(filter::passes(&record, &pattern));
    }

    #[test]
    fn test_pattern_matches_within_author() {
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");
        let pattern = PatternFilter::compile(Some("doe"));

        assert!(filter::passes(&record, &pattern));
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");
        let pattern = PatternFilter::compile(Some("TECHNOLOGY"));

        assert!(filter::passes(&record, &pattern));
    }

    #[test]
    fn test_non_matching_pattern_rejects() {
        // Scenario: a 7-word title that passes the structural rule still
        // disappears once the pattern misses both fields.
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");
        let pattern = PatternFilter::compile(Some("xyz"));

        assert!(!filter::passes(&record, &pattern));
    }

    #[test]
    fn test_invalid_pattern_rejects_every_record() {
        let record = record("1", "The Great Big Technology Podcast Show", "Jane Doe");
        let pattern = PatternFilter::compile(Some("[unclosed"));

        assert!(!filter::passes(&record, &pattern));
    }

    #[test]
    fn test_pattern_alone_is_not_enough() {
        // Rule conjunction: a matching pattern cannot rescue a short title.
        let record = record("1", "Tech Talk", "Jane Doe");
        let pattern = PatternFilter::compile(Some("tech"));

        assert!(!filter::passes(&record, &pattern));
    }

    // ============================================================
    // SORT TESTS
    // ============================================================

    #[test]
    fn test_sort_title_ascending() {
        let mut records = vec![
            record("1", "Banana Daily News Report Episode One", "B"),
            record("2", "Apple Morning News Report Episode Two", "A"),
        ];

        sort_records(&mut records, SortKey::TitleAscending);

        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn test_sort_title_descending() {
        let mut records = vec![
            record("2", "Apple Morning News Report Episode Two", "A"),
            record("1", "Banana Daily News Report Episode One", "B"),
        ];

        sort_records(&mut records, SortKey::TitleDescending);

        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_sort_author_ascending() {
        let mut records = vec![
            record("1", "T", "Zoe Smith"),
            record("2", "T", "Adam Jones"),
        ];

        sort_records(&mut records, SortKey::AuthorAscending);

        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn test_sort_author_descending() {
        let mut records = vec![
            record("2", "T", "Adam Jones"),
            record("1", "T", "Zoe Smith"),
        ];

        sort_records(&mut records, SortKey::AuthorDescending);

        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut records = vec![
            record("1", "banana show", "B"),
            record("2", "Apple show", "A"),
        ];

        sort_records(&mut records, SortKey::TitleAscending);

        // "Apple" before "banana" despite the differing case of the first
        // letter.
        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut records = vec![
            record("first", "Same Title", "Same Author"),
            record("second", "same title", "same author"),
            record("third", "SAME TITLE", "SAME AUTHOR"),
        ];

        for key in [
            SortKey::TitleAscending,
            SortKey::TitleDescending,
            SortKey::AuthorAscending,
            SortKey::AuthorDescending,
        ] {
            sort_records(&mut records, key);

            // Equal lower-cased keys keep their relative input order under
            // every key variant.
            assert_eq!(records[0].id, "first");
            assert_eq!(records[1].id, "second");
            assert_eq!(records[2].id, "third");
        }
    }

    #[test]
    fn test_sort_empty_slice() {
        let mut records: Vec<Record> = Vec::new();
        sort_records(&mut records, SortKey::TitleAscending);
        assert!(records.is_empty());
    }

    #[test]
    fn test_sort_key_default_is_title_ascending() {
        assert_eq!(SortKey::default(), SortKey::TitleAscending);
    }
}
