use regex::{Regex, RegexBuilder};

use super::types::Record;

/// Minimum number of space-separated title tokens a record needs to pass the
/// structural rule. Fixed heuristic, not configurable.
const MIN_TITLE_WORDS: usize = 6;

/// Compiled form of the optional user-supplied pattern.
///
/// An absent or empty pattern matches every record. A pattern that fails to
/// compile matches no record at all; the failure is logged and swallowed so
/// a bad pattern can never abort a search.
#[derive(Debug)]
pub enum PatternFilter {
    Absent,
    Compiled(Regex),
    Invalid,
}

impl PatternFilter {
    pub fn compile(pattern: Option<&str>) -> Self {
        let pattern = match pattern {
            None => return PatternFilter::Absent,
            Some(p) if p.is_empty() => return PatternFilter::Absent,
            Some(p) => p,
        };

        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => PatternFilter::Compiled(regex),
            Err(err) => {
                tracing::warn!(pattern, %err, "pattern failed to compile, matching nothing");
                PatternFilter::Invalid
            }
        }
    }

    /// True when the pattern rule holds for this record: a compiled pattern
    /// must match anywhere within the title or the author.
    pub fn accepts(&self, record: &Record) -> bool {
        match self {
            PatternFilter::Absent => true,
            PatternFilter::Compiled(regex) => {
                regex.is_match(&record.title) || regex.is_match(&record.author)
            }
            PatternFilter::Invalid => false,
        }
    }
}

/// Structural rule: the title must split into at least [`MIN_TITLE_WORDS`]
/// tokens on single spaces.
fn has_substantial_title(record: &Record) -> bool {
    record.title.split(' ').count() >= MIN_TITLE_WORDS
}

/// A record passes the filter only if both the structural rule and the
/// pattern rule are satisfied.
pub fn passes(record: &Record, pattern: &PatternFilter) -> bool {
    has_substantial_title(record) && pattern.accepts(record)
}
