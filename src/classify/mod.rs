//! Per-record predicates and the catalog passes built on them.
//!
//! - [`monochrome`]: single-distribution unsigs whose layers are uniform or
//!   repeat one colour group.
//! - [`noliner`]: unsigs whose per-channel multiplier totals stay at or below 1.

pub mod monochrome;
pub mod noliner;

pub use monochrome::{
    classify_monochromes, explain_monochrome, is_monochrome, MonochromeRule, RepeatPattern,
};
pub use noliner::{channel_totals, classify_no_liners, is_no_liner, ChannelTotals};

use crate::error::ClassifyError;

/// Outcome of a record predicate.
///
/// A record with missing or malformed fields is a `NoMatch`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
}

impl Verdict {
    pub fn is_match(self) -> bool {
        self == Verdict::Match
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

/// Convert a catalog key into the numeric identifier written to output files.
pub fn parse_id(key: &str) -> Result<u64, ClassifyError> {
    key.trim()
        .parse::<u64>()
        .map_err(|_| ClassifyError::InvalidIdentifier(key.to_string()))
}
