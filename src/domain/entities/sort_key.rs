//! Supported orderings for the website listing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::website::Website;

/// Field a website listing is ordered by (always ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RelevanceScore,
    Views,
}

impl SortKey {
    /// Wire name used in the `sortKey` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RelevanceScore => "relevanceScore",
            Self::Views => "views",
        }
    }

    /// Compares two websites by this key only. There is no secondary key.
    pub fn compare(self, a: &Website, b: &Website) -> Ordering {
        match self {
            Self::RelevanceScore => a.relevance_score.total_cmp(&b.relevance_score),
            Self::Views => a.views.cmp(&b.views),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevanceScore" => Ok(Self::RelevanceScore),
            "views" => Ok(Self::Views),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
