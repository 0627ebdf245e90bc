// 🏆 Rank-and-truncate - shared by every "top five" list
//
// Zip names with counts, order by count (highest first), keep the head.
// The sort is stable, so equal counts stay in first-occurrence order.

use serde::{Deserialize, Serialize};

/// Longest ranking any top list returns
pub const TOP_RANKING_SIZE: usize = 5;

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        RankedEntry {
            name: name.into(),
            count,
        }
    }
}

/// Rank parallel name/count sequences and keep the top five.
///
/// Names and counts correspond by index. If one side is longer, its
/// extra elements are ignored.
pub fn rank_top_five<N>(
    names: impl IntoIterator<Item = N>,
    counts: impl IntoIterator<Item = usize>,
) -> Vec<RankedEntry>
where
    N: Into<String>,
{
    let entries = names
        .into_iter()
        .zip(counts)
        .map(|(name, count)| RankedEntry::new(name, count))
        .collect();

    rank_entries(entries, TOP_RANKING_SIZE)
}

/// Order entries by count, highest first, and keep at most `limit`.
///
/// Takes ownership of `entries`; ties keep their incoming order.
pub fn rank_entries(mut entries: Vec<RankedEntry>, limit: usize) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
