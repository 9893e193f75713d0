//! Union merger - concatenates extractor outputs into the final timeline
//!
//! Rows are independent, so the merge is a set union rather than a
//! structural join. A row is a duplicate only when every field matches.

use ahash::AHashSet;
use flatline_domain::FlattenedEvent;

/// Deduplicating union over the extractor row sets
pub struct UnionMerger;

impl UnionMerger {
    /// Concatenate the given row sets, dropping full-row duplicates.
    ///
    /// First occurrence wins and insertion order is preserved, but no
    /// ordering guarantee is part of the contract - consumers sort
    /// explicitly when order matters.
    pub fn merge(row_sets: Vec<Vec<FlattenedEvent>>) -> Vec<FlattenedEvent> {
        let mut seen: AHashSet<FlattenedEvent> = AHashSet::new();
        let mut merged = Vec::new();

        for rows in row_sets {
            for row in rows {
                if seen.insert(row.clone()) {
                    merged.push(row);
                }
            }
        }

        merged
    }
}
