use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use trifuzz_ir::PathSignature;

/// Path-level coverage bookkeeping for one run.
///
/// Grows monotonically: signatures are never forgotten and counts never drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageTracker {
    seen: BTreeSet<PathSignature>,
    counts: BTreeMap<PathSignature, u64>,
}

impl CoverageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one execution along `signature`.
    ///
    /// Returns true exactly when this is the first time the signature is seen.
    pub fn record_and_check(&mut self, signature: PathSignature) -> bool {
        let novel = self.seen.insert(signature);
        *self.counts.entry(signature).or_insert(0) += 1;
        novel
    }

    pub fn has_seen(&self, signature: PathSignature) -> bool {
        self.seen.contains(&signature)
    }

    pub fn distinct_paths(&self) -> usize {
        self.seen.len()
    }

    pub fn count(&self, signature: PathSignature) -> u64 {
        self.counts.get(&signature).copied().unwrap_or(0)
    }

    /// Total executions recorded across all signatures.
    pub fn total_executions(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_complete(&self) -> bool {
        PathSignature::ALL.iter().all(|sig| self.seen.contains(sig))
    }

    /// Signatures seen so far, in decision-tree order.
    pub fn seen(&self) -> impl Iterator<Item = PathSignature> + '_ {
        self.seen.iter().copied()
    }

    /// `(signature, count)` pairs in decision-tree order.
    pub fn frequencies(&self) -> impl Iterator<Item = (PathSignature, u64)> + '_ {
        self.counts.iter().map(|(sig, count)| (*sig, *count))
    }

    /// Fold another tracker in: seen sets union, counts add.
    pub fn merge(&mut self, other: &CoverageTracker) {
        self.seen.extend(other.seen.iter().copied());
        for (sig, count) in &other.counts {
            *self.counts.entry(*sig).or_insert(0) += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trifuzz_ir::PathSignature::*;

    #[test]
    fn test_first_occurrence_is_novel() {
        let mut tracker = CoverageTracker::new();
        assert!(tracker.record_and_check(Scalene));
        assert!(!tracker.record_and_check(Scalene));
        assert!(!tracker.record_and_check(Scalene));
        assert_eq!(tracker.count(Scalene), 3);
        assert_eq!(tracker.distinct_paths(), 1);
    }

    #[test]
    fn test_novel_results_match_distinct_inputs() {
        let sequence = [
            NonTriangle,
            NonTriangle,
            Isosceles,
            NonTriangle,
            Equilateral,
            Isosceles,
            NonTriangle,
        ];
        let mut tracker = CoverageTracker::new();
        let novel = sequence
            .iter()
            .filter(|sig| tracker.record_and_check(**sig))
            .count();

        assert_eq!(novel, 3);
        assert_eq!(tracker.distinct_paths(), 3);
        assert_eq!(tracker.total_executions(), sequence.len() as u64);
        assert!(!tracker.has_seen(Scalene));
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_frequencies_in_decision_order() {
        let mut tracker = CoverageTracker::new();
        for sig in [Equilateral, NonTriangle, Scalene, NonTriangle] {
            tracker.record_and_check(sig);
        }
        let freq: Vec<_> = tracker.frequencies().collect();
        assert_eq!(freq, vec![(NonTriangle, 2), (Scalene, 1), (Equilateral, 1)]);
    }

    #[test]
    fn test_merge_sums_counts_and_unions_paths() {
        let mut left = CoverageTracker::new();
        left.record_and_check(NonTriangle);
        left.record_and_check(Scalene);

        let mut right = CoverageTracker::new();
        right.record_and_check(NonTriangle);
        right.record_and_check(Isosceles);
        right.record_and_check(Equilateral);

        left.merge(&right);

        assert!(left.is_complete());
        assert_eq!(left.count(NonTriangle), 2);
        assert_eq!(left.total_executions(), 5);
    }

    #[test]
    fn test_empty_tracker() {
        let tracker = CoverageTracker::new();
        assert_eq!(tracker.distinct_paths(), 0);
        assert_eq!(tracker.count(Equilateral), 0);
        assert_eq!(tracker.total_executions(), 0);
        assert_eq!(tracker.seen().count(), 0);
    }
}
