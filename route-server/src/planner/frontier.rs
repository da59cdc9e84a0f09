//! The ordered working set of nodes awaiting expansion.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Nodes ordered best-first by a comparator.
///
/// Every insertion places the node by comparing against the whole current
/// contents, so `peek_best` always reflects the global order rather than the
/// order within one batch. Nodes that compare equal keep insertion order,
/// which makes tie-breaking deterministic for a given sequence of inserts.
/// No duplicate suppression happens here: two nodes for the same station
/// compete independently.
pub struct Frontier<N, C> {
    nodes: VecDeque<N>,
    compare: C,
}

impl<N, C> Frontier<N, C>
where
    C: Fn(&N, &N) -> Ordering,
{
    /// Create an empty frontier ordered by `compare` (`Less` ranks first).
    pub fn new(compare: C) -> Self {
        Self {
            nodes: VecDeque::new(),
            compare,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The best-ranked node, if any.
    pub fn peek_best(&self) -> Option<&N> {
        self.nodes.front()
    }

    /// Remove and return the best-ranked node.
    pub fn pop_best(&mut self) -> Option<N> {
        self.nodes.pop_front()
    }

    /// Insert a single node after every node that does not rank below it.
    pub fn insert(&mut self, node: N) {
        let idx = self
            .nodes
            .partition_point(|existing| (self.compare)(existing, &node) != Ordering::Greater);
        self.nodes.insert(idx, node);
    }

    /// Insert every node from `nodes`, in order.
    pub fn insert_all(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.insert(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_key(a: &(u32, &'static str), b: &(u32, &'static str)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn empty_frontier() {
        let mut frontier = Frontier::new(by_key);
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
        assert!(frontier.peek_best().is_none());
        assert!(frontier.pop_best().is_none());
    }

    #[test]
    fn pops_in_comparator_order() {
        let mut frontier = Frontier::new(by_key);
        frontier.insert_all([(30, "c"), (10, "a"), (20, "b")]);

        assert_eq!(frontier.peek_best(), Some(&(10, "a")));
        assert_eq!(frontier.pop_best(), Some((10, "a")));
        assert_eq!(frontier.pop_best(), Some((20, "b")));
        assert_eq!(frontier.pop_best(), Some((30, "c")));
        assert!(frontier.is_empty());
    }

    #[test]
    fn ordering_is_global_across_batches() {
        let mut frontier = Frontier::new(by_key);
        frontier.insert_all([(50, "first batch")]);
        frontier.insert_all([(100, "second batch slow"), (5, "second batch fast")]);

        assert_eq!(frontier.pop_best(), Some((5, "second batch fast")));
        assert_eq!(frontier.pop_best(), Some((50, "first batch")));
        assert_eq!(frontier.pop_best(), Some((100, "second batch slow")));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut frontier = Frontier::new(by_key);
        frontier.insert_all([(10, "x"), (10, "y")]);
        frontier.insert_all([(10, "z"), (1, "w")]);

        assert_eq!(frontier.pop_best(), Some((1, "w")));
        assert_eq!(frontier.pop_best(), Some((10, "x")));
        assert_eq!(frontier.pop_best(), Some((10, "y")));
        assert_eq!(frontier.pop_best(), Some((10, "z")));
    }

    #[test]
    fn keeps_duplicates() {
        let mut frontier = Frontier::new(by_key);
        frontier.insert_all([(10, "same"), (10, "same")]);
        assert_eq!(frontier.len(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Draining the frontier yields a stable sort of everything inserted,
        /// however the inserts were batched.
        #[test]
        fn drain_matches_stable_sort(
            batches in proptest::collection::vec(proptest::collection::vec(0u8..20, 0..8), 0..8)
        ) {
            let mut frontier = Frontier::new(|a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0));
            let mut expected = Vec::new();
            let mut seq = 0;

            for batch in batches {
                let tagged: Vec<_> = batch
                    .into_iter()
                    .map(|k| {
                        seq += 1;
                        (k, seq)
                    })
                    .collect();
                expected.extend(tagged.iter().copied());
                frontier.insert_all(tagged);
            }
            expected.sort_by_key(|n| n.0);

            let mut drained = Vec::new();
            while let Some(n) = frontier.pop_best() {
                drained.push(n);
            }
            prop_assert_eq!(drained, expected);
        }
    }
}
