//! Generic asynchronous best-first search.
//!
//! The loop knows nothing about stations or departures. A
//! [`SearchStrategy`] supplies the goal test, the (possibly slow) expansion
//! step and the ordering, which lets tests swap in fake edge sources or
//! entirely different node types without touching the loop.

use std::cmp::Ordering;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::search::SearchError;

/// Stand-in deadline for timeouts past what `Instant` can represent.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// The three decisions that drive a best-first search.
pub trait SearchStrategy {
    type Node;

    /// Whether `node` satisfies the search.
    fn is_goal(&self, node: &Self::Node) -> bool;

    /// Produce the successors of `node`. May suspend on I/O.
    fn expand(
        &self,
        node: &Self::Node,
    ) -> impl Future<Output = Result<Vec<Self::Node>, SearchError>> + Send;

    /// Rank two nodes; `Less` means `a` should be expanded first.
    fn compare(&self, a: &Self::Node, b: &Self::Node) -> Ordering;
}

/// How a search that did not fail came to an end.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination<N> {
    /// The best-ranked node satisfied the goal test.
    Found(N),

    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// Result of [`run_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary<N> {
    pub termination: Termination<N>,

    /// Number of nodes expanded (one edge-source query each).
    pub routes_explored: usize,
}

/// Run a best-first search from `seed`.
///
/// Each iteration looks at the best-ranked node. If it is a goal the search
/// stops with it; otherwise it is removed, expanded, and its successors are
/// merged back into the frontier. Only one expansion is in flight at a time.
///
/// The deadline from `config` is checked once per iteration and also bounds
/// every expansion await. Running past it, or past the expansion budget,
/// fails the search rather than reporting exhaustion.
pub async fn run_search<S: SearchStrategy>(
    strategy: &S,
    seed: S::Node,
    config: &SearchConfig,
) -> Result<SearchSummary<S::Node>, SearchError> {
    let now = Instant::now();
    // A timeout too large to represent means no deadline in practice.
    let deadline = now
        .checked_add(config.timeout())
        .unwrap_or_else(|| now + FAR_FUTURE);

    let mut frontier = Frontier::new(|a: &S::Node, b: &S::Node| strategy.compare(a, b));
    frontier.insert(seed);

    let mut routes_explored = 0;

    let termination = loop {
        if Instant::now() >= deadline {
            return Err(SearchError::Timeout);
        }

        let goal_reached = match frontier.peek_best() {
            Some(best) => strategy.is_goal(best),
            None => break Termination::Exhausted,
        };

        let Some(node) = frontier.pop_best() else {
            break Termination::Exhausted;
        };

        if goal_reached {
            break Termination::Found(node);
        }

        if routes_explored >= config.max_expansions {
            return Err(SearchError::ExpansionLimit(config.max_expansions));
        }
        routes_explored += 1;

        let successors = tokio::time::timeout_at(deadline, strategy.expand(&node))
            .await
            .map_err(|_| SearchError::Timeout)??;

        trace!(
            routes_explored,
            successors = successors.len(),
            frontier = frontier.len(),
            "expanded node"
        );

        frontier.insert_all(successors);
    };

    Ok(SearchSummary {
        termination,
        routes_explored,
    })
}
