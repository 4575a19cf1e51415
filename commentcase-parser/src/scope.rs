//! Scope classification
//!
//! A comment is in scope when its position lies inside at least one
//! container, with both delimiters counted as inside. A comment on the same
//! line as an opening brace is therefore eligible, while the doc comment in
//! front of a declaration sits before the container's open delimiter and
//! never is. Which of several nested containers matches is irrelevant.
//!
//! [`ScopeIndex`] is built once per file. Spans are sorted by open position
//! and paired with the running maximum of their close positions, so a query
//! is one binary search: every span opening at or before the position is a
//! candidate, and the position is covered iff the furthest-reaching candidate
//! reaches it.

use crate::ast::{Comment, Container, SourceTree};

#[derive(Debug, Clone, Default)]
pub struct ScopeIndex {
    /// Open positions, ascending
    opens: Vec<usize>,
    /// `reach[i]` is the largest close among the first `i + 1` spans
    reach: Vec<usize>,
}

impl ScopeIndex {
    pub fn new(containers: &[Container]) -> Self {
        let mut spans: Vec<(usize, usize)> =
            containers.iter().map(|c| (c.open, c.close)).collect();
        spans.sort_unstable();

        let mut opens = Vec::with_capacity(spans.len());
        let mut reach = Vec::with_capacity(spans.len());
        let mut furthest = 0;
        for (open, close) in spans {
            furthest = furthest.max(close);
            opens.push(open);
            reach.push(furthest);
        }

        Self { opens, reach }
    }

    /// Whether any indexed container covers `position`
    pub fn contains(&self, position: usize) -> bool {
        let candidates = self.opens.partition_point(|&open| open <= position);
        candidates > 0 && self.reach[candidates - 1] >= position
    }

    pub fn len(&self) -> usize {
        self.opens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opens.is_empty()
    }
}

/// Whether `position` lies inside any container of `tree`
pub fn is_in_scope(tree: &SourceTree, position: usize) -> bool {
    tree.scope_index().contains(position)
}

/// Whether `comment` is eligible for rewriting
pub fn classify_comment(tree: &SourceTree, comment: &Comment) -> bool {
    is_in_scope(tree, comment.position())
}

/// Reference classification: test every container in turn.
///
/// Gives the same answer as [`ScopeIndex::contains`] in linear time.
pub fn scan_containers(containers: &[Container], position: usize) -> bool {
    containers.iter().any(|container| container.contains(position))
}
