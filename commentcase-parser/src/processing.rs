//! Orchestration over a whole file
//!
//! Walks every comment of a [`SourceTree`] in source order, classifies it,
//! transforms it when it is in scope, and rewrites its text in place when the
//! result differs. No I/O happens here.

use crate::ast::SourceTree;
use crate::casing::{transform_comment, CaseMode};
use serde::Serialize;

/// Outcome of processing one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProcessReport {
    /// Number of comments whose text was rewritten
    pub changes: usize,
    /// Whether any comment was rewritten at all
    pub modified: bool,
}

/// Rewrite every in-scope comment of `tree` under `mode`
pub fn process_comments(tree: &mut SourceTree, mode: CaseMode) -> ProcessReport {
    let index = &tree.index;
    let mut report = ProcessReport::default();

    for comment in tree.comments.iter_mut() {
        if !index.contains(comment.position()) {
            tracing::trace!(at = %comment.location.start, "comment out of scope");
            continue;
        }

        let transformed = transform_comment(&comment.text, mode);
        if transformed == comment.text {
            continue;
        }

        tracing::debug!(
            at = %comment.location.start,
            before = %comment.text,
            after = %transformed,
            "rewrote comment"
        );
        comment.text = transformed;
        report.changes += 1;
        report.modified = true;
    }

    tracing::debug!(%mode, changes = report.changes, "processed comments");
    report
}

/// Parse `source`, process it, and render the result
pub fn normalize_source(source: &str, mode: CaseMode) -> (String, ProcessReport) {
    let mut tree = SourceTree::parse(source);
    let report = process_comments(&mut tree, mode);
    (tree.render(), report)
}

/// [`normalize_source`] over raw bytes, decoding invalid UTF-8 to U+FFFD
pub fn normalize_bytes(bytes: &[u8], mode: CaseMode) -> (String, ProcessReport) {
    let mut tree = SourceTree::from_bytes(bytes);
    let report = process_comments(&mut tree, mode);
    (tree.render(), report)
}
