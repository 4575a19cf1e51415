//! The per-file tree handed to the classifier and the orchestrator

use super::elements::{Comment, Container};
use super::range::SourceLocation;
use crate::building;
use crate::scope::ScopeIndex;

/// A parsed Go file: its source, every comment in source order, and the
/// container spans indexed for scope queries.
///
/// Comment text is the only thing that changes after parsing. [`render`]
/// splices the current comment texts back into the original source.
///
/// [`render`]: SourceTree::render
#[derive(Debug, Clone)]
pub struct SourceTree {
    pub(crate) source: String,
    pub(crate) comments: Vec<Comment>,
    pub(crate) containers: Vec<Container>,
    pub(crate) index: ScopeIndex,
}

impl SourceTree {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let locator = SourceLocation::new(&source);
        let (comments, containers) = building::extract(&source, &locator);
        tracing::trace!(
            comments = comments.len(),
            containers = containers.len(),
            "parsed source tree"
        );
        let index = ScopeIndex::new(&containers);
        Self {
            source,
            comments,
            containers,
            index,
        }
    }

    /// Parse raw bytes. Invalid UTF-8 is replaced with U+FFFD before lexing.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(String::from_utf8_lossy(bytes).into_owned())
    }

    /// The source as it was parsed, before any rewrite
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn scope_index(&self) -> &ScopeIndex {
        &self.index
    }

    /// The source with every comment replaced by its current text
    pub fn render(&self) -> String {
        let extra: usize = self.comments.iter().map(|c| c.text.len()).sum();
        let mut output = String::with_capacity(self.source.len() + extra);
        let mut cursor = 0;

        for comment in &self.comments {
            let span = &comment.location.span;
            output.push_str(&self.source[cursor..span.start]);
            output.push_str(&comment.text);
            cursor = span.end;
        }
        output.push_str(&self.source[cursor..]);

        output
    }
}
