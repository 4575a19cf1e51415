//! Tree building
//!
//! Turns the flat token stream into the two collections a [`SourceTree`]
//! holds:
//!
//! 1. Comments, split out of the stream with their text and location.
//! 2. Containers, found on the remaining significant tokens:
//!    - [delimiters](delimiters) pairs every bracket with its partner
//!    - [containers](containers) recognizes function bodies, struct field
//!      lists and grouped `var`/`const` declarations
//!
//! [`SourceTree`]: crate::ast::SourceTree

pub mod containers;
pub mod delimiters;

use crate::ast::{Comment, CommentKind, Container, SourceLocation};
use crate::lexing::{tokenize, Token};

pub use containers::find_containers;
pub use delimiters::match_delimiters;

/// Lex `source` and collect its comments (in source order) and containers
/// (sorted by open position).
pub fn extract(source: &str, locator: &SourceLocation) -> (Vec<Comment>, Vec<Container>) {
    let mut comments = Vec::new();
    let mut significant = Vec::new();

    for (token, span) in tokenize(source) {
        let kind = match token {
            Token::LineComment => CommentKind::Line,
            Token::BlockComment => CommentKind::Block,
            _ => {
                significant.push((token, span));
                continue;
            }
        };
        comments.push(Comment::new(
            kind,
            &source[span.clone()],
            locator.byte_range_to_range(&span),
        ));
    }

    let partners = match_delimiters(&significant);
    let containers = find_containers(&significant, &partners);

    (comments, containers)
}
