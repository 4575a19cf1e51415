//! Syntax tree consumed by the classifier and the orchestrator
//!
//! This is deliberately not a Go AST. The casing rules only need two things
//! from a file: every comment with its position, and the spans of the
//! containers ([`ContainerKind`]) whose interior comments are eligible for
//! rewriting. [`SourceTree`] owns both, together with the original source so
//! the file can be rendered back after comments are rewritten.

pub mod elements;
pub mod range;
pub mod tree;

pub use elements::{Comment, CommentKind, Container, ContainerKind};
pub use range::{Position, Range, SourceLocation};
pub use tree::SourceTree;
