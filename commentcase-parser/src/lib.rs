//! # commentcase-parser
//!
//! Normalizes the casing of comments that live inside Go containers: function
//! bodies, struct field lists, and parenthesized `var`/`const` groups. Doc
//! comments, top-level comments and developer notes (`TODO`, `FIXME`, ...)
//! are left as written.
//!
//! File Layout
//!
//! src/
//!   ├── lexing      logos tokenizer for the parts of Go that matter here
//!   ├── building    comment extraction and container detection
//!   ├── ast         positions, comments, containers and the SourceTree
//!   ├── scope       scope classification over a per-file index
//!   ├── casing      the case transformer
//!   └── processing  the orchestrator tying it all together
//!
//! The usual entry point is [`normalize_source`]. Callers that want the tree,
//! for reporting or their own rendering, go through [`SourceTree::parse`] and
//! [`process_comments`].

pub mod ast;
pub mod building;
pub mod casing;
pub mod lexing;
pub mod processing;
pub mod scope;
pub mod testing;

pub use ast::{Comment, CommentKind, Container, ContainerKind, SourceTree};
pub use casing::{transform_comment, transform_comment_bytes, CaseMode, UnknownCaseMode};
pub use processing::{normalize_bytes, normalize_source, process_comments, ProcessReport};
pub use scope::{classify_comment, is_in_scope, ScopeIndex};
