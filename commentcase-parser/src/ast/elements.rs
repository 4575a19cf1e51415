//! Comment and container nodes

use super::range::Range;
use std::fmt;

/// Marker style of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...` up to the end of the line
    Line,
    /// `/* ... */`, possibly spanning lines
    Block,
}

/// A comment as it appears in the source, markers included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub location: Range,
}

impl Comment {
    pub fn new(kind: CommentKind, text: impl Into<String>, location: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Byte offset of the first marker character
    pub fn position(&self) -> usize {
        self.location.offset()
    }
}

/// The closed set of syntactic regions whose comments may be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
    /// A function or method body, including function literals
    Function,
    /// The field list of a struct type
    Struct,
    /// A parenthesized `var ( ... )` group
    VarBlock,
    /// A parenthesized `const ( ... )` group
    ConstBlock,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Function => "function",
            ContainerKind::Struct => "struct",
            ContainerKind::VarBlock => "var block",
            ContainerKind::ConstBlock => "const block",
        };
        f.write_str(name)
    }
}

/// A container span. `open` and `close` are the byte offsets of the opening
/// and closing delimiters and both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Container {
    pub kind: ContainerKind,
    pub open: usize,
    pub close: usize,
}

impl Container {
    pub fn new(kind: ContainerKind, open: usize, close: usize) -> Self {
        debug_assert!(open <= close, "container opens after it closes");
        Self { kind, open, close }
    }

    pub fn contains(&self, position: usize) -> bool {
        self.open <= position && position <= self.close
    }
}
