//! Comment marker and directive splitting

pub const LINE_MARKER: &str = "//";
pub const BLOCK_OPEN: &str = "/*";
pub const BLOCK_CLOSE: &str = "*/";

/// Secondary markers that separate a tool directive from the prose after it,
/// tried in this order. The first separator found anywhere in the body wins.
pub const DIRECTIVE_SEPARATORS: [&str; 3] = [" // ", "//", " //"];

/// A comment split at its markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markers<'a> {
    /// Everything after `//`
    Line(&'a str),
    /// Everything between `/*` and `*/`, newlines included
    Block(&'a str),
    Unrecognized,
}

impl<'a> Markers<'a> {
    pub fn split(text: &'a str) -> Self {
        if let Some(body) = text.strip_prefix(LINE_MARKER) {
            return Markers::Line(body);
        }
        text.strip_prefix(BLOCK_OPEN)
            .and_then(|rest| rest.strip_suffix(BLOCK_CLOSE))
            .map_or(Markers::Unrecognized, Markers::Block)
    }
}

/// A line comment body of the form `<prefix><separator><rest>`, as in
/// `nolint:gosec // Using math/rand is acceptable`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub prefix: &'a str,
    pub separator: &'static str,
    pub rest: &'a str,
}

impl<'a> Directive<'a> {
    pub fn split(body: &'a str) -> Option<Self> {
        DIRECTIVE_SEPARATORS.iter().find_map(|&separator| {
            body.find(separator).map(|at| Directive {
                prefix: &body[..at],
                separator,
                rest: &body[at + separator.len()..],
            })
        })
    }
}
