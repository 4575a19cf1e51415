//! Lexical identifier detection
//!
//! Words in a comment that look like Go identifiers keep their casing. The
//! grammar is purely lexical:
//!
//! - `PascalCase`: at least two runes, starts uppercase, has an
//!   uppercase-then-lowercase transition after the first rune, and never two
//!   uppercase runes in a row (`NewClient`, but not `Converted` or
//!   `APIClient`)
//! - `camelCase`: starts with a lowercase letter and has a later uppercase
//!   rune (`fooBar`, `json.Marshal`, `iOS`)
//!
//! Words are whitespace-delimited with surrounding punctuation trimmed, so
//! `(NewClient),` is classified as `NewClient`.

/// Casing shape of a single comment word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Two or more uppercase letters and no lowercase ones (`HTTP`, `ID2`)
    AllUppercase,
    PascalCase,
    CamelCase,
    Plain,
}

impl IdentifierKind {
    pub fn classify(word: &str) -> Self {
        let runes: Vec<char> = word.chars().collect();

        if is_all_uppercase(&runes) {
            IdentifierKind::AllUppercase
        } else if is_pascal_case(&runes) {
            IdentifierKind::PascalCase
        } else if is_camel_case(&runes) {
            IdentifierKind::CamelCase
        } else {
            IdentifierKind::Plain
        }
    }

    /// Only identifier-shaped words keep their casing
    pub fn is_protected(self) -> bool {
        matches!(self, IdentifierKind::PascalCase | IdentifierKind::CamelCase)
    }
}

fn is_all_uppercase(runes: &[char]) -> bool {
    runes.iter().filter(|c| c.is_uppercase()).count() >= 2
        && !runes.iter().any(|c| c.is_lowercase())
}

fn is_pascal_case(runes: &[char]) -> bool {
    runes.len() >= 2
        && runes[0].is_uppercase()
        && !runes
            .windows(2)
            .any(|pair| pair[0].is_uppercase() && pair[1].is_uppercase())
        && runes
            .windows(2)
            .skip(1)
            .any(|pair| pair[0].is_uppercase() && pair[1].is_lowercase())
}

fn is_camel_case(runes: &[char]) -> bool {
    match runes.split_first() {
        Some((first, rest)) => first.is_lowercase() && rest.iter().any(|c| c.is_uppercase()),
        None => false,
    }
}

fn is_word_rune(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A whitespace-delimited word split into leading punctuation, core, and
/// trailing punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub lead: &'a str,
    pub core: &'a str,
    pub trail: &'a str,
}

impl<'a> Word<'a> {
    pub fn split(raw: &'a str) -> Self {
        let start = raw.find(is_word_rune).unwrap_or(raw.len());
        let end = raw
            .rfind(is_word_rune)
            .map(|at| at + raw[at..].chars().next().map_or(0, char::len_utf8))
            .unwrap_or(start)
            .max(start);
        Self {
            lead: &raw[..start],
            core: &raw[start..end],
            trail: &raw[end..],
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        IdentifierKind::classify(self.core)
    }
}

/// Split `text` into alternating runs of whitespace and non-whitespace.
/// Concatenating the segments gives back `text`.
pub fn segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_blank = None;

    for (at, c) in text.char_indices() {
        let blank = c.is_whitespace();
        if in_blank.is_some_and(|previous| previous != blank) {
            segments.push(&text[start..at]);
            start = at;
        }
        in_blank = Some(blank);
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

/// Protected identifiers of `text`, in order of first appearance
pub fn protected_identifiers(text: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for raw in text.split_whitespace() {
        let word = Word::split(raw);
        if word.kind().is_protected() && !found.contains(&word.core) {
            found.push(word.core);
        }
    }
    found
}
