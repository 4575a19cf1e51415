//! Case transformation
//!
//! [`transform_comment`] rewrites the text of one comment under a
//! [`CaseMode`]. The steps, in order:
//!
//! 1. Split the markers off (`//`, or `/*` and `*/`). Text with any other
//!    shape is returned as is.
//! 2. If the body (the first line of it, for block comments) starts with a
//!    special [indicator](indicators) the comment is returned untouched.
//! 3. Line comments carrying a tool directive (`//nolint:gosec // Reason`)
//!    keep the directive verbatim and only the prose after the secondary
//!    marker is rewritten.
//! 4. [Identifier-shaped words](identifiers) are protected.
//! 5. The remaining text is lowercased, or has its first rune lowercased,
//!    depending on the mode.
//!
//! Every step is idempotent, so running the transformer twice is the same as
//! running it once.

pub mod identifiers;
pub mod indicators;
pub mod markers;

use identifiers::{protected_identifiers, segments, Word};
use indicators::starts_with_indicator;
use markers::{Directive, Markers, BLOCK_CLOSE, BLOCK_OPEN, LINE_MARKER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Casing policy applied to in-scope comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseMode {
    /// Lowercase everything except protected identifiers
    #[default]
    #[serde(rename = "lowercase", alias = "full-lowercase")]
    FullLowercase,
    /// Lowercase only the leading rune
    #[serde(rename = "title", alias = "title-case")]
    TitleCase,
}

impl CaseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseMode::FullLowercase => "lowercase",
            CaseMode::TitleCase => "title",
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCaseMode(pub String);

impl fmt::Display for UnknownCaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown case mode '{}' (expected 'lowercase' or 'title')",
            self.0
        )
    }
}

impl std::error::Error for UnknownCaseMode {}

impl FromStr for CaseMode {
    type Err = UnknownCaseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "full-lowercase" | "lower" => Ok(CaseMode::FullLowercase),
            "title" | "title-case" | "titlecase" => Ok(CaseMode::TitleCase),
            _ => Err(UnknownCaseMode(s.to_string())),
        }
    }
}

/// Rewrite one comment, markers included, under `mode`
pub fn transform_comment(text: &str, mode: CaseMode) -> String {
    match Markers::split(text) {
        Markers::Line(body) => {
            if starts_with_indicator(body) {
                return text.to_string();
            }
            match Directive::split(body) {
                Some(directive) => format!(
                    "{LINE_MARKER}{}{}{}",
                    directive.prefix,
                    directive.separator,
                    transform_part(directive.rest, mode)
                ),
                None => format!("{LINE_MARKER}{}", transform_part(body, mode)),
            }
        }
        Markers::Block(interior) => {
            let first_line = interior.split('\n').next().unwrap_or_default();
            if starts_with_indicator(first_line) {
                return text.to_string();
            }
            format!("{BLOCK_OPEN}{}{BLOCK_CLOSE}", transform_part(interior, mode))
        }
        Markers::Unrecognized => text.to_string(),
    }
}

/// [`transform_comment`] over raw bytes. Invalid UTF-8 sequences become
/// U+FFFD; the valid text around them is transformed normally.
pub fn transform_comment_bytes(bytes: &[u8], mode: CaseMode) -> String {
    transform_comment(&String::from_utf8_lossy(bytes), mode)
}

/// Apply `mode` to a comment-part (a body with markers and directive removed)
fn transform_part(part: &str, mode: CaseMode) -> String {
    let protected = protected_identifiers(part);
    match mode {
        CaseMode::FullLowercase => lowercase_preserving(part, &protected),
        CaseMode::TitleCase => lowercase_leading_rune(part, &protected),
    }
}

/// Lowercase `part`, restoring protected identifiers wherever a word matches
/// one case-insensitively. An exact match keeps its own casing.
fn lowercase_preserving(part: &str, protected: &[&str]) -> String {
    let folded: Vec<String> = protected.iter().map(|p| p.to_lowercase()).collect();
    let mut output = String::with_capacity(part.len());

    for segment in segments(part) {
        let word = Word::split(segment);
        match restored_identifier(word.core, protected, &folded) {
            Some(identifier) => {
                output.push_str(&word.lead.to_lowercase());
                output.push_str(identifier);
                output.push_str(&word.trail.to_lowercase());
            }
            None => output.push_str(&segment.to_lowercase()),
        }
    }

    output
}

/// The protected spelling `core` should be written as, if any
fn restored_identifier<'a>(
    core: &'a str,
    protected: &[&'a str],
    folded: &[String],
) -> Option<&'a str> {
    if core.is_empty() {
        return None;
    }
    if protected.contains(&core) {
        return Some(core);
    }
    let lowered = core.to_lowercase();
    folded
        .iter()
        .position(|f| *f == lowered)
        .map(|at| protected[at])
}

/// Lowercase the first non-blank rune of the first line, unless the leading
/// word is an abbreviation or a protected identifier.
fn lowercase_leading_rune(part: &str, protected: &[&str]) -> String {
    let first_line = part.split('\n').next().unwrap_or_default();
    let Some((start, first)) = first_line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
    else {
        return part.to_string();
    };

    let rest_of_line = &first_line[start..];
    let word_end = rest_of_line
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(rest_of_line.len(), |(at, _)| at);
    let leading_word = &rest_of_line[..word_end];

    if is_abbreviation(leading_word, &rest_of_line[word_end..], protected) {
        return part.to_string();
    }
    let leading_token = rest_of_line.split_whitespace().next().unwrap_or_default();
    let leading_core = Word::split(leading_token).core;
    let folded = leading_word.to_lowercase();
    if protected.contains(&leading_core)
        || (!leading_word.is_empty() && protected.iter().any(|p| p.to_lowercase() == folded))
    {
        return part.to_string();
    }

    let mut output = String::with_capacity(part.len() + 2);
    output.push_str(&part[..start]);
    output.extend(first.to_lowercase());
    output.push_str(&part[start + first.len_utf8()..]);
    output
}

/// An all-uppercase leading word of two or more runes is an abbreviation
/// (`API returns early`). When more capitalised, non-identifier words follow
/// on the same line the line itself is capitalised prose
/// (`THIS Should BE Converted`) and the leading word gets no special treatment.
fn is_abbreviation(leading_word: &str, rest_of_line: &str, protected: &[&str]) -> bool {
    if leading_word.chars().count() < 2 || !leading_word.chars().all(char::is_uppercase) {
        return false;
    }
    !rest_of_line.split_whitespace().any(|raw| {
        let word = Word::split(raw);
        word.core.chars().next().is_some_and(char::is_uppercase) && !protected.contains(&word.core)
    })
}
