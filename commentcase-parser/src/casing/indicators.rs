//! Special indicator keywords
//!
//! A comment whose body starts with one of these is a note to developers
//! rather than prose, and is left exactly as written.

use once_cell::sync::Lazy;
use regex::Regex;

/// The closed indicator vocabulary. Matching is case-sensitive.
pub const SPECIAL_INDICATORS: &[&str] = &[
    "TODO",
    "FIXME",
    "HACK",
    "XXX",
    "NOTE",
    "BUG",
    "IDEA",
    "OPTIMIZE",
    "REVIEW",
    "TEMP",
    "DEBUG",
    "NB",
    "WARNING",
    "DEPRECATED",
    "NOTICE",
];

static INDICATOR_PREFIX: Lazy<Regex> = Lazy::new(|| {
    let keywords = SPECIAL_INDICATORS
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^[ \t]*(?:{keywords})")).expect("indicator pattern compiles")
});

/// Whether `body`, once leading blanks are trimmed, starts with an indicator.
///
/// Callers pass a single line; for block comments that is the first line of
/// the interior.
pub fn starts_with_indicator(body: &str) -> bool {
    INDICATOR_PREFIX.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_is_recognized() {
        for keyword in SPECIAL_INDICATORS {
            assert!(starts_with_indicator(&format!(" {keyword}: later")), "{keyword}");
            assert!(starts_with_indicator(keyword), "{keyword}");
        }
    }

    #[test]
    fn test_leading_blanks_are_trimmed() {
        assert!(starts_with_indicator("\t  FIXME(bob) handle EOF"));
    }

    #[test]
    fn test_keyword_must_lead() {
        assert!(!starts_with_indicator(" fix this TODO"));
        assert!(!starts_with_indicator(" Remember the NOTE above"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!starts_with_indicator(" todo: later"));
        assert!(!starts_with_indicator(" Note that"));
    }
}
