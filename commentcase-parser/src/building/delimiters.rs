//! Bracket matching over the significant token stream

use crate::lexing::Token;
use logos::Span;

/// Pair every delimiter with its partner, index to index.
///
/// A closer that does not match the innermost open delimiter closes the
/// nearest matching opener further out, abandoning the unclosed ones above it.
/// A closer with no matching opener at all is ignored. Unmatched entries stay
/// `None`.
pub fn match_delimiters(tokens: &[(Token, Span)]) -> Vec<Option<usize>> {
    let mut partners = vec![None; tokens.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (index, (token, _)) in tokens.iter().enumerate() {
        if token.is_opening() {
            stack.push(index);
            continue;
        }
        let Some(opener) = token.opener() else {
            continue;
        };
        if let Some(depth) = stack.iter().rposition(|&open| tokens[open].0 == opener) {
            let open = stack[depth];
            stack.truncate(depth);
            partners[open] = Some(index);
            partners[index] = Some(open);
        }
    }

    partners
}
