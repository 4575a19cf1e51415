//! Base tokenization for Go source
//!
//! This is where source strings become token streams. Building the tree
//! operates on the stream produced here.

use super::tokens::Token;
use logos::Logos;

/// Tokenize source code with location information
///
/// Bytes the lexer cannot match (the opening of an unterminated block comment
/// or string, for instance) are dropped and lexing resumes right after them.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => tracing::trace!(span = ?lexer.span(), "skipping unlexable input"),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_with_spans() {
        let tokens = tokenize("func f() {}");
        assert_eq!(
            tokens,
            vec![
                (Token::Func, 0..4),
                (Token::Ident, 5..6),
                (Token::LParen, 6..7),
                (Token::RParen, 7..8),
                (Token::LBrace, 9..10),
                (Token::RBrace, 10..11),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_comment_span_covers_markers() {
        let source = "x := 1 // note\n";
        let tokens = tokenize(source);
        let (_, span) = tokens
            .iter()
            .find(|(token, _)| *token == Token::LineComment)
            .expect("line comment token");
        assert_eq!(&source[span.clone()], "// note");
    }

    #[test]
    fn test_unterminated_block_comment_does_not_panic() {
        let tokens = tokenize("func f() { /* never closed }");
        assert_eq!(tokens[0], (Token::Func, 0..4));
        assert!(tokens.iter().all(|(token, _)| *token != Token::BlockComment));
    }
}
