//! Container detection
//!
//! Walks the significant token stream (comments removed, newlines kept) and
//! records the delimiter spans of function bodies, struct field lists and
//! parenthesized `var`/`const` groups.

use crate::ast::{Container, ContainerKind};
use crate::lexing::Token;
use logos::Span;

pub fn find_containers(tokens: &[(Token, Span)], partners: &[Option<usize>]) -> Vec<Container> {
    let mut containers = Vec::new();

    for (index, (token, _)) in tokens.iter().enumerate() {
        let found = match token {
            Token::Struct => delimited_after(tokens, partners, index, Token::LBrace)
                .map(|open| (ContainerKind::Struct, open)),
            Token::Var => delimited_after(tokens, partners, index, Token::LParen)
                .map(|open| (ContainerKind::VarBlock, open)),
            Token::Const => delimited_after(tokens, partners, index, Token::LParen)
                .map(|open| (ContainerKind::ConstBlock, open)),
            Token::Func if !is_func_type(tokens, index) => {
                function_body(tokens, partners, index).map(|open| (ContainerKind::Function, open))
            }
            _ => None,
        };

        if let Some((kind, open)) = found {
            // `delimited_after` and `function_body` only return matched openers
            if let Some(close) = partners[open] {
                containers.push(Container::new(
                    kind,
                    tokens[open].1.start,
                    tokens[close].1.start,
                ));
            }
        }
    }

    // `func f() func() {` reports the same body for both keywords
    containers.sort_by_key(|c| (c.open, c.close, c.kind));
    containers.dedup_by(|a, b| a.open == b.open && a.close == b.close);
    containers
}

fn next_significant(tokens: &[(Token, Span)], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| tokens[i].0 != Token::Newline)
}

fn previous_significant(tokens: &[(Token, Span)], before: usize) -> Option<usize> {
    (0..before).rev().find(|&i| tokens[i].0 != Token::Newline)
}

/// Index of a matched `delimiter` directly following the keyword at `index`
fn delimited_after(
    tokens: &[(Token, Span)],
    partners: &[Option<usize>],
    index: usize,
    delimiter: Token,
) -> Option<usize> {
    let next = next_significant(tokens, index + 1)?;
    (tokens[next].0 == delimiter && partners[next].is_some()).then_some(next)
}

/// `[]func()`, `*func()`, `chan func()` and `...func()` are types, never literals.
fn is_func_type(tokens: &[(Token, Span)], index: usize) -> bool {
    previous_significant(tokens, index).is_some_and(|prev| {
        matches!(
            tokens[prev].0,
            Token::RBracket | Token::Star | Token::Chan | Token::Ellipsis
        )
    })
}

/// Find the opening brace of the body belonging to the `func` at `index`.
///
/// The signature is skipped group by group: type parameters, receiver,
/// parameters and results, plus any `struct{}`/`interface{}` literal used as a
/// type. Anything that cannot continue a signature ends the search, which is
/// how a `func` type (a field, a parameter, a named type) is told apart from a
/// declaration or literal with a body.
fn function_body(
    tokens: &[(Token, Span)],
    partners: &[Option<usize>],
    index: usize,
) -> Option<usize> {
    let mut cursor = index + 1;

    while cursor < tokens.len() {
        match tokens[cursor].0 {
            Token::LParen | Token::LBracket => cursor = partners[cursor]? + 1,
            Token::Struct | Token::Interface => {
                match delimited_after(tokens, partners, cursor, Token::LBrace) {
                    Some(open) => cursor = partners[open]? + 1,
                    None => cursor += 1,
                }
            }
            Token::LBrace => return partners[cursor].map(|_| cursor),
            Token::Newline
            | Token::Assign
            | Token::Comma
            | Token::Semicolon
            | Token::RParen
            | Token::RBracket
            | Token::RBrace => return None,
            _ => cursor += 1,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::delimiters::match_delimiters;
    use crate::lexing::tokenize;

    fn containers_of(source: &str) -> Vec<(ContainerKind, String)> {
        let tokens: Vec<_> = tokenize(source)
            .into_iter()
            .filter(|(token, _)| !token.is_comment())
            .collect();
        let partners = match_delimiters(&tokens);
        find_containers(&tokens, &partners)
            .into_iter()
            .map(|c| (c.kind, source[c.open..=c.close].to_string()))
            .collect()
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(
            containers_of("func main() {\n\tx()\n}"),
            vec![(ContainerKind::Function, "{\n\tx()\n}".to_string())]
        );
    }

    #[test]
    fn test_method_with_results_and_generics() {
        let source = "func (s *S) Get[T any](k string) (T, error) { return }";
        assert_eq!(
            containers_of(source),
            vec![(ContainerKind::Function, "{ return }".to_string())]
        );
    }

    #[test]
    fn test_function_literal() {
        let source = "go func() { work() }()";
        assert_eq!(
            containers_of(source),
            vec![(ContainerKind::Function, "{ work() }".to_string())]
        );
    }

    #[test]
    fn test_func_types_have_no_body() {
        assert!(containers_of("type Handler func(w Writer)\nvar x = 1").is_empty());
        assert!(containers_of("var handlers []func() int").is_empty());
        assert!(containers_of("func Asm(x int) int\n").is_empty());
    }

    #[test]
    fn test_func_parameter_is_not_a_body() {
        assert_eq!(
            containers_of("func Walk(fn func(string) error) { fn(\"\") }"),
            vec![(ContainerKind::Function, "{ fn(\"\") }".to_string())]
        );
    }

    #[test]
    fn test_map_of_funcs_literal_is_not_a_body() {
        let source = "m := map[string]func(){\n\"a\": func() { a() },\n}";
        assert_eq!(
            containers_of(source),
            vec![(ContainerKind::Function, "{ a() }".to_string())]
        );
    }

    #[test]
    fn test_struct_in_signature_is_skipped() {
        let source = "func f(opts struct{ n int }) interface{} { return nil }";
        assert_eq!(
            containers_of(source),
            vec![
                (ContainerKind::Struct, "{ n int }".to_string()),
                (ContainerKind::Function, "{ return nil }".to_string()),
            ]
        );
    }

    #[test]
    fn test_struct_type() {
        assert_eq!(
            containers_of("type T struct {\n\tA int\n}"),
            vec![(ContainerKind::Struct, "{\n\tA int\n}".to_string())]
        );
    }

    #[test]
    fn test_grouped_declarations_only() {
        let source = "var single = 1\nconst one = 2\nvar (\n\ta = 1\n)\nconst (\n\tb = 2\n)";
        assert_eq!(
            containers_of(source),
            vec![
                (ContainerKind::VarBlock, "(\n\ta = 1\n)".to_string()),
                (ContainerKind::ConstBlock, "(\n\tb = 2\n)".to_string()),
            ]
        );
    }

    #[test]
    fn test_returned_func_literal_deduplicates() {
        let source = "func f() func() { return nil }";
        assert_eq!(
            containers_of(source),
            vec![(ContainerKind::Function, "{ return nil }".to_string())]
        );
    }

    #[test]
    fn test_unclosed_body_is_not_a_container() {
        assert!(containers_of("func f() {\n\tx()\n").is_empty());
    }
}
