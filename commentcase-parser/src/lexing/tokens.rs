//! Token definitions for Go source
//!
//! Only the slice of Go's lexical grammar that container detection depends on
//! gets its own variant. Everything else collapses into [`Token::Punct`] or
//! [`Token::Ident`]. Literals are lexed properly so that `//` or `/*` inside a
//! string never starts a comment.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    // Comments
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // Literals
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    StringLit,
    #[regex(r"`[^`]*`")]
    RawStringLit,
    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    RuneLit,

    // Keywords that open or shape containers
    #[token("func")]
    Func,
    #[token("struct")]
    Struct,
    #[token("interface")]
    Interface,
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("chan")]
    Chan,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    // Delimiters
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Punctuation that ends a function signature search
    #[token("*")]
    Star,
    #[token("...")]
    Ellipsis,
    #[token("=")]
    Assign,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    #[token("\n")]
    Newline,

    // Catch-all for every other non-blank character
    #[regex(r"[^\s]", priority = 0)]
    Punct,
}

impl Token {
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::LineComment | Token::BlockComment)
    }

    pub fn is_opening(&self) -> bool {
        matches!(self, Token::LBrace | Token::LParen | Token::LBracket)
    }

    /// The opener this token closes, if it is a closing delimiter
    pub fn opener(&self) -> Option<Token> {
        match self {
            Token::RBrace => Some(Token::LBrace),
            Token::RParen => Some(Token::LParen),
            Token::RBracket => Some(Token::LBracket),
            _ => None,
        }
    }
}
