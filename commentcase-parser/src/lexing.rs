//! Lexer
//!
//! Tokenization is done with the logos lexer library. The token set in
//! [`tokens`] is intentionally coarse: building the tree needs comments,
//! literals (so markers inside them are not mistaken for comments), a handful
//! of keywords, and the bracket delimiters. Horizontal whitespace is skipped,
//! but newlines are kept because a newline at signature level tells a `func`
//! type apart from a function with a body.

pub mod base_tokenization;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use tokens::Token;
