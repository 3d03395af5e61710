//! Scanner/tokenizer for the csz IDE layer.
//!
//! This crate provides the lexical analysis the completion layer sits on:
//! - `SyntaxKind` - Token types (punctuation and reserved words)
//! - `Scanner` - Tokenizer producing a flat token stream with byte spans
//! - `TriviaRange` - Comment/whitespace ranges used for caret suppression

pub mod syntax_kind;
pub use syntax_kind::{SyntaxKind, keyword_kind};

pub mod scanner;
pub use scanner::{ScannedFile, Scanner, Token, TriviaKind, TriviaRange};
