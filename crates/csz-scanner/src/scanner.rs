//! The tokenizer.
//!
//! Produces a flat token stream over the whole file in one pass. Comments
//! and whitespace are not tokens; comment spans are recorded as
//! `TriviaRange`s so the completion layer can refuse to offer anything
//! when the caret sits inside one.

use crate::syntax_kind::{SyntaxKind, keyword_kind};

/// A scanned token with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Byte offset of the first character.
    pub start: u32,
    /// Byte offset one past the last character.
    pub end: u32,
    /// True when at least one line break separates this token from the
    /// previous one.
    pub preceded_by_line_break: bool,
}

impl Token {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

/// The kind of a skipped trivia range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    LineComment,
    /// `///` documentation comment line.
    DocComment,
    BlockComment,
}

/// A comment span. Unterminated block comments extend to end of file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaRange {
    pub kind: TriviaKind,
    pub start: u32,
    pub end: u32,
}

/// The result of scanning a whole file.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// All tokens in source order; the last one is always `EndOfFile`.
    pub tokens: Vec<Token>,
    /// Comment ranges in source order.
    pub trivia: Vec<TriviaRange>,
}

impl ScannedFile {
    /// Index of the token immediately left of `position`: the last token
    /// whose end is at or before the caret. Returns `None` when the caret
    /// precedes every token.
    pub fn token_index_left_of(&self, position: u32) -> Option<usize> {
        let mut result = None;
        for (i, token) in self.tokens.iter().enumerate() {
            if token.kind == SyntaxKind::EndOfFile {
                break;
            }
            if token.end <= position {
                result = Some(i);
            } else {
                break;
            }
        }
        result
    }

    /// The token whose span strictly contains `position`, if any.
    pub fn token_containing(&self, position: u32) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.kind != SyntaxKind::EndOfFile && t.start < position && position < t.end)
    }

    /// True when the caret sits inside a comment. A caret at the very end
    /// of an unterminated comment still counts as inside.
    pub fn is_in_comment(&self, position: u32) -> bool {
        self.trivia.iter().any(|t| match t.kind {
            // `/*` without `*/` swallows the rest of the file including
            // the caret sitting exactly at the end.
            TriviaKind::BlockComment => t.start < position && position <= t.end,
            TriviaKind::LineComment | TriviaKind::DocComment => {
                t.start < position && position <= t.end
            }
        })
    }
}

/// Tokenizer state machine.
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    seen_line_break: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            seen_line_break: false,
        }
    }

    /// Scan the whole file.
    pub fn scan_file(source: &'a str) -> ScannedFile {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        let mut trivia = Vec::new();

        loop {
            scanner.skip_trivia(&mut trivia);
            let preceded_by_line_break = scanner.seen_line_break || tokens.is_empty();
            if scanner.pos >= scanner.bytes.len() {
                tokens.push(Token {
                    kind: SyntaxKind::EndOfFile,
                    start: scanner.pos as u32,
                    end: scanner.pos as u32,
                    preceded_by_line_break,
                });
                break;
            }
            let start = scanner.pos;
            let kind = scanner.scan_token();
            tokens.push(Token {
                kind,
                start: start as u32,
                end: scanner.pos as u32,
                preceded_by_line_break,
            });
            scanner.seen_line_break = false;
        }

        ScannedFile { tokens, trivia }
    }

    fn skip_trivia(&mut self, trivia: &mut Vec<TriviaRange>) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b' ' | b'\t' => self.pos += 1,
                b'\n' | b'\r' => {
                    self.seen_line_break = true;
                    self.pos += 1;
                }
                b'/' if self.peek(1) == Some(b'/') => {
                    let start = self.pos;
                    let kind = if self.peek(2) == Some(b'/') {
                        TriviaKind::DocComment
                    } else {
                        TriviaKind::LineComment
                    };
                    while self.pos < self.bytes.len()
                        && self.bytes[self.pos] != b'\n'
                        && self.bytes[self.pos] != b'\r'
                    {
                        self.pos += 1;
                    }
                    trivia.push(TriviaRange {
                        kind,
                        start: start as u32,
                        end: self.pos as u32,
                    });
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        if self.pos >= self.bytes.len() {
                            break; // unterminated: extends to end of file
                        }
                        if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        if self.bytes[self.pos] == b'\n' {
                            self.seen_line_break = true;
                        }
                        self.pos += 1;
                    }
                    trivia.push(TriviaRange {
                        kind: TriviaKind::BlockComment,
                        start: start as u32,
                        end: self.pos as u32,
                    });
                }
                _ => break,
            }
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn scan_token(&mut self) -> SyntaxKind {
        let b = self.bytes[self.pos];
        match b {
            b'{' => self.single(SyntaxKind::OpenBrace),
            b'}' => self.single(SyntaxKind::CloseBrace),
            b'(' => self.single(SyntaxKind::OpenParen),
            b')' => self.single(SyntaxKind::CloseParen),
            b'[' => self.single(SyntaxKind::OpenBracket),
            b']' => self.single(SyntaxKind::CloseBracket),
            b';' => self.single(SyntaxKind::Semicolon),
            b',' => self.single(SyntaxKind::Comma),
            b'.' => self.single(SyntaxKind::Dot),
            b':' => self.single(SyntaxKind::Colon),
            b'#' => self.single(SyntaxKind::Hash),
            b'~' => self.single(SyntaxKind::Tilde),
            b'^' => self.single(SyntaxKind::Caret),
            b'%' => self.single(SyntaxKind::Percent),
            b'?' => {
                if self.peek(1) == Some(b'?') {
                    self.multi(2, SyntaxKind::QuestionQuestion)
                } else {
                    self.single(SyntaxKind::Question)
                }
            }
            b'=' => match self.peek(1) {
                Some(b'=') => self.multi(2, SyntaxKind::EqualsEquals),
                Some(b'>') => self.multi(2, SyntaxKind::EqualsGreaterThan),
                _ => self.single(SyntaxKind::Equals),
            },
            b'!' => {
                if self.peek(1) == Some(b'=') {
                    self.multi(2, SyntaxKind::ExclamationEquals)
                } else {
                    self.single(SyntaxKind::Exclamation)
                }
            }
            b'<' => {
                if self.peek(1) == Some(b'=') {
                    self.multi(2, SyntaxKind::LessThanEquals)
                } else {
                    self.single(SyntaxKind::LessThan)
                }
            }
            b'>' => {
                if self.peek(1) == Some(b'=') {
                    self.multi(2, SyntaxKind::GreaterThanEquals)
                } else {
                    self.single(SyntaxKind::GreaterThan)
                }
            }
            b'+' => match self.peek(1) {
                Some(b'+') => self.multi(2, SyntaxKind::PlusPlus),
                Some(b'=') => self.multi(2, SyntaxKind::PlusEquals),
                _ => self.single(SyntaxKind::Plus),
            },
            b'-' => match self.peek(1) {
                Some(b'-') => self.multi(2, SyntaxKind::MinusMinus),
                Some(b'=') => self.multi(2, SyntaxKind::MinusEquals),
                _ => self.single(SyntaxKind::Minus),
            },
            b'*' => {
                if self.peek(1) == Some(b'=') {
                    self.multi(2, SyntaxKind::AsteriskEquals)
                } else {
                    self.single(SyntaxKind::Asterisk)
                }
            }
            b'/' => {
                // Comments were consumed as trivia, so this is an operator.
                if self.peek(1) == Some(b'=') {
                    self.multi(2, SyntaxKind::SlashEquals)
                } else {
                    self.single(SyntaxKind::Slash)
                }
            }
            b'&' => {
                if self.peek(1) == Some(b'&') {
                    self.multi(2, SyntaxKind::AmpersandAmpersand)
                } else {
                    self.single(SyntaxKind::Ampersand)
                }
            }
            b'|' => {
                if self.peek(1) == Some(b'|') {
                    self.multi(2, SyntaxKind::BarBar)
                } else {
                    self.single(SyntaxKind::Bar)
                }
            }
            b'"' => self.scan_string(b'"', SyntaxKind::StringLiteral),
            b'\'' => self.scan_string(b'\'', SyntaxKind::CharLiteral),
            b'0'..=b'9' => self.scan_number(),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.scan_word(),
            _ => {
                // Skip one whole UTF-8 character, not one byte.
                let ch_len = self.source[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.pos += ch_len;
                SyntaxKind::Unknown
            }
        }
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn multi(&mut self, width: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += width;
        kind
    }

    fn scan_string(&mut self, quote: u8, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b == b'\\' {
                // Escape: skip the next character too.
                self.pos = (self.pos + 2).min(self.bytes.len());
                continue;
            }
            if b == quote {
                self.pos += 1;
                return kind;
            }
            if b == b'\n' || b == b'\r' {
                // Unterminated literal ends at the line break.
                return kind;
            }
            self.pos += 1;
        }
        // Unterminated literal extends to end of file.
        kind
    }

    fn scan_number(&mut self) -> SyntaxKind {
        // Hex/binary prefix
        if self.bytes[self.pos] == b'0'
            && matches!(self.peek(1), Some(b'x') | Some(b'X') | Some(b'b') | Some(b'B'))
        {
            self.pos += 2;
            while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_hexdigit() {
                self.pos += 1;
            }
            return SyntaxKind::NumericLiteral;
        }
        while self.pos < self.bytes.len()
            && (self.bytes[self.pos].is_ascii_digit() || self.bytes[self.pos] == b'_')
        {
            self.pos += 1;
        }
        // Fraction
        if self.pos < self.bytes.len()
            && self.bytes[self.pos] == b'.'
            && self.peek(1).is_some_and(|b| b.is_ascii_digit())
        {
            self.pos += 1;
            while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }
        // Type suffix (L, UL, f, d, m, ...)
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_word(&mut self) -> SyntaxKind {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word = &self.source[start..self.pos];
        keyword_kind(word).unwrap_or(SyntaxKind::Identifier)
    }
}
