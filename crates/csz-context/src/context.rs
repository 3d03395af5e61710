//! The `SyntaxContext` snapshot.
//!
//! Built once per completion request from the source text and the caret
//! position. Recommenders only ever read it.

use bitflags::bitflags;
use csz_scanner::{ScannedFile, Scanner, SyntaxKind, Token};

use crate::scope::{ScopeFrame, build_scopes};

bitflags! {
    /// Declaration modifiers seen immediately left of the caret.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModifierFlags: u32 {
        const ABSTRACT  = 1 << 0;
        const ASYNC     = 1 << 1;
        const CONST     = 1 << 2;
        const EXTERN    = 1 << 3;
        const INTERNAL  = 1 << 4;
        const NEW       = 1 << 5;
        const OVERRIDE  = 1 << 6;
        const PARTIAL   = 1 << 7;
        const PRIVATE   = 1 << 8;
        const PROTECTED = 1 << 9;
        const PUBLIC    = 1 << 10;
        const READONLY  = 1 << 11;
        const SEALED    = 1 << 12;
        const STATIC    = 1 << 13;
        const UNSAFE    = 1 << 14;
        const VIRTUAL   = 1 << 15;
        const VOLATILE  = 1 << 16;

        const ACCESSIBILITY = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::INTERNAL.bits();
    }
}

impl ModifierFlags {
    pub fn from_kind(kind: SyntaxKind) -> Option<ModifierFlags> {
        let flag = match kind {
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::ExternKeyword => ModifierFlags::EXTERN,
            SyntaxKind::InternalKeyword => ModifierFlags::INTERNAL,
            SyntaxKind::NewKeyword => ModifierFlags::NEW,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            SyntaxKind::PartialKeyword => ModifierFlags::PARTIAL,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::SealedKeyword => ModifierFlags::SEALED,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::UnsafeKeyword => ModifierFlags::UNSAFE,
            SyntaxKind::VirtualKeyword => ModifierFlags::VIRTUAL,
            SyntaxKind::VolatileKeyword => ModifierFlags::VOLATILE,
            _ => return None,
        };
        Some(flag)
    }
}

/// Snapshot of the partially-typed source surrounding the caret.
pub struct SyntaxContext<'a> {
    source: &'a str,
    position: u32,
    scanned: ScannedFile,
    /// Index of the target token: the token left of the caret after the
    /// leftmost-touching adjustment. `None` when nothing precedes it.
    target_index: Option<usize>,
    /// Span of the word the caret is touching (the word being typed).
    word_span: Option<(u32, u32)>,
    in_non_user_code: bool,
    scopes: Vec<ScopeFrame>,
    preceding_modifiers: ModifierFlags,
    /// True when the modifier run starts at a declaration boundary
    /// (`{`, `}`, `;`, `]`, or start of file).
    modifiers_anchored: bool,
}

impl<'a> SyntaxContext<'a> {
    /// Build the context for `position` (a byte offset, clamped to the
    /// end of the file).
    pub fn build(source: &'a str, position: u32) -> Self {
        let position = position.min(source.len() as u32);
        let scanned = Scanner::scan_file(source);

        let containing = scanned
            .tokens
            .iter()
            .position(|t| t.kind != SyntaxKind::EndOfFile && t.start < position && position < t.end);
        let left = scanned.token_index_left_of(position);

        // Leftmost-touching rule: when the caret sits inside or at the end
        // of an identifier-shaped word, that word is being typed and the
        // token to its left is the one that decides the context.
        let mut word_span = None;
        let mut target_index = left;
        if let Some(c) = containing {
            let token = scanned.tokens[c];
            if is_word(token.kind) {
                word_span = Some((token.start, token.end));
                target_index = c.checked_sub(1);
            } else {
                // Caret inside punctuation or a literal: the token on the
                // left of the whole token decides.
                target_index = c.checked_sub(1);
            }
        } else if let Some(i) = left {
            let token = scanned.tokens[i];
            if token.end == position && is_word(token.kind) {
                word_span = Some((token.start, token.end));
                target_index = i.checked_sub(1);
            }
        }

        let in_non_user_code =
            Self::compute_non_user_code(source, &scanned, containing, left, position);

        let upto = target_index.map_or(0, |i| i + 1);
        let scopes = build_scopes(&scanned.tokens, upto);

        let (preceding_modifiers, modifiers_anchored) =
            Self::compute_modifiers(&scanned.tokens, target_index);

        SyntaxContext {
            source,
            position,
            scanned,
            target_index,
            word_span,
            in_non_user_code,
            scopes,
            preceding_modifiers,
            modifiers_anchored,
        }
    }

    fn compute_non_user_code(
        source: &str,
        scanned: &ScannedFile,
        containing: Option<usize>,
        left: Option<usize>,
        position: u32,
    ) -> bool {
        if scanned.is_in_comment(position) {
            return true;
        }
        if let Some(c) = containing {
            let kind = scanned.tokens[c].kind;
            if matches!(
                kind,
                SyntaxKind::StringLiteral | SyntaxKind::CharLiteral | SyntaxKind::NumericLiteral
            ) {
                return true;
            }
        }
        if let Some(i) = left {
            let token = scanned.tokens[i];
            if token.end == position {
                // Right after a numeric literal nothing should be offered
                // (the user is still typing the number or a suffix).
                if token.kind == SyntaxKind::NumericLiteral {
                    return true;
                }
                // An unterminated literal runs to the line break or the end
                // of the file; a caret at its end is still inside it.
                let quote = match token.kind {
                    SyntaxKind::StringLiteral => Some('"'),
                    SyntaxKind::CharLiteral => Some('\''),
                    _ => None,
                };
                if let Some(quote) = quote {
                    let text = &source[token.start as usize..token.end as usize];
                    if literal_is_unterminated(text, quote) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn compute_modifiers(
        tokens: &[Token],
        target_index: Option<usize>,
    ) -> (ModifierFlags, bool) {
        let mut flags = ModifierFlags::empty();
        let Some(mut i) = target_index else {
            return (flags, true);
        };
        loop {
            let Some(flag) = ModifierFlags::from_kind(tokens[i].kind) else {
                // `i` is the token before the modifier run.
                let anchored = matches!(
                    tokens[i].kind,
                    SyntaxKind::OpenBrace
                        | SyntaxKind::CloseBrace
                        | SyntaxKind::Semicolon
                        | SyntaxKind::CloseBracket
                );
                return (flags, anchored);
            };
            flags |= flag;
            match i.checked_sub(1) {
                Some(prev) => i = prev,
                None => return (flags, true), // run starts the file
            }
        }
    }

    pub fn source(&self) -> &str {
        self.source
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub(crate) fn tokens(&self) -> &[Token] {
        &self.scanned.tokens
    }

    pub(crate) fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    /// The token immediately left of the caret, after the
    /// leftmost-touching adjustment.
    pub fn target_token(&self) -> Option<&Token> {
        self.target_index.map(|i| &self.scanned.tokens[i])
    }

    pub fn target_token_kind(&self) -> Option<SyntaxKind> {
        self.target_token().map(|t| t.kind)
    }

    /// Span of the word being typed at the caret, if any.
    pub fn word_span(&self) -> Option<(u32, u32)> {
        self.word_span
    }

    /// The caret sits inside a comment or literal; nothing may be offered.
    pub fn is_in_non_user_code(&self) -> bool {
        self.in_non_user_code
    }

    pub fn scopes(&self) -> &[ScopeFrame] {
        &self.scopes
    }

    /// Modifier run immediately left of the caret.
    pub fn preceding_modifiers(&self) -> ModifierFlags {
        self.preceding_modifiers
    }

    /// True when the modifier run starts at a declaration boundary, so
    /// the run really prefixes a declaration rather than trailing an
    /// expression.
    pub fn modifiers_anchored(&self) -> bool {
        self.modifiers_anchored
    }
}

fn is_word(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || kind.is_keyword()
}

/// A literal is terminated when it ends with an unescaped closing quote.
fn literal_is_unterminated(text: &str, quote: char) -> bool {
    if text.len() < 2 || !text.ends_with(quote) {
        return true;
    }
    let body = &text[..text.len() - 1];
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 1
}
