//! Enclosing-scope tracking.
//!
//! Each `{` up to the caret is classified by the tokens of its header
//! (the run between the previous statement boundary and the brace). The
//! resulting stack answers "what construct encloses the caret" without a
//! parse: namespace body, type body, executable code, loop, switch.

use csz_scanner::{SyntaxKind, Token};

/// The kind of a type whose body a `{` opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
}

/// What a `{` opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Namespace,
    Type(TypeKind),
    /// A method, accessor, constructor, or anonymous-function body.
    Member,
    /// A plain executable block (`else`, `lock`, bare `{`...).
    Block,
    /// `if` body (tracked separately so `else` knows what it follows).
    If,
    /// `for`, `foreach`, `while` body.
    Loop,
    /// `do` body (tracked separately so `while` knows what it follows).
    DoLoop,
    /// `switch` body.
    Switch,
    /// `try` block.
    Try,
    /// `catch` block.
    Catch,
}

impl ScopeKind {
    /// True for scopes whose direct content is statements.
    pub fn is_executable(self) -> bool {
        matches!(
            self,
            ScopeKind::Member
                | ScopeKind::Block
                | ScopeKind::If
                | ScopeKind::Loop
                | ScopeKind::DoLoop
                | ScopeKind::Switch
                | ScopeKind::Try
                | ScopeKind::Catch
        )
    }
}

/// One entry of the brace stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFrame {
    pub kind: ScopeKind,
    /// For `Member` frames: the header carried `static`.
    pub is_static: bool,
    /// For `Member` frames: the header carried `async`.
    pub is_async: bool,
}

impl ScopeFrame {
    fn of(kind: ScopeKind) -> Self {
        ScopeFrame {
            kind,
            is_static: false,
            is_async: false,
        }
    }
}

/// Build the scope stack for the caret: classify every `{` among
/// `tokens[..upto]` and pop on `}`. `upto` is exclusive.
pub fn build_scopes(tokens: &[Token], upto: usize) -> Vec<ScopeFrame> {
    let mut stack: Vec<ScopeFrame> = Vec::new();
    for i in 0..upto.min(tokens.len()) {
        match tokens[i].kind {
            SyntaxKind::OpenBrace => {
                let frame = classify_open_brace(tokens, i, &stack);
                stack.push(frame);
            }
            SyntaxKind::CloseBrace => {
                stack.pop();
            }
            _ => {}
        }
    }
    stack
}

/// Find the index of the `(` matching the `)` at `close`, scanning left.
pub(crate) fn matching_open_paren(tokens: &[Token], close: usize) -> Option<usize> {
    let mut depth = 0i32;
    for j in (0..=close).rev() {
        match tokens[j].kind {
            SyntaxKind::CloseParen => depth += 1,
            SyntaxKind::OpenParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}

/// Scan the declaration header left of `brace` (back to the previous
/// `{`, `}`, or `;`) and report (declaration keyword, static, async).
fn scan_header(tokens: &[Token], brace: usize) -> (Option<SyntaxKind>, bool, bool) {
    let mut decl = None;
    let mut is_static = false;
    let mut is_async = false;
    for j in (0..brace).rev() {
        match tokens[j].kind {
            SyntaxKind::OpenBrace | SyntaxKind::CloseBrace | SyntaxKind::Semicolon => break,
            SyntaxKind::NamespaceKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::StructKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::EnumKeyword => {
                decl = Some(tokens[j].kind);
            }
            SyntaxKind::StaticKeyword => is_static = true,
            SyntaxKind::AsyncKeyword => is_async = true,
            _ => {}
        }
    }
    (decl, is_static, is_async)
}

fn innermost_member(stack: &[ScopeFrame]) -> Option<&ScopeFrame> {
    stack.iter().rev().find(|f| f.kind == ScopeKind::Member)
}

fn classify_open_brace(tokens: &[Token], brace: usize, stack: &[ScopeFrame]) -> ScopeFrame {
    if brace == 0 {
        return ScopeFrame::of(ScopeKind::Block);
    }
    let prev = tokens[brace - 1].kind;
    match prev {
        // Lambda / anonymous method body: executable code that inherits
        // the instance/async nature of the member it appears in.
        SyntaxKind::EqualsGreaterThan | SyntaxKind::DelegateKeyword => {
            let mut frame = ScopeFrame::of(ScopeKind::Member);
            if let Some(outer) = innermost_member(stack) {
                frame.is_static = outer.is_static;
                frame.is_async = outer.is_async;
            }
            // `async () => {` / `async delegate {`
            if brace >= 2 {
                let header_has_async = (0..brace - 1)
                    .rev()
                    .take_while(|&j| {
                        !matches!(
                            tokens[j].kind,
                            SyntaxKind::OpenBrace | SyntaxKind::CloseBrace | SyntaxKind::Semicolon
                        )
                    })
                    .any(|j| tokens[j].kind == SyntaxKind::AsyncKeyword);
                if header_has_async {
                    frame.is_async = true;
                }
            }
            frame
        }
        SyntaxKind::DoKeyword => ScopeFrame::of(ScopeKind::DoLoop),
        SyntaxKind::TryKeyword => ScopeFrame::of(ScopeKind::Try),
        SyntaxKind::CatchKeyword => ScopeFrame::of(ScopeKind::Catch),
        SyntaxKind::ElseKeyword | SyntaxKind::FinallyKeyword | SyntaxKind::UnsafeKeyword => {
            ScopeFrame::of(ScopeKind::Block)
        }
        SyntaxKind::CloseParen => {
            let controller = matching_open_paren(tokens, brace - 1)
                .filter(|&p| p > 0)
                .map(|p| tokens[p - 1].kind);
            match controller {
                Some(SyntaxKind::IfKeyword) => ScopeFrame::of(ScopeKind::If),
                Some(SyntaxKind::LockKeyword) | Some(SyntaxKind::UsingKeyword) => {
                    ScopeFrame::of(ScopeKind::Block)
                }
                Some(SyntaxKind::WhileKeyword)
                | Some(SyntaxKind::ForKeyword)
                | Some(SyntaxKind::ForeachKeyword) => ScopeFrame::of(ScopeKind::Loop),
                Some(SyntaxKind::SwitchKeyword) => ScopeFrame::of(ScopeKind::Switch),
                Some(SyntaxKind::CatchKeyword) => ScopeFrame::of(ScopeKind::Catch),
                // `void M(...) {` inside a type body is a member body;
                // anywhere else treat it as a local function / block.
                _ => {
                    if matches!(stack.last().map(|f| f.kind), Some(ScopeKind::Type(_))) {
                        let (_, is_static, is_async) = scan_header(tokens, brace);
                        ScopeFrame {
                            kind: ScopeKind::Member,
                            is_static,
                            is_async,
                        }
                    } else {
                        let (_, _, is_async) = scan_header(tokens, brace);
                        let mut frame = ScopeFrame::of(ScopeKind::Block);
                        frame.is_async = is_async;
                        frame
                    }
                }
            }
        }
        _ => {
            let (decl, is_static, is_async) = scan_header(tokens, brace);
            match decl {
                Some(SyntaxKind::NamespaceKeyword) => ScopeFrame::of(ScopeKind::Namespace),
                Some(SyntaxKind::ClassKeyword) => ScopeFrame::of(ScopeKind::Type(TypeKind::Class)),
                Some(SyntaxKind::StructKeyword) => {
                    ScopeFrame::of(ScopeKind::Type(TypeKind::Struct))
                }
                Some(SyntaxKind::InterfaceKeyword) => {
                    ScopeFrame::of(ScopeKind::Type(TypeKind::Interface))
                }
                Some(SyntaxKind::EnumKeyword) => ScopeFrame::of(ScopeKind::Type(TypeKind::Enum)),
                _ => {
                    // `int Prop {` inside a type body opens an accessor
                    // list; its braces behave like a member body here.
                    if matches!(stack.last().map(|f| f.kind), Some(ScopeKind::Type(_))) {
                        ScopeFrame {
                            kind: ScopeKind::Member,
                            is_static,
                            is_async,
                        }
                    } else {
                        ScopeFrame::of(ScopeKind::Block)
                    }
                }
            }
        }
    }
}
