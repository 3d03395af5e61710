//! Recommenders for statement keywords.

use csz_context::SyntaxContext;

use crate::KeywordRecommender;

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    all.push(Box::new(IfKeywordRecommender));
    all.push(Box::new(ElseKeywordRecommender));
    all.push(Box::new(WhileKeywordRecommender));
    all.push(Box::new(DoKeywordRecommender));
    all.push(Box::new(ForKeywordRecommender));
    all.push(Box::new(ForeachKeywordRecommender));
    all.push(Box::new(SwitchKeywordRecommender));
    all.push(Box::new(CaseKeywordRecommender));
    all.push(Box::new(DefaultKeywordRecommender));
    all.push(Box::new(BreakKeywordRecommender));
    all.push(Box::new(ContinueKeywordRecommender));
    all.push(Box::new(ReturnKeywordRecommender));
    all.push(Box::new(ThrowKeywordRecommender));
    all.push(Box::new(TryKeywordRecommender));
    all.push(Box::new(CatchKeywordRecommender));
    all.push(Box::new(FinallyKeywordRecommender));
    all.push(Box::new(LockKeywordRecommender));
    all.push(Box::new(GotoKeywordRecommender));
    all.push(Box::new(VarKeywordRecommender));
    all.push(Box::new(YieldKeywordRecommender));
}

fn at_statement_start(ctx: &SyntaxContext<'_>) -> bool {
    ctx.is_statement_context() || ctx.is_global_statement_context()
}

/// `if` the statement, and `#if` right after the directive hash.
struct IfKeywordRecommender;

impl KeywordRecommender for IfKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "if"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx) || ctx.is_preprocessor_directive_context()
    }
}

/// `else` after a completed `if` branch, and `#else` after the hash.
struct ElseKeywordRecommender;

impl KeywordRecommender for ElseKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "else"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_else_context() || ctx.is_preprocessor_directive_context()
    }
}

/// `while` opens a loop, and closes a `do` block.
struct WhileKeywordRecommender;

impl KeywordRecommender for WhileKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "while"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx) || ctx.is_do_statement_close()
    }
}

struct DoKeywordRecommender;

impl KeywordRecommender for DoKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "do"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

struct ForKeywordRecommender;

impl KeywordRecommender for ForKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "for"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

struct ForeachKeywordRecommender;

impl KeywordRecommender for ForeachKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "foreach"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

struct SwitchKeywordRecommender;

impl KeywordRecommender for SwitchKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "switch"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

/// `case` as a switch label and as a `goto case` target.
struct CaseKeywordRecommender;

impl KeywordRecommender for CaseKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "case"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_switch_label_context() || (ctx.is_label_context() && ctx.is_inside_switch())
    }
}

/// `default` is a switch label, a `goto default` target, and the
/// `default` literal expression.
struct DefaultKeywordRecommender;

impl KeywordRecommender for DefaultKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "default"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_switch_label_context()
            || (ctx.is_label_context() && ctx.is_inside_switch())
            || ctx.is_expression_context()
    }
}

struct BreakKeywordRecommender;

impl KeywordRecommender for BreakKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "break"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() && (ctx.is_inside_loop() || ctx.is_inside_switch())
    }
}

struct ContinueKeywordRecommender;

impl KeywordRecommender for ContinueKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "continue"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() && ctx.is_inside_loop()
    }
}

struct ReturnKeywordRecommender;

impl KeywordRecommender for ReturnKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "return"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() && ctx.is_inside_member_body()
    }
}

/// `throw` the statement and the throw expression.
struct ThrowKeywordRecommender;

impl KeywordRecommender for ThrowKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "throw"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() || ctx.is_expression_context()
    }
}

struct TryKeywordRecommender;

impl KeywordRecommender for TryKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "try"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

struct CatchKeywordRecommender;

impl KeywordRecommender for CatchKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "catch"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_catch_or_finally_context()
    }
}

struct FinallyKeywordRecommender;

impl KeywordRecommender for FinallyKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "finally"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_catch_or_finally_context()
    }
}

struct LockKeywordRecommender;

impl KeywordRecommender for LockKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "lock"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        at_statement_start(ctx)
    }
}

struct GotoKeywordRecommender;

impl KeywordRecommender for GotoKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "goto"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() && ctx.is_inside_member_body()
    }
}

struct VarKeywordRecommender;

impl KeywordRecommender for VarKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "var"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_local_variable_declaration_context()
    }
}

struct YieldKeywordRecommender;

impl KeywordRecommender for YieldKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "yield"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_statement_context() && ctx.is_inside_member_body()
    }
}
