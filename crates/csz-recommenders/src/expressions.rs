//! Recommenders for expression keywords.

use csz_context::SyntaxContext;

use crate::{KeywordRecommender, MATCH_PRIORITY_DEFAULT, MATCH_PRIORITY_ELEVATED};

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    all.push(Box::new(LiteralKeywordRecommender { text: "true" }));
    all.push(Box::new(LiteralKeywordRecommender { text: "false" }));
    all.push(Box::new(LiteralKeywordRecommender { text: "null" }));
    all.push(Box::new(ThisKeywordRecommender));
    all.push(Box::new(BaseKeywordRecommender));
    all.push(Box::new(NewKeywordRecommender));
    all.push(Box::new(TypeofKeywordRecommender));
    all.push(Box::new(SizeofKeywordRecommender));
    all.push(Box::new(AwaitKeywordRecommender));
    all.push(Box::new(IsKeywordRecommender));
    all.push(Box::new(AsKeywordRecommender));
}

struct LiteralKeywordRecommender {
    text: &'static str,
}

impl KeywordRecommender for LiteralKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        self.text
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_expression_context()
    }
}

/// `this` the receiver, plus the extension-method marker on a first
/// parameter.
struct ThisKeywordRecommender;

impl KeywordRecommender for ThisKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "this"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        (ctx.is_expression_context() && ctx.is_instance_context())
            || ctx.is_parameter_modifier_context()
    }
}

struct BaseKeywordRecommender;

impl KeywordRecommender for BaseKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "base"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_expression_context() && ctx.is_instance_context()
    }
}

/// `new` the allocation expression, and `new` the hiding modifier.
struct NewKeywordRecommender;

impl KeywordRecommender for NewKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "new"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_expression_context() || ctx.is_member_declaration_context()
    }
}

struct TypeofKeywordRecommender;

impl KeywordRecommender for TypeofKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "typeof"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_any_expression_context()
    }
}

struct SizeofKeywordRecommender;

impl KeywordRecommender for SizeofKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "sizeof"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_any_expression_context()
    }
}

/// Offered wherever an expression starts inside a member body, surfaced
/// above the rest when the enclosing member is `async`.
struct AwaitKeywordRecommender;

impl KeywordRecommender for AwaitKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "await"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        (ctx.is_expression_context() || ctx.is_statement_context()) && ctx.is_inside_member_body()
    }

    fn match_priority(&self, ctx: &SyntaxContext<'_>) -> i32 {
        if ctx.is_async_context() {
            MATCH_PRIORITY_ELEVATED
        } else {
            MATCH_PRIORITY_DEFAULT
        }
    }
}

struct IsKeywordRecommender;

impl KeywordRecommender for IsKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "is"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_postfix_operator_context()
    }
}

struct AsKeywordRecommender;

impl KeywordRecommender for AsKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "as"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_postfix_operator_context()
    }
}

#[cfg(test)]
mod tests {
    use csz_context::SyntaxContext;
    use csz_context::test_util::split_marker;

    use crate::test_support::{assert_not_recommended, assert_recommended};

    #[test]
    fn test_literals_at_expression_start() {
        for kw in ["true", "false", "null"] {
            assert_recommended("class C { void M() { var x = @@ } }", kw);
            assert_recommended("class C { void M() { F(@@ } }", kw);
            assert_not_recommended("class C { void M() { @@ } }", kw);
        }
    }

    #[test]
    fn test_this_and_base_need_an_instance() {
        assert_recommended("class C { void M() { var x = @@ } }", "this");
        assert_recommended("class C { void M() { var x = @@ } }", "base");
        assert_not_recommended("class C { static void M() { var x = @@ } }", "base");
        assert_not_recommended("class C { static void M() { var x = @@ } }", "this");
        // Extension-method marker position.
        assert_recommended("static class E { static void M(@@ }", "this");
    }

    #[test]
    fn test_new_in_both_roles() {
        assert_recommended("class C { void M() { var x = @@ } }", "new");
        assert_recommended("class C { @@ }", "new");
        assert_not_recommended("enum E { @@ }", "new");
    }

    #[test]
    fn test_typeof_and_sizeof() {
        assert_recommended("class C { void M() { var t = @@ } }", "typeof");
        assert_recommended("class C { void M() { @@ } }", "typeof");
        assert_recommended("class C { void M() { var n = @@ } }", "sizeof");
    }

    #[test]
    fn test_await_priority_tracks_async() {
        assert_recommended("class C { async void M() { @@ } }", "await");
        assert_recommended("class C { void M() { @@ } }", "await");

        let (source, pos) =
            split_marker("class C { async void M() { var x = @@ } }");
        let ctx = SyntaxContext::build(&source, pos);
        let offered = crate::recommend_keywords(pos, &ctx);
        let await_kw = offered.iter().find(|k| k.text == "await").unwrap();
        assert_eq!(await_kw.match_priority, crate::MATCH_PRIORITY_ELEVATED);

        let (source, pos) = split_marker("class C { void M() { var x = @@ } }");
        let ctx = SyntaxContext::build(&source, pos);
        let offered = crate::recommend_keywords(pos, &ctx);
        let await_kw = offered.iter().find(|k| k.text == "await").unwrap();
        assert_eq!(await_kw.match_priority, crate::MATCH_PRIORITY_DEFAULT);
    }

    #[test]
    fn test_is_and_as_after_an_operand() {
        assert_recommended("class C { void M() { if (x @@ } }", "is");
        assert_recommended("class C { void M() { var y = obj @@ } }", "as");
        assert_not_recommended("class C { void M() { @@ } }", "is");
        assert_not_recommended("class C { void M() { var y = @@ } }", "as");
    }
}
