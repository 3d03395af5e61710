//! Recommenders for declaration-opening keywords.

use csz_context::SyntaxContext;

use crate::KeywordRecommender;

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    all.push(Box::new(NamespaceKeywordRecommender));
    all.push(Box::new(ClassKeywordRecommender));
    all.push(Box::new(StructKeywordRecommender));
    all.push(Box::new(InterfaceKeywordRecommender));
    all.push(Box::new(EnumKeywordRecommender));
    all.push(Box::new(DelegateKeywordRecommender));
    all.push(Box::new(UsingKeywordRecommender));
}

struct NamespaceKeywordRecommender;

impl KeywordRecommender for NamespaceKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "namespace"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_namespace_context()
    }
}

struct ClassKeywordRecommender;

impl KeywordRecommender for ClassKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "class"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_declaration_context()
    }
}

struct StructKeywordRecommender;

impl KeywordRecommender for StructKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "struct"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_declaration_context()
    }
}

struct InterfaceKeywordRecommender;

impl KeywordRecommender for InterfaceKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "interface"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_declaration_context()
    }
}

struct EnumKeywordRecommender;

impl KeywordRecommender for EnumKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "enum"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_declaration_context()
    }
}

/// `delegate` opens both a delegate type declaration and an anonymous
/// method expression, so it answers for both positions.
struct DelegateKeywordRecommender;

impl KeywordRecommender for DelegateKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "delegate"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_declaration_context() || ctx.is_expression_context()
    }
}

/// `using` as a directive at namespace level and as a statement inside
/// executable code.
struct UsingKeywordRecommender;

impl KeywordRecommender for UsingKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "using"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_namespace_context() || ctx.is_statement_context() || ctx.is_global_statement_context()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{assert_not_recommended, assert_recommended};

    #[test]
    fn test_namespace_at_file_start() {
        assert_recommended("@@", "namespace");
        assert_recommended("using System; @@", "namespace");
        assert_not_recommended("class C { @@ }", "namespace");
    }

    #[test]
    fn test_type_openers() {
        for kw in ["class", "struct", "interface", "enum"] {
            assert_recommended("@@", kw);
            assert_recommended("namespace N { @@ }", kw);
            assert_recommended("namespace N { public @@ }", kw);
            assert_recommended("class Outer { @@ }", kw);
            assert_not_recommended("class C { void M() { @@ } }", kw);
        }
    }

    #[test]
    fn test_delegate_in_both_positions() {
        assert_recommended("namespace N { public @@ }", "delegate");
        assert_recommended("class C { void M() { var f = @@ } }", "delegate");
    }

    #[test]
    fn test_using_directive_and_statement() {
        assert_recommended("@@", "using");
        assert_recommended("namespace N { @@ }", "using");
        assert_recommended("class C { void M() { @@ } }", "using");
        assert_not_recommended("class C { @@ }", "using");
    }
}
