//! Recommenders for parameter and argument modifiers.

use csz_context::SyntaxContext;

use crate::KeywordRecommender;

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    all.push(Box::new(RefKeywordRecommender));
    all.push(Box::new(OutKeywordRecommender));
    all.push(Box::new(InKeywordRecommender));
    all.push(Box::new(ParamsKeywordRecommender));
}

/// `ref` on parameters, arguments, and locals.
struct RefKeywordRecommender;

impl KeywordRecommender for RefKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "ref"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_parameter_modifier_context()
            || ctx.is_expression_context()
            || ctx.is_statement_context()
    }
}

/// `out` on parameters and arguments.
struct OutKeywordRecommender;

impl KeywordRecommender for OutKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "out"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_parameter_modifier_context() || ctx.is_expression_context()
    }
}

/// `in` the readonly-reference parameter modifier, and the separator in
/// a `foreach` header.
struct InKeywordRecommender;

impl KeywordRecommender for InKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "in"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_parameter_modifier_context() || ctx.is_foreach_in_context()
    }
}

struct ParamsKeywordRecommender;

impl KeywordRecommender for ParamsKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "params"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_parameter_modifier_context()
    }
}
