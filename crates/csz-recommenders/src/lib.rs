//! Keyword-completion recommenders.
//!
//! Each recommender is a small stateless predicate that decides whether
//! one reserved word is syntactically valid at the caret. They share no
//! logic beyond the context snapshot they all read; dispatch is a walk
//! over the registry in declaration order.

use once_cell::sync::Lazy;

use csz_context::SyntaxContext;

pub mod declarations;
pub mod expressions;
pub mod modifiers;
pub mod parameters;
pub mod preprocessor;
pub mod statements;
pub mod types;

/// Default ranking for a recommended keyword.
pub const MATCH_PRIORITY_DEFAULT: i32 = 0;

/// Ranking for keywords a recommender wants surfaced above the rest at
/// this caret (e.g. `await` inside an async member).
pub const MATCH_PRIORITY_ELEVATED: i32 = 1;

/// A keyword the completion list should offer, with its ranking hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RecommendedKeyword {
    pub text: &'static str,
    pub match_priority: i32,
}

impl RecommendedKeyword {
    pub fn new(text: &'static str) -> Self {
        RecommendedKeyword {
            text,
            match_priority: MATCH_PRIORITY_DEFAULT,
        }
    }

    pub fn with_priority(text: &'static str, match_priority: i32) -> Self {
        RecommendedKeyword {
            text,
            match_priority,
        }
    }
}

/// One keyword's context predicate.
///
/// Implementations are stateless unit structs; `is_valid_context` must be
/// a pure function of its inputs and return `false` for any context it
/// does not recognize.
pub trait KeywordRecommender: Send + Sync {
    /// The literal keyword text this recommender offers.
    fn keyword_text(&self) -> &'static str;

    /// Whether inserting the keyword at `position` would be
    /// syntactically legal.
    fn is_valid_context(&self, position: u32, ctx: &SyntaxContext<'_>) -> bool;

    /// Ranking hint for the completion list.
    fn match_priority(&self, _ctx: &SyntaxContext<'_>) -> i32 {
        MATCH_PRIORITY_DEFAULT
    }
}

/// Every recommender, in the order their keywords are surfaced.
static REGISTRY: Lazy<Vec<Box<dyn KeywordRecommender>>> = Lazy::new(|| {
    let mut all: Vec<Box<dyn KeywordRecommender>> = Vec::new();
    declarations::add_recommenders(&mut all);
    modifiers::add_recommenders(&mut all);
    statements::add_recommenders(&mut all);
    expressions::add_recommenders(&mut all);
    parameters::add_recommenders(&mut all);
    types::add_recommenders(&mut all);
    preprocessor::add_recommenders(&mut all);
    all
});

/// Run every recommender against the context and collect the keywords
/// that are valid at `position`. Output order is registry order, which
/// is stable across calls.
pub fn recommend_keywords(position: u32, ctx: &SyntaxContext<'_>) -> Vec<RecommendedKeyword> {
    if ctx.is_in_non_user_code() {
        return Vec::new();
    }
    REGISTRY
        .iter()
        .filter(|r| r.is_valid_context(position, ctx))
        .map(|r| RecommendedKeyword::with_priority(r.keyword_text(), r.match_priority(ctx)))
        .collect()
}

/// All registered recommenders, for callers that drive them one at a
/// time (tests, tooling).
pub fn all_recommenders() -> &'static [Box<dyn KeywordRecommender>] {
    &REGISTRY
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_no_duplicate_keywords() {
        let mut seen = std::collections::HashSet::new();
        for r in all_recommenders() {
            assert!(
                seen.insert(r.keyword_text()),
                "duplicate recommender for `{}`",
                r.keyword_text()
            );
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_non_user_code_returns_empty() {
        let source = "class C { // comment\n}";
        let pos = "class C { // com".len() as u32;
        let ctx = SyntaxContext::build(source, pos);
        assert!(recommend_keywords(pos, &ctx).is_empty());
    }

    #[test]
    fn test_recommended_keyword_defaults() {
        let kw = RecommendedKeyword::new("return");
        assert_eq!(kw.text, "return");
        assert_eq!(kw.match_priority, MATCH_PRIORITY_DEFAULT);
    }
}
