//! Recommenders for the built-in type keywords.

use csz_context::SyntaxContext;
use csz_scanner::SyntaxKind;

use crate::KeywordRecommender;

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    for text in ["bool", "char", "double", "int", "long", "object", "string"] {
        all.push(Box::new(IntrinsicTypeRecommender { text }));
    }
    all.push(Box::new(VoidKeywordRecommender));
}

struct IntrinsicTypeRecommender {
    text: &'static str,
}

impl KeywordRecommender for IntrinsicTypeRecommender {
    fn keyword_text(&self) -> &'static str {
        self.text
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_type_context()
    }
}

/// `void` is narrower than the value types: only a member return type or
/// a delegate return type, never a variable or parameter type.
struct VoidKeywordRecommender;

impl KeywordRecommender for VoidKeywordRecommender {
    fn keyword_text(&self) -> &'static str {
        "void"
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_member_declaration_context()
            || ctx.target_token_kind() == Some(SyntaxKind::DelegateKeyword)
    }
}
