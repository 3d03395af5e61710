//! Recommenders for preprocessor directive names.
//!
//! `if` and `else` double as statement keywords and live with the
//! statement recommenders; everything here is directive-only.

use csz_context::SyntaxContext;

use crate::KeywordRecommender;

const DIRECTIVES: &[&str] = &["define", "undef", "region", "endregion", "endif", "pragma"];

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    for &text in DIRECTIVES {
        all.push(Box::new(DirectiveRecommender { text }));
    }
}

struct DirectiveRecommender {
    text: &'static str,
}

impl KeywordRecommender for DirectiveRecommender {
    fn keyword_text(&self) -> &'static str {
        self.text
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        ctx.is_preprocessor_directive_context()
    }
}
