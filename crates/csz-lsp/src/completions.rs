//! Keyword completion over an open document.

use csz_common::{LineMap, Position};
use csz_context::SyntaxContext;
use csz_recommenders::{MATCH_PRIORITY_DEFAULT, recommend_keywords};

/// The kind of completion item. This layer only produces keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CompletionItemKind {
    Keyword,
}

/// Sort text categories. Lower strings appear first in the client's
/// completion list.
pub mod sort_priority {
    /// Keywords surfaced above the rest at this caret.
    pub const PREFERRED_KEYWORD: &str = "14";
    /// Ordinary keyword entries.
    pub const KEYWORD: &str = "15";
}

/// A completion entry sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionItemKind,
    pub sort_text: String,
}

/// Keyword-completion provider for one document snapshot.
pub struct KeywordCompletions<'a> {
    source: &'a str,
    line_map: LineMap,
}

impl<'a> KeywordCompletions<'a> {
    pub fn new(source: &'a str) -> Self {
        KeywordCompletions {
            source,
            line_map: LineMap::build(source),
        }
    }

    /// Completion entries at a line/character position. An off-document
    /// position yields no entries.
    pub fn provide(&self, position: Position) -> Vec<CompletionItem> {
        let Some(offset) = self.line_map.offset_of(position, self.source) else {
            return Vec::new();
        };
        self.provide_at_offset(offset)
    }

    /// Completion entries at a byte offset.
    pub fn provide_at_offset(&self, offset: u32) -> Vec<CompletionItem> {
        let ctx = SyntaxContext::build(self.source, offset);
        recommend_keywords(offset, &ctx)
            .into_iter()
            .map(|keyword| {
                let sort_text = if keyword.match_priority > MATCH_PRIORITY_DEFAULT {
                    sort_priority::PREFERRED_KEYWORD
                } else {
                    sort_priority::KEYWORD
                };
                CompletionItem {
                    label: keyword.text.to_owned(),
                    kind: CompletionItemKind::Keyword,
                    sort_text: sort_text.to_owned(),
                }
            })
            .collect()
    }
}
