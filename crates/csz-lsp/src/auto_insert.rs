//! The `textDocument/_vs_onAutoInsert` handler.
//!
//! The client sends the position right after a trigger character the
//! user typed; the server may answer with a single edit to apply. The
//! edit computation itself is behind [`AutoInsertService`] so hosts can
//! swap in their own; [`BuiltinAutoInsert`] covers doc comments.

use tracing::debug;

use csz_common::{LineMap, Position, Range};

use crate::documents::DocumentStore;

/// How the client should interpret `new_text` in a returned edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTextFormat {
    /// Insert the text verbatim.
    Plaintext,
    /// Snippet syntax: `$0` marks where the caret lands.
    Snippet,
}

impl InsertTextFormat {
    fn code(self) -> u8 {
        match self {
            InsertTextFormat::Plaintext => 1,
            InsertTextFormat::Snippet => 2,
        }
    }
}

// The wire protocol spells the format as a bare number.
impl serde::Serialize for InsertTextFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for InsertTextFormat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(InsertTextFormat::Plaintext),
            2 => Ok(InsertTextFormat::Snippet),
            other => Err(serde::de::Error::custom(format!(
                "invalid InsertTextFormat: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnAutoInsertParams {
    pub text_document: TextDocumentIdentifier,
    /// Caret position immediately after the typed character.
    pub position: Position,
    /// The character that triggered the request.
    pub ch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnAutoInsertResponseItem {
    pub text_edit_format: InsertTextFormat,
    pub text_edit: TextEdit,
}

/// An edit computed by a service, in byte-offset terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoInsertEdit {
    /// Byte offset of the replaced span.
    pub start: u32,
    /// Byte length of the replaced span; zero for a pure insertion.
    pub length: u32,
    pub new_text: String,
    pub format: InsertTextFormat,
}

/// Computes the edit (if any) for one trigger character.
pub trait AutoInsertService: Send + Sync {
    /// `offset` is the caret position right after the typed `ch`,
    /// which is already present in `text`.
    fn resolve_insertion(&self, text: &str, offset: u32, ch: &str) -> Option<AutoInsertEdit>;
}

/// Resolves the document and trigger into a response.
///
/// Missing document, missing service, or a trigger the service declines
/// all yield `None`. A service edit that fails validation (span out of
/// bounds, snippet without exactly one `$0`) is dropped the same way,
/// with a debug assertion to surface the bug during development.
pub fn on_auto_insert(
    store: &DocumentStore,
    service: Option<&dyn AutoInsertService>,
    params: &OnAutoInsertParams,
) -> Option<OnAutoInsertResponseItem> {
    let text = store.get(&params.text_document.uri)?;
    let service = service?;
    let line_map = LineMap::build(text);
    let offset = line_map.offset_of(params.position, text)?;
    let edit = service.resolve_insertion(text, offset, &params.ch)?;

    let end = edit.start.checked_add(edit.length)?;
    if end as usize > text.len() {
        debug_assert!(false, "auto-insert edit out of bounds: {edit:?}");
        return None;
    }
    if edit.format == InsertTextFormat::Snippet && edit.new_text.matches("$0").count() != 1 {
        debug_assert!(false, "snippet must contain exactly one $0: {edit:?}");
        return None;
    }
    debug!(
        uri = %params.text_document.uri,
        ch = %params.ch,
        "auto-insert edit produced"
    );
    Some(OnAutoInsertResponseItem {
        text_edit_format: edit.format,
        text_edit: TextEdit {
            range: line_map.range(edit.start, end, text),
            new_text: edit.new_text,
        },
    })
}

/// Doc-comment auto-insert: summary scaffolding on `///`, element close
/// on `>`, attribute quotes on `=`.
#[derive(Debug, Default)]
pub struct BuiltinAutoInsert;

impl BuiltinAutoInsert {
    pub fn new() -> Self {
        Self
    }
}

impl AutoInsertService for BuiltinAutoInsert {
    fn resolve_insertion(&self, text: &str, offset: u32, ch: &str) -> Option<AutoInsertEdit> {
        let caret = offset as usize;
        if caret > text.len() || !text.is_char_boundary(caret) {
            return None;
        }
        match ch {
            "/" => doc_comment_scaffold(text, caret),
            ">" => close_element(text, caret),
            "=" => attribute_quotes(text, caret),
            _ => None,
        }
    }
}

/// Start of the line containing `caret`.
fn line_start(text: &str, caret: usize) -> usize {
    text[..caret].rfind('\n').map_or(0, |i| i + 1)
}

/// True when the rest of the line after `caret` is blank.
fn line_rest_is_blank(text: &str, caret: usize) -> bool {
    text[caret..]
        .chars()
        .take_while(|&c| c != '\n')
        .all(char::is_whitespace)
}

/// Typing the third `/` of `///` on an otherwise empty line inserts the
/// summary block, caret inside the summary.
fn doc_comment_scaffold(text: &str, caret: usize) -> Option<AutoInsertEdit> {
    let start = line_start(text, caret);
    let line = &text[start..caret];
    let indent = &line[..line.len() - line.trim_start().len()];
    if line.trim_start() != "///" || !line_rest_is_blank(text, caret) {
        return None;
    }
    // Do not scaffold when continuing an existing doc comment.
    if start > 0 {
        let prev_start = line_start(text, start - 1);
        if text[prev_start..start - 1].trim_start().starts_with("///") {
            return None;
        }
    }
    Some(AutoInsertEdit {
        start: caret as u32,
        length: 0,
        new_text: format!(" <summary>\n{indent}/// $0\n{indent}/// </summary>"),
        format: InsertTextFormat::Snippet,
    })
}

/// Typing `>` after an open tag in a doc-comment line inserts the
/// matching close tag after the caret.
fn close_element(text: &str, caret: usize) -> Option<AutoInsertEdit> {
    let start = line_start(text, caret);
    let line = &text[start..caret];
    if !line.trim_start().starts_with("///") {
        return None;
    }
    // `caret` sits right after the typed `>`.
    let before_gt = line.strip_suffix('>')?;
    let open = before_gt.rfind('<')?;
    let tag_body = &before_gt[open + 1..];
    if tag_body.is_empty() || tag_body.starts_with('/') || tag_body.ends_with('/') {
        return None;
    }
    let name: String = tag_body
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        return None;
    }
    Some(AutoInsertEdit {
        start: caret as u32,
        length: 0,
        new_text: format!("$0</{name}>"),
        format: InsertTextFormat::Snippet,
    })
}

/// Typing `=` after an attribute name inside an open tag inserts the
/// quote pair.
fn attribute_quotes(text: &str, caret: usize) -> Option<AutoInsertEdit> {
    let start = line_start(text, caret);
    let line = &text[start..caret];
    if !line.trim_start().starts_with("///") {
        return None;
    }
    let before_eq = line.strip_suffix('=')?;
    // Inside an unclosed tag.
    let open = before_eq.rfind('<')?;
    if before_eq[open..].contains('>') {
        return None;
    }
    // The `=` must follow an attribute name.
    if !before_eq.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some(AutoInsertEdit {
        start: caret as u32,
        length: 0,
        new_text: "\"$0\"".to_owned(),
        format: InsertTextFormat::Snippet,
    })
}
