//! LSP-facing services: keyword completion and auto-insert.

pub mod documents;
pub use documents::DocumentStore;

pub mod completions;
pub use completions::{CompletionItem, CompletionItemKind, KeywordCompletions};

pub mod auto_insert;
pub use auto_insert::{
    AutoInsertEdit, AutoInsertService, BuiltinAutoInsert, InsertTextFormat, OnAutoInsertParams,
    OnAutoInsertResponseItem, TextDocumentIdentifier, TextEdit, on_auto_insert,
};
