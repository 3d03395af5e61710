//! Open-document tracking for the server.

use rustc_hash::FxHashMap;

/// Text of every document the client has opened, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: FxHashMap<String, String>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, uri: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(uri.into(), text.into());
    }

    /// Whole-document sync: replaces the stored text.
    pub fn change(&mut self, uri: &str, text: impl Into<String>) {
        self.documents.insert(uri.to_owned(), text.into());
    }

    pub fn close(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    pub fn get(&self, uri: &str) -> Option<&str> {
        self.documents.get(uri).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
