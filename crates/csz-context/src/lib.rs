//! Completion-context inference.
//!
//! `SyntaxContext` is a snapshot of the partially-typed source around the
//! caret. It is built from the token stream alone: a classified brace
//! stack stands in for the syntax tree, which keeps the whole layer a
//! pure function of the source text. Every keyword recommender consumes
//! this snapshot through the predicate methods in [`queries`].

pub mod scope;
pub use scope::{ScopeFrame, ScopeKind, TypeKind};

pub mod context;
pub use context::{ModifierFlags, SyntaxContext};

mod queries;

/// Test helper: split a source string on the `@@` caret marker.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util {
    /// Returns the source with the marker removed and the caret offset.
    pub fn split_marker(marked: &str) -> (String, u32) {
        let caret = marked.find("@@").expect("caret marker `@@` missing");
        let mut source = String::with_capacity(marked.len() - 2);
        source.push_str(&marked[..caret]);
        source.push_str(&marked[caret + 2..]);
        (source, caret as u32)
    }
}
