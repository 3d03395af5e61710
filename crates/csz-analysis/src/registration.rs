//! Action registration and the contexts handed to actions.

use std::cell::RefCell;

use rustc_hash::FxHashSet;

use csz_common::Diagnostic;
use csz_scanner::{SyntaxKind, Token};

pub(crate) type TokenAction = Box<dyn Fn(&TokenAnalysisContext<'_>)>;
pub(crate) type SourceFileAction = Box<dyn Fn(&SourceFileAnalysisContext<'_>)>;

/// Collects the actions one or more analyzers register for a run.
#[derive(Default)]
pub struct AnalysisRegistration {
    pub(crate) token_actions: Vec<(Option<FxHashSet<SyntaxKind>>, TokenAction)>,
    pub(crate) source_file_actions: Vec<SourceFileAction>,
}

impl AnalysisRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action invoked for each token whose kind is in
    /// `kinds`. An empty filter means every token.
    pub fn register_token_action(
        &mut self,
        kinds: &[SyntaxKind],
        action: impl Fn(&TokenAnalysisContext<'_>) + 'static,
    ) {
        let filter = if kinds.is_empty() {
            None
        } else {
            Some(kinds.iter().copied().collect())
        };
        self.token_actions.push((filter, Box::new(action)));
    }

    /// Register an action invoked once per file, after all token
    /// actions have run.
    pub fn register_source_file_action(
        &mut self,
        action: impl Fn(&SourceFileAnalysisContext<'_>) + 'static,
    ) {
        self.source_file_actions.push(Box::new(action));
    }
}

/// Per-token view handed to token actions.
pub struct TokenAnalysisContext<'a> {
    pub(crate) file_name: &'a str,
    pub(crate) source: &'a str,
    pub(crate) token: &'a Token,
    pub(crate) sink: &'a RefCell<Vec<Diagnostic>>,
}

impl TokenAnalysisContext<'_> {
    pub fn file_name(&self) -> &str {
        self.file_name
    }

    pub fn source(&self) -> &str {
        self.source
    }

    pub fn token(&self) -> &Token {
        self.token
    }

    /// The token's text slice.
    pub fn token_text(&self) -> &str {
        &self.source[self.token.start as usize..self.token.end as usize]
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.borrow_mut().push(diagnostic);
    }
}

/// Whole-file view handed to source-file actions.
pub struct SourceFileAnalysisContext<'a> {
    pub(crate) file_name: &'a str,
    pub(crate) source: &'a str,
    pub(crate) tokens: &'a [Token],
    pub(crate) sink: &'a RefCell<Vec<Diagnostic>>,
}

impl SourceFileAnalysisContext<'_> {
    pub fn file_name(&self) -> &str {
        self.file_name
    }

    pub fn source(&self) -> &str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_kind_filter_means_all_tokens() {
        let mut registration = AnalysisRegistration::new();
        registration.register_token_action(&[], |_| {});
        registration.register_token_action(&[SyntaxKind::Identifier], |_| {});
        assert!(registration.token_actions[0].0.is_none());
        assert_eq!(
            registration.token_actions[1].0.as_ref().map(FxHashSet::len),
            Some(1)
        );
    }
}
