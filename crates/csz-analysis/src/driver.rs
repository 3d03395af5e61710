//! Executes registered analyzer actions over one file.

use std::cell::RefCell;

use tracing::debug;

use csz_common::{CancellationToken, Diagnostic, OperationCanceled};
use csz_scanner::{Scanner, SyntaxKind};

use crate::registration::{
    AnalysisRegistration, SourceFileAnalysisContext, TokenAnalysisContext,
};
use crate::DiagnosticAnalyzer;

/// Drives a set of analyzers over a single source file.
pub struct AnalyzerDriver;

impl AnalyzerDriver {
    /// Tokenize `source` once and run every action the `analyzers`
    /// register. Cancellation is observed between tokens.
    ///
    /// Diagnostics come back ordered by (span start, code) with exact
    /// duplicates removed.
    pub fn run(
        file_name: &str,
        source: &str,
        analyzers: &[&dyn DiagnosticAnalyzer],
        cancellation: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, OperationCanceled> {
        let mut registration = AnalysisRegistration::new();
        for analyzer in analyzers {
            debug!(analyzer = analyzer.name(), "registering analyzer");
            analyzer.register(&mut registration);
        }

        let scanned = Scanner::scan_file(source);
        let sink = RefCell::new(Vec::new());

        for token in &scanned.tokens {
            cancellation.check()?;
            if token.kind == SyntaxKind::EndOfFile {
                break;
            }
            for (filter, action) in &registration.token_actions {
                if filter.as_ref().is_none_or(|kinds| kinds.contains(&token.kind)) {
                    let ctx = TokenAnalysisContext {
                        file_name,
                        source,
                        token,
                        sink: &sink,
                    };
                    action(&ctx);
                }
            }
        }

        cancellation.check()?;
        for action in &registration.source_file_actions {
            let ctx = SourceFileAnalysisContext {
                file_name,
                source,
                tokens: &scanned.tokens,
                sink: &sink,
            };
            action(&ctx);
        }

        let mut diagnostics = sink.into_inner();
        diagnostics.sort_by(|a, b| {
            (a.start, a.code, &a.message_text).cmp(&(b.start, b.code, &b.message_text))
        });
        diagnostics.dedup();
        debug!(
            file = file_name,
            count = diagnostics.len(),
            "analysis complete"
        );
        Ok(diagnostics)
    }
}
