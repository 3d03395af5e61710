//! Exercises the callback surface with small purpose-built analyzers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use csz_analysis::{AnalysisRegistration, AnalyzerDriver, DiagnosticAnalyzer};
use csz_common::{CancellationToken, Diagnostic};
use csz_scanner::SyntaxKind;

/// Flags identifiers longer than a fixed limit.
struct LongIdentifierAnalyzer;

impl DiagnosticAnalyzer for LongIdentifierAnalyzer {
    fn name(&self) -> &str {
        "long-identifier"
    }

    fn register(&self, registration: &mut AnalysisRegistration) {
        registration.register_token_action(&[SyntaxKind::Identifier], |ctx| {
            let text = ctx.token_text();
            if text.len() > 16 {
                ctx.report(Diagnostic::warning(
                    ctx.file_name(),
                    ctx.token().start,
                    ctx.token().width(),
                    format!("identifier `{text}` is too long"),
                    9001,
                ));
            }
        });
    }
}

/// Flags every `goto` statement.
struct GotoAnalyzer;

impl DiagnosticAnalyzer for GotoAnalyzer {
    fn name(&self) -> &str {
        "no-goto"
    }

    fn register(&self, registration: &mut AnalysisRegistration) {
        registration.register_token_action(&[SyntaxKind::GotoKeyword], |ctx| {
            ctx.report(Diagnostic::warning(
                ctx.file_name(),
                ctx.token().start,
                ctx.token().width(),
                "avoid goto",
                9002,
            ));
        });
    }
}

/// Reports once per file when the file is empty of tokens.
struct EmptyFileAnalyzer;

impl DiagnosticAnalyzer for EmptyFileAnalyzer {
    fn name(&self) -> &str {
        "empty-file"
    }

    fn register(&self, registration: &mut AnalysisRegistration) {
        registration.register_source_file_action(|ctx| {
            let has_content = ctx
                .tokens()
                .iter()
                .any(|t| t.kind != SyntaxKind::EndOfFile);
            if !has_content {
                ctx.report(Diagnostic::warning(
                    ctx.file_name(),
                    0,
                    0,
                    "file contains no code",
                    9003,
                ));
            }
        });
    }
}

#[test]
fn test_token_action_with_kind_filter() {
    let source = "class C { void AVeryLongMethodNameIndeed() { } }";
    let diagnostics = AnalyzerDriver::run(
        "a.cs",
        source,
        &[&LongIdentifierAnalyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 9001);
    assert_eq!(
        diagnostics[0].start,
        source.find("AVeryLong").unwrap() as u32
    );
}

#[test]
fn test_filter_skips_other_kinds() {
    // Counts invocations rather than reports to observe the filter
    // directly.
    struct CountingAnalyzer {
        hits: Arc<AtomicUsize>,
    }
    impl DiagnosticAnalyzer for CountingAnalyzer {
        fn name(&self) -> &str {
            "counting"
        }
        fn register(&self, registration: &mut AnalysisRegistration) {
            let hits = self.hits.clone();
            registration.register_token_action(&[SyntaxKind::Semicolon], move |_| {
                hits.fetch_add(1, Ordering::Relaxed);
            });
        }
    }

    let hits = Arc::new(AtomicUsize::new(0));
    let analyzer = CountingAnalyzer { hits: hits.clone() };
    let diagnostics = AnalyzerDriver::run(
        "a.cs",
        "int a = 1; int b = 2;",
        &[&analyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(hits.load(Ordering::Relaxed), 2);
}

#[test]
fn test_reports_are_ordered_by_span_then_code() {
    let source = "goto end; int anIdentifierThatIsTooLong = 1; goto end;";
    let diagnostics = AnalyzerDriver::run(
        "a.cs",
        source,
        &[&GotoAnalyzer, &LongIdentifierAnalyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    let starts: Vec<u32> = diagnostics.iter().map(|d| d.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].code, 9002);
    assert_eq!(diagnostics[1].code, 9001);
}

#[test]
fn test_exact_duplicates_are_removed() {
    // Two analyzers registering the same rule produce one report.
    let diagnostics = AnalyzerDriver::run(
        "a.cs",
        "goto end;",
        &[&GotoAnalyzer, &GotoAnalyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_source_file_action_runs_after_tokens() {
    let diagnostics = AnalyzerDriver::run(
        "empty.cs",
        "   \n",
        &[&EmptyFileAnalyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 9003);

    let diagnostics = AnalyzerDriver::run(
        "full.cs",
        "class C { }",
        &[&EmptyFileAnalyzer],
        &CancellationToken::none(),
    )
    .unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_cancellation_stops_the_run() {
    let token = CancellationToken::new();
    token.cancel();
    let result = AnalyzerDriver::run("a.cs", "class C { }", &[&GotoAnalyzer], &token);
    assert!(result.is_err());
}
