//! Analyzer callback surface.
//!
//! A `DiagnosticAnalyzer` registers actions against syntactic events;
//! the `AnalyzerDriver` tokenizes a file once and replays the events
//! over every registered action, collecting the reported diagnostics.

pub mod registration;
pub use registration::{
    AnalysisRegistration, SourceFileAnalysisContext, TokenAnalysisContext,
};

pub mod driver;
pub use driver::AnalyzerDriver;

/// A stateless diagnostic rule.
///
/// Analyzers hold no per-file state; everything they need arrives
/// through the analysis contexts handed to their registered actions.
pub trait DiagnosticAnalyzer: Send + Sync {
    /// Stable name, used in logs.
    fn name(&self) -> &str;

    /// Called once per driver run to register this analyzer's actions.
    fn register(&self, registration: &mut AnalysisRegistration);
}
