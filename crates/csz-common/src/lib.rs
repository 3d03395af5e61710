//! Common types for the csz IDE layer.
//!
//! This crate provides foundational types used across all csz crates:
//! - Position/Range types and the `LineMap` offset converter
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Cooperative cancellation (`CancellationToken`)

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Position, Range};

// Diagnostic types shared by the analysis layer
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Cooperative cancellation
pub mod cancellation;
pub use cancellation::{CancellationToken, OperationCanceled};
