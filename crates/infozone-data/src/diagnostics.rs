//! Per-line diagnostics produced while scanning a file.
//!
//! Reporting never affects control flow: the scanner reports and moves on.

use std::fmt;

/// A problem found on one line of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}

/// Where diagnostics go.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            file = %diagnostic.file,
            line = diagnostic.line,
            "{}",
            diagnostic.message
        );
    }
}

/// Reporter bound to the file and line currently being scanned.
pub struct LineReport<'a> {
    file: &'a str,
    line: usize,
    sink: &'a mut dyn DiagnosticSink,
    reported: usize,
}

impl<'a> LineReport<'a> {
    pub fn new(file: &'a str, line: usize, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            file,
            line,
            sink,
            reported: 0,
        }
    }

    pub fn report(&mut self, message: impl fmt::Display) {
        self.reported += 1;
        self.sink.report(Diagnostic {
            file: self.file.to_string(),
            line: self.line,
            message: message.to_string(),
        });
    }

    /// Number of diagnostics reported through this reporter.
    pub fn reported(&self) -> usize {
        self.reported
    }
}
