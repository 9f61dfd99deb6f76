//! Diagnostic collection for the translator.
//!
//! Translation never fails on inexpressible input; it substitutes a safe
//! sentinel in the output and records a warning here. The host decides
//! whether any collected diagnostic is promoted to an error, typically by
//! filtering on severity and file path.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Spans
// =============================================================================

/// Where in a source file a diagnostic points: a byte offset plus the number
/// of bytes it covers.
///
/// The translator never reads source text; spans travel unchanged from the
/// reference AST site into emitted diagnostics, and a zero length marks a
/// bare position (synthetic sites use `0, 0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first covered byte.
    pub start: u32,
    /// Number of bytes covered.
    pub length: u32,
}

impl Span {
    pub fn new(start: u32, length: u32) -> Self {
        Span { start, length }
    }

    /// Byte offset one past the last covered byte.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// True for bare positions that cover no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A warning
    Warning = 2,
    /// An error (highest severity)
    Error = 1,
}

impl DiagnosticSeverity {
    /// Lowercase label used when rendering the diagnostic.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, DiagnosticSeverity::Warning)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A diagnostic message with location and severity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The file containing the reference site the diagnostic points at
    pub file_name: String,
    /// Offset and length of the reference site
    pub span: Span,
    /// The diagnostic message
    pub message: String,
    /// The severity level
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn new(
        file_name: impl Into<String>,
        span: Span,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
    ) -> Self {
        Diagnostic {
            file_name: file_name.into(),
            span,
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.file_name, self.span.start, self.severity, self.message
        )
    }
}

// =============================================================================
// Diagnostic Bag
// =============================================================================

/// A collection of diagnostics for one emission context.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag {
            diagnostics: Vec::new(),
        }
    }

    /// Record a warning.
    pub fn warning(&mut self, file_name: impl Into<String>, span: Span, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(
            file_name,
            span,
            message,
            DiagnosticSeverity::Warning,
        ));
    }

    /// Record an error.
    pub fn error(&mut self, file_name: impl Into<String>, span: Span, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(
            file_name,
            span,
            message,
            DiagnosticSeverity::Error,
        ));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Diagnostics for a given file, for host-side promotion policies.
    pub fn for_file<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.file_name == file_name)
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_extent() {
        let span = Span::new(3, 7);
        assert_eq!(span.end(), 10);
        assert!(!span.is_empty());
        assert!(Span::new(5, 0).is_empty());
    }

    #[test]
    fn test_bag_counts() {
        let mut bag = DiagnosticBag::new();
        assert!(bag.is_empty());

        bag.warning("a.ts", Span::new(0, 4), "unsupported construct");
        bag.warning("b.ts", Span::new(2, 6), "unsupported construct");
        bag.error("a.ts", Span::new(8, 1), "malformed input");

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.warning_count(), 2);
        assert_eq!(bag.error_count(), 1);
        assert_eq!(bag.for_file("a.ts").count(), 2);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            "x.ts",
            Span::new(10, 2),
            "should not emit a 'never' type",
            DiagnosticSeverity::Warning,
        );
        assert_eq!(
            diag.to_string(),
            "x.ts:10: warning: should not emit a 'never' type"
        );
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diag = Diagnostic::new("x.ts", Span::new(0, 1), "m", DiagnosticSeverity::Warning);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["file_name"], "x.ts");
    }
}
