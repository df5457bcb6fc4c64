//! Diagnostics: Assembler messages printed in the listing.
//!
//! The assembler interleaves `** ASMAnnnS text` lines with the source. Each one
//! becomes a diagnostic spanning its listing line; the severity comes from the
//! last character of the message code.

use std::sync::Arc;

use crate::base::Span;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Derive the severity from a message code such as `ASMA017W`.
    ///
    /// `N` is a notice, `I` informational, `W` a warning; `E`, `S` and anything
    /// else are errors.
    pub fn from_code(code: &str) -> Self {
        match code.chars().last() {
            Some('N') => Severity::Hint,
            Some('I') => Severity::Info,
            Some('W') => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The whole listing line carrying the message.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Message code (e.g., "ASMA017W").
    pub code: Arc<str>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a diagnostic for listing line `line` of `width` characters.
    pub fn from_listing_line(line: usize, width: usize, code: &str, message: &str) -> Self {
        Self {
            span: Span::from_coords(line, 0, line, width),
            severity: Severity::from_code(code),
            code: Arc::from(code),
            message: Arc::from(message),
        }
    }
}
