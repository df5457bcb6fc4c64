//! Line/character positions inside listing documents.
//!
//! Query results (definitions, references, outline nodes, diagnostics) are all
//! expressed as spans over document lines, with the uri attached where the
//! client needs it.

use std::sync::Arc;

/// A range in a document, 0-indexed and inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A cursor in a document, ordered by line then character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: usize,
        start_char: usize,
        end_line: usize,
        end_char: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_char),
            end: Position::new(end_line, end_char),
        }
    }

    /// Span covering whole lines `start..end`, anchored at column 0
    pub fn lines(start: usize, end: usize) -> Self {
        Self::from_coords(start, 0, end, 0)
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A span inside a specific document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Identity of the document.
    pub uri: Arc<str>,
    pub span: Span,
}

impl Location {
    pub fn new(uri: impl Into<Arc<str>>, span: Span) -> Self {
        Self {
            uri: uri.into(),
            span,
        }
    }
}
