//! The index of one assembler run.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::Span;
use crate::base::constants::{
    LONG_SENTINEL_COLUMN, LONG_SOURCE_COLUMN, SHORT_SENTINEL_COLUMN, SHORT_SOURCE_COLUMN,
    SOURCE_WIDTH,
};
use crate::parser::{CodeLayout, SectionKind};

use super::diagnostics::Diagnostic;
use super::section_map::SectionMap;
use super::symbols::SymbolTable;

/// A half-open range of listing lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Section {
    pub start: usize,
    pub end: usize,
}

impl Section {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> Span {
        Span::lines(self.start, self.end)
    }
}

/// Where a statement was printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatementLine {
    pub line: usize,
    pub address: Option<u32>,
}

/// A control section with a known address range, from the External Symbol Dictionary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Csect {
    pub name: SmolStr,
    pub address: u32,
    pub length: u32,
}

impl Csect {
    pub fn contains(&self, address: u32) -> bool {
        self.address <= address
            && u64::from(address) < u64::from(self.address) + u64::from(self.length)
    }
}

/// A block of object code under one column header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSection {
    /// Line of the page title preceding the block.
    pub start: usize,
    pub end: usize,
    /// Page title, possibly empty.
    pub title: SmolStr,
    /// First line after the column header.
    pub code_start: usize,
    /// Opened by a `D-Loc` header.
    pub dsect: bool,
    /// Statement printed on `code_start`, if any.
    pub first_statement: Option<u32>,
}

/// Everything indexed from a single listing within a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub start: usize,
    pub end: usize,
    /// Listing printed with a leading indicator column.
    pub has_prefix: bool,
    /// Object code layout, known once the first column header is seen.
    pub layout: Option<CodeLayout>,
    pub diagnostics: Vec<Diagnostic>,
    pub statement_lines: BTreeMap<u32, StatementLine>,
    pub symbols: SymbolTable,
    /// ESD id to owning section name.
    pub sections: FxHashMap<SmolStr, SmolStr>,
    pub csects: Vec<Csect>,
    pub code_sections: Vec<CodeSection>,
    pub max_statement: u32,
    pub section_map: SectionMap,
    pub(super) report_sections: [Option<Section>; 9],
}

impl Listing {
    pub fn new(start: usize, has_prefix: bool) -> Self {
        Self {
            start,
            end: start,
            has_prefix,
            layout: None,
            diagnostics: Vec::new(),
            statement_lines: BTreeMap::new(),
            symbols: SymbolTable::new(),
            sections: FxHashMap::default(),
            csects: Vec::new(),
            code_sections: Vec::new(),
            max_statement: 0,
            section_map: SectionMap::default(),
            report_sections: [None; 9],
        }
    }

    /// Whether `line` of the document belongs to this listing.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }

    pub fn span(&self) -> Span {
        Span::lines(self.start, self.end)
    }

    /// Line range of a report section, if the listing printed it.
    pub fn report_section(&self, kind: SectionKind) -> Option<Section> {
        self.report_sections[kind.index()]
    }

    /// Columns of the source statement text.
    pub fn code_range(&self, line: usize) -> Span {
        let start = usize::from(self.has_prefix)
            + match self.layout {
                Some(CodeLayout::Long) => LONG_SOURCE_COLUMN,
                _ => SHORT_SOURCE_COLUMN,
            };
        Span::from_coords(line, start, line, start + SOURCE_WIDTH)
    }

    /// Source column and continuation sentinel column, once the layout is known.
    pub fn code_columns(&self) -> Option<(usize, usize)> {
        let offset = usize::from(self.has_prefix);
        self.layout.map(|layout| match layout {
            CodeLayout::Short => (SHORT_SOURCE_COLUMN + offset, SHORT_SENTINEL_COLUMN + offset),
            CodeLayout::Long => (LONG_SOURCE_COLUMN + offset, LONG_SENTINEL_COLUMN + offset),
        })
    }

    /// Listing line of `statement`, falling back to the closest lower statement.
    pub fn resolve_line(&self, statement: u32) -> Option<usize> {
        self.statement_lines
            .range(..=statement)
            .next_back()
            .map(|(_, entry)| entry.line)
    }

    /// Listing line of `statement` when it was printed itself.
    pub fn exact_line(&self, statement: u32) -> Option<usize> {
        self.statement_lines.get(&statement).map(|entry| entry.line)
    }

    /// Resolve statements to listing lines, ascending and without duplicates.
    pub fn resolve_lines(&self, statements: impl IntoIterator<Item = u32>) -> Vec<usize> {
        let mut lines: Vec<usize> = statements
            .into_iter()
            .filter_map(|statement| self.resolve_line(statement))
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Index of the code block whose object code area holds `line`.
    pub fn code_section_at(&self, line: usize) -> Option<usize> {
        self.code_sections
            .iter()
            .position(|section| section.code_start <= line && line < section.end)
    }

    pub fn csect_containing(&self, address: u32) -> Option<&Csect> {
        self.csects.iter().find(|csect| csect.contains(address))
    }

    /// The object code area as a whole, from the first block to the last.
    pub fn object_code(&self) -> Option<Section> {
        let first = self.code_sections.first()?;
        let last = self.code_sections.last()?;
        Some(Section::new(first.start, last.end))
    }

    pub(super) fn open_report_section(&mut self, kind: SectionKind, line: usize) {
        self.report_sections[kind.index()].get_or_insert(Section::new(line, line));
    }

    pub(super) fn close_report_section(&mut self, kind: SectionKind, line: usize) {
        if let Some(section) = self.report_sections[kind.index()].as_mut() {
            section.end = line;
        }
    }
}
