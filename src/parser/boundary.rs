//! Page and section boundary recognition.

use crate::base::constants::{DIAGNOSTIC_CODE_LEN, LONG_HEADER_MIN_LEN, PAGE_TITLE_SKIP};

use super::grammar::{LineGrammar, PAGE_TITLES, group};

/// The report sections the assembler prints, in page-title order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Options,
    ExternalSymbols,
    Relocations,
    OrdinarySymbols,
    MacroSources,
    Dsects,
    Usings,
    Registers,
    Summary,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Options,
        SectionKind::ExternalSymbols,
        SectionKind::Relocations,
        SectionKind::OrdinarySymbols,
        SectionKind::MacroSources,
        SectionKind::Dsects,
        SectionKind::Usings,
        SectionKind::Registers,
        SectionKind::Summary,
    ];

    /// The page title identifying this section.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Options => "High Level Assembler Option Summary",
            SectionKind::ExternalSymbols => "External Symbol Dictionary",
            SectionKind::Relocations => "Relocation Dictionary",
            SectionKind::OrdinarySymbols => "Ordinary Symbol and Literal Cross Reference",
            SectionKind::MacroSources => "Macro and Copy Code Source Summary",
            SectionKind::Dsects => "Dsect Cross Reference",
            SectionKind::Usings => "Using Map",
            SectionKind::Registers => "General Purpose Register Cross Reference",
            SectionKind::Summary => "Diagnostic Cross Reference and Assembler Summary",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Object-code column layout selected by the column header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeLayout {
    /// 6-digit location, 26-character object code field.
    Short,
    /// 8-digit location, 32-character object code field.
    Long,
}

/// A line that changes the parser's position in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary<'a> {
    /// `Return Code nnn`, the last line of a listing.
    EndOfReport,
    /// `** ASMAnnnS message`
    Diagnostic { code: &'a str, message: &'a str },
    /// Column header preceding object code; `dsect` for `D-Loc` headers.
    CodeHeader { layout: CodeLayout, dsect: bool },
    /// Page header of a known report section.
    Section(SectionKind),
    /// Page header with any other title (source pages).
    Page { title: &'a str },
}

impl LineGrammar {
    /// Classify `line` as a boundary, if it is one.
    pub fn boundary<'a>(&self, line: &'a str) -> Option<Boundary<'a>> {
        let caps = self.line_text.captures(line)?;

        if caps.get(1).is_some() {
            return Some(Boundary::EndOfReport);
        }
        if let Some(text) = group(&caps, 2) {
            let code = text.get(..DIAGNOSTIC_CODE_LEN).unwrap_or(text);
            let message = text.get(DIAGNOSTIC_CODE_LEN + 1..).unwrap_or("").trim();
            return Some(Boundary::Diagnostic { code, message });
        }
        if let Some(header) = group(&caps, 3) {
            let layout = if header.len() < LONG_HEADER_MIN_LEN {
                CodeLayout::Short
            } else {
                CodeLayout::Long
            };
            return Some(Boundary::CodeHeader {
                layout,
                dsect: header.starts_with('D'),
            });
        }

        let title = group(&caps, 4)?;
        if let Some(titles) = PAGE_TITLES.captures(title) {
            if let Some(kind) = SectionKind::ALL
                .into_iter()
                .find(|kind| titles.get(kind.index() + 1).is_some())
            {
                return Some(Boundary::Section(kind));
            }
        }
        Some(Boundary::Page {
            title: title.get(PAGE_TITLE_SKIP..).unwrap_or("").trim(),
        })
    }
}
