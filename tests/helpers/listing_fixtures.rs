//! Listing fixtures for tests.
//!
//! `SAMPLE` is a complete short-layout listing of one assembly: option summary,
//! External Symbol Dictionary, four object code blocks (the third one a `D-Loc`
//! block), relocation dictionary, cross references, using map, register cross
//! reference and the assembler summary ending in `Return Code 004`.

pub const SAMPLE: &str = include_str!("../fixtures/sample.lst");

/// Line count of `SAMPLE`.
pub const SAMPLE_LINES: usize = 85;

// Listing lines of interest in `SAMPLE`
pub const ESD_SAMPLE_LINE: usize = 13;
pub const CSECT_LINE: usize = 21;
pub const USING_LINE: usize = 24;
pub const LOAD_FIELD1_LINE: usize = 25;
pub const STORE_RESULT_LINE: usize = 26;
pub const WARNING_LINE: usize = 27;
pub const FIELD1_LINE: usize = 33;
pub const RESULT_LINE: usize = 34;
pub const POINTERS_LINE: usize = 35;
pub const CONTINUATION_LINE: usize = 36;
pub const INFO_LINE: usize = 37;
pub const WORKAREA_LINE: usize = 41;
pub const END_LINE: usize = 49;
pub const SCRATCHAREA_XREF_LINE: usize = 70;

/// Source statement column of a short-layout listing without indicator column.
pub const SOURCE_COLUMN: usize = 40;

/// Source statement column of a long-layout listing without indicator column.
pub const LONG_SOURCE_COLUMN: usize = 49;

/// A small long-layout (8-digit location) listing: option summary, External
/// Symbol Dictionary, one object code block with a continued operand, and the
/// ordinary cross reference.
pub const LONG_LAYOUT: &str = include_str!("../fixtures/long_layout.lst");

/// Line count of `LONG_LAYOUT`.
pub const LONG_LAYOUT_LINES: usize = 22;

/// The same kinds of lines, located in the listing of each layout.
#[derive(Debug)]
pub struct LayoutFixture {
    pub text: &'static str,
    pub layout: hlasm_listing::parser::CodeLayout,
    pub source_column: usize,
    /// Line and column of an operand naming a data field.
    pub use_site: (usize, usize),
    /// Definition line of that field.
    pub definition_line: usize,
    /// Lines of the other references to that field.
    pub reference_lines: &'static [usize],
    /// Both halves of a symbol split by a continuation, and its definition line.
    pub continued_head: (usize, usize),
    pub continued_tail: (usize, usize),
    pub continued_name: &'static str,
    pub continued_definition: usize,
    /// Offset view leaves: line and label.
    pub offsets: &'static [(usize, &'static str)],
}

pub const SHORT_FIXTURE: LayoutFixture = LayoutFixture {
    text: SAMPLE,
    layout: hlasm_listing::parser::CodeLayout::Short,
    source_column: SOURCE_COLUMN,
    use_site: (LOAD_FIELD1_LINE, SOURCE_COLUMN + 20),
    definition_line: FIELD1_LINE,
    reference_lines: &[LOAD_FIELD1_LINE, POINTERS_LINE],
    continued_head: (POINTERS_LINE, SOURCE_COLUMN + 69),
    continued_tail: (CONTINUATION_LINE, SOURCE_COLUMN + 16),
    continued_name: "RESULT",
    continued_definition: RESULT_LINE,
    offsets: &[
        (CSECT_LINE, "Offset 00000000 (SAMPLE+00000000)"),
        (22, "Offset 00000000 (SAMPLE+00000000)"),
        (23, "Offset 00000004 (SAMPLE+00000004)"),
        (LOAD_FIELD1_LINE, "Offset 00000006 (SAMPLE+00000006)"),
        (STORE_RESULT_LINE, "Offset 0000000A (SAMPLE+0000000A)"),
        (28, "Offset 0000000E (SAMPLE+0000000E)"),
        (29, "Offset 00000012 (SAMPLE+00000012)"),
        (FIELD1_LINE, "Offset 00000014 (SAMPLE+00000014)"),
        (RESULT_LINE, "Offset 00000018 (SAMPLE+00000018)"),
        (POINTERS_LINE, "Offset 0000001C (SAMPLE+0000001C)"),
        (47, "Offset 00000024 (SAMPLE+00000024)"),
        (48, "Offset 00000024 (SAMPLE+00000024)"),
    ],
};

pub const LONG_FIXTURE: LayoutFixture = LayoutFixture {
    text: LONG_LAYOUT,
    layout: hlasm_listing::parser::CodeLayout::Long,
    source_column: LONG_SOURCE_COLUMN,
    // "         L     R1,COUNTER"
    use_site: (11, LONG_SOURCE_COLUMN + 20),
    definition_line: 15,
    reference_lines: &[11, 13],
    // "COU" ends line 13, "NTER)" starts line 14
    continued_head: (13, LONG_SOURCE_COLUMN + 69),
    continued_tail: (14, LONG_SOURCE_COLUMN + 16),
    continued_name: "COUNTER",
    continued_definition: 15,
    offsets: &[
        (9, "Offset 00000000 (LONGPGM+00000000)"),
        (10, "Offset 00000000 (LONGPGM+00000000)"),
        (11, "Offset 00000004 (LONGPGM+00000004)"),
        (12, "Offset 00000008 (LONGPGM+00000008)"),
        (13, "Offset 0000000C (LONGPGM+0000000C)"),
        (15, "Offset 00000014 (LONGPGM+00000014)"),
    ],
};
