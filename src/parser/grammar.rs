//! Column-parameterized line grammar.
//!
//! Every pattern is written once, without the indicator column, and anchored at
//! compile time with either nothing or a single `.` in front of it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const OBJECT_CODE_SHORT: &str =
    r"(?:([0-9A-F]{6})| {6}) (.{26})( *[0-9]+)[^0-9](?:([a-zA-Z$#@_][a-zA-Z$#@0-9_]*) )?";
const OBJECT_CODE_LONG: &str =
    r"(?:([0-9A-F]{8})| {8}) (.{32})( *[0-9]+)[^0-9](?:([a-zA-Z$#@_][a-zA-Z$#@0-9_]*) )?";

const LINE_TEXT: &str = concat!(
    r"(Return Code )",
    r"|\*\* (ASMA[0-9]{3}[NIWES] .+)",
    r"|((?:  |[CDR]-)Loc  Object Code    Addr1 Addr2  Stmt |(?:  |[CDR]-)Loc    Object Code      Addr1    Addr2    Stmt )",
    r"|(.{111})Page +[0-9]+",
);

const ORDINARY_FIRST: &str = concat!(
    r"([a-zA-Z$#@_][a-zA-Z$#@0-9_]{0,7}) +([0-9]+) ([0-9A-F]{8}) ([0-9A-F]{8}) (.) ..(.). ...  ....... +([0-9]+) +((?:[0-9].+)?)",
    r"|([a-zA-Z$#@_][a-zA-Z$#@0-9_]{8,})",
);
const ORDINARY_ALT_SECOND: &str =
    r"( {9,})([0-9]+) ([0-9A-F]{8}) ([0-9A-F]{8}) (.) ..(.). ...  ....... +([0-9]+) +((?:[0-9].+)?)";
const ORDINARY_REST: &str = r" {60,}([0-9].+)";

const EXTERNAL_FIRST: &str = concat!(
    r"([a-zA-Z$#@_][a-zA-Z$#@0-9_]{0,7}) +([A-Z]+) +([0-9A-F]+) ( {8}|[0-9A-F]{8}) ( {8}|[0-9A-F]{8})  ( {8}|[0-9A-F]{8}) ",
    r"|([a-zA-Z$#@_][a-zA-Z$#@0-9_]{8,}) +",
);
const EXTERNAL_SECOND: &str =
    r"( +)([A-Z]+) +([0-9A-F]+) ( {9}|[0-9A-F]{8} )( {9}|[0-9A-F]{8} ) ( {8}|[0-9A-F]{8})";

const DSECT_FIRST: &str = concat!(
    r"([a-zA-Z$#@_][a-zA-Z$#@0-9_]{0,7}) +([0-9A-F]{8}) +([0-9A-F]{8}) +([0-9]+)",
    r"|([a-zA-Z$#@_][a-zA-Z$#@0-9_]{8,})",
);
const DSECT_SECOND: &str = r"( +)([0-9A-F]{8}) +([0-9A-F]{8}) +([0-9]+)";

const USING_MAP: &str = r" *([0-9]+)  ([0-9A-F]{8})  ([0-9A-F]{8}) (?:USING|DROP|PUSH|POP) +";

static LISTING_START: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(.?)                                         ",
        r"High Level Assembler Option Summary                   .............   Page    1",
    ))
});

/// Applied to the 111-character page title, so it never carries the indicator column.
pub(super) static PAGE_TITLES: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^.+(?:(High Level Assembler Option Summary)",
        r"|(External Symbol Dictionary)",
        r"|(Relocation Dictionary)",
        r"|(Ordinary Symbol and Literal Cross Reference)",
        r"|(Macro and Copy Code Source Summary)",
        r"|(Dsect Cross Reference)",
        r"|(Using Map)",
        r"|(General Purpose Register Cross Reference)",
        r"|(Diagnostic Cross Reference and Assembler Summary))",
    ))
});

/// Applied to the object-code field: a section start shows only Addr1/Addr2.
pub(super) static SECTION_ADDR_SHORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^ {15}[0-9A-F]{5} [0-9A-F]{5}$"));
pub(super) static SECTION_ADDR_LONG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^ {15}[0-9A-F]{8} [0-9A-F]{8}$"));

pub(super) static REFERENCE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([0-9]+)([BDMUX])?"));

static WITHOUT_PREFIX: LazyLock<LineGrammar> = LazyLock::new(|| LineGrammar::new(false));
static WITH_PREFIX: LazyLock<LineGrammar> = LazyLock::new(|| LineGrammar::new(true));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid listing pattern {pattern:?}: {e}"))
}

/// Detect a listing start marker; `Some(has_prefix)` when the line opens a listing.
pub fn listing_start(line: &str) -> Option<bool> {
    let caps = LISTING_START.captures(line)?;
    Some(caps.get(1).is_some_and(|m| !m.is_empty()))
}

/// The complete set of line recognizers for one column offset.
#[derive(Debug)]
pub struct LineGrammar {
    pub(super) object_code_short: Regex,
    pub(super) object_code_long: Regex,
    pub(super) line_text: Regex,
    pub(super) ordinary_first: Regex,
    pub(super) ordinary_alt_second: Regex,
    pub(super) ordinary_rest: Regex,
    pub(super) external_first: Regex,
    pub(super) external_second: Regex,
    pub(super) dsect_first: Regex,
    pub(super) dsect_second: Regex,
    pub(super) using_map: Regex,
}

impl LineGrammar {
    fn new(has_prefix: bool) -> Self {
        let lead = if has_prefix { "." } else { "" };
        let anchored = |body: &str| compile(&format!("^{lead}(?:{body})"));
        Self {
            object_code_short: anchored(OBJECT_CODE_SHORT),
            object_code_long: anchored(OBJECT_CODE_LONG),
            line_text: anchored(LINE_TEXT),
            ordinary_first: anchored(ORDINARY_FIRST),
            ordinary_alt_second: anchored(ORDINARY_ALT_SECOND),
            ordinary_rest: anchored(ORDINARY_REST),
            external_first: anchored(EXTERNAL_FIRST),
            external_second: anchored(EXTERNAL_SECOND),
            dsect_first: anchored(DSECT_FIRST),
            dsect_second: anchored(DSECT_SECOND),
            using_map: anchored(USING_MAP),
        }
    }

    /// The shared grammar for listings with or without the indicator column.
    pub fn for_prefix(has_prefix: bool) -> &'static LineGrammar {
        if has_prefix {
            &WITH_PREFIX
        } else {
            &WITHOUT_PREFIX
        }
    }
}

pub(super) fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

pub(super) fn decimal(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

pub(super) fn hex(text: &str) -> Option<u32> {
    u32::from_str_radix(text.trim(), 16).ok()
}

/// Section ids are printed as 32-bit two's complement; dummy sections are negative.
pub(super) fn section_id(text: &str) -> Option<i32> {
    hex(text).map(|v| v as i32)
}
