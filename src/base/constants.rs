//! Fixed layout facts of High Level Assembler listings.

/// Language id under which listing documents are registered.
pub const LANGUAGE_ID: &str = "hlasmListing";

/// Leading blanks on a continued source statement (continuation starts in column 16).
pub const CONTINUATION_INDENT: usize = 15;

/// Literal pool entries are named `=F'1'`, `=CL8'X'`, ...
pub const LITERAL_PREFIX: char = '=';

/// Object-code headers shorter than this belong to the short (6-digit address) layout.
pub const LONG_HEADER_MIN_LEN: usize = 45;

/// Width of the source statement area shown in definition/reference ranges.
pub const SOURCE_WIDTH: usize = 72;

/// First column of the source statement in the short layout (without indicator column).
pub const SHORT_SOURCE_COLUMN: usize = 40;
/// Continuation sentinel column in the short layout (without indicator column).
pub const SHORT_SENTINEL_COLUMN: usize = 111;

/// First column of the source statement in the long layout (without indicator column).
pub const LONG_SOURCE_COLUMN: usize = 49;
/// Continuation sentinel column in the long layout (without indicator column).
pub const LONG_SENTINEL_COLUMN: usize = 120;

/// Title text starts after this many characters of the page header.
pub const PAGE_TITLE_SKIP: usize = 9;

/// Diagnostic codes are `ASMAnnnS`.
pub const DIAGNOSTIC_CODE_LEN: usize = 8;

/// Characters allowed in an ordinary symbol.
#[inline]
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '$' | '#' | '@' | '_')
}
