//! Hover information implementation.

use crate::base::{ListingDocument, ListingOptions, Position};
use crate::hir::Listing;

use super::text_utils::symbol_at;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Listing lines quoted in `contents`.
    pub lines: Vec<usize>,
}

/// Quote the defining statements of the symbol at the given position.
///
/// Each line becomes a fenced code block tagged with the listing language id.
pub fn hover<D: ListingDocument + ?Sized>(
    listing: &Listing,
    doc: &D,
    position: Position,
    options: &ListingOptions,
) -> Option<HoverResult> {
    let symbol = symbol_at(listing, doc, position, options)?;
    let lines = listing.resolve_lines(symbol.defined.iter().copied());
    if lines.is_empty() {
        return None;
    }

    let mut contents = String::new();
    for &line in &lines {
        contents.push_str("\n```");
        contents.push_str(&options.language_id);
        contents.push('\n');
        contents.push_str(doc.line(line));
        contents.push_str("\n```\n");
    }
    Some(HoverResult { contents, lines })
}
