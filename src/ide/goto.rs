//! Go-to-definition implementation.

use crate::base::{ListingDocument, ListingOptions, Location, Position};
use crate::hir::Listing;

use super::text_utils::symbol_at;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GotoResult {
    /// Source columns of every defining statement, in listing order.
    pub targets: Vec<Location>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Find the definitions of the symbol at the given position.
///
/// Statements missing from the listing resolve to the closest lower
/// statement that was printed.
pub fn goto_definition<D: ListingDocument + ?Sized>(
    listing: &Listing,
    doc: &D,
    position: Position,
    options: &ListingOptions,
) -> GotoResult {
    let Some(symbol) = symbol_at(listing, doc, position, options) else {
        return GotoResult::empty();
    };
    GotoResult {
        targets: listing
            .resolve_lines(symbol.defined.iter().copied())
            .into_iter()
            .map(|line| Location::new(doc.uri(), listing.code_range(line)))
            .collect(),
    }
}
