//! Find references implementation.

use crate::base::{ListingDocument, ListingOptions, Location, Position};
use crate::hir::Listing;

use super::text_utils::symbol_at;

/// Result of a find-references request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceResult {
    /// All references found, in listing order.
    pub references: Vec<Location>,
    /// Include the definition in the results.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// Find all statements referencing the symbol at the given position.
///
/// Qualified references (branch, USING, modification...) are reported
/// together with plain ones.
pub fn find_references<D: ListingDocument + ?Sized>(
    listing: &Listing,
    doc: &D,
    position: Position,
    include_declaration: bool,
    options: &ListingOptions,
) -> ReferenceResult {
    let Some(symbol) = symbol_at(listing, doc, position, options) else {
        return ReferenceResult::empty();
    };
    let statements = symbol.reference_statements(include_declaration);
    ReferenceResult {
        references: listing
            .resolve_lines(statements)
            .into_iter()
            .map(|line| Location::new(doc.uri(), listing.code_range(line)))
            .collect(),
        include_declaration,
    }
}
