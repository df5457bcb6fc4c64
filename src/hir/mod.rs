//! High-level IR (HIR): Semantic model of a listing.
//!
//! The scanner walks a document once per listing and produces a [`Listing`]:
//! statement positions, the symbol table merged from the cross reference
//! sections, section ranges, diagnostics and the statement classification.
//!
//! ## Build Order
//!
//! ```text
//! scan_document(doc)             ← find listing start markers
//!     │
//!     ▼
//! ListingBuilder (per listing)   ← boundary state machine, one pass
//!     │
//!     ▼
//! SymbolTable                    ← ordinary, dsect and label symbols
//!     │
//!     ▼
//! SectionMap::classify           ← csect / dsect per statement
//! ```

mod builder;
mod diagnostics;
mod listing;
mod section_map;
mod symbols;

pub use builder::scan_document;
pub use diagnostics::{Diagnostic, Severity};
pub use listing::{CodeSection, Csect, Listing, Section, StatementLine};
pub use section_map::SectionMap;
pub use symbols::{Symbol, SymbolDetails, SymbolTable, canonical_name};
