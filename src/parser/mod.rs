//! Line classifier for assembler listings
//!
//! Listings are fixed-column reports, so every line kind is recognized by an
//! anchored regular expression. One grammar is compiled per column offset:
//! listings printed with a leading indicator (carriage control) column shift
//! every field one character to the right.
//!
//! ## Architecture
//!
//! ```text
//! Document line
//!     ↓
//! LineGrammar::boundary → Boundary (end of report, diagnostic, header, page)
//!     ↓ (not a boundary)
//! LineGrammar::{object_code, ordinary_ref, external_ref, dsect_ref, using}
//!     ↓
//! Typed records → hir::ListingBuilder
//! ```

mod boundary;
mod grammar;
mod records;

pub use boundary::{Boundary, CodeLayout, SectionKind};
pub use grammar::{LineGrammar, listing_start};
pub use records::{
    DsectEntry, DsectRefLine, EsdEntry, ExternalRefLine, ObjectCodeRecord, OrdinaryFields,
    OrdinaryRefLine, ReferenceItem, UsingRecord, reference_items,
};
