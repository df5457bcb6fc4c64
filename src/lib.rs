//! # hlasm-listing
//!
//! Indexer for High Level Assembler listings: symbols, cross references,
//! document outline and address offsets.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Queries (goto-def, references, hover, outline, offsets) and the cache
//!   ↓
//! hir       → Listing model, scanner state machine, section classifier
//!   ↓
//! parser    → Line grammar, boundary detection, typed line records
//!   ↓
//! base      → Primitives (Position, Span, documents, options)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → ide)
// ============================================================================

/// Foundation types: positions, documents, configuration
pub mod base;

/// Parser: fixed-column line grammar, with or without an indicator column
pub mod parser;

/// High-level IR: listings, symbols, section classification
pub mod hir;

/// IDE features: goto-definition, find-references, hover, outline, offsets
pub mod ide;

// Re-export foundation types
pub use base::{ListingDocument, ListingOptions, Location, Position, Span, TextDocument};
pub use hir::{Listing, scan_document};
pub use ide::{ListingError, ListingHost};
