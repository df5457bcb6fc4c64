//! IDE features: High-level APIs for editor requests.
//!
//! This module provides the interface between the listing model (HIR) and an
//! editor client. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a listing and a document, return data
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Empty on failure**: Unknown symbols and foreign documents give empty results
//!
//! ## Usage
//!
//! The recommended way to use this module is through `ListingHost`:
//!
//! ```ignore
//! use hlasm_listing::ide::ListingHost;
//!
//! let host = ListingHost::new();
//! host.handle_content(&doc)?;
//!
//! let hover = host.hover(&doc, Position::new(42, 51));
//! let outline = host.document_symbols(&doc);
//! ```

mod analysis;
mod error;
mod goto;
mod hover;
mod references;
mod symbols;
pub mod text_utils;

pub use analysis::ListingHost;
pub use error::{ListingError, Result};
pub use goto::{GotoResult, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{ReferenceResult, find_references};
pub use symbols::{OutlineKind, OutlineNode, document_symbols, offset_symbols};
pub use text_utils::isolate_symbol;
