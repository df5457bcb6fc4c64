//! Foundation types for the listing indexer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`], [`Location`] - Line/character positions in a document
//! - [`ListingDocument`], [`TextDocument`] - Line-addressable, versioned document text
//! - [`ListingOptions`] - Host configuration
//! - Listing layout constants (section titles, column widths)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod document;
mod options;
mod position;

pub use document::{ListingDocument, TextDocument};
pub use options::ListingOptions;
pub use position::{Location, Position, Span};
