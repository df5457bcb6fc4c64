//! ListingHost: Per-document listing cache and query entry points.
//!
//! The host parses listing documents on open/change, keeps the result keyed by
//! document uri together with the version it was parsed from, and answers
//! queries against the listing that contains the cursor. Queries against a
//! document that was never handed to the host, or whose version moved since the
//! last parse, parse it on first use.
//!
//! ## Usage
//!
//! ```ignore
//! let host = ListingHost::new();
//! let doc = TextDocument::new("file:///job.lst", "hlasmListing", 1, &text);
//!
//! host.handle_content(&doc)?;
//! let definitions = host.goto_definition(&doc, Position::new(120, 52));
//! let outline = host.document_symbols(&doc);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{ListingDocument, ListingOptions, Position};
use crate::hir::{Diagnostic, Listing, scan_document};

use super::error::{ListingError, Result};
use super::{
    GotoResult, HoverResult, OutlineNode, ReferenceResult, document_symbols, find_references,
    goto_definition, hover, offset_symbols,
};

/// Listings parsed from one version of a document.
struct Parsed {
    version: i32,
    listings: Arc<[Listing]>,
}

/// Owns the parsed listings of every open listing document.
///
/// All methods take `&self`; the cache is guarded by a lock held only while
/// reading or replacing entries, never while parsing.
pub struct ListingHost {
    options: ListingOptions,
    listings: RwLock<FxHashMap<Arc<str>, Parsed>>,
    diagnostics: RwLock<FxHashMap<Arc<str>, Arc<[Diagnostic]>>>,
}

impl Default for ListingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingHost {
    /// Create a host with default options.
    pub fn new() -> Self {
        Self::with_options(ListingOptions::default())
    }

    pub fn with_options(options: ListingOptions) -> Self {
        Self {
            options,
            listings: RwLock::new(FxHashMap::default()),
            diagnostics: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn options(&self) -> &ListingOptions {
        &self.options
    }

    fn check_language<D: ListingDocument + ?Sized>(&self, doc: &D) -> Result<()> {
        if self.options.accepts(doc.language_id()) {
            Ok(())
        } else {
            Err(ListingError::NotAListing {
                uri: Arc::from(doc.uri()),
                language_id: Arc::from(doc.language_id()),
            })
        }
    }

    /// Parse `doc` and replace its cached listings and diagnostics.
    ///
    /// A refused parse leaves nothing cached for the document: the result is
    /// discarded when the document version moved while parsing, and so is the
    /// result of any earlier version.
    pub fn handle_content<D: ListingDocument + ?Sized>(&self, doc: &D) -> Result<Arc<[Listing]>> {
        self.parse(doc).inspect_err(|_| self.release_content(doc.uri()))
    }

    fn parse<D: ListingDocument + ?Sized>(&self, doc: &D) -> Result<Arc<[Listing]>> {
        self.check_language(doc)?;
        let started = doc.version();
        let listings: Arc<[Listing]> = scan_document(doc).into();
        let finished = doc.version();
        if started != finished {
            debug!(uri = doc.uri(), started, finished, "stale listing parse");
            return Err(ListingError::StaleVersion {
                uri: Arc::from(doc.uri()),
                started,
                finished,
            });
        }
        self.check_language(doc)?;

        let uri: Arc<str> = Arc::from(doc.uri());
        let diagnostics: Arc<[Diagnostic]> = listings
            .iter()
            .flat_map(|listing| listing.diagnostics.iter().cloned())
            .collect();
        let parsed = Parsed {
            version: finished,
            listings: listings.clone(),
        };
        self.listings.write().insert(uri.clone(), parsed);
        self.diagnostics.write().insert(uri, diagnostics);
        Ok(listings)
    }

    /// Forget everything known about `uri`.
    pub fn release_content(&self, uri: &str) {
        let removed = self.listings.write().remove(uri).is_some();
        self.diagnostics.write().remove(uri);
        if removed {
            debug!(uri, "listing evicted");
        }
    }

    /// Cached listings of `doc`, parsing it when nothing is cached for its
    /// current version.
    pub fn listings<D: ListingDocument + ?Sized>(&self, doc: &D) -> Option<Arc<[Listing]>> {
        let version = doc.version();
        let cached = self
            .listings
            .read()
            .get(doc.uri())
            .filter(|parsed| parsed.version == version)
            .map(|parsed| parsed.listings.clone());
        if cached.is_some() {
            return cached;
        }
        match self.handle_content(doc) {
            Ok(listings) => Some(listings),
            Err(err) => {
                debug!(%err, "no listing available");
                None
            }
        }
    }

    /// Diagnostics of all listings in `uri`, in listing order.
    pub fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.diagnostics
            .read()
            .get(uri)
            .map(|diagnostics| diagnostics.to_vec())
            .unwrap_or_default()
    }

    fn with_listing_at<D, R>(
        &self,
        doc: &D,
        position: Position,
        f: impl FnOnce(&Listing) -> R,
    ) -> Option<R>
    where
        D: ListingDocument + ?Sized,
    {
        let listings = self.listings(doc)?;
        let listing = listings
            .iter()
            .find(|listing| listing.contains_line(position.line))?;
        Some(f(listing))
    }

    pub fn goto_definition<D: ListingDocument + ?Sized>(
        &self,
        doc: &D,
        position: Position,
    ) -> GotoResult {
        self.with_listing_at(doc, position, |listing| {
            goto_definition(listing, doc, position, &self.options)
        })
        .unwrap_or_default()
    }

    pub fn find_references<D: ListingDocument + ?Sized>(
        &self,
        doc: &D,
        position: Position,
        include_declaration: bool,
    ) -> ReferenceResult {
        self.with_listing_at(doc, position, |listing| {
            find_references(listing, doc, position, include_declaration, &self.options)
        })
        .unwrap_or_default()
    }

    pub fn hover<D: ListingDocument + ?Sized>(
        &self,
        doc: &D,
        position: Position,
    ) -> Option<HoverResult> {
        self.with_listing_at(doc, position, |listing| {
            hover(listing, doc, position, &self.options)
        })
        .flatten()
    }

    /// Outline of every listing in `doc`.
    pub fn document_symbols<D: ListingDocument + ?Sized>(&self, doc: &D) -> Vec<OutlineNode> {
        self.listings(doc)
            .map(|listings| document_symbols(&listings, &self.options))
            .unwrap_or_default()
    }

    /// Offset view of every listing in `doc`.
    pub fn offset_symbols<D: ListingDocument + ?Sized>(&self, doc: &D) -> Vec<OutlineNode> {
        self.listings(doc)
            .map(|listings| offset_symbols(&listings))
            .unwrap_or_default()
    }
}
