//! Document outline and offset view.

use smol_str::{SmolStr, format_smolstr};

use crate::base::{ListingOptions, Span};
use crate::hir::{CodeSection, Listing, Symbol};
use crate::parser::SectionKind;

/// The kind of an outline node, as shown by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineKind {
    /// A whole listing.
    Module,
    /// A report section.
    Namespace,
    /// A block of object code.
    Package,
    /// A symbol or an offset.
    Object,
}

impl OutlineKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            OutlineKind::Module => 2,
            OutlineKind::Namespace => 3,
            OutlineKind::Package => 4,
            OutlineKind::Object => 19,
        }
    }
}

/// A node of the document outline or of the offset view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineNode {
    pub name: SmolStr,
    pub kind: OutlineKind,
    pub span: Span,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(name: impl Into<SmolStr>, kind: OutlineKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            span,
            children: Vec::new(),
        }
    }

    fn at_line(name: impl Into<SmolStr>, line: usize) -> Self {
        Self::new(name, OutlineKind::Object, Span::lines(line, line))
    }
}

/// `Listing` for a single listing, `Listing N` when the document holds several.
fn listing_root(listing: &Listing, number: Option<usize>) -> OutlineNode {
    let name = match number {
        Some(number) => format_smolstr!("Listing {number}"),
        None => SmolStr::new_static("Listing"),
    };
    OutlineNode::new(name, OutlineKind::Module, listing.span())
}

fn numbered(listings: &[Listing]) -> impl Iterator<Item = (&Listing, Option<usize>)> {
    let several = listings.len() > 1;
    listings
        .iter()
        .enumerate()
        .map(move |(index, listing)| (listing, several.then_some(index + 1)))
}

/// Build the outline of every listing in a document.
pub fn document_symbols(listings: &[Listing], options: &ListingOptions) -> Vec<OutlineNode> {
    numbered(listings)
        .map(|(listing, number)| listing_outline(listing, number, options))
        .collect()
}

/// Build the offset view of every listing in a document.
pub fn offset_symbols(listings: &[Listing]) -> Vec<OutlineNode> {
    numbered(listings)
        .map(|(listing, number)| listing_offsets(listing, number))
        .collect()
}

fn listing_outline(
    listing: &Listing,
    number: Option<usize>,
    options: &ListingOptions,
) -> OutlineNode {
    let mut root = listing_root(listing, number);
    for kind in SectionKind::ALL {
        if let Some(section) = listing.report_section(kind) {
            root.children.push(OutlineNode::new(
                kind.title(),
                OutlineKind::Namespace,
                section.span(),
            ));
        }
        if kind == SectionKind::ExternalSymbols {
            if let Some(code) = object_code_outline(listing, options) {
                root.children.push(code);
            }
        }
    }
    root
}

/// Adjacent blocks printed under the same page title.
fn merged_blocks(sections: &[CodeSection]) -> Vec<(SmolStr, usize, usize)> {
    let mut blocks: Vec<(SmolStr, usize, usize)> = Vec::new();
    for section in sections {
        match blocks.last_mut() {
            Some((title, start, end)) if *title == section.title => {
                *start = (*start).min(section.start);
                *end = (*end).max(section.end);
            }
            _ => blocks.push((section.title.clone(), section.start, section.end)),
        }
    }
    blocks
}

/// Non-literal symbols with the line of their first printed definition.
fn visible_symbols<'l>(listing: &'l Listing, options: &ListingOptions) -> Vec<(&'l Symbol, usize)> {
    let mut visible: Vec<_> = listing
        .symbols
        .iter()
        .filter(|symbol| !options.is_literal(&symbol.name))
        .filter_map(|symbol| {
            symbol
                .defined
                .iter()
                .find_map(|&statement| listing.exact_line(statement))
                .map(|line| (symbol, line))
        })
        .collect();
    visible.sort_by_key(|&(_, line)| line);
    visible
}

fn object_code_outline(listing: &Listing, options: &ListingOptions) -> Option<OutlineNode> {
    let range = listing.object_code()?;
    let mut code = OutlineNode::new("Object Code", OutlineKind::Namespace, range.span());
    code.children = merged_blocks(&listing.code_sections)
        .into_iter()
        .map(|(title, start, end)| {
            let title = if title.is_empty() {
                SmolStr::new_static("(untitled)")
            } else {
                title
            };
            OutlineNode::new(title, OutlineKind::Package, Span::lines(start, end))
        })
        .collect();
    let blocks = code.children.len();

    for (symbol, line) in visible_symbols(listing, options) {
        let leaf = OutlineNode::at_line(symbol.name.clone(), line);
        let block = code.children[..blocks]
            .iter()
            .rposition(|block| block.span.start.line <= line);
        match block {
            Some(block) => code.children[block].children.push(leaf),
            None => code.children.push(leaf),
        }
    }
    Some(code)
}

fn listing_offsets(listing: &Listing, number: Option<usize>) -> OutlineNode {
    let mut root = listing_root(listing, number);
    for (&statement, entry) in &listing.statement_lines {
        let Some(address) = entry.address else {
            continue;
        };
        if !listing.section_map.is_csect(statement) {
            continue;
        }
        let name = match listing.csect_containing(address) {
            Some(csect) => format_smolstr!(
                "Offset {address:08X} ({}+{:08X})",
                csect.name,
                address - csect.address
            ),
            None => format_smolstr!("Offset {address:08X}"),
        };
        root.children.push(OutlineNode::at_line(name, entry.line));
    }
    root
}
