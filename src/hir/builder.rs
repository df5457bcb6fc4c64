//! Single pass scan of a document into [`Listing`]s.
//!
//! Every line is first offered to [`LineGrammar::boundary`]. Page headers of the
//! known report sections switch the scanner state; everything else is handed to
//! the recognizer of the current state and skipped when it does not match.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::ListingDocument;
use crate::parser::{
    Boundary, DsectRefLine, ExternalRefLine, LineGrammar, OrdinaryRefLine, SectionKind,
    listing_start,
};

use super::diagnostics::Diagnostic;
use super::listing::{CodeSection, Csect, Listing, StatementLine};
use super::section_map::SectionMap;
use super::symbols::{Symbol, SymbolDetails, canonical_name};

/// Find every listing in `doc` and index it.
pub fn scan_document<D: ListingDocument + ?Sized>(doc: &D) -> Vec<Listing> {
    let mut listings = Vec::new();
    let mut index = 0;
    while index < doc.line_count() {
        let Some(has_prefix) = listing_start(doc.line(index)) else {
            index += 1;
            continue;
        };
        debug!(line = index, has_prefix, "listing start");
        let (listing, next) = ListingBuilder::new(index, has_prefix).run(doc);
        listings.push(listing);
        index = next;
    }
    listings
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Options,
    ExternalRefs,
    Code,
    OrdinaryRefs,
    DsectRefs,
    UsingRef,
    Refs,
}

/// The range whose end moves with the next boundary.
#[derive(Clone, Copy, Debug)]
enum OpenSection {
    Report(SectionKind),
    Code(usize),
}

enum Flow {
    Continue,
    SkipNext,
    Stop,
}

struct ListingBuilder {
    grammar: &'static LineGrammar,
    listing: Listing,
    state: State,
    open: Option<OpenSection>,
    /// Ordinary cross reference entry still collecting continuation lines.
    pending: Option<Symbol>,
    last_title: SmolStr,
    last_title_line: usize,
    last_csect: Option<SmolStr>,
    last_dsect: Option<SmolStr>,
    /// Name field symbols of object code lines.
    labels: Vec<(SmolStr, u32)>,
    known_csects: Vec<u32>,
    transitions: Vec<u32>,
}

impl ListingBuilder {
    fn new(start: usize, has_prefix: bool) -> Self {
        Self {
            grammar: LineGrammar::for_prefix(has_prefix),
            listing: Listing::new(start, has_prefix),
            state: State::Options,
            open: None,
            pending: None,
            last_title: SmolStr::default(),
            last_title_line: start,
            last_csect: None,
            last_dsect: None,
            labels: Vec::new(),
            known_csects: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Scan from the start marker; returns the listing and the line after it.
    fn run<D: ListingDocument + ?Sized>(mut self, doc: &D) -> (Listing, usize) {
        let mut index = self.listing.start;
        while index < doc.line_count() {
            match self.line(index, doc.line(index)) {
                Flow::Continue => index += 1,
                Flow::SkipNext => index += 2,
                Flow::Stop => {
                    index += 1;
                    break;
                }
            }
        }
        let end = index.min(doc.line_count());
        (self.finish(end), end)
    }

    fn line(&mut self, index: usize, text: &str) -> Flow {
        let grammar = self.grammar;
        if let Some(boundary) = grammar.boundary(text) {
            return self.boundary(index, text, boundary);
        }
        match self.state {
            State::Code => self.object_code(index, text),
            State::OrdinaryRefs => self.ordinary_ref(text),
            State::ExternalRefs => self.external_ref(text),
            State::DsectRefs => self.dsect_ref(text),
            State::UsingRef => {
                if let Some(using) = grammar.using(text) {
                    if using.section_id >= 0 {
                        self.known_csects.push(using.statement);
                    }
                }
            }
            State::Options | State::Refs => {}
        }
        Flow::Continue
    }

    fn boundary(&mut self, index: usize, text: &str, boundary: Boundary<'_>) -> Flow {
        if let Boundary::Diagnostic { code, message } = boundary {
            self.listing.diagnostics.push(Diagnostic::from_listing_line(
                index,
                text.chars().count(),
                code,
                message,
            ));
            return Flow::Continue;
        }

        self.close_open(index);
        match boundary {
            Boundary::EndOfReport => {
                self.listing
                    .close_report_section(SectionKind::Summary, index + 1);
                return Flow::Stop;
            }
            Boundary::CodeHeader { layout, dsect } => {
                self.listing.layout = Some(layout);
                self.listing.code_sections.push(CodeSection {
                    start: self.last_title_line,
                    end: index + 1,
                    title: self.last_title.clone(),
                    code_start: index + 1,
                    dsect,
                    first_statement: None,
                });
                self.open = Some(OpenSection::Code(self.listing.code_sections.len() - 1));
            }
            Boundary::Section(kind) => {
                trace!(line = index, section = kind.title(), "report section");
                self.listing.open_report_section(kind, index);
                self.open = Some(OpenSection::Report(kind));
                match kind {
                    SectionKind::Options => {}
                    SectionKind::ExternalSymbols => self.enter(State::ExternalRefs),
                    SectionKind::OrdinarySymbols => {
                        self.enter(State::OrdinaryRefs);
                        return Flow::SkipNext;
                    }
                    SectionKind::Dsects => self.enter(State::DsectRefs),
                    SectionKind::Usings => self.enter(State::UsingRef),
                    SectionKind::Relocations
                    | SectionKind::MacroSources
                    | SectionKind::Registers
                    | SectionKind::Summary => self.enter(State::Refs),
                }
            }
            Boundary::Page { title } => {
                if matches!(self.state, State::Options | State::ExternalRefs) {
                    self.enter(State::Code);
                }
                self.last_title = SmolStr::new(title);
                self.last_title_line = index;
            }
            Boundary::Diagnostic { .. } => {}
        }
        Flow::Continue
    }

    fn enter(&mut self, state: State) {
        if self.state == state {
            return;
        }
        trace!(from = ?self.state, to = ?state, "state transition");
        if self.state == State::OrdinaryRefs {
            self.flush_pending();
        }
        self.state = state;
    }

    fn close_open(&mut self, index: usize) {
        match self.open.take() {
            Some(OpenSection::Report(kind)) => self.listing.close_report_section(kind, index),
            Some(OpenSection::Code(section)) => self.listing.code_sections[section].end = index,
            None => {}
        }
    }

    fn flush_pending(&mut self) {
        if let Some(symbol) = self.pending.take() {
            self.listing.symbols.merge(symbol);
        }
    }

    fn object_code(&mut self, index: usize, text: &str) {
        let Some(layout) = self.listing.layout else {
            return;
        };
        let Some(record) = self.grammar.object_code(text, layout) else {
            return;
        };
        let statement = record.statement;
        if let Some(label) = record.label {
            self.labels.push((canonical_name(label), statement));
        }

        let entry = self
            .listing
            .statement_lines
            .entry(statement)
            .or_insert(StatementLine {
                line: index,
                address: record.address,
            });
        if entry.address.is_none() {
            entry.address = record.address;
        }
        self.listing.max_statement = self.listing.max_statement.max(statement);

        if let Some(OpenSection::Code(section)) = self.open {
            let section = &mut self.listing.code_sections[section];
            if section.code_start == index {
                section.first_statement = Some(statement);
            }
        }
        if record.is_section_address(layout) {
            self.transitions.push(statement);
        }
    }

    fn ordinary_ref(&mut self, text: &str) {
        match self.grammar.ordinary_ref(text) {
            Some(OrdinaryRefLine::Entry { name, fields }) => {
                self.flush_pending();
                let mut symbol =
                    Symbol::label(name, fields.defined_at).with_details((&fields).into());
                symbol.add_references(fields.references);
                self.pending = Some(symbol);
            }
            Some(OrdinaryRefLine::LongName { name }) => {
                self.flush_pending();
                self.pending = Some(Symbol::new(name));
            }
            Some(OrdinaryRefLine::Deferred(fields)) => {
                if let Some(symbol) = self.pending.as_mut() {
                    symbol.details = Some((&fields).into());
                    symbol.defined.insert(fields.defined_at);
                    symbol.add_references(fields.references);
                }
            }
            Some(OrdinaryRefLine::More { references }) => {
                if let Some(symbol) = self.pending.as_mut() {
                    symbol.add_references(references);
                }
            }
            None => {}
        }
    }

    fn external_ref(&mut self, text: &str) {
        let entry = match self.grammar.external_ref(text) {
            Some(ExternalRefLine::Name { name, entry }) => {
                self.last_csect = Some(SmolStr::new(name));
                entry
            }
            Some(ExternalRefLine::Continuation(entry)) => Some(entry),
            None => None,
        };
        let (Some(name), Some(entry)) = (self.last_csect.clone(), entry) else {
            return;
        };
        if !entry.is_csect_like() {
            return;
        }

        let owner = entry
            .owner_id
            .and_then(|owner| self.listing.sections.get(owner).cloned())
            .unwrap_or(name);
        self.listing
            .sections
            .insert(SmolStr::new(entry.id), owner.clone());
        if let (Some(address), Some(length)) = (entry.address, entry.length) {
            self.listing.csects.push(Csect {
                name: owner,
                address,
                length,
            });
        }
    }

    fn dsect_ref(&mut self, text: &str) {
        let entry = match self.grammar.dsect_ref(text) {
            Some(DsectRefLine::Name { name, entry }) => {
                self.last_dsect = Some(canonical_name(name));
                entry
            }
            Some(DsectRefLine::Continuation(entry)) => Some(entry),
            None => None,
        };
        if let (Some(name), Some(entry)) = (self.last_dsect.as_deref(), entry) {
            self.listing.symbols.insert_if_absent(
                Symbol::label(name, entry.defined_at)
                    .with_details(SymbolDetails::dsect(entry.section_id)),
            );
        }
    }

    fn finish(mut self, end: usize) -> Listing {
        self.flush_pending();
        self.close_open(end);

        for (name, statement) in std::mem::take(&mut self.labels) {
            self.listing
                .symbols
                .insert_if_absent(Symbol::label(&name, statement));
        }

        let listing = &mut self.listing;
        listing.section_map = SectionMap::classify(
            listing.max_statement,
            &listing.symbols,
            &listing.code_sections,
            &self.known_csects,
            &self.transitions,
        );
        listing.end = end;

        debug!(
            start = listing.start,
            end,
            layout = ?listing.layout,
            symbols = listing.symbols.len(),
            statements = listing.statement_lines.len(),
            "listing indexed"
        );
        self.listing
    }
}
