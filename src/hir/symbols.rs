//! Symbols collected from the cross reference sections.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::parser::{OrdinaryFields, reference_items};

/// Canonical (case-folded) form of a symbol name.
pub fn canonical_name(name: &str) -> SmolStr {
    SmolStr::from(name.to_ascii_uppercase())
}

/// Attributes printed in the ordinary symbol cross reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolDetails {
    pub value: u32,
    /// ESD id of the owning section; negative for dummy sections.
    pub section_id: i32,
    /// Relocatable (blank `R` column).
    pub reloc: bool,
    /// Type attribute `U`, mostly EQUs of undefined type.
    pub undefined: bool,
    /// Type attribute `J`: section or location counter name.
    pub loctr: bool,
}

impl SymbolDetails {
    pub fn is_dsect(&self) -> bool {
        self.section_id < 0
    }

    /// The fixed attributes of a dsect cross reference entry.
    pub fn dsect(section_id: i32) -> Self {
        Self {
            value: 0,
            section_id,
            reloc: true,
            undefined: false,
            loctr: true,
        }
    }
}

impl From<&OrdinaryFields<'_>> for SymbolDetails {
    fn from(fields: &OrdinaryFields<'_>) -> Self {
        Self {
            value: fields.value,
            section_id: fields.section_id,
            reloc: fields.relocatable,
            undefined: fields.type_flag == 'U',
            loctr: fields.type_flag == 'J',
        }
    }
}

/// An ordinary symbol, literal or dsect name of one listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Canonical upper-case name.
    pub name: SmolStr,
    /// Statements defining the symbol.
    pub defined: BTreeSet<u32>,
    /// All referencing statements, qualified or not.
    pub references: BTreeSet<u32>,
    /// References without a qualifier letter.
    pub references_pure: BTreeSet<u32>,
    pub details: Option<SymbolDetails>,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self {
            name: canonical_name(name),
            defined: BTreeSet::new(),
            references: BTreeSet::new(),
            references_pure: BTreeSet::new(),
            details: None,
        }
    }

    /// A symbol known only from the name field of a source statement.
    pub fn label(name: &str, statement: u32) -> Self {
        let mut symbol = Self::new(name);
        symbol.defined.insert(statement);
        symbol
    }

    pub fn with_details(mut self, details: SymbolDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Record a reference list such as `12 14B 20M`.
    pub fn add_references(&mut self, list: &str) {
        for item in reference_items(list) {
            self.references.insert(item.statement);
            if item.is_pure() {
                self.references_pure.insert(item.statement);
            }
        }
    }

    /// Union another encounter of the same symbol into this one.
    pub fn merge(&mut self, other: Symbol) {
        self.defined.extend(other.defined);
        self.references.extend(other.references);
        self.references_pure.extend(other.references_pure);
        if self.details.is_none() {
            self.details = other.details;
        }
    }

    /// Statements to report for a find-references request.
    pub fn reference_statements(&self, include_declaration: bool) -> BTreeSet<u32> {
        let mut statements = self.references.clone();
        if include_declaration {
            statements.extend(self.defined.iter().copied());
        }
        statements
    }
}

/// Symbols of one listing, keyed by canonical name in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: IndexMap<SmolStr, Symbol, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a symbol by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(canonical_name(name).as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Add `symbol`, merging it into an existing entry of the same name.
    pub fn merge(&mut self, symbol: Symbol) {
        match self.symbols.get_mut(&symbol.name) {
            Some(existing) => existing.merge(symbol),
            None => {
                self.symbols.insert(symbol.name.clone(), symbol);
            }
        }
    }

    /// Add `symbol` only when no entry of that name exists yet.
    pub fn insert_if_absent(&mut self, symbol: Symbol) -> bool {
        if self.symbols.contains_key(&symbol.name) {
            return false;
        }
        self.symbols.insert(symbol.name.clone(), symbol);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
