//! Control section versus dummy section classification of statements.
//!
//! The listing never says directly whether a statement assembles into a
//! control section. The classifier gathers evidence per statement number:
//!
//! 1. definitions of relocatable symbols (the sign of their section id)
//! 2. the first statement of every object code block (`Loc` vs `D-Loc` header)
//! 3. USING map entries based on a control section
//! 4. section address lines, resolved only when exactly one definition points at them
//!
//! and then fills the gaps forward from the first classified statement. Pure
//! references to a control section's location counter switch an unclassified
//! statement to control section. The result is approximate and feeds only the
//! offset view.

use std::collections::{BTreeMap, BTreeSet};

use super::listing::CodeSection;
use super::symbols::SymbolTable;

/// Per statement: `Some(true)` control section, `Some(false)` dummy section.
///
/// Only statements that carry evidence are stored; a statement in between
/// takes the class of the closest lower stored statement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionMap {
    classes: BTreeMap<u32, bool>,
    len: usize,
}

#[derive(Clone, Copy, Debug, Default)]
struct Evidence {
    count: u32,
    csect: bool,
    dsect: bool,
    loctr_pure: bool,
}

impl Evidence {
    fn add(&mut self, dsect: bool) {
        self.count += 1;
        if dsect {
            self.dsect = true;
        } else {
            self.csect = true;
        }
    }

    /// Classification of a section address line, when unambiguous.
    fn transition(&self) -> Option<bool> {
        match (self.count, self.csect, self.dsect) {
            (1, true, false) => Some(true),
            (1, false, true) => Some(false),
            _ => None,
        }
    }
}

impl SectionMap {
    /// Classify statements `0..=max_statement`.
    pub fn classify(
        max_statement: u32,
        symbols: &SymbolTable,
        code_sections: &[CodeSection],
        known_csects: &[u32],
        transitions: &[u32],
    ) -> Self {
        let in_range = |statement: &u32| *statement <= max_statement;
        let mut classes: BTreeMap<u32, bool> = BTreeMap::new();
        let mut evidence: BTreeMap<u32, Evidence> = BTreeMap::new();

        for symbol in symbols.iter() {
            let Some(details) = symbol.details else {
                continue;
            };
            if details.loctr {
                for statement in symbol.references_pure.iter().copied().filter(in_range) {
                    let hint = evidence.entry(statement).or_default();
                    hint.add(details.is_dsect());
                    if !details.is_dsect() {
                        hint.loctr_pure = true;
                    }
                }
            }
            if details.undefined || !details.reloc {
                continue;
            }
            for statement in symbol.defined.iter().copied().filter(in_range) {
                classes.insert(statement, !details.is_dsect());
                evidence.entry(statement).or_default().add(details.is_dsect());
            }
        }

        for section in code_sections {
            if let Some(statement) = section.first_statement.filter(in_range) {
                classes.insert(statement, !section.dsect);
            }
        }

        for statement in known_csects.iter().copied().filter(in_range) {
            classes.insert(statement, true);
        }

        for statement in transitions.iter().copied().filter(in_range) {
            if let Some(class) = evidence.get(&statement).and_then(Evidence::transition) {
                classes.insert(statement, class);
            }
        }

        // forward fill, starting at the first classified statement
        let statements: BTreeSet<u32> = classes.keys().chain(evidence.keys()).copied().collect();
        let mut filled = BTreeMap::new();
        let mut previous: Option<bool> = None;
        for statement in statements {
            let class = match (classes.get(&statement), previous) {
                (Some(&class), _) => class,
                (None, Some(previous)) => {
                    previous || evidence.get(&statement).is_some_and(|hint| hint.loctr_pure)
                }
                (None, None) => continue,
            };
            filled.insert(statement, class);
            previous = Some(class);
        }

        Self {
            classes: filled,
            len: (max_statement as usize).saturating_add(1),
        }
    }

    pub fn get(&self, statement: u32) -> Option<bool> {
        if statement as usize >= self.len {
            return None;
        }
        self.classes
            .range(..=statement)
            .next_back()
            .map(|(_, &class)| class)
    }

    /// Whether `statement` is classified as control section code.
    pub fn is_csect(&self, statement: u32) -> bool {
        self.get(statement) == Some(true)
    }

    /// Number of statement slots, `max_statement + 1`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
