//! Typed records extracted from listing lines.
//!
//! Each recognizer returns `None` for lines it does not understand, including
//! lines whose numeric fields do not fit the expected integer width.

use super::boundary::CodeLayout;
use super::grammar::{
    LineGrammar, REFERENCE_ITEM, SECTION_ADDR_LONG, SECTION_ADDR_SHORT, decimal, group, hex,
    section_id,
};

/// One line of the object code / source statement area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectCodeRecord<'a> {
    /// Location counter value, absent on lines without generated storage.
    pub address: Option<u32>,
    /// The raw object code / Addr1 / Addr2 field.
    pub object_code: &'a str,
    pub statement: u32,
    /// Name field of the source statement, if it holds an ordinary symbol.
    pub label: Option<&'a str>,
}

impl ObjectCodeRecord<'_> {
    /// A section start prints only Addr1 and Addr2 in the object code field.
    pub fn is_section_address(&self, layout: CodeLayout) -> bool {
        if self.address.is_none() {
            return false;
        }
        match layout {
            CodeLayout::Short => SECTION_ADDR_SHORT.is_match(self.object_code),
            CodeLayout::Long => SECTION_ADDR_LONG.is_match(self.object_code),
        }
    }
}

/// Numeric columns of an ordinary symbol cross reference entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrdinaryFields<'a> {
    pub value: u32,
    pub section_id: i32,
    /// Blank `R` column.
    pub relocatable: bool,
    /// The assembler-type column (`U` undefined EQU, `J` location counter, ...).
    pub type_flag: char,
    pub defined_at: u32,
    /// Raw reference list text, possibly empty.
    pub references: &'a str,
}

/// A line of the ordinary symbol and literal cross reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrdinaryRefLine<'a> {
    /// A complete first line.
    Entry {
        name: &'a str,
        fields: OrdinaryFields<'a>,
    },
    /// A name too long for the name column; fields follow on the next line.
    LongName { name: &'a str },
    /// Fields deferred from a `LongName` line.
    Deferred(OrdinaryFields<'a>),
    /// Further references of the current entry.
    More { references: &'a str },
}

/// One statement number of a reference list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceItem {
    pub statement: u32,
    /// Reference kind letter (`B` branch, `D` DROP, `M` modified, `U` USING, `X` EXecute).
    pub qualifier: Option<char>,
}

impl ReferenceItem {
    /// A plain reference carries no qualifier letter.
    pub fn is_pure(&self) -> bool {
        self.qualifier.is_none()
    }
}

/// Split a reference list like `12 14B 20M` into its items.
pub fn reference_items(text: &str) -> impl Iterator<Item = ReferenceItem> + '_ {
    REFERENCE_ITEM.captures_iter(text).filter_map(|caps| {
        Some(ReferenceItem {
            statement: decimal(group(&caps, 1)?)?,
            qualifier: group(&caps, 2).and_then(|q| q.chars().next()),
        })
    })
}

/// Address columns of an External Symbol Dictionary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EsdEntry<'a> {
    /// `SD`, `ED`, `LD`, `ER`, `PC`, `CM`, ...
    pub kind: &'a str,
    pub id: &'a str,
    pub address: Option<u32>,
    pub length: Option<u32>,
    pub owner_id: Option<&'a str>,
}

impl EsdEntry<'_> {
    /// Entries that own storage of their own.
    pub fn is_csect_like(&self) -> bool {
        matches!(self.kind, "SD" | "ED" | "PC" | "CM")
    }
}

/// A line of the External Symbol Dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalRefLine<'a> {
    /// Line starting with a symbol name; `entry` is absent for long names.
    Name {
        name: &'a str,
        entry: Option<EsdEntry<'a>>,
    },
    /// The data line following a long name.
    Continuation(EsdEntry<'a>),
}

/// Columns of a dsect cross reference entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DsectEntry {
    pub length: u32,
    pub section_id: i32,
    pub defined_at: u32,
}

/// A line of the dsect cross reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsectRefLine<'a> {
    Name {
        name: &'a str,
        entry: Option<DsectEntry>,
    },
    Continuation(DsectEntry),
}

/// A USING, DROP, PUSH or POP entry of the using map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsingRecord {
    pub statement: u32,
    pub location: u32,
    pub section_id: i32,
}

fn blank_or_hex(text: &str) -> Option<Option<u32>> {
    if text.starts_with(' ') {
        Some(None)
    } else {
        hex(text).map(Some)
    }
}

impl LineGrammar {
    /// Recognize an object code line of the given layout.
    pub fn object_code<'a>(
        &self,
        line: &'a str,
        layout: CodeLayout,
    ) -> Option<ObjectCodeRecord<'a>> {
        let pattern = match layout {
            CodeLayout::Short => &self.object_code_short,
            CodeLayout::Long => &self.object_code_long,
        };
        let caps = pattern.captures(line)?;
        let address = match group(&caps, 1) {
            Some(text) => Some(hex(text)?),
            None => None,
        };
        Some(ObjectCodeRecord {
            address,
            object_code: group(&caps, 2)?,
            statement: decimal(group(&caps, 3)?)?,
            label: group(&caps, 4),
        })
    }

    /// Recognize a line of the ordinary symbol cross reference.
    pub fn ordinary_ref<'a>(&self, line: &'a str) -> Option<OrdinaryRefLine<'a>> {
        if let Some(caps) = self.ordinary_first.captures(line) {
            if let Some(name) = group(&caps, 1) {
                return Some(OrdinaryRefLine::Entry {
                    name,
                    fields: ordinary_fields(&caps, 3)?,
                });
            }
            return group(&caps, 9).map(|name| OrdinaryRefLine::LongName { name });
        }
        if let Some(caps) = self.ordinary_alt_second.captures(line) {
            return ordinary_fields(&caps, 3).map(OrdinaryRefLine::Deferred);
        }
        let caps = self.ordinary_rest.captures(line)?;
        Some(OrdinaryRefLine::More {
            references: group(&caps, 1)?,
        })
    }

    /// Recognize a line of the External Symbol Dictionary.
    pub fn external_ref<'a>(&self, line: &'a str) -> Option<ExternalRefLine<'a>> {
        if let Some(caps) = self.external_first.captures(line) {
            if let Some(name) = group(&caps, 1) {
                return Some(ExternalRefLine::Name {
                    name,
                    entry: Some(esd_entry(&caps)?),
                });
            }
            return group(&caps, 7).map(|name| ExternalRefLine::Name { name, entry: None });
        }
        let caps = self.external_second.captures(line)?;
        esd_entry(&caps).map(ExternalRefLine::Continuation)
    }

    /// Recognize a line of the dsect cross reference.
    pub fn dsect_ref<'a>(&self, line: &'a str) -> Option<DsectRefLine<'a>> {
        if let Some(caps) = self.dsect_first.captures(line) {
            if let Some(name) = group(&caps, 1) {
                return Some(DsectRefLine::Name {
                    name,
                    entry: Some(dsect_entry(&caps)?),
                });
            }
            return group(&caps, 5).map(|name| DsectRefLine::Name { name, entry: None });
        }
        let caps = self.dsect_second.captures(line)?;
        dsect_entry(&caps).map(DsectRefLine::Continuation)
    }

    /// Recognize a using map entry.
    pub fn using(&self, line: &str) -> Option<UsingRecord> {
        let caps = self.using_map.captures(line)?;
        Some(UsingRecord {
            statement: decimal(group(&caps, 1)?)?,
            location: hex(group(&caps, 2)?)?,
            section_id: section_id(group(&caps, 3)?)?,
        })
    }
}

/// Fields start at capture `first` (value); the length column precedes it.
fn ordinary_fields<'a>(caps: &regex::Captures<'a>, first: usize) -> Option<OrdinaryFields<'a>> {
    Some(OrdinaryFields {
        value: hex(group(caps, first)?)?,
        section_id: section_id(group(caps, first + 1)?)?,
        relocatable: group(caps, first + 2)? == " ",
        type_flag: group(caps, first + 3)?.chars().next()?,
        defined_at: decimal(group(caps, first + 4)?)?,
        references: group(caps, first + 5).unwrap_or(""),
    })
}

/// ESD data fields are captures 2..=6 in both the first and the second line form.
fn esd_entry<'a>(caps: &regex::Captures<'a>) -> Option<EsdEntry<'a>> {
    let owner = group(caps, 6)?;
    Some(EsdEntry {
        kind: group(caps, 2)?,
        id: group(caps, 3)?,
        address: blank_or_hex(group(caps, 4)?)?,
        length: blank_or_hex(group(caps, 5)?)?,
        owner_id: (!owner.starts_with(' ')).then_some(owner),
    })
}

fn dsect_entry(caps: &regex::Captures<'_>) -> Option<DsectEntry> {
    Some(DsectEntry {
        length: hex(group(caps, 2)?)?,
        section_id: section_id(group(caps, 3)?)?,
        defined_at: decimal(group(caps, 4)?)?,
    })
}
