//! Long layout (8-digit location) listings and layout-independent scanning.

use std::collections::BTreeSet;

use rstest::rstest;

use hlasm_listing::hir::{Section, StatementLine};
use hlasm_listing::ide::offset_symbols;
use hlasm_listing::parser::{CodeLayout, SectionKind};

use crate::helpers::listing_fixtures::*;
use crate::helpers::listing_helpers::*;

#[rstest]
fn test_layout_detected(
    #[values(&SHORT_FIXTURE, &LONG_FIXTURE)] fixture: &LayoutFixture,
    #[values(false, true)] has_prefix: bool,
) {
    let listing = single_listing(&fixture_text(fixture.text, has_prefix));
    assert_eq!(listing.layout, Some(fixture.layout));
    assert_eq!(listing.has_prefix, has_prefix);

    let start = fixture.source_column + usize::from(has_prefix);
    let line = fixture.definition_line;
    let range = listing.code_range(line);
    assert_eq!((range.start.line, range.start.character), (line, start));
    assert_eq!(range.end.character, start + 72);

    let (left, sentinel) = listing.code_columns().expect("layout known");
    assert_eq!(left, start);
    assert_eq!(sentinel, start + 71);
}

#[test]
fn test_long_layout_structure() {
    let listing = single_listing(LONG_LAYOUT);
    assert_eq!((listing.start, listing.end), (0, LONG_LAYOUT_LINES));
    assert_eq!(listing.max_statement, 6);
    assert_eq!(
        listing.report_section(SectionKind::Options),
        Some(Section::new(0, 3))
    );
    assert_eq!(
        listing.report_section(SectionKind::ExternalSymbols),
        Some(Section::new(3, 6))
    );
    assert_eq!(
        listing.report_section(SectionKind::OrdinarySymbols),
        Some(Section::new(16, 21))
    );

    assert_eq!(listing.code_sections.len(), 1);
    let block = &listing.code_sections[0];
    assert_eq!(block.title, "Long layout program");
    assert_eq!((block.start, block.code_start, block.end), (6, 9, 16));
    assert_eq!(block.first_statement, Some(1));
}

#[test]
fn test_long_layout_statements_and_symbols() {
    let listing = single_listing(LONG_LAYOUT);
    let expected = [
        (1, 9, 0x00),
        (2, 10, 0x00),
        (3, 11, 0x04),
        (4, 12, 0x08),
        (5, 13, 0x0C),
        (6, 15, 0x14),
    ];
    for (statement, line, address) in expected {
        assert_eq!(
            listing.statement_lines.get(&statement),
            Some(&StatementLine {
                line,
                address: Some(address)
            }),
            "statement {statement}"
        );
    }

    let counter = listing.symbols.get("COUNTER").expect("COUNTER");
    assert_eq!(counter.defined, BTreeSet::from([6]));
    assert_eq!(counter.references, BTreeSet::from([3, 5]));
    let program = listing.symbols.get("LONGPGM").expect("LONGPGM");
    assert!(program.details.is_some_and(|details| details.loctr));

    let csects: Vec<_> = listing
        .csects
        .iter()
        .map(|csect| (csect.name.as_str(), csect.address, csect.length))
        .collect();
    assert_eq!(csects, vec![("LONGPGM", 0, 0x18)]);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_long_layout_section_address_line(#[case] has_prefix: bool) {
    // statement 1 shows only Addr1/Addr2 in the 8-digit form
    let listing = single_listing(&fixture_text(LONG_LAYOUT, has_prefix));
    let map = &listing.section_map;
    assert_eq!(map.len(), 7);
    assert_eq!(map.get(0), None);
    assert!((1..=6).all(|statement| map.is_csect(statement)));
}

#[test]
fn test_huge_statement_number_is_scanned() {
    let text: String = LONG_LAYOUT
        .lines()
        .enumerate()
        .map(|(index, line)| {
            if index == 12 {
                format!("00000008 {:<32}4000000000          BR    R14\n", "07FE")
            } else {
                format!("{line}\n")
            }
        })
        .collect();
    let listing = single_listing(&text);
    assert_eq!(listing.max_statement, 4_000_000_000);
    assert_eq!(listing.section_map.len(), 4_000_000_001);
    assert!(listing.section_map.is_csect(4_000_000_000));
    assert!(!listing.statement_lines.contains_key(&4));

    let roots = offset_symbols(std::slice::from_ref(&listing));
    let lines: Vec<usize> = roots[0]
        .children
        .iter()
        .map(|node| node.span.start.line)
        .collect();
    // ascending statement order puts the huge statement last
    assert_eq!(lines, vec![9, 10, 11, 13, 15, 12]);
}

#[test]
fn test_long_layout_is_not_read_as_short() {
    let listing = single_listing(LONG_LAYOUT);
    assert_ne!(listing.layout, Some(CodeLayout::Short));
    assert_eq!(listing.code_range(15).start.character, LONG_SOURCE_COLUMN);
}
