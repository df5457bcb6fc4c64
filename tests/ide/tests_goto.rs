//! Go to definition tests for the IDE layer.

use rstest::rstest;

use hlasm_listing::ListingOptions;
use hlasm_listing::Span;
use hlasm_listing::ide::{goto_definition, isolate_symbol};

use crate::helpers::listing_fixtures::*;
use crate::helpers::listing_helpers::*;

fn definition_lines(has_prefix: bool, line: usize, character: usize) -> Vec<usize> {
    let text = fixture_text(SAMPLE, has_prefix);
    let doc = listing_document(&text);
    let listing = single_listing(&text);
    goto_definition(
        &listing,
        &doc,
        cursor(line, character, has_prefix),
        &ListingOptions::default(),
    )
    .targets
    .iter()
    .map(|target| target.span.start.line)
    .collect()
}

// =============================================================================
// GOTO DEFINITION - SOURCE COLUMNS
// =============================================================================

#[rstest]
#[case(false)]
#[case(true)]
fn test_goto_definition_from_operand(#[case] has_prefix: bool) {
    // "         L     R1,FIELD1"
    let lines = definition_lines(has_prefix, LOAD_FIELD1_LINE, SOURCE_COLUMN + 20);
    assert_eq!(lines, vec![FIELD1_LINE]);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_goto_definition_targets_source_columns(#[case] has_prefix: bool) {
    let text = fixture_text(SAMPLE, has_prefix);
    let doc = listing_document(&text);
    let listing = single_listing(&text);
    let result = goto_definition(
        &listing,
        &doc,
        cursor(USING_LINE, SOURCE_COLUMN + 17, has_prefix),
        &ListingOptions::default(),
    );
    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.uri.as_ref(), URI);
    let start = SOURCE_COLUMN + usize::from(has_prefix);
    assert_eq!(
        target.span,
        Span::from_coords(CSECT_LINE, start, CSECT_LINE, start + 72)
    );
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_goto_definition_across_continuation(#[case] has_prefix: bool) {
    // "RES" ends the continued statement, "ULT" starts the next line
    let from_head = definition_lines(has_prefix, POINTERS_LINE, SOURCE_COLUMN + 69);
    assert_eq!(from_head, vec![RESULT_LINE]);
    let from_tail = definition_lines(has_prefix, CONTINUATION_LINE, SOURCE_COLUMN + 16);
    assert_eq!(from_tail, vec![RESULT_LINE]);
}

#[test]
fn test_isolate_continued_symbol() {
    let doc = listing_document(SAMPLE);
    let listing = single_listing(SAMPLE);
    let name = isolate_symbol(
        &listing,
        &doc,
        cursor(POINTERS_LINE, SOURCE_COLUMN + 68, false),
        &ListingOptions::default(),
    );
    assert_eq!(name.as_deref(), Some("RESULT"));
}

// =============================================================================
// GOTO DEFINITION - OTHER COLUMNS AND SECTIONS
// =============================================================================

#[test]
fn test_goto_definition_from_label_column() {
    // the label itself resolves to its own statement
    let lines = definition_lines(false, FIELD1_LINE, SOURCE_COLUMN + 2);
    assert_eq!(lines, vec![FIELD1_LINE]);
}

#[test]
fn test_goto_definition_from_external_symbol_dictionary() {
    let lines = definition_lines(false, ESD_SAMPLE_LINE, 2);
    assert_eq!(lines, vec![CSECT_LINE]);
}

#[test]
fn test_goto_definition_best_fit_statement() {
    // SCRATCHAREA is defined at statement 18, past the last printed statement
    let lines = definition_lines(false, SCRATCHAREA_XREF_LINE, 3);
    assert_eq!(lines, vec![END_LINE]);
}

#[rstest]
#[case(22, SOURCE_COLUMN + 16)] // register R14 is not a listing symbol
#[case(22, SOURCE_COLUMN + 12)] // blank
#[case(5, 4)] // option summary text
#[case(500, 0)] // past the document
fn test_goto_definition_nothing(#[case] line: usize, #[case] character: usize) {
    assert!(definition_lines(false, line, character).is_empty());
}

// =============================================================================
// GOTO DEFINITION - BOTH LAYOUTS
// =============================================================================

fn fixture_definitions(
    fixture: &LayoutFixture,
    has_prefix: bool,
    (line, character): (usize, usize),
) -> Vec<(usize, usize)> {
    let text = fixture_text(fixture.text, has_prefix);
    let doc = listing_document(&text);
    let listing = single_listing(&text);
    goto_definition(
        &listing,
        &doc,
        cursor(line, character, has_prefix),
        &ListingOptions::default(),
    )
    .targets
    .iter()
    .map(|target| (target.span.start.line, target.span.start.character))
    .collect()
}

#[rstest]
fn test_goto_definition_in_each_layout(
    #[values(&SHORT_FIXTURE, &LONG_FIXTURE)] fixture: &LayoutFixture,
    #[values(false, true)] has_prefix: bool,
) {
    let column = fixture.source_column + usize::from(has_prefix);
    assert_eq!(
        fixture_definitions(fixture, has_prefix, fixture.use_site),
        vec![(fixture.definition_line, column)]
    );
}

#[rstest]
fn test_continued_symbol_in_each_layout(
    #[values(&SHORT_FIXTURE, &LONG_FIXTURE)] fixture: &LayoutFixture,
    #[values(false, true)] has_prefix: bool,
) {
    let text = fixture_text(fixture.text, has_prefix);
    let doc = listing_document(&text);
    let listing = single_listing(&text);
    for (line, character) in [fixture.continued_head, fixture.continued_tail] {
        let name = isolate_symbol(
            &listing,
            &doc,
            cursor(line, character, has_prefix),
            &ListingOptions::default(),
        );
        assert_eq!(name.as_deref(), Some(fixture.continued_name), "line {line}");
    }

    let column = fixture.source_column + usize::from(has_prefix);
    assert_eq!(
        fixture_definitions(fixture, has_prefix, fixture.continued_tail),
        vec![(fixture.continued_definition, column)]
    );
}
