//! Document outline and offset view tests.

use rstest::rstest;

use hlasm_listing::ide::{OutlineKind, OutlineNode, document_symbols, offset_symbols};
use hlasm_listing::{ListingOptions, Span};

use crate::helpers::listing_fixtures::*;
use crate::helpers::listing_helpers::*;

fn names(nodes: &[OutlineNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

fn outline(text: &str) -> Vec<OutlineNode> {
    let listings = hlasm_listing::scan_document(&listing_document(text));
    document_symbols(&listings, &ListingOptions::default())
}

// =============================================================================
// OUTLINE
// =============================================================================

#[rstest]
#[case(false)]
#[case(true)]
fn test_outline_sections(#[case] has_prefix: bool) {
    let roots = outline(&fixture_text(SAMPLE, has_prefix));
    assert_eq!(roots.len(), 1);
    let root = &roots[0];
    assert_eq!(root.name, "Listing");
    assert_eq!(root.kind, OutlineKind::Module);
    assert_eq!(root.span, Span::lines(0, SAMPLE_LINES));
    assert_eq!(
        names(&root.children),
        vec![
            "High Level Assembler Option Summary",
            "External Symbol Dictionary",
            "Object Code",
            "Relocation Dictionary",
            "Ordinary Symbol and Literal Cross Reference",
            "Macro and Copy Code Source Summary",
            "Dsect Cross Reference",
            "Using Map",
            "General Purpose Register Cross Reference",
            "Diagnostic Cross Reference and Assembler Summary",
        ]
    );
}

#[test]
fn test_outline_section_ranges() {
    let roots = outline(SAMPLE);
    let spans: Vec<(usize, usize)> = roots[0]
        .children
        .iter()
        .map(|node| (node.span.start.line, node.span.end.line))
        .collect();
    assert_eq!(
        spans,
        vec![
            (0, 11),
            (11, 18),
            (18, 50),
            (50, 54),
            (54, 65),
            (65, 67),
            (67, 72),
            (72, 76),
            (76, 79),
            (79, 85),
        ]
    );
    assert!(
        roots[0]
            .children
            .iter()
            .all(|node| node.kind == OutlineKind::Namespace)
    );
}

#[test]
fn test_outline_object_code_blocks() {
    let roots = outline(SAMPLE);
    let code = &roots[0].children[2];
    assert_eq!(code.name, "Object Code");

    // the two "Sample program" pages before the dsect merge into one block
    let blocks: Vec<(&str, usize, usize)> = code
        .children
        .iter()
        .map(|node| (node.name.as_str(), node.span.start.line, node.span.end.line))
        .collect();
    assert_eq!(
        blocks,
        vec![
            ("Sample program", 18, 38),
            ("Work area mapping", 38, 44),
            ("Sample program", 44, 50),
        ]
    );
    let kinds: Vec<OutlineKind> = code.children.iter().map(|node| node.kind).collect();
    assert_eq!(kinds, vec![OutlineKind::Package; 3]);
}

#[test]
fn test_outline_symbols_inside_blocks() {
    let roots = outline(SAMPLE);
    let blocks = &roots[0].children[2].children;

    assert_eq!(
        names(&blocks[0].children),
        vec!["SAMPLE", "FIELD1", "RESULT", "POINTERLIST"]
    );
    assert_eq!(
        names(&blocks[1].children),
        vec!["WORKAREA", "WORKF1", "WORKF2"]
    );
    // SCRATCHAREA was never printed itself
    assert!(blocks[2].children.is_empty());

    let field = &blocks[0].children[1];
    assert_eq!(field.kind, OutlineKind::Object);
    assert_eq!(field.span, Span::lines(FIELD1_LINE, FIELD1_LINE));
    assert!(field.children.is_empty());
}

#[test]
fn test_outline_numbers_several_listings() {
    let text = format!("{SAMPLE}{SAMPLE}");
    let roots = outline(&text);
    assert_eq!(names(&roots), vec!["Listing 1", "Listing 2"]);
    assert_eq!(roots[1].span, Span::lines(SAMPLE_LINES, 2 * SAMPLE_LINES));
    let code = &roots[1].children[2];
    assert_eq!(
        code.span,
        Span::lines(SAMPLE_LINES + 18, SAMPLE_LINES + 50)
    );
}

#[test]
fn test_outline_of_plain_text() {
    assert!(outline("not a listing\n").is_empty());
}

#[test]
fn test_outline_kind_lsp_numbers() {
    assert_eq!(OutlineKind::Module.to_lsp(), 2);
    assert_eq!(OutlineKind::Namespace.to_lsp(), 3);
    assert_eq!(OutlineKind::Package.to_lsp(), 4);
    assert_eq!(OutlineKind::Object.to_lsp(), 19);
}

// =============================================================================
// OFFSET VIEW
// =============================================================================

#[test]
fn test_offsets_skip_dsect_statements() {
    let listings = hlasm_listing::scan_document(&listing_document(SAMPLE));
    let roots = offset_symbols(&listings);
    let lines: Vec<usize> = roots[0]
        .children
        .iter()
        .map(|node| node.span.start.line)
        .collect();
    let dsect_lines = WORKAREA_LINE..=43;
    assert!(!lines.iter().any(|line| dsect_lines.contains(line)));
    // USING and END print no location
    assert!(!lines.contains(&USING_LINE));
    assert!(!lines.contains(&END_LINE));
}

#[rstest]
fn test_offsets_in_each_layout(
    #[values(&SHORT_FIXTURE, &LONG_FIXTURE)] fixture: &LayoutFixture,
    #[values(false, true)] has_prefix: bool,
) {
    let text = fixture_text(fixture.text, has_prefix);
    let listings = hlasm_listing::scan_document(&listing_document(&text));
    let roots = offset_symbols(&listings);
    let offsets: Vec<(usize, &str)> = roots[0]
        .children
        .iter()
        .map(|node| (node.span.start.line, node.name.as_str()))
        .collect();
    assert_eq!(offsets, fixture.offsets.to_vec());
}
