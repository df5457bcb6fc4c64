//! Symbol isolation under the cursor.
//!
//! Inside the source columns of an object code block the token boundaries are
//! column exact: the source statement occupies a fixed window and a non-blank
//! character in the sentinel column right after it marks the statement as
//! continued on the next line, indented by [`ListingOptions::continuation_indent`]
//! blanks. A token cut by such a continuation is joined across one line in
//! either direction. Everywhere else a plain scan over symbol characters is used.

use smol_str::SmolStr;

use crate::base::constants::is_symbol_char;
use crate::base::{ListingDocument, ListingOptions, Position};
use crate::hir::{Listing, Symbol};

fn symbol_at_byte(text: &str, index: usize) -> bool {
    text.as_bytes()
        .get(index)
        .is_some_and(|&byte| is_symbol_char(char::from(byte)))
}

fn is_continued(text: &str, sentinel: usize) -> bool {
    text.as_bytes()
        .get(sentinel)
        .is_some_and(|&byte| byte != b' ')
}

/// `text[start..end]`, clamped to the line.
fn clamped(text: &str, start: usize, end: usize) -> &str {
    let end = end.min(text.len());
    text.get(start.min(end)..end).unwrap_or("")
}

fn finish(name: String) -> Option<SmolStr> {
    (!name.is_empty()).then(|| SmolStr::from(name.to_ascii_uppercase()))
}

/// Scan left and right from the cursor over symbol characters.
fn isolate_simple<D: ListingDocument + ?Sized>(
    doc: &D,
    position: Position,
    has_prefix: bool,
) -> Option<SmolStr> {
    if position.line >= doc.line_count() {
        return None;
    }
    let text = doc.line(position.line);
    let floor = usize::from(has_prefix);

    let mut start = position.character;
    let mut end = position.character;
    while start > floor && symbol_at_byte(text, start - 1) {
        start -= 1;
    }
    while end < text.len() && symbol_at_byte(text, end) {
        end += 1;
    }
    finish(clamped(text, start, end).to_owned())
}

/// The upper-cased symbol name under `position`, if any.
pub fn isolate_symbol<D: ListingDocument + ?Sized>(
    listing: &Listing,
    doc: &D,
    position: Position,
    options: &ListingOptions,
) -> Option<SmolStr> {
    let columns = listing.code_columns();
    let block = listing.code_section_at(position.line);
    let (Some((left, right)), Some(block)) = (columns, block) else {
        return isolate_simple(doc, position, listing.has_prefix);
    };
    if position.character < left || position.character >= right {
        return isolate_simple(doc, position, listing.has_prefix);
    }

    let sections = &listing.code_sections;
    let section = &sections[block];
    let prev_line = if section.code_start < position.line {
        Some(position.line - 1)
    } else if block == 0 {
        None
    } else {
        sections[block - 1].end.checked_sub(1)
    };
    let next_line = if position.line + 1 < section.end {
        Some(position.line + 1)
    } else {
        sections.get(block + 1).map(|next| next.code_start)
    };

    let prev_text = prev_line.map_or("", |line| doc.line(line));
    let this_text = doc.line(position.line);
    let next_text = next_line.map_or("", |line| doc.line(line));

    let prev_continued = prev_line.is_some() && is_continued(prev_text, right);
    let this_continued = is_continued(this_text, right);

    let indent = options.continuation_indent;
    let floor = left + if prev_continued { indent } else { 0 };

    let mut start = position.character;
    let mut end = position.character;
    while start > floor && symbol_at_byte(this_text, start - 1) {
        start -= 1;
    }
    while end < right && symbol_at_byte(this_text, end) {
        end += 1;
    }

    let mut name = String::new();
    if prev_continued && start == floor {
        let mut head = right;
        while head > floor && symbol_at_byte(prev_text, head - 1) {
            head -= 1;
        }
        name.push_str(clamped(prev_text, head, right));
    }
    name.push_str(clamped(this_text, start, end));
    if this_continued && end == right {
        let mut tail = left + indent;
        while tail < right && symbol_at_byte(next_text, tail) {
            tail += 1;
        }
        name.push_str(clamped(next_text, left + indent, tail));
    }
    finish(name)
}

/// The listing symbol under `position`, if the name is known to the listing.
pub(crate) fn symbol_at<'l, D: ListingDocument + ?Sized>(
    listing: &'l Listing,
    doc: &D,
    position: Position,
    options: &ListingOptions,
) -> Option<&'l Symbol> {
    let name = isolate_symbol(listing, doc, position, options)?;
    listing.symbols.get(&name)
}
