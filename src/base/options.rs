//! Host configuration

use smol_str::SmolStr;

use super::constants::{CONTINUATION_INDENT, LANGUAGE_ID, LITERAL_PREFIX};

/// Options controlling which documents are indexed and how queries read them
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Only documents registered under this language id are indexed
    pub language_id: SmolStr,
    /// Leading blanks on a continued source line
    pub continuation_indent: usize,
    /// Symbols starting with this character are literals and stay out of the outline
    pub literal_prefix: char,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            language_id: SmolStr::new_static(LANGUAGE_ID),
            continuation_indent: CONTINUATION_INDENT,
            literal_prefix: LITERAL_PREFIX,
        }
    }
}

impl ListingOptions {
    /// Whether a document with this language id should be indexed
    pub fn accepts(&self, language_id: &str) -> bool {
        self.language_id.as_str() == language_id
    }

    /// Whether a symbol name denotes a literal pool entry
    pub fn is_literal(&self, name: &str) -> bool {
        name.starts_with(self.literal_prefix)
    }
}
