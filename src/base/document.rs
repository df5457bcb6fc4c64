//! Line-addressable document text.

use std::sync::Arc;

/// Read access to a versioned text document holding listing output.
///
/// The version is re-read after a parse finishes; implementations backed by a live
/// editor buffer may report a newer version at that point.
pub trait ListingDocument {
    /// Document identity (cache key).
    fn uri(&self) -> &str;
    fn language_id(&self) -> &str;
    /// Monotonically increasing content version.
    fn version(&self) -> i32;
    fn line_count(&self) -> usize;
    /// Text of line `index` without its line terminator; empty past the end.
    fn line(&self, index: usize) -> &str;
}

/// An in-memory document snapshot.
#[derive(Debug, Clone)]
pub struct TextDocument {
    uri: Arc<str>,
    language_id: Arc<str>,
    version: i32,
    lines: Vec<String>,
}

impl TextDocument {
    pub fn new(
        uri: impl Into<Arc<str>>,
        language_id: impl Into<Arc<str>>,
        version: i32,
        text: &str,
    ) -> Self {
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            version,
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Replace the whole content, bumping the version.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_owned).collect();
        self.version += 1;
    }
}

impl ListingDocument for TextDocument {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }
}
