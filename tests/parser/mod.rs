//! Parser layer tests
//!
//! Tests for the line grammar against a complete listing:
//! - Listing start detection
//! - Boundary classification
//! - Typed records for each report section
