//! Lossless JSON export of a Concept Document.
//!
//! Export is how a user carries a generated concept out of the system, so the
//! contract is strict: parsing the exported text yields a document equal to
//! the one exported.

use serde_json::Error;

use crate::document::ConceptDocument;
use crate::migrate::migrate_to_current;

/// Fixed download filename for exported concepts.
pub const EXPORT_FILENAME: &str = "game-concept.json";
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// Serialize a document as human-readable pretty JSON.
pub fn to_pretty_json(doc: &ConceptDocument) -> Result<String, Error> {
    serde_json::to_string_pretty(doc)
}

/// Parse a document from JSON text, lifting older shapes first.
pub fn from_json(raw: &str) -> Result<ConceptDocument, Error> {
    let value = serde_json::from_str(raw.trim())?;
    serde_json::from_value(migrate_to_current(value))
}
