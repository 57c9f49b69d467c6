//! Decode raw generation output into a typed Concept Document.

use conceptforge_domain::{migrate_to_current, ConceptDocument};

use crate::infrastructure::ports::GenerationError;

/// Trim, parse, lift to the canonical shape, and decode. Any failure is
/// [`GenerationError::Malformed`]; the caller decides whether to fall back.
pub fn decode_document(raw: &str) -> Result<ConceptDocument, GenerationError> {
    let value = serde_json::from_str(raw.trim())
        .map_err(|e| GenerationError::Malformed(format!("response is not valid JSON: {e}")))?;
    serde_json::from_value(migrate_to_current(value)).map_err(|e| {
        GenerationError::Malformed(format!("response is missing required content: {e}"))
    })
}
