//! The bundled known-good Concept Document.
//!
//! Compiled into the binary so the engine can always serve *something*; the
//! only unrecoverable state is this document itself failing to parse, which
//! callers surface as an error rather than masking.

use conceptforge_domain::{migrate_to_current, ConceptDocument};

/// Raw bundled document, canonical shape.
pub const BUNDLED_CONCEPT: &str = include_str!("../../data/game_concept.json");

#[derive(Debug, Clone, thiserror::Error)]
pub enum FallbackError {
    #[error("bundled concept document is corrupted: {0}")]
    Corrupted(String),
}

/// Serves the bundled document. Parsed per call rather than cached: the
/// document is immutable either way, and parsing keeps the corrupted case
/// an ordinary error instead of a startup panic.
#[derive(Debug, Clone)]
pub struct FallbackProvider {
    raw: &'static str,
}

impl FallbackProvider {
    pub fn new() -> Self {
        Self {
            raw: BUNDLED_CONCEPT,
        }
    }

    /// Build a provider over different raw text (for testing).
    pub fn from_raw(raw: &'static str) -> Self {
        Self { raw }
    }

    pub fn document(&self) -> Result<ConceptDocument, FallbackError> {
        let value = serde_json::from_str(self.raw.trim())
            .map_err(|e| FallbackError::Corrupted(e.to_string()))?;
        serde_json::from_value(migrate_to_current(value))
            .map_err(|e| FallbackError::Corrupted(e.to_string()))
    }
}

impl Default for FallbackProvider {
    fn default() -> Self {
        Self::new()
    }
}
