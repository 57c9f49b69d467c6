//! The one use case of the engine: produce a Concept Document, live if
//! possible, bundled otherwise.
//!
//! The contract is that this almost always succeeds: any live-path failure
//! degrades to the bundled document. The only error is the bundled document
//! itself being unusable, which means the build is broken.

use std::sync::Arc;

use conceptforge_domain::{validate, ConceptDocument};

use crate::generation::decode::decode_document;
use crate::generation::fallback::FallbackProvider;
use crate::generation::prompt::{assemble_user_prompt, SYSTEM_INSTRUCTION};
use crate::generation::schema::response_schema;
use crate::infrastructure::ports::{GenerationRequest, GenerativePort};

/// Where a fetched document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct FetchedConcept {
    pub document: ConceptDocument,
    pub source: ConceptSource,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Both the live path and the bundled document failed.
    #[error("no concept document available: {0}")]
    NoDocument(String),
}

pub struct FetchConcept {
    generator: Arc<dyn GenerativePort>,
    fallback: FallbackProvider,
    /// Without a credential the live path is never attempted.
    api_key_configured: bool,
}

impl FetchConcept {
    pub fn new(
        generator: Arc<dyn GenerativePort>,
        fallback: FallbackProvider,
        api_key_configured: bool,
    ) -> Self {
        Self {
            generator,
            fallback,
            api_key_configured,
        }
    }

    /// Fetch a document. One live attempt at most; every live failure is
    /// logged and absorbed by the bundled document.
    pub async fn execute(&self) -> Result<FetchedConcept, FetchError> {
        if !self.api_key_configured {
            tracing::info!("no API key configured, serving bundled concept");
            return self.bundled();
        }

        let request = GenerationRequest::new(assemble_user_prompt())
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_response_schema(response_schema());

        let raw = match self.generator.generate(request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "generation failed, serving bundled concept");
                return self.bundled();
            }
        };

        match decode_document(&raw) {
            Ok(document) => {
                log_defects("generated", &document);
                Ok(FetchedConcept {
                    document,
                    source: ConceptSource::Live,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "generated concept unusable, serving bundled concept");
                self.bundled()
            }
        }
    }

    fn bundled(&self) -> Result<FetchedConcept, FetchError> {
        match self.fallback.document() {
            Ok(document) => {
                log_defects("bundled", &document);
                Ok(FetchedConcept {
                    document,
                    source: ConceptSource::Fallback,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "bundled concept unusable");
                Err(FetchError::NoDocument(e.to_string()))
            }
        }
    }
}

fn log_defects(origin: &str, document: &ConceptDocument) {
    for defect in validate::audit(document) {
        tracing::warn!(origin, %defect, "data quality defect in concept document");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::GenerationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Port that must never be called.
    struct PanickingGenerator;

    #[async_trait]
    impl GenerativePort for PanickingGenerator {
        async fn generate(&self, _: GenerationRequest) -> Result<String, GenerationError> {
            panic!("generator invoked without a configured API key");
        }
    }

    /// Port returning a fixed result, counting calls.
    struct FixedGenerator {
        result: Result<String, GenerationError>,
        calls: AtomicU32,
    }

    impl FixedGenerator {
        fn new(result: Result<String, GenerationError>) -> Self {
            Self {
                result,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerativePort for FixedGenerator {
        async fn generate(&self, _: GenerationRequest) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn missing_api_key_skips_the_live_path_entirely() {
        let fetch = FetchConcept::new(
            Arc::new(PanickingGenerator),
            FallbackProvider::new(),
            false,
        );
        let fetched = fetch.execute().await.expect("bundled document");
        assert_eq!(fetched.source, ConceptSource::Fallback);
        assert_eq!(fetched.document.title, "Peshmerga: The Golden Square");
        assert!(!fetched.document.missions.is_empty());
    }

    #[tokio::test]
    async fn unavailable_service_degrades_to_bundled() {
        let generator = Arc::new(FixedGenerator::new(Err(GenerationError::Unavailable(
            "connection refused".into(),
        ))));
        let fetch = FetchConcept::new(generator.clone(), FallbackProvider::new(), true);
        let fetched = fetch.execute().await.expect("bundled document");
        assert_eq!(fetched.source, ConceptSource::Fallback);
        assert_eq!(fetched.document.title, "Peshmerga: The Golden Square");
        // Single attempt, no retry.
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_json_response_degrades_to_bundled() {
        let generator = Arc::new(FixedGenerator::new(Ok("not json at all".into())));
        let fetch = FetchConcept::new(generator, FallbackProvider::new(), true);
        let fetched = fetch.execute().await.expect("bundled document");
        assert_eq!(fetched.source, ConceptSource::Fallback);
    }

    #[tokio::test]
    async fn json_missing_required_fields_degrades_to_bundled() {
        let generator = Arc::new(FixedGenerator::new(Ok("{}".into())));
        let fetch = FetchConcept::new(generator, FallbackProvider::new(), true);
        let fetched = fetch.execute().await.expect("bundled document");
        assert_eq!(fetched.source, ConceptSource::Fallback);
    }

    #[tokio::test]
    async fn valid_response_is_served_live() {
        let raw = crate::generation::fallback::BUNDLED_CONCEPT.to_string();
        let generator = Arc::new(FixedGenerator::new(Ok(raw)));
        let fetch = FetchConcept::new(generator, FallbackProvider::new(), true);
        let fetched = fetch.execute().await.expect("live document");
        assert_eq!(fetched.source, ConceptSource::Live);
    }

    #[tokio::test]
    async fn broken_bundle_and_broken_service_is_a_real_error() {
        let generator = Arc::new(FixedGenerator::new(Err(GenerationError::Unavailable(
            "connection refused".into(),
        ))));
        let fetch = FetchConcept::new(
            generator,
            FallbackProvider::from_raw("corrupted bytes"),
            true,
        );
        let result = fetch.execute().await;
        assert!(matches!(result, Err(FetchError::NoDocument(_))));
    }
}
