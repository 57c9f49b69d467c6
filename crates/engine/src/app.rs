//! Application composition root.

use std::sync::Arc;

use crate::generation::fallback::FallbackProvider;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::ports::GenerativePort;
use crate::infrastructure::settings::Settings;
use crate::use_cases::FetchConcept;

/// Wired application. A missing credential is not an error, it just means
/// every fetch serves the bundled document; construction only fails if the
/// HTTP client cannot be built at all.
pub struct App {
    pub fetch_concept: FetchConcept,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let api_key = settings.api_key.clone().unwrap_or_default();
        let generator: Arc<dyn GenerativePort> = Arc::new(GeminiClient::with_timeout(
            &settings.base_url,
            &settings.model,
            &api_key,
            settings.generation_timeout_secs,
        )?);

        Ok(Self {
            fetch_concept: FetchConcept::new(
                generator,
                FallbackProvider::new(),
                settings.api_key.is_some(),
            ),
        })
    }
}
