//! Outbound port for the generative text service.

use async_trait::async_trait;
use serde_json::Value;

/// One structured-output generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub user_prompt: String,
    pub system_instruction: Option<String>,
    /// Structured-output schema the service must conform to.
    pub response_schema: Value,
}

impl GenerationRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            system_instruction: None,
            response_schema: Value::Null,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = schema;
        self
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// The service could not be reached, timed out, or refused the call.
    #[error("generation service unavailable: {0}")]
    Unavailable(String),
    /// The service answered, but the payload is not a usable document.
    #[error("generation response malformed: {0}")]
    Malformed(String),
}

/// Generative text service producing raw JSON text. Decoding into a typed
/// document is the caller's job; the port only moves bytes.
#[async_trait]
pub trait GenerativePort: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
