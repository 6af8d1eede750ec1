use async_trait::async_trait;
use crate::error::GenerationError;
use crate::request::GenerationRequest;

/// Something that turns a [`GenerationRequest`] into model output text.
///
/// The returned text is whatever the service produced; callers must not
/// assume it is valid JSON.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
