use crate::error::ValidationError;

/// A validated ask for `count` records shaped like `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    description: String,
    count: u32,
}

impl GenerationRequest {
    pub fn new(description: impl AsRef<str>, count: i64) -> Result<Self, ValidationError> {
        let description = description.as_ref().trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let count = u32::try_from(count)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(ValidationError::InvalidCount(count))?;

        Ok(Self {
            description: description.to_string(),
            count,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
