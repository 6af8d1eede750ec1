pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
mod model_types;
mod request;

pub use client::GenerationClient;
pub use config::GeminiConfig;
pub use error::{ConfigError, ErrorKind, GenerationError, ValidationError};
pub use gemini::GeminiClient;
pub use model_types::TextModel;
pub use request::GenerationRequest;
