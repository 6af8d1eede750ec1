use thiserror::Error;

/// Input rejected before any call to the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("invalid record count: {0}")]
    InvalidCount(i64),
}

/// Tag of a [`GenerationError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    Transport,
    Service,
    Decode,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Service { .. } => ErrorKind::Service,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Diagnostic text carried by the failure, `None` when it carried nothing usable.
    pub fn detail(&self) -> Option<String> {
        let detail = match self {
            Self::MissingCredential => return Some(self.to_string()),
            Self::Transport(msg) | Self::Decode(msg) => msg.trim(),
            Self::Service { message, .. } => message.trim(),
        };

        if detail.is_empty() {
            None
        } else {
            Some(detail.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has unsupported value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_uses_service_message() {
        let err = GenerationError::Service { status: 400, message: "API key not valid.".into() };
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.detail().as_deref(), Some("API key not valid."));
    }

    #[test]
    fn test_blank_detail_is_none() {
        assert_eq!(GenerationError::Transport("  ".into()).detail(), None);
        assert_eq!(GenerationError::Service { status: 500, message: String::new() }.detail(), None);
    }

    #[test]
    fn test_missing_credential_has_detail() {
        let detail = GenerationError::MissingCredential.detail().unwrap();
        assert!(detail.contains("GEMINI_API_KEY"));
    }
}
