use std::fmt;
use std::str::FromStr;

/// Gemini text models that accept a zero thinking budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextModel {
    #[default]
    Flash,
    FlashLite,
}

impl TextModel {
    /// Model name for display in UI
    pub fn name(&self) -> &str {
        match self {
            Self::Flash => "Gemini 2.5 Flash",
            Self::FlashLite => "Gemini 2.5 Flash-Lite",
        }
    }

    /// Model ID for API communication
    pub fn id(&self) -> &str {
        match self {
            Self::Flash => "gemini-2.5-flash",
            Self::FlashLite => "gemini-2.5-flash-lite",
        }
    }

    pub fn all() -> [TextModel; 2] {
        [Self::Flash, Self::FlashLite]
    }
}

impl FromStr for TextModel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|m| m.id() == s.trim())
            .ok_or(())
    }
}

impl fmt::Display for TextModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ids() {
        assert_eq!(TextModel::Flash.id(), "gemini-2.5-flash");
        assert_eq!(TextModel::default(), TextModel::Flash);
    }

    #[test]
    fn test_parse_model() {
        assert_eq!("gemini-2.5-flash-lite".parse(), Ok(TextModel::FlashLite));
        assert!("gemini-1.0-pro".parse::<TextModel>().is_err());
    }
}
