use thiserror::Error;

/// Errors produced by the fallible snippets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    #[error("Negative number not allowed")]
    NegativeNumber,

    #[error("unknown day: {0}")]
    UnknownDay(String),
}

impl SnippetError {
    pub fn unknown_day(name: impl Into<String>) -> Self {
        Self::UnknownDay(name.into())
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_number_message() {
        assert_eq!(
            SnippetError::NegativeNumber.to_string(),
            "Negative number not allowed"
        );
    }

    #[test]
    fn test_unknown_day_message() {
        let err = SnippetError::unknown_day("Funday");
        assert_eq!(err, SnippetError::UnknownDay("Funday".to_string()));
        assert_eq!(err.to_string(), "unknown day: Funday");
    }
}
