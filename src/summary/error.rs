use std::fmt;
use thiserror::Error;

/// Category of a failure as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Network,
    Extraction,
    Clipboard,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "Configuration error"),
            ErrorKind::Validation => write!(f, "Input error"),
            ErrorKind::Network => write!(f, "Network error"),
            ErrorKind::Extraction => write!(f, "Extraction error"),
            ErrorKind::Clipboard => write!(f, "Clipboard error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MemoError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Clipboard(String),
}

impl MemoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoError::Configuration(_) => ErrorKind::Configuration,
            MemoError::Validation(_) => ErrorKind::Validation,
            MemoError::Network(_) => ErrorKind::Network,
            MemoError::Clipboard(_) => ErrorKind::Clipboard,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        MemoError::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        MemoError::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        MemoError::Network(message.into())
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        MemoError::Clipboard(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(MemoError::configuration("x").kind(), ErrorKind::Configuration);
        assert_eq!(MemoError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(MemoError::network("x").kind(), ErrorKind::Network);
        assert_eq!(MemoError::clipboard("x").kind(), ErrorKind::Clipboard);
    }

    #[test]
    fn test_display_is_message() {
        let err = MemoError::network("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(ErrorKind::Network.to_string(), "Network error");
    }
}
