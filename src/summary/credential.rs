use super::error::MemoError;
use std::fmt;
use std::fs;
use std::path::Path;

pub const KEY_FILE_NAME: &str = "GEMINI_API_KEY.txt";

/// API key for the generation endpoint. Read once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the key file as UTF-8 and trim surrounding whitespace.
    ///
    /// A missing, unreadable or blank file is a configuration error naming the path tried.
    pub fn load(path: &Path) -> Result<Self, MemoError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MemoError::configuration(format!(
                "Could not read the API key file ({KEY_FILE_NAME}): {e}\nPath: {}",
                path.display()
            ))
        })?;

        let token = content.trim();
        if token.is_empty() {
            return Err(MemoError::configuration(format!(
                "The API key file ({KEY_FILE_NAME}) is empty.\nPath: {}",
                path.display()
            )));
        }

        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}
