use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Prefix of the placeholder returned when the response has no usable text.
pub const FAILURE_MARKER: &str = "Summary failure";

/// Response body of `generateContent`. Every level may be absent.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("response does not match the envelope shape: {0}")]
    Shape(String),
    #[error("response has no candidates")]
    MissingCandidates,
    #[error("candidates list is empty")]
    EmptyCandidates,
    #[error("first candidate has no content")]
    MissingContent,
    #[error("content has no parts")]
    MissingParts,
    #[error("parts list is empty")]
    EmptyParts,
    #[error("first part has no text")]
    MissingText,
}

impl Envelope {
    pub fn from_value(raw: &Value) -> Result<Self, ExtractionError> {
        Envelope::deserialize(raw).map_err(|e| ExtractionError::Shape(e.to_string()))
    }

    /// `candidates[0].content.parts[0].text`
    pub fn first_text(self) -> Result<String, ExtractionError> {
        let Some(candidates) = self.candidates else {
            return Err(ExtractionError::MissingCandidates);
        };
        let Some(candidate) = candidates.into_iter().next() else {
            return Err(ExtractionError::EmptyCandidates);
        };
        let Some(content) = candidate.content else {
            return Err(ExtractionError::MissingContent);
        };
        let Some(parts) = content.parts else {
            return Err(ExtractionError::MissingParts);
        };
        let Some(part) = parts.into_iter().next() else {
            return Err(ExtractionError::EmptyParts);
        };
        part.text.ok_or(ExtractionError::MissingText)
    }
}

/// Pull the summary text out of a raw response.
///
/// Never fails: a malformed response becomes a placeholder carrying a dump of
/// the raw JSON so the user still gets a memo to look at.
pub fn extract_summary(raw: &Value) -> String {
    match Envelope::from_value(raw).and_then(Envelope::first_text) {
        Ok(text) => text,
        Err(reason) => {
            warn!(reason = %reason, "Could not extract summary from response");
            format!("{FAILURE_MARKER}: {raw}")
        }
    }
}
