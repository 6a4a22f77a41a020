pub mod client;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod memo;
pub mod prompt;

pub use client::{Endpoint, HttpTransport, Transport};
pub use credential::Credential;
pub use envelope::extract_summary;
pub use error::{ErrorKind, MemoError};
pub use memo::{Clock, FixedClock, SystemClock, format_memo, format_timestamp};
pub use prompt::build_prompt;

use tracing::info;

/// Summarization client: prompt assembly, one API call, text extraction.
pub struct Summarizer {
    transport: Box<dyn Transport>,
    endpoint: Endpoint,
    credential: Credential,
    instruction: String,
}

impl Summarizer {
    pub fn new(transport: Box<dyn Transport>, endpoint: Endpoint, credential: Credential) -> Self {
        Self {
            transport,
            endpoint,
            credential,
            instruction: prompt::INSTRUCTION.to_string(),
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Summarize `text`, or fail with a validation or network error.
    ///
    /// Blank input is rejected before any request is made. A response without
    /// usable text still succeeds with a placeholder summary.
    pub fn summarize(&self, text: &str) -> Result<String, MemoError> {
        if text.trim().is_empty() {
            return Err(MemoError::validation("Please enter some text to summarize."));
        }

        let prompt = build_prompt(&self.instruction, text);
        let raw = client::submit(self.transport.as_ref(), &self.endpoint, &prompt, &self.credential)?;
        let summary = extract_summary(&raw);

        info!(summary_chars = summary.chars().count(), "Summary received");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::client::tests::FakeTransport;
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    fn summarizer_with(transport: &Rc<FakeTransport>) -> Summarizer {
        Summarizer::new(Box::new(transport.clone()), Endpoint::default(), Credential::new("key"))
    }

    #[test]
    fn test_blank_input_makes_no_request() {
        for input in ["", "   ", "\n\t \n"] {
            let transport = Rc::new(FakeTransport::replying(Ok(json!({}))));
            let summarizer = summarizer_with(&transport);

            let err = summarizer.summarize(input).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(transport.call_count(), 0);
        }
    }

    #[test]
    fn test_summarize_extracts_text() {
        let transport = Rc::new(FakeTransport::replying(Ok(
            json!({"candidates": [{"content": {"parts": [{"text": "🔺 Prices rose."}]}}]}),
        )));
        let summarizer = summarizer_with(&transport);

        assert_eq!(summarizer.summarize("A company raised prices.").unwrap(), "🔺 Prices rose.");
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_malformed_response_still_succeeds() {
        let transport = Rc::new(FakeTransport::replying(Ok(json!({"candidates": []}))));
        let summarizer = summarizer_with(&transport);

        let summary = summarizer.summarize("text").unwrap();
        assert!(summary.contains("failure"));
    }

    #[test]
    fn test_network_error_is_returned() {
        let transport = Rc::new(FakeTransport::replying(Err(MemoError::network("timed out"))));
        let summarizer = summarizer_with(&transport);

        let err = summarizer.summarize("text").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_default_instruction() {
        let transport = Rc::new(FakeTransport::replying(Ok(json!({}))));
        assert_eq!(summarizer_with(&transport).instruction(), prompt::INSTRUCTION);
    }

    #[test]
    fn test_custom_instruction_reaches_request() {
        let transport = Rc::new(FakeTransport::replying(Ok(json!({}))));
        let summarizer = summarizer_with(&transport).with_instruction("Be brief.");

        summarizer.summarize("body").unwrap();

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2["contents"][0]["parts"][0]["text"], "Be brief.\n\nbody");
    }
}
