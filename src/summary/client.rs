use super::credential::Credential;
use super::error::MemoError;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sends one JSON POST and decodes the JSON reply.
pub trait Transport {
    fn post_json(&self, url: &str, query: &[(&str, &str)], body: &Value) -> Result<Value, MemoError>;
}

/// Blocking HTTPS transport with reqwest's default timeouts.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, MemoError> {
        let client = Client::builder()
            .build()
            .map_err(|e| MemoError::configuration(format!("Failed to initialise HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, query: &[(&str, &str)], body: &Value) -> Result<Value, MemoError> {
        // The key travels in the query string, so strip URLs from transport errors.
        let response = self
            .client
            .post(url)
            .query(query)
            .json(body)
            .send()
            .map_err(|e| MemoError::network(format!("API request failed: {}", e.without_url())))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Gemini API responded");
        } else {
            warn!(status = %status, "Gemini API returned an error status");
        }

        response
            .json::<Value>()
            .map_err(|e| MemoError::network(format!("API response was not valid JSON ({status}): {}", e.without_url())))
    }
}

/// Location of the `generateContent` method for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub api_base: String,
    pub model: String,
}

impl Endpoint {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}:generateContent", self.api_base.trim_end_matches('/'), self.model)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_MODEL)
    }
}

pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Make exactly one `generateContent` call. No retry.
pub fn submit(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    prompt: &str,
    credential: &Credential,
) -> Result<Value, MemoError> {
    let body = build_request_body(prompt);
    info!(model = %endpoint.model, prompt_chars = prompt.chars().count(), "Submitting summary request");
    transport.post_json(&endpoint.url(), &[("key", credential.expose())], &body)
}
