use crate::clipboard::MemoSink;
use crate::config::Config;
use crate::notify::Notifier;
use crate::summary::{
    Clock, Credential, ErrorKind, HttpTransport, MemoError, Summarizer, format_memo, format_timestamp,
};
use std::io::{self, Read};
use std::path::Path;
use tracing::{error, info, warn};

/// Load the credential and wire the HTTP client. Called once at startup.
pub fn build_summarizer(config: &Config, key_path: &Path) -> Result<Summarizer, MemoError> {
    let credential = Credential::load(key_path)?;
    info!(key_file = %key_path.display(), model = %config.model, "API key loaded");

    let summarizer = Summarizer::new(Box::new(HttpTransport::new()?), config.endpoint(), credential);
    Ok(match &config.instruction {
        Some(instruction) => summarizer.with_instruction(instruction.clone()),
        None => summarizer,
    })
}

/// Result of one user-triggered summarize action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Delivered { memo: String },
    Failed { kind: ErrorKind, memo: Option<String> },
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered { .. })
    }

    /// The memo, if one was built, whether or not delivery succeeded.
    pub fn memo(&self) -> Option<&str> {
        match self {
            Outcome::Delivered { memo } => Some(memo),
            Outcome::Failed { memo, .. } => memo.as_deref(),
        }
    }
}

/// Run the whole action: summarize, format, deliver, notify.
///
/// Every failure ends up as a notification; nothing here aborts the process.
pub fn process_text(
    summarizer: &Summarizer,
    text: &str,
    clock: &dyn Clock,
    sink: &mut dyn MemoSink,
    notifier: &mut dyn Notifier,
) -> Outcome {
    let summary = match summarizer.summarize(text) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(kind = ?e.kind(), error = %e, "Summarize action failed");
            notifier.report_error(e.kind(), &e.to_string());
            return Outcome::Failed {
                kind: e.kind(),
                memo: None,
            };
        }
    };

    let memo = format_memo(&summary, &format_timestamp(clock.now()));

    match sink.deliver(&memo) {
        Ok(()) => {
            info!(destination = sink.destination(), "Memo delivered");
            notifier.report_success(&format!("The summary was copied to the {}.", sink.destination()));
            Outcome::Delivered { memo }
        }
        Err(e) => {
            error!(error = %e, "Memo delivery failed");
            notifier.report_error(e.kind(), &e.to_string());
            Outcome::Failed {
                kind: e.kind(),
                memo: Some(memo),
            }
        }
    }
}

/// Resolve the one-shot text source: the argument itself, `-` for `stdin`, or `edit` when omitted.
///
/// A read failure is reported as an input error and yields `None`. A closed editor yields empty text,
/// which the summarizer then rejects.
pub fn read_text(
    text: Option<String>,
    stdin: &mut dyn Read,
    edit: impl FnOnce() -> io::Result<Option<String>>,
    notifier: &mut dyn Notifier,
) -> Option<String> {
    let result = match text {
        Some(text) if text == "-" => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map(|_| buffer)
                .map_err(|e| format!("Failed to read text from stdin: {e}"))
        }
        Some(text) => Ok(text),
        None => edit()
            .map(Option::unwrap_or_default)
            .map_err(|e| format!("Failed to open editor: {e}")),
    };

    match result {
        Ok(text) => Some(text),
        Err(message) => {
            error!(error = %message, "Failed to read input");
            notifier.report_error(ErrorKind::Validation, &message);
            None
        }
    }
}
