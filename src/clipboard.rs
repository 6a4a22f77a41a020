use crate::summary::MemoError;
use arboard::Clipboard;
use std::io::Write;
use tracing::info;

/// Where a finished memo is delivered.
pub trait MemoSink {
    /// Human-readable destination, used in the success notification.
    fn destination(&self) -> &str;
    fn deliver(&mut self, memo: &str) -> Result<(), MemoError>;
}

/// System clipboard sink.
///
/// On Linux, clipboard contents persist only while the application is running,
/// so the handle is kept open for the lifetime of the sink. A process that is
/// about to exit must use [`ClipboardSink::until_pasted`] instead.
pub struct ClipboardSink {
    clipboard: Option<Clipboard>,
    wait_for_paste: bool,
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self {
            clipboard: None,
            wait_for_paste: false,
        }
    }

    /// On Linux, `deliver` blocks until another application takes the
    /// clipboard contents. Elsewhere the OS keeps them after exit.
    pub fn until_pasted() -> Self {
        Self {
            clipboard: None,
            wait_for_paste: true,
        }
    }

    pub fn waits_for_paste(&self) -> bool {
        self.wait_for_paste
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoSink for ClipboardSink {
    fn destination(&self) -> &str {
        "clipboard"
    }

    fn deliver(&mut self, memo: &str) -> Result<(), MemoError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()
                .map_err(|e| MemoError::clipboard(format!("Failed to access system clipboard: {e}")))?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        if self.wait_for_paste {
            info!("Holding the clipboard until the memo is pasted");
            return set_text_until_pasted(clipboard, memo)
                .map_err(|e| MemoError::clipboard(format!("Failed to copy text to clipboard: {e}")));
        }

        clipboard
            .set_text(memo)
            .map_err(|e| MemoError::clipboard(format!("Failed to copy text to clipboard: {e}")))
    }
}

#[cfg(target_os = "linux")]
fn set_text_until_pasted(clipboard: &mut Clipboard, memo: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(memo)
}

#[cfg(not(target_os = "linux"))]
fn set_text_until_pasted(clipboard: &mut Clipboard, memo: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(memo)
}

/// Writes the memo to stdout, for `summarize --print`.
pub struct StdoutSink;

impl MemoSink for StdoutSink {
    fn destination(&self) -> &str {
        "standard output"
    }

    fn deliver(&mut self, memo: &str) -> Result<(), MemoError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{memo}")
            .and_then(|_| stdout.flush())
            .map_err(|e| MemoError::clipboard(format!("Failed to write memo to stdout: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_sink_modes() {
        assert!(!ClipboardSink::new().waits_for_paste());
        assert!(ClipboardSink::until_pasted().waits_for_paste());
        assert_eq!(ClipboardSink::until_pasted().destination(), "clipboard");
    }
}
