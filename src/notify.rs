use crate::summary::ErrorKind;

/// Presentation-independent channel for user-facing notifications.
pub trait Notifier {
    fn report_error(&mut self, kind: ErrorKind, message: &str);
    fn report_success(&mut self, message: &str);
}

/// Prints notifications for the one-shot CLI.
///
/// Errors always go to stderr. Success goes to stdout unless stdout carries the memo itself.
pub struct ConsoleNotifier {
    success_to_stderr: bool,
}

impl ConsoleNotifier {
    pub fn new(success_to_stderr: bool) -> Self {
        Self { success_to_stderr }
    }
}

impl Notifier for ConsoleNotifier {
    fn report_error(&mut self, kind: ErrorKind, message: &str) {
        eprintln!("✗ {kind}: {message}");
    }

    fn report_success(&mut self, message: &str) {
        if self.success_to_stderr {
            eprintln!("✓ {message}");
        } else {
            println!("✓ {message}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error { kind: ErrorKind, message: String },
    Success { message: String },
}

/// Keeps every notification in order. Backs the TUI's modal and the tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn take_last(&mut self) -> Option<Notification> {
        self.notifications.pop()
    }
}

impl Notifier for RecordingNotifier {
    fn report_error(&mut self, kind: ErrorKind, message: &str) {
        self.notifications.push(Notification::Error {
            kind,
            message: message.to_string(),
        });
    }

    fn report_success(&mut self, message: &str) {
        self.notifications.push(Notification::Success {
            message: message.to_string(),
        });
    }
}
