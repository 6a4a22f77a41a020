use super::input::InputBuffer;
use super::mode::Mode;
use crate::clipboard::MemoSink;
use crate::config::Config;
use crate::notify::{Notification, RecordingNotifier};
use crate::pipeline::{Outcome, process_text};
use crate::summary::{Clock, ErrorKind, MemoError, Summarizer};
use crate::ui::theme::Theme;
use tracing::{debug, info};

pub struct AppState {
    pub input: InputBuffer,
    pub mode: Mode,
    pub notification: Option<Notification>,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub quit_after_copy: bool,
    pub last_outcome: Option<Outcome>,
    summarizer: Option<Summarizer>,
    sink: Box<dyn MemoSink>,
    clock: Box<dyn Clock>,
    pending_submit: bool,
}

impl AppState {
    pub fn new(
        summarizer: Summarizer,
        sink: Box<dyn MemoSink>,
        clock: Box<dyn Clock>,
        theme: Theme,
        quit_after_copy: bool,
    ) -> Self {
        Self {
            input: InputBuffer::new(),
            mode: Mode::Insert,
            notification: None,
            should_quit: false,
            show_help: false,
            theme,
            quit_after_copy,
            last_outcome: None,
            summarizer: Some(summarizer),
            sink,
            clock,
            pending_submit: false,
        }
    }

    /// Startup failed: show the error and accept nothing but quitting.
    pub fn startup_failed(
        error: &MemoError,
        sink: Box<dyn MemoSink>,
        clock: Box<dyn Clock>,
        theme: Theme,
    ) -> Self {
        Self {
            input: InputBuffer::new(),
            mode: Mode::Notice,
            notification: Some(Notification::Error {
                kind: error.kind(),
                message: error.to_string(),
            }),
            should_quit: false,
            show_help: false,
            theme,
            quit_after_copy: false,
            last_outcome: None,
            summarizer: None,
            sink,
            clock,
            pending_submit: false,
        }
    }

    /// State for the result of startup. The configured theme applies even when startup failed.
    pub fn from_startup(
        config: &Config,
        startup: Result<Summarizer, MemoError>,
        sink: Box<dyn MemoSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let theme = Theme::from_config(config);
        match startup {
            Ok(summarizer) => Self::new(summarizer, sink, clock, theme, config.quit_after_copy),
            Err(e) => Self::startup_failed(&e, sink, clock, theme),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.summarizer.is_some()
    }

    pub fn model(&self) -> Option<&str> {
        self.summarizer.as_ref().map(|s| s.endpoint().model.as_str())
    }

    /// Ask for a summary of the current input. Runs on the next loop turn,
    /// after the waiting frame has been drawn.
    pub fn request_submit(&mut self) -> bool {
        if !self.can_submit() || self.mode != Mode::Insert {
            return false;
        }

        if self.input.is_blank() {
            // No request for blank input; the pipeline reports it without a network call.
            self.run_submit();
            return true;
        }

        self.mode = Mode::Waiting;
        self.pending_submit = true;
        true
    }

    pub fn has_pending_submit(&self) -> bool {
        self.pending_submit
    }

    /// Blocks for the duration of the API call.
    pub fn run_pending_submit(&mut self) {
        if self.pending_submit {
            self.pending_submit = false;
            self.run_submit();
        }
    }

    fn run_submit(&mut self) {
        let Some(summarizer) = self.summarizer.as_ref() else {
            return;
        };

        let mut notifier = RecordingNotifier::new();
        let outcome = process_text(
            summarizer,
            self.input.text(),
            self.clock.as_ref(),
            self.sink.as_mut(),
            &mut notifier,
        );

        if outcome.is_delivered() {
            info!("Summary copied, clearing input");
            self.input.clear();
        }

        self.notification = notifier.take_last().map(|notification| match (notification, &outcome) {
            (Notification::Error { kind: ErrorKind::Clipboard, message }, Outcome::Failed { memo: Some(memo), .. }) => {
                Notification::Error {
                    kind: ErrorKind::Clipboard,
                    message: format!("{message}\n\n{memo}"),
                }
            }
            (notification, _) => notification,
        });
        self.last_outcome = Some(outcome);
        self.mode = Mode::Notice;
    }

    pub fn dismiss_notification(&mut self) {
        if self.mode != Mode::Notice {
            return;
        }

        let delivered = self.last_outcome.as_ref().is_some_and(Outcome::is_delivered);
        self.notification = None;
        self.mode = Mode::Insert;

        if !self.can_submit() || (delivered && self.quit_after_copy) {
            debug!("Quitting after notification");
            self.should_quit = true;
        }
    }

    /// Memo that must stay on the clipboard after a quit-after-copy exit.
    pub fn memo_to_hold(&self) -> Option<&str> {
        if !(self.should_quit && self.quit_after_copy) {
            return None;
        }
        match &self.last_outcome {
            Some(Outcome::Delivered { memo }) => Some(memo),
            _ => None,
        }
    }
}
