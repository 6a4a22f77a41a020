use chrono::NaiveDate;
use gemini_memo::app::{AppState, Mode};
use gemini_memo::clipboard::MemoSink;
use gemini_memo::config::Config;
use gemini_memo::notify::{Notification, RecordingNotifier};
use gemini_memo::pipeline::{Outcome, build_summarizer, process_text};
use gemini_memo::summary::{Credential, Endpoint, ErrorKind, FixedClock, MemoError, Summarizer, Transport};
use gemini_memo::ui::theme::Theme;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tempfile::TempDir;

struct CannedTransport {
    reply: Value,
    calls: Rc<Cell<usize>>,
    last_body: Rc<RefCell<Option<Value>>>,
}

impl Transport for CannedTransport {
    fn post_json(&self, _url: &str, query: &[(&str, &str)], body: &Value) -> Result<Value, MemoError> {
        assert_eq!(query, &[("key", "test-key")]);
        self.calls.set(self.calls.get() + 1);
        *self.last_body.borrow_mut() = Some(body.clone());
        Ok(self.reply.clone())
    }
}

#[derive(Default)]
struct ClipboardStub {
    contents: Option<String>,
}

impl MemoSink for ClipboardStub {
    fn destination(&self) -> &str {
        "clipboard"
    }

    fn deliver(&mut self, memo: &str) -> Result<(), MemoError> {
        self.contents = Some(memo.to_string());
        Ok(())
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 2, 11)
            .unwrap()
            .and_hms_opt(15, 53, 18)
            .unwrap(),
    )
}

#[test]
fn summary_lands_on_clipboard_as_memo() {
    let calls = Rc::new(Cell::new(0));
    let last_body = Rc::new(RefCell::new(None));
    let transport = CannedTransport {
        reply: json!({"candidates": [{"content": {"parts": [{"text": "🔺 Prices rose."}]}}]}),
        calls: calls.clone(),
        last_body: last_body.clone(),
    };
    let summarizer = Summarizer::new(Box::new(transport), Endpoint::default(), Credential::new("test-key"));
    let mut clipboard = ClipboardStub::default();
    let mut notifier = RecordingNotifier::new();

    let outcome = process_text(
        &summarizer,
        "A company raised prices.",
        &fixed_clock(),
        &mut clipboard,
        &mut notifier,
    );

    let expected = "• Memo Title: Gemini 3-line-summary 2025-02-11.Tue 1553.18\n\
                    • Memo Body:\n\
                    # Gemini 3-line-summary\n\
                    🔺 Prices rose.";
    assert_eq!(clipboard.contents.as_deref(), Some(expected));
    assert_eq!(outcome, Outcome::Delivered { memo: expected.to_string() });
    assert_eq!(calls.get(), 1);

    let body = last_body.borrow().clone().unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.ends_with("\n\nA company raised prices."));

    assert_eq!(
        notifier.notifications,
        vec![Notification::Success {
            message: "The summary was copied to the clipboard.".to_string()
        }]
    );
}

#[test]
fn whitespace_input_never_reaches_the_network() {
    let calls = Rc::new(Cell::new(0));
    let transport = CannedTransport {
        reply: json!({}),
        calls: calls.clone(),
        last_body: Rc::new(RefCell::new(None)),
    };
    let summarizer = Summarizer::new(Box::new(transport), Endpoint::default(), Credential::new("test-key"));
    let mut clipboard = ClipboardStub::default();
    let mut notifier = RecordingNotifier::new();

    let outcome = process_text(&summarizer, " \n\t ", &fixed_clock(), &mut clipboard, &mut notifier);

    assert_eq!(outcome, Outcome::Failed { kind: ErrorKind::Validation, memo: None });
    assert_eq!(calls.get(), 0);
    assert!(clipboard.contents.is_none());
}

#[test]
fn missing_key_file_blocks_the_ui() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = temp_dir.path().join("GEMINI_API_KEY.txt");

    let error = build_summarizer(&Config::default(), &key_path).err().unwrap();
    assert_eq!(error.kind(), ErrorKind::Configuration);

    let mut state = AppState::startup_failed(
        &error,
        Box::new(ClipboardStub::default()),
        Box::new(fixed_clock()),
        Theme::default(),
    );
    assert_eq!(state.mode, Mode::Notice);
    assert!(!state.can_submit());

    state.mode = Mode::Insert;
    state.input.insert_str("A company raised prices.");
    assert!(!state.request_submit());
    assert!(!state.has_pending_submit());
}
