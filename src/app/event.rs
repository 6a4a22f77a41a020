use super::mode::Mode;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    // Ctrl+C always quits, even mid-notice.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
            state.show_help = false;
        }
        return;
    }

    match state.mode {
        Mode::Insert => handle_insert_mode(key, state),
        Mode::Notice => handle_notice_mode(key, state),
        // Input is blocked until the response arrives.
        Mode::Waiting => {}
    }
}

/// Bracketed paste arrives as one event.
pub fn handle_paste(text: &str, state: &mut AppState) {
    if state.mode == Mode::Insert && !state.show_help {
        state.input.insert_str(text);
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            state.request_submit();
        }
        (KeyCode::Esc, _) => {
            state.should_quit = true;
        }
        (KeyCode::F(1), _) => {
            state.show_help = true;
        }
        (KeyCode::Enter, _) => {
            state.input.insert_char('\n');
        }
        (KeyCode::Backspace, _) => {
            state.input.backspace();
        }
        (KeyCode::Delete, _) => {
            state.input.delete();
        }
        (KeyCode::Left, _) => {
            state.input.move_left();
        }
        (KeyCode::Right, _) => {
            state.input.move_right();
        }
        (KeyCode::Up, _) => {
            state.input.move_up();
        }
        (KeyCode::Down, _) => {
            state.input.move_down();
        }
        (KeyCode::Home, _) => {
            state.input.move_home();
        }
        (KeyCode::End, _) => {
            state.input.move_end();
        }
        (KeyCode::Char(c), mods) if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            state.input.insert_char(c);
        }
        _ => {}
    }
}

fn handle_notice_mode(key: KeyEvent, state: &mut AppState) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        state.dismiss_notification();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{SharedSink, state_with};
    use crate::notify::Notification;
    use serde_json::json;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = if c == '\n' { press(KeyCode::Enter) } else { press(KeyCode::Char(c)) };
            handle_key_event(key, state);
        }
    }

    #[test]
    fn test_typing_and_newlines() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        type_text(&mut state, "line one\nline two");
        handle_key_event(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT), &mut state);
        assert_eq!(state.input.text(), "line one\nline twoX");

        handle_key_event(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.input.text(), "line one\nline two");
    }

    #[test]
    fn test_ctrl_s_submits() {
        let sink = SharedSink::default();
        let (mut state, transport) = state_with(
            Ok(json!({"candidates": [{"content": {"parts": [{"text": "S"}]}}]})),
            sink.clone(),
        );
        type_text(&mut state, "text");

        handle_key_event(ctrl('s'), &mut state);
        assert_eq!(state.mode, Mode::Waiting);
        assert_eq!(state.input.text(), "text");

        // Keys are ignored while waiting.
        handle_key_event(press(KeyCode::Char('z')), &mut state);
        assert_eq!(state.input.text(), "text");

        state.run_pending_submit();
        assert_eq!(transport.call_count(), 1);
        assert!(matches!(state.notification, Some(Notification::Success { .. })));

        handle_key_event(press(KeyCode::Enter), &mut state);
        assert_eq!(state.mode, Mode::Insert);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_notice_ignores_other_keys() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        handle_key_event(ctrl('s'), &mut state);
        assert_eq!(state.mode, Mode::Notice);

        handle_key_event(press(KeyCode::Char('a')), &mut state);
        assert_eq!(state.mode, Mode::Notice);
        assert!(state.input.text().is_empty());
    }

    #[test]
    fn test_help_toggle() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        handle_key_event(press(KeyCode::F(1)), &mut state);
        assert!(state.show_help);

        handle_key_event(press(KeyCode::Char('a')), &mut state);
        assert!(state.input.text().is_empty());

        handle_key_event(press(KeyCode::Esc), &mut state);
        assert!(!state.show_help);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        handle_key_event(press(KeyCode::Esc), &mut state);
        assert!(state.should_quit);

        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        handle_key_event(ctrl('c'), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_paste_inserts_text() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        handle_paste("pasted\r\narticle", &mut state);
        assert_eq!(state.input.text(), "pasted\narticle");
    }
}
