pub mod input;
pub mod status_bar;

use crate::app::{AppState, Mode};
use crate::notify::Notification;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Text input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    input::render(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.mode == Mode::Waiting {
        render_waiting(f, state);
    }

    if let Some(notification) = &state.notification {
        render_notification(f, state, notification);
    }

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_waiting(f: &mut Frame, state: &AppState) {
    let area = centered_rect(40, 20, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Please wait ")
        .border_style(Style::default().fg(state.theme.waiting));

    let paragraph = Paragraph::new("\nAsking Gemini for a 3-line summary...")
        .block(block)
        .style(Style::default().fg(state.theme.foreground).bg(state.theme.background))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_notification(f: &mut Frame, state: &AppState, notification: &Notification) {
    let (title, message, color) = match notification {
        Notification::Error { kind, message } => (format!(" {kind} "), message.as_str(), state.theme.error),
        Notification::Success { message } => (" Done ".to_string(), message.as_str(), state.theme.success),
    };

    let area = centered_rect(60, 50, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" Enter to close ")
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(state.theme.foreground).bg(state.theme.background))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    gmemo Help

    Type or paste the text to summarize, then press Ctrl+S.
    The memo is copied to the clipboard.

    Editing:
      Enter                 New line
      ←/→/↑/↓               Move cursor
      Home/End              Jump to start/end of line
      Backspace/Delete      Delete character

    Actions:
      Ctrl+S                Summarize and copy
      F1                    Toggle help
      Esc / Ctrl+C          Quit
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{SharedSink, state_with};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_input_and_status() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        state.input.insert_str("hello world");

        let text = screen_text(&state);
        assert!(text.contains("Text to summarize"));
        assert!(text.contains("hello world"));
        assert!(text.contains("INSERT"));
        assert!(text.contains("gemini-2.0-flash"));
    }

    #[test]
    fn test_renders_waiting_popup() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        state.input.insert_str("text");
        state.request_submit();

        let text = screen_text(&state);
        assert!(text.contains("Please wait"));
        assert!(text.contains("WAITING"));
    }

    #[test]
    fn test_renders_error_notification() {
        let (mut state, _) = state_with(Ok(json!({})), SharedSink::default());
        state.request_submit();

        let text = screen_text(&state);
        assert!(text.contains("Input error"));
        assert!(text.contains("Enter to close"));
    }
}
