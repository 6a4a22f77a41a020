use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let model = state.model().unwrap_or("no API key");
    let hint = match state.mode {
        Mode::Insert => "Ctrl+S summarize  F1 help  Esc quit",
        Mode::Waiting => "waiting for Gemini...",
        Mode::Notice => "Enter close",
    };
    let version_text = format!("v{VERSION}");

    let left_content = format!(
        " {} | {} | {} chars",
        state.mode,
        model,
        state.input.char_count()
    );

    let padding = area
        .width
        .saturating_sub((left_content.width() + hint.width() + version_text.width() + 3) as u16);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let style = if state.mode == Mode::Waiting {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}
