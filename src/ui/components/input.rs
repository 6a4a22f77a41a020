use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Text to summarize ")
        .border_style(Style::default().fg(state.theme.border));

    let inner = block.inner(area);
    let (row, prefix) = state.input.cursor_row_and_prefix();
    let column = prefix.width();

    // Scroll so the cursor stays inside the box.
    let scroll_y = row.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = column.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(state.input.text())
        .block(block)
        .style(Style::default().fg(state.theme.foreground).bg(state.theme.background))
        .scroll((scroll_y as u16, scroll_x as u16));

    f.render_widget(paragraph, area);

    if state.mode == Mode::Insert && !state.show_help && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + (column - scroll_x) as u16,
            inner.y + (row - scroll_y) as u16,
        ));
    }
}
