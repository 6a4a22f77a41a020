pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index == 0 {
        return 0;
    }
    s.char_indices()
        .rev()
        .find(|(i, _)| *i < byte_index)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s.char_indices()
        .find(|(i, _)| *i > byte_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Byte offset of the `column`-th character in `s`, clamped to `s.len()`.
pub fn byte_offset_of_column(s: &str, column: usize) -> usize {
    s.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
