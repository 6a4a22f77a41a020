use chrono::{Local, NaiveDateTime};

pub const MEMO_HEADER: &str = "Gemini 3-line-summary";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d.%a %H%M.%S";

/// Source of the memo timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, no timezone conversion.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `2025-02-11.Tue 1553.18`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_memo(summary: &str, timestamp: &str) -> String {
    format!(
        "• Memo Title: {MEMO_HEADER} {timestamp}\n• Memo Body:\n# {MEMO_HEADER}\n{summary}"
    )
}
