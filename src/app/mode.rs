use std::fmt;

/// User-visible phase of the summarize action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Insert,  // Idle: editing the text
    Waiting, // Request in flight, input blocked
    Notice,  // Modal notification shown
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Insert => write!(f, "INSERT"),
            Mode::Waiting => write!(f, "WAITING"),
            Mode::Notice => write!(f, "NOTICE"),
        }
    }
}
