use shared::types::Result;

/// Something the loop wants the operator to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent<'a> {
    Banner,
    Goodbye,
    Thinking,
    Blocked { reason: &'a str, command: &'a str },
    Proposed { command: &'a str },
    Running,
    Output { text: &'a str },
    Skipped,
    ApiError { message: &'a str },
}

/// Line-oriented operator I/O.
pub trait Terminal {
    /// Blocks for one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>>;

    fn show(&mut self, event: LoopEvent<'_>);
}
