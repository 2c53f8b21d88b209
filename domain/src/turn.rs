use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome text recorded when the operator declines a command.
pub const SKIPPED_MARKER: &str = "User skipped execution";

/// Prefix recorded in front of a blocked command's verdict reason.
pub const BLOCKED_PREFIX: &str = "BLOCKED: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Full, untruncated executor result text.
    Executed(String),
    /// Reason returned by the safety policy.
    Blocked(String),
    Skipped,
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::Executed(output) => f.write_str(output),
            TurnOutcome::Blocked(reason) => write!(f, "{}{}", BLOCKED_PREFIX, reason),
            TurnOutcome::Skipped => f.write_str(SKIPPED_MARKER),
        }
    }
}

/// One request/command/outcome cycle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    request: String,
    generated_command: String,
    outcome: TurnOutcome,
}

impl Turn {
    pub fn new(request: impl Into<String>, generated_command: impl Into<String>, outcome: TurnOutcome) -> Self {
        Self {
            request: request.into(),
            generated_command: generated_command.into(),
            outcome,
        }
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn generated_command(&self) -> &str {
        &self.generated_command
    }

    pub fn outcome(&self) -> &TurnOutcome {
        &self.outcome
    }

    pub fn outcome_text(&self) -> String {
        self.outcome.to_string()
    }
}
