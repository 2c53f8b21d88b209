use crate::session::ChatMessage;
use std::future::Future;
use thiserror::Error;

/// Why the upstream model produced no command for a turn.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("model returned an empty command")]
    EmptyCommand,
}

/// Normalized result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub output_text: String,
}

pub trait CommandGenerator {
    /// Raw model reply for the given conversation.
    fn generate(
        &self,
        messages: &[ChatMessage],
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

pub trait CommandExecutor {
    /// Runs to completion; failures are reported in the result, never as an error.
    fn execute(&self, command: &str) -> impl Future<Output = ExecutionResult> + Send;
}
