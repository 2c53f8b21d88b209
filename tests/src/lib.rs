//! Test doubles shared by the end-to-end loop tests.

use application::terminal::{LoopEvent, Terminal};
use domain::command::{CommandExecutor, CommandGenerator, ExecutionResult, GenerationError};
use domain::session::ChatMessage;
use shared::types::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replies from a queue and remembers every conversation it was sent.
#[derive(Clone, Default)]
pub struct StubGenerator {
    replies: Arc<Mutex<VecDeque<std::result::Result<String, GenerationError>>>>,
    seen: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl StubGenerator {
    pub fn replying(replies: &[&str]) -> Self {
        let stub = Self::default();
        for reply in replies {
            stub.push(Ok(reply.to_string()));
        }
        stub
    }

    pub fn push(&self, reply: std::result::Result<String, GenerationError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_conversation(&self) -> Option<Vec<ChatMessage>> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl CommandGenerator for StubGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> std::result::Result<String, GenerationError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Request("no scripted reply".to_string())))
    }
}

/// Returns a fixed result and records what it was asked to run.
#[derive(Clone)]
pub struct RecordingExecutor {
    result: ExecutionResult,
    commands: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    pub fn returning(success: bool, output_text: &str) -> Self {
        Self {
            result: ExecutionResult {
                success,
                output_text: output_text.to_string(),
            },
            commands: Arc::default(),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command: &str) -> ExecutionResult {
        self.commands.lock().unwrap().push(command.to_string());
        self.result.clone()
    }
}

/// Feeds canned operator lines and captures everything shown.
#[derive(Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub events: Vec<String>,
}

impl ScriptedTerminal {
    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn saw(&self, fragment: &str) -> bool {
        self.events.iter().any(|e| e.contains(fragment))
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.prompts.push(label.to_string());
        Ok(self.inputs.pop_front())
    }

    fn show(&mut self, event: LoopEvent<'_>) {
        self.events.push(format!("{:?}", event));
    }
}
