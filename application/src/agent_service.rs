//! The confirm-execute-remember loop.
//!
//! One request at a time: generate, classify, confirm, execute, record.
//! Nothing starts before the previous turn has been appended to memory.

use crate::context::build_messages;
use crate::safety_service::SafetyService;
use crate::terminal::{LoopEvent, Terminal};
use domain::command::{CommandExecutor, CommandGenerator, GenerationError};
use domain::memory::{TurnMemory, DEFAULT_WINDOW};
use domain::turn::{Turn, TurnOutcome};
use shared::confirmation::is_affirmative;
use shared::types::Result;
use shared::utils::strip_formatting;

pub const REQUEST_PROMPT: &str = "What can I do for you? >";
pub const CONFIRM_PROMPT: &str = "Confirm execution? (y/n):";
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim();
    EXIT_KEYWORDS.iter().any(|k| input.eq_ignore_ascii_case(k))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    GeneratingCommand { request: String },
    Classifying { request: String, command: String },
    AwaitingConfirmation { request: String, command: String },
    Executing { request: String, command: String },
    Exited,
}

/// Owns everything a session needs; nothing lives in globals.
pub struct AgentService<G, E> {
    generator: G,
    executor: E,
    safety: SafetyService,
    memory: TurnMemory,
    memory_window: usize,
}

impl<G, E> AgentService<G, E>
where
    G: CommandGenerator,
    E: CommandExecutor,
{
    pub fn new(generator: G, executor: E) -> Self {
        Self {
            generator,
            executor,
            safety: SafetyService::new(),
            memory: TurnMemory::new(),
            memory_window: DEFAULT_WINDOW,
        }
    }

    pub fn with_memory_window(mut self, memory_window: usize) -> Self {
        self.memory_window = memory_window;
        self
    }

    pub fn memory(&self) -> &TurnMemory {
        &self.memory
    }

    /// Runs until the operator exits or input ends.
    pub async fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        terminal.show(LoopEvent::Banner);
        let mut state = LoopState::AwaitingInput;
        while state != LoopState::Exited {
            state = self.advance(state, terminal).await?;
        }
        tracing::info!(turns = self.memory.len(), "session ended");
        Ok(())
    }

    /// Performs one transition.
    pub async fn advance<T: Terminal>(&mut self, state: LoopState, terminal: &mut T) -> Result<LoopState> {
        let next = match state {
            LoopState::AwaitingInput => match terminal.prompt(REQUEST_PROMPT)? {
                None => {
                    terminal.show(LoopEvent::Goodbye);
                    LoopState::Exited
                }
                Some(input) if is_exit_keyword(&input) => {
                    terminal.show(LoopEvent::Goodbye);
                    LoopState::Exited
                }
                Some(input) if input.trim().is_empty() => LoopState::AwaitingInput,
                Some(input) => LoopState::GeneratingCommand { request: input },
            },

            LoopState::GeneratingCommand { request } => {
                terminal.show(LoopEvent::Thinking);
                let messages = build_messages(self.memory.recent(self.memory_window), &request);
                let generated = self
                    .generator
                    .generate(&messages)
                    .await
                    .map(|raw| strip_formatting(&raw))
                    .and_then(|command| {
                        if command.is_empty() {
                            Err(GenerationError::EmptyCommand)
                        } else {
                            Ok(command)
                        }
                    });
                match generated {
                    Ok(command) => LoopState::Classifying { request, command },
                    Err(err) => {
                        tracing::info!(%err, "command generation failed");
                        let message = err.to_string();
                        terminal.show(LoopEvent::ApiError { message: &message });
                        LoopState::AwaitingInput
                    }
                }
            }

            LoopState::Classifying { request, command } => {
                let verdict = self.safety.classify(&command);
                if verdict.is_safe {
                    LoopState::AwaitingConfirmation { request, command }
                } else {
                    tracing::info!(%command, reason = %verdict.reason, "blocked command");
                    terminal.show(LoopEvent::Blocked {
                        reason: &verdict.reason,
                        command: &command,
                    });
                    self.record(request, command, TurnOutcome::Blocked(verdict.reason));
                    LoopState::AwaitingInput
                }
            }

            LoopState::AwaitingConfirmation { request, command } => {
                terminal.show(LoopEvent::Proposed { command: &command });
                // A failed read declines rather than ending the session.
                let answer = match terminal.prompt(CONFIRM_PROMPT) {
                    Ok(answer) => answer.unwrap_or_default(),
                    Err(err) => {
                        tracing::info!(%err, "confirmation read failed");
                        String::new()
                    }
                };
                if is_affirmative(&answer) {
                    LoopState::Executing { request, command }
                } else {
                    terminal.show(LoopEvent::Skipped);
                    self.record(request, command, TurnOutcome::Skipped);
                    LoopState::AwaitingInput
                }
            }

            LoopState::Executing { request, command } => {
                terminal.show(LoopEvent::Running);
                let result = self.executor.execute(&command).await;
                terminal.show(LoopEvent::Output {
                    text: &result.output_text,
                });
                self.record(request, command, TurnOutcome::Executed(result.output_text));
                LoopState::AwaitingInput
            }

            LoopState::Exited => LoopState::Exited,
        };
        Ok(next)
    }

    fn record(&mut self, request: String, command: String, outcome: TurnOutcome) {
        self.memory.append(Turn::new(request, command, outcome));
    }
}
