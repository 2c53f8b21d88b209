use application::terminal::{LoopEvent, Terminal};
use colored::*;
use shared::confirmation::ask_line;
use shared::types::Result;

/// Interactive stdin/stdout terminal.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for Console {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        ask_line(label)
    }

    fn show(&mut self, event: LoopEvent<'_>) {
        match event {
            LoopEvent::Banner => {
                println!("{}", "--- Jarvis-Lite CLI Agent Active ---".cyan().bold());
                println!("{}", "✅ Safety Filter: ON".green());
                println!("{}", "✅ Memory: ON".green());
                println!("(Type 'exit' or 'quit' to stop)\n");
            }
            LoopEvent::Goodbye => println!("Goodbye!"),
            LoopEvent::Thinking => eprintln!("{}", "Thinking...".dimmed()),
            LoopEvent::Blocked { reason, command } => {
                println!("\n{}", reason.red().bold());
                println!("{} {}\n", "Command blocked:".red(), command);
            }
            LoopEvent::Proposed { command } => {
                println!("\n{} {}", "🤖 Agent wants to run:".green().bold(), command.yellow());
            }
            LoopEvent::Running => println!("{}", "Running...".cyan()),
            LoopEvent::Output { text } => println!("{}\n{}\n", "RESULT:".bold(), text),
            LoopEvent::Skipped => println!("{}\n", "Skipped.".yellow()),
            LoopEvent::ApiError { message } => println!("{} {}", "API Error:".red().bold(), message),
        }
    }
}
