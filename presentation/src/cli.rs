use clap::Parser;
use infrastructure::config::ConfigOverrides;

/// Turns plain-English requests into one shell command, screens it, and runs it on confirmation.
#[derive(Parser, Debug)]
#[command(name = "jarvis")]
#[command(about = "Natural-language shell assistant with a safety filter and turn memory", long_about = None)]
pub struct Cli {
    /// Chat model to request commands from
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of past turns sent to the model as context
    #[arg(long)]
    pub memory_window: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            memory_window: self.memory_window,
        }
    }
}
