use application::agent_service::AgentService;
use clap::Parser;
use infrastructure::config::Config;
use infrastructure::openai_client::OpenAiClient;
use infrastructure::shell_executor::ShellExecutor;
use presentation::cli::Cli;
use presentation::console::Console;
use shared::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(cli.overrides()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(model = %config.model, base_url = %config.base_url, "configuration loaded");

    let client = OpenAiClient::new(&config);
    let mut agent = AgentService::new(client, ShellExecutor::new()).with_memory_window(config.memory_window);
    let mut console = Console::new();
    agent.run(&mut console).await?;
    Ok(())
}
