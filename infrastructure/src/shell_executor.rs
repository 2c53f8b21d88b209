use domain::command::{CommandExecutor, ExecutionResult};
use shared::telemetry::Telemetry;
use tokio::process::Command;

pub const NO_OUTPUT_MARKER: &str = "✅ Success (no output).";
pub const COMMAND_ERROR_PREFIX: &str = "⚠️ Command Error: ";
pub const SYSTEM_ERROR_PREFIX: &str = "❌ System Error: ";

/// Runs commands through the platform shell so pipes, redirects and `&&` work.
///
/// No timeout and no output cap: the caller waits until the child exits.
#[derive(Debug, Clone, Copy)]
pub struct ShellExecutor {
    program: &'static str,
    command_flag: &'static str,
}

impl ShellExecutor {
    pub fn new() -> Self {
        if cfg!(target_os = "windows") {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }

    pub(crate) fn with_shell(program: &'static str, command_flag: &'static str) -> Self {
        Self {
            program,
            command_flag,
        }
    }

    fn shell_command(&self, command: &str) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.arg(self.command_flag).arg(command);
        cmd
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> ExecutionResult {
        let timer = Telemetry::new();
        let output = match self.shell_command(command).output().await {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(%err, program = self.program, "failed to spawn shell");
                return ExecutionResult {
                    success: false,
                    output_text: format!("{}{}", SYSTEM_ERROR_PREFIX, err),
                };
            }
        };
        tracing::info!(
            code = ?output.status.code(),
            elapsed_ms = timer.elapsed_ms(),
            "command finished"
        );

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let output_text = if stdout.is_empty() {
                NO_OUTPUT_MARKER.to_string()
            } else {
                stdout
            };
            ExecutionResult {
                success: true,
                output_text,
            }
        } else {
            ExecutionResult {
                success: false,
                output_text: format!("{}{}", COMMAND_ERROR_PREFIX, String::from_utf8_lossy(&output.stderr)),
            }
        }
    }
}
