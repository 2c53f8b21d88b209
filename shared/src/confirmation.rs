use crate::types::Result;
use anyhow::Context;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

/// The single token that approves running a command.
pub const ACCEPT_TOKEN: &str = "y";

/// Exact, case-insensitive match on [`ACCEPT_TOKEN`]. Anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(ACCEPT_TOKEN)
}

/// Standardized line prompt used across binaries.
///
/// Returns `None` once standard input is exhausted.
pub fn ask_line(prompt: &str) -> Result<Option<String>> {
    if std::io::stdin().is_terminal() {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed reading from terminal")?;
        return Ok(Some(line));
    }

    print!("{} ", prompt);
    std::io::stdout().flush().context("Failed flushing stdout")?;
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed reading from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
