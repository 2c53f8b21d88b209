use domain::session::ChatMessage;
use domain::turn::Turn;
use shared::utils::truncate_chars;

/// Characters of a previous outcome echoed back to the model.
pub const OUTCOME_ECHO_LIMIT: usize = 200;

pub const SYSTEM_PROMPT: &str = "You are a CLI Assistant for Windows/Mac/Linux. \
Convert the user's request into a single valid terminal command. \
Output ONLY the raw command. No markdown, no explanation, no backticks. \
You can reference previous commands from the conversation history if needed.";

/// Conversation sent to the model: instruction, remembered turns, new request.
pub fn build_messages(history: &[Turn], request: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() * 3 + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));

    for turn in history {
        messages.push(ChatMessage::user(turn.request()));
        messages.push(ChatMessage::assistant(turn.generated_command()));
        let outcome = turn.outcome_text();
        if !outcome.is_empty() {
            messages.push(ChatMessage::system(format!(
                "Previous result: {}",
                truncate_chars(&outcome, OUTCOME_ECHO_LIMIT)
            )));
        }
    }

    messages.push(ChatMessage::user(request));
    messages
}
