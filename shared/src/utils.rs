/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Remove markdown code fences/backticks the model sometimes adds anyway.
pub fn strip_formatting(raw: &str) -> String {
    let trimmed = raw.trim();
    let unfenced = if trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() >= 6 {
        let inner = &trimmed[3..trimmed.len() - 3];
        // Drop a language tag such as ```bash on the opening line.
        match inner.split_once('\n') {
            Some((tag, body)) if !tag.trim().contains(' ') && !body.trim().is_empty() => body,
            _ => inner,
        }
    } else {
        trimmed
    };
    unfenced.replace('`', "").trim().to_string()
}
