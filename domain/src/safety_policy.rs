//! Denylist classifier for generated shell commands.
//!
//! Two ordered tiers: regex rules first, then literal keywords. The first
//! match in either tier decides the reason, so the order below is part of
//! the observable behaviour.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Reason carried by every safe verdict.
pub const SAFE_MARKER: &str = "Safe";

/// Prefix of every block reason.
pub const BLOCK_PREFIX: &str = "🚨 BLOCKED: ";

const PATTERN_RULES: &[(&str, &str)] = &[
    // Unix destructive commands
    (r"rm\s+(-[rf]+\s+)?/", "Attempts to delete system directories"),
    (r"rm\s+-rf\s+\*", "Attempts to recursively delete all files"),
    (r"dd\s+.*of=/dev/(sd|hd)", "Attempts to overwrite disk"),
    (r"mkfs\.\w+\s+/dev/", "Attempts to format a disk"),
    (r":\(\)\{\s*:\|:&\s*\};:", "Fork bomb that crashes the system"),
    (r"chmod\s+-R\s+777\s+/", "Makes all system files world-writable"),
    (r"mv\s+/\s+", "Attempts to move root directory"),
    // Windows destructive commands
    (r"del\s+/[fqs]+\s+c:\\", "Attempts to delete Windows system files"),
    (r"format\s+c:", "Attempts to format system drive"),
    (r"rd\s+/s\s+/q\s+c:\\", "Attempts to remove Windows system directories"),
    (r"rmdir\s+/s\s+/q\s+c:\\", "Attempts to remove Windows system directories"),
    (r"del\s+.*\*\.\*", "Attempts to delete all files"),
    // Privileged system modification
    (r"sudo\s+rm\s+-rf", "Elevated deletion command"),
    (r"chown\s+-R\s+.*\s+/", "Changes ownership of system files"),
    // Fork bomb with arbitrary spacing
    (r":\s*\(\s*\)\s*\{\s*:\s*\|\s*:\s*&\s*\}\s*;\s*:", "Fork bomb"),
    // Remote script execution
    (r"wget\s+.*\|\s*sh", "Downloads and executes unknown scripts"),
    (r"curl\s+.*\|\s*bash", "Downloads and executes unknown scripts"),
];

const KEYWORD_RULES: &[(&str, &str)] = &[
    ("/dev/sda", "Accesses system disk directly"),
    ("/dev/null >", "Redirects critical output"),
    ("> /dev/sda", "Writes to system disk"),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .filter_map(|(pattern, reason)| {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => Some((re, *reason)),
                Err(err) => {
                    tracing::error!(pattern, %err, "skipping invalid denylist pattern");
                    None
                }
            }
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_safe: bool,
    pub reason: String,
}

impl Verdict {
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            reason: SAFE_MARKER.to_string(),
        }
    }

    pub fn blocked(category: &str) -> Self {
        Self {
            is_safe: false,
            reason: format!("{}{}", BLOCK_PREFIX, category),
        }
    }
}

/// The fixed, compiled-in denylist.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyPolicy;

impl SafetyPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw command. Total and deterministic: every string gets a verdict.
    pub fn classify(&self, command: &str) -> Verdict {
        let normalized = command.trim().to_lowercase();

        if let Some((_, reason)) = COMPILED_RULES.iter().find(|(re, _)| re.is_match(&normalized)) {
            return Verdict::blocked(reason);
        }

        if let Some((_, reason)) = KEYWORD_RULES
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
        {
            return Verdict::blocked(reason);
        }

        Verdict::safe()
    }

    pub fn rule_count(&self) -> usize {
        COMPILED_RULES.len() + KEYWORD_RULES.len()
    }
}
