use domain::safety_policy::{SafetyPolicy, Verdict};

pub struct SafetyService {
    policy: SafetyPolicy,
}

impl SafetyService {
    pub fn new() -> Self {
        let policy = SafetyPolicy::new();
        tracing::debug!(rules = policy.rule_count(), "safety filter loaded");
        Self { policy }
    }

    pub fn classify(&self, command: &str) -> Verdict {
        let verdict = self.policy.classify(command);
        tracing::debug!(command, is_safe = verdict.is_safe, reason = %verdict.reason, "classified command");
        verdict
    }
}

impl Default for SafetyService {
    fn default() -> Self {
        Self::new()
    }
}
