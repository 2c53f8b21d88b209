use crate::turn::Turn;

/// Number of past turns surfaced into model context by default.
pub const DEFAULT_WINDOW: usize = 10;

/// Append-only log of past turns, in chronological order.
///
/// Storage is unbounded for the lifetime of the process; only [`recent`]
/// limits what callers see.
///
/// [`recent`]: TurnMemory::recent
#[derive(Debug, Default, Clone)]
pub struct TurnMemory {
    turns: Vec<Turn>,
}

impl TurnMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// At most the last `k` turns, oldest first.
    pub fn recent(&self, k: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(k);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
