//! Attack history, newest entry first.
use std::collections::VecDeque;

use super::Side;
use crate::combat::AttackResult;

/// One resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Position in the duel's attack sequence, starting at 1.
    pub sequence: u64,
    pub attacker: Side,
    pub result: AttackResult,
}

impl LogEntry {
    pub fn text(&self) -> &str {
        &self.result.message
    }
}

/// Append-only record of resolved attacks.
///
/// Entries are inserted at the head, so iteration yields the most recent
/// attack first. There is no capacity limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    entries: VecDeque<LogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Iterates newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
