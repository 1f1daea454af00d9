//! Undo history of draft removals.

use log::debug;

use crate::{storage::PlayerPool, PlayerId};

/// What an undo request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The history was empty; nothing was popped.
    Empty,
    /// Entries were popped. `restored` lists the players that became
    /// available again, most recent removal first.
    Popped { popped: usize, restored: Vec<PlayerId> },
}

/// LIFO stack of removed players.
///
/// Only original removals are pushed. Restorations are never recorded, so
/// the stack always reflects the order in which players were drafted.
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    entries: Vec<PlayerId>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: PlayerId) {
        self.entries.push(id);
    }

    pub fn pop(&mut self) -> Option<PlayerId> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop up to `count` removals and make those players available again.
    ///
    /// Entries are popped even when the player is already available; such
    /// entries are skipped rather than counted as restored.
    pub fn undo(&mut self, count: usize, pool: &mut PlayerPool) -> UndoOutcome {
        if self.is_empty() {
            return UndoOutcome::Empty;
        }

        let mut popped = 0;
        let mut restored = Vec::new();
        while popped < count {
            let Some(id) = self.pop() else { break };
            popped += 1;
            if pool.restore(id) {
                restored.push(id);
            } else {
                debug!("History entry {} was already available, skipping", id);
            }
        }

        UndoOutcome::Popped { popped, restored }
    }
}
