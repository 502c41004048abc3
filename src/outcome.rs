//! Tri-state worker outcomes and the status board that tracks them.

use std::fmt;

use thiserror::Error;

/// Result of one worker. Every slot starts `Pending` and is settled exactly
/// once to `Success` or `Failed`, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Success,
    Failed,
}

impl Outcome {
    /// The classic integer sentinel: 0 pending, 1 success, -1 failed.
    pub fn code(self) -> i8 {
        match self {
            Outcome::Pending => 0,
            Outcome::Success => 1,
            Outcome::Failed => -1,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Pending
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no slot for worker {0}")]
    UnknownWorker(usize),

    #[error("slot {id} already settled as {current}, refusing {attempted}")]
    AlreadySettled {
        id: usize,
        current: Outcome,
        attempted: Outcome,
    },

    #[error("slot {0} cannot be settled back to pending")]
    NotTerminal(usize),
}

/// One outcome slot per worker, indexed by worker id.
///
/// The board enforces the single-transition rule instead of assuming it:
/// `settle` accepts exactly one `Pending -> {Success, Failed}` transition
/// per slot and rejects everything else. Once a slot is terminal it stays
/// terminal, so an observer can never "un-see" a settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    slots: Vec<Outcome>,
}

impl StatusBoard {
    pub fn new(workers: usize) -> Self {
        StatusBoard {
            slots: vec![Outcome::Pending; workers],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn outcome(&self, id: usize) -> Option<Outcome> {
        self.slots.get(id).copied()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.slots
    }

    /// Record the terminal outcome for one worker.
    pub fn settle(&mut self, id: usize, outcome: Outcome) -> Result<(), BoardError> {
        if !outcome.is_terminal() {
            return Err(BoardError::NotTerminal(id));
        }
        let slot = self
            .slots
            .get_mut(id)
            .ok_or(BoardError::UnknownWorker(id))?;
        if slot.is_terminal() {
            return Err(BoardError::AlreadySettled {
                id,
                current: *slot,
                attempted: outcome,
            });
        }
        *slot = outcome;
        Ok(())
    }

    pub fn all_settled(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_terminal())
    }
}

impl fmt::Display for StatusBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}
