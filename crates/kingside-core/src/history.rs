//! The ledger of applied moves.

use crate::chess_move::Move;
use crate::make_move::Inverse;

/// One applied move and the data needed to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub mv: Move,
    pub inverse: Inverse,
}

/// Append-only log of applied moves, indexed by ply from the session start.
///
/// Entries are only added by [`GameState::apply_move`](crate::GameState::apply_move)
/// and only removed, last first, by
/// [`GameState::undo_move`](crate::GameState::undo_move).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub(crate) fn push(&mut self, mv: Move, inverse: Inverse) {
        self.entries.push(LedgerEntry { mv, inverse });
    }

    pub(crate) fn pop(&mut self) -> Option<LedgerEntry> {
        self.entries.pop()
    }

    /// Number of recorded plies.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `ply` (0 = first move of the session).
    pub fn get(&self, ply: usize) -> Option<&LedgerEntry> {
        self.entries.get(ply)
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Moves in the order they were applied.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator + '_ {
        self.entries.iter().map(|entry| entry.mv)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }
}
