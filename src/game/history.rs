//! Move history with an undo/redo cursor.
//!
//! Each entry is a full board snapshot plus the whose-turn flag, appended
//! after every move. The cursor only moves locally ("undo"/"redo" are never
//! relayed); a forward move played while rewound truncates the redo tail.

use serde::{Deserialize, Serialize};

use super::board::Board;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board: Board,
    /// Whether X plays next from this snapshot. The initial entry always
    /// starts with X (the inviter's token).
    pub x_is_next: bool,
}

impl HistoryEntry {
    pub fn initial() -> Self {
        HistoryEntry {
            board: Board::new(),
            x_is_next: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl GameHistory {
    pub fn new() -> Self {
        GameHistory {
            entries: vec![HistoryEntry::initial()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether any move has been recorded since the last reset.
    pub fn has_moves(&self) -> bool {
        self.entries.len() > 1
    }

    /// Append a snapshot after the cursor, dropping any redo tail.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor one step back. Returns false at the initial entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one step forward. Returns false at the latest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Back to the single all-empty entry with X to play.
    pub fn reset(&mut self) {
        self.entries.truncate(1);
        self.entries[0] = HistoryEntry::initial();
        self.cursor = 0;
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
