//! Local game state machine driven by relay events.
//!
//! The machine mutates synchronously; the caller dispatches the matching
//! wire message only after the local mutation succeeded, so state update
//! and network emission form one ordered step. Game-rule enforcement lives
//! entirely here: the relay never checks a move.

use std::error::Error;
use std::fmt;

use super::board::{Mark, CELL_COUNT};
use super::history::{GameHistory, HistoryEntry};

/// How this side entered the session. The inviter plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Inviter,
    Joiner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Connected, no pairing attempted yet.
    Unpaired,
    /// Invite sent or link shared; waiting for the room to fill.
    WaitingForPeer,
    Active {
        my_turn: bool,
    },
    /// Terminal board reached; a new game can still be started.
    Over,
    /// The peer disconnected. Nothing further is meaningful.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NotYourTurn,
    CellOccupied,
    OutOfRange,
    /// The session is not in active play (not started, or already over).
    NotActive,
    /// The peer left; the session accepts no further operations.
    SessionClosed,
    /// New game requested before any move was played.
    NothingToReset,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameError::NotYourTurn => "it is not your turn",
            GameError::CellOccupied => "that cell is already taken",
            GameError::OutOfRange => "cell index out of range",
            GameError::NotActive => "the game is not in active play",
            GameError::SessionClosed => "the peer has left the session",
            GameError::NothingToReset => "no move has been played yet",
        };
        write!(f, "{}", text)
    }
}

impl Error for GameError {}

pub struct GameMachine {
    role: Role,
    phase: Phase,
    history: GameHistory,
}

impl GameMachine {
    pub fn new(role: Role) -> Self {
        GameMachine {
            role,
            phase: Phase::Unpaired,
            history: GameHistory::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// This side announced readiness: the joiner sent `Ready`, the inviter
    /// shared its link.
    pub fn ready(&mut self) {
        if self.phase == Phase::Unpaired {
            self.phase = Phase::WaitingForPeer;
        }
    }

    /// `Start` arrived: the room is full and play is unlocked. The inviter
    /// moves first.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Unpaired | Phase::WaitingForPeer => {
                self.phase = Phase::Active {
                    my_turn: self.role == Role::Inviter,
                };
            }
            _ => (),
        }
    }

    /// Play a local move. On success the caller relays `Play(cell)`.
    pub fn play(&mut self, cell: usize) -> Result<(), GameError> {
        match self.phase {
            Phase::Active { my_turn: true } => (),
            Phase::Active { my_turn: false } => return Err(GameError::NotYourTurn),
            Phase::Closed => return Err(GameError::SessionClosed),
            _ => return Err(GameError::NotActive),
        }
        self.apply_move(cell, false)
    }

    /// The peer played `cell`; afterwards it is this side's turn.
    pub fn apply_remote_play(&mut self, cell: usize) -> Result<(), GameError> {
        match self.phase {
            Phase::Active { my_turn: false } => (),
            Phase::Active { my_turn: true } => return Err(GameError::NotYourTurn),
            Phase::Closed => return Err(GameError::SessionClosed),
            _ => return Err(GameError::NotActive),
        }
        self.apply_move(cell, true)
    }

    fn apply_move(&mut self, cell: usize, remote: bool) -> Result<(), GameError> {
        if cell >= CELL_COUNT {
            return Err(GameError::OutOfRange);
        }
        let current = self.history.current();
        if current.board.cell(cell).is_some() {
            return Err(GameError::CellOccupied);
        }

        let mark = if current.x_is_next { Mark::X } else { Mark::O };
        let mut board = current.board.clone();
        board.place(cell, mark);
        let x_is_next = !current.x_is_next;
        let over = board.is_over();
        self.history.push(HistoryEntry { board, x_is_next });

        self.phase = if over {
            Phase::Over
        } else {
            Phase::Active { my_turn: remote }
        };
        Ok(())
    }

    /// Start a fresh game on this side. On success the caller relays
    /// `NewGame`; the initiator then moves first (and therefore plays X,
    /// whatever its role was).
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.reset_history(true)
    }

    /// The peer asked for a fresh game; it moves first.
    pub fn apply_remote_new_game(&mut self) -> Result<(), GameError> {
        self.reset_history(false)
    }

    fn reset_history(&mut self, my_turn: bool) -> Result<(), GameError> {
        match self.phase {
            Phase::Active { .. } | Phase::Over => (),
            Phase::Closed => return Err(GameError::SessionClosed),
            _ => return Err(GameError::NotActive),
        }
        if !self.history.has_moves() {
            return Err(GameError::NothingToReset);
        }
        self.history.reset();
        self.phase = Phase::Active { my_turn };
        Ok(())
    }

    /// `PlayerLeft` arrived. Terminal: every later operation fails with
    /// `SessionClosed`.
    pub fn peer_left(&mut self) {
        self.phase = Phase::Closed;
    }

    /// Local history rewind. Pointer movement only, never relayed.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Local history replay. Pointer movement only, never relayed.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }
}
