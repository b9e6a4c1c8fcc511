//! Common types for the game: attack outcomes, seats, modes and errors.

use serde::Serialize;
use thiserror::Error;

use crate::game::Phase;

/// Outcome of a single shot at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    AlreadyAttacked,
}

/// Logical player slot taking turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Seat {
    Player1,
    Player2,
    Computer,
}

/// Game mode selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PlayerVsComputer,
    PlayerVsPlayer,
}

impl Mode {
    /// Seat occupying the second slot in this mode.
    pub fn opponent_seat(self) -> Seat {
        match self {
            Mode::PlayerVsComputer => Seat::Computer,
            Mode::PlayerVsPlayer => Seat::Player2,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    /// `1` selects single player against the computer, `2` two players.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mode::PlayerVsComputer),
            2 => Ok(Mode::PlayerVsPlayer),
            other => Err(ModeError::Unknown(other)),
        }
    }
}

/// Reasons a ship could not be placed. The board is unchanged on any of them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("ship would extend outside the grid")]
    OutOfBounds,
    #[error("ship would overlap another ship")]
    Overlap,
    #[error("ship length must be positive")]
    ZeroLength,
    #[error("ship is already placed on this board")]
    AlreadyPlaced,
    #[error("no legal position left for the ship")]
    NoRoom,
}

/// Caller contract violations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("coordinate ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown game mode {0}; expected 1 (vs computer) or 2 (two players)")]
    Unknown(u8),
}

/// Errors returned by the game controller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("operation not allowed during {0:?}")]
    WrongPhase(Phase),
    #[error("it is not the computer's turn")]
    NotComputerTurn,
    #[error("no legal target cell remains")]
    NoLegalTarget,
}
