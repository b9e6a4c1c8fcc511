//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, CliPlayer, ComputerPlayer, GameController, GameError, MatchRunner, Mode,
    Orientation, Phase, Placement, Player, RandomTargeting, Seat, TurnReport,
};
