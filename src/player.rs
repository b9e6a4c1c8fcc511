use rand::rngs::SmallRng;

use crate::{
    board::{Board, Placement},
    common::{PlacementError, Seat},
    game::TurnReport,
    ship::ShipType,
};

/// Interface implemented by whoever drives a seat.
///
/// A Player is responsible for:
/// - Choosing where each ship of the fleet goes
/// - Selecting targets to attack
/// - Handling feedback from attacks
pub trait Player {
    /// Choose a position for `ship` on the player's own `board`.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<Placement>;

    /// Inform the player that its last placement was rejected.
    fn handle_placement_error(&mut self, _ship: ShipType, _err: PlacementError) {}

    /// Choose the next target on the opponent's board. Implementations must
    /// not look at intact ship cells of `target`.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board)
        -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _report: &TurnReport) {}

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_attack(&mut self, _report: &TurnReport, _own_board: &Board) {}

    /// Inform the player that the game has ended.
    fn handle_game_over(&mut self, _winner: Seat) {}
}
