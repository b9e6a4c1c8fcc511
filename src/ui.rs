//! Text rendering for the console front end. Nothing in here touches game
//! state; it only formats views and reports handed out by the core.

use crate::{
    board::{BoardView, CellView},
    common::{AttackResult, PlacementError, Seat},
    config::BOARD_SIZE,
    game::TurnReport,
    ship::ShipType,
};

pub const WATER: char = '~';
pub const HIT: char = 'X';
pub const MISS: char = 'M';

/// Display character for one cell. Intact ship segments show the first
/// letter of the ship's name.
pub fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Water => WATER,
        CellView::Ship(id) => id.name().chars().next().unwrap_or('S'),
        CellView::Hit => HIT,
        CellView::Miss => MISS,
    }
}

/// Render a board view with a column header and row labels.
pub fn render_grid(view: &BoardView) -> String {
    let mut out = String::from(" ");
    for c in 0..BOARD_SIZE as usize {
        out.push_str(&format!(" {}", c));
    }
    out.push('\n');
    for (r, row) in view.iter().enumerate() {
        out.push_str(&r.to_string());
        for &cell in row.iter() {
            out.push(' ');
            out.push(glyph(cell));
        }
        out.push('\n');
    }
    out
}

pub fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player1 => "Player 1",
        Seat::Player2 => "Player 2",
        Seat::Computer => "Computer",
    }
}

/// One-line summary of an attack, e.g. `Computer attacks 3 4: hit! Sank the Cruiser.`
pub fn describe_turn(report: &TurnReport) -> String {
    let outcome = match report.result {
        AttackResult::Hit => "hit!",
        AttackResult::Miss => "miss.",
        AttackResult::AlreadyAttacked => "already attacked, no effect.",
    };
    let mut line = format!(
        "{} attacks {} {}: {}",
        seat_name(report.attacker),
        report.row,
        report.col,
        outcome
    );
    if let Some(id) = report.sunk {
        line.push_str(&format!(" Sank the {}.", id));
    }
    line
}

pub fn announce_winner(winner: Seat) -> String {
    format!("{} wins!", seat_name(winner))
}

pub fn describe_placement_error(ship: ShipType, err: PlacementError) -> String {
    format!("Invalid placement for {}: {}. Try again.", ship.name(), err)
}
