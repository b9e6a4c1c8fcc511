use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    board::{Board, Placement},
    common::{GameError, Mode, PlacementError, Seat},
    config::BOARD_SIZE,
    game::TurnReport,
    ship::{Orientation, ShipType},
    ui,
};

use crate::player::Player;

/// Line-oriented input. Stdin locks per call so several players can share it.
pub trait LineSource {
    /// Append one line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading moves from a line-based text stream.
pub struct CliPlayer<R, W> {
    seat: Seat,
    input: R,
    output: W,
}

impl CliPlayer<Stdin, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio(seat: Seat) -> Self {
        Self::new(seat, io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> CliPlayer<R, W> {
    pub fn new(seat: Seat, input: R, output: W) -> Self {
        Self {
            seat,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        prompt_line(&mut self.input, &mut self.output, text)
    }
}

fn prompt_line<R: LineSource, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Parse `row col` where both lie on the grid.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let n = BOARD_SIZE as usize;
    (row < n && col < n).then_some((row, col))
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" | "true" => Some(Orientation::Horizontal),
        "v" | "vertical" | "false" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parse `row col h|v`. Range checks are left to the board, which reports
/// them as placement errors.
pub fn parse_placement(input: &str) -> Option<Placement> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    let orientation = parse_orientation(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Placement::new(row, col, orientation))
}

/// Ask for the game mode until a valid one is entered.
pub fn read_mode<R: LineSource, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Mode> {
    loop {
        let line = prompt_line(
            input,
            output,
            "Select mode: 1 for Single Player, 2 for Two Player: ",
        )?;
        let mode = line
            .parse::<u8>()
            .map_err(anyhow::Error::from)
            .and_then(|v| Ok(Mode::try_from(v)?));
        match mode {
            Ok(mode) => return Ok(mode),
            Err(e) => writeln!(output, "Invalid mode: {}", e)?,
        }
    }
}

impl<R: LineSource, W: Write> Player for CliPlayer<R, W> {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<Placement> {
        writeln!(self.output, "\n{}", ui::render_grid(&board.render(false)))?;
        loop {
            let text = format!(
                "{}, place your {} (length {}) as `row col h|v` [enter = random]: ",
                ui::seat_name(self.seat),
                ship.name(),
                ship.length()
            );
            let line = self.prompt(&text)?;
            if line.is_empty() {
                let placement = board
                    .random_placement(rng, ship.id(), ship.length())
                    .ok_or(GameError::Placement(PlacementError::NoRoom))?;
                return Ok(placement);
            }
            match parse_placement(&line) {
                Some(placement) => return Ok(placement),
                None => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    fn handle_placement_error(&mut self, ship: ShipType, err: PlacementError) {
        let _ = writeln!(self.output, "{}", ui::describe_placement_error(ship, err));
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        writeln!(
            self.output,
            "\n{}'s Turn:\n{}",
            ui::seat_name(self.seat),
            ui::render_grid(&target.render(true))
        )?;
        loop {
            let line = self.prompt("Enter your attack (row col): ")?;
            match parse_coord(&line) {
                Some(coord) => return Ok(coord),
                None => writeln!(self.output, "Invalid coordinate")?,
            }
        }
    }

    fn handle_attack_result(&mut self, report: &TurnReport) {
        let _ = writeln!(self.output, "{}", ui::describe_turn(report));
    }

    fn handle_opponent_attack(&mut self, report: &TurnReport, own_board: &Board) {
        // A human attacker on the same console has already seen the result.
        if report.attacker == Seat::Computer {
            let _ = writeln!(
                self.output,
                "{}\n{}",
                ui::describe_turn(report),
                ui::render_grid(&own_board.render(false))
            );
        }
    }

    fn handle_game_over(&mut self, winner: Seat) {
        if winner == self.seat || winner == Seat::Computer {
            let _ = writeln!(self.output, "\n{}", ui::announce_winner(winner));
        }
    }
}
