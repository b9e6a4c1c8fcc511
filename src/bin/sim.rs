use broadside::{
    init_logging, ui, ComputerPlayer, GameController, MatchRunner, Mode, Player, Seat,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

/// Outcome of one simulated game, printed as JSON.
#[derive(Serialize)]
struct Summary {
    seed: u64,
    winner: &'static str,
    winner_seat: Seat,
    attacks: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    // Player 1's seat is driven by a computer player as well.
    let players: [Box<dyn Player>; 2] =
        [Box::new(ComputerPlayer::new()), Box::new(ComputerPlayer::new())];
    let mut runner = MatchRunner::new(GameController::new(Mode::PlayerVsComputer), players);
    let winner = runner.run(&mut rng)?;

    let summary = Summary {
        seed,
        winner: ui::seat_name(winner),
        winner_seat: winner,
        attacks: runner.controller().attacks_made(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
