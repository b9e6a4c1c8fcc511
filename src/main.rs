use std::io;

use broadside::{
    init_logging, read_mode, CliPlayer, ComputerPlayer, GameController, MatchRunner, Mode, Player,
    Seat,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-grid naval combat on the command line", long_about = None)]
struct Cli {
    #[arg(long, help = "Game mode: 1 = against the computer, 2 = two players (asked when omitted)")]
    mode: Option<u8>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Place human fleets at random instead of asking")]
    auto_place: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mode = match cli.mode {
        Some(value) => Mode::try_from(value)?,
        None => read_mode(&mut io::stdin(), &mut io::stdout())?,
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut controller = GameController::new(mode);
    if cli.auto_place {
        controller.place_fleet_randomly(&mut rng)?;
        if mode == Mode::PlayerVsPlayer {
            controller.place_fleet_randomly(&mut rng)?;
        }
    }

    let player1: Box<dyn Player> = Box::new(CliPlayer::stdio(Seat::Player1));
    let opponent: Box<dyn Player> = match mode {
        Mode::PlayerVsComputer => Box::new(ComputerPlayer::new()),
        Mode::PlayerVsPlayer => Box::new(CliPlayer::stdio(Seat::Player2)),
    };
    let mut runner = MatchRunner::new(controller, [player1, opponent]);
    runner.run(&mut rng)?;
    Ok(())
}
