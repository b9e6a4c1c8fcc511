mod board;
mod common;
mod config;
mod game;
mod logging;
mod match_runner;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod strategy;
pub mod prelude;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level};
pub use match_runner::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
pub use strategy::*;
