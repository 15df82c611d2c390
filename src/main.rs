//! x_rudder binary: interactive games and engine-vs-engine series.

mod cli;

use std::cell::Cell;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, EngineArgs, PlayerKind};
use x_rudder::engines::engine_human::HumanEngine;
use x_rudder::engines::engine_minimax_ab::{minimax_engine, MiniMaxConfig};
use x_rudder::engines::engine_random::RandomEngine;
use x_rudder::engines::engine_trait::Engine;
use x_rudder::errors::EngineError;
use x_rudder::game_state::rudder_rules::RudderConfig;
use x_rudder::move_generation::move_generator::MoveOrdering;
use x_rudder::player::Player;
use x_rudder::search::alpha_beta::SearchConfig;
use x_rudder::utils::match_harness::{
    play_match, play_match_series, MatchConfig, MatchOutcome, MatchSeriesConfig,
};
use x_rudder::utils::render_game_state::render_game_state;

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { x, o, engine, board } => run_game(x, o, &engine, board.into()),
        Command::Series {
            player1,
            player2,
            games,
            max_plies,
            engine,
            board,
        } => run_series(player1.into(), player2.into(), games, max_plies, &engine, board.into()),
    }
}

fn minimax_config(args: &EngineArgs, seed: Option<u64>) -> MiniMaxConfig {
    MiniMaxConfig {
        search: SearchConfig {
            max_depth: args.depth,
            movetime_ms: args.movetime_ms,
        },
        ordering: if args.raster {
            MoveOrdering::Raster
        } else {
            MoveOrdering::Kernel { shuffle: true }
        },
        book_plies: args.book_plies,
        seed,
    }
}

fn build_engine(kind: PlayerKind, args: &EngineArgs, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        PlayerKind::Human => Box::new(HumanEngine::stdio()),
        PlayerKind::Ai => minimax_engine(args.scorer.into(), minimax_config(args, seed)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn run_game(x: PlayerKind, o: PlayerKind, args: &EngineArgs, board: RudderConfig) -> Result<(), EngineError> {
    let mut player_x = Player::new("X", build_engine(x, args, args.seed));
    let mut player_o = Player::new("O", build_engine(o, args, args.seed.map(|s| s.wrapping_add(1))));
    info!(x = player_x.engine_name(), o = player_o.engine_name(), "starting game");

    let config = MatchConfig {
        board,
        ..MatchConfig::default()
    };
    let result = play_match(&mut player_x, &mut player_o, &config, |state| {
        println!("{}", render_game_state(state));
    })?;

    match result.outcome {
        MatchOutcome::Win(side) => println!("Player {} wins!", side.symbol()),
        MatchOutcome::Draw => println!("It's a draw! No pieces or shifts left."),
        MatchOutcome::DrawLocked => println!("It's a draw! Neither side can move."),
        MatchOutcome::DrawMaxPlies => println!("It's a draw! Turn limit reached."),
    }
    info!(
        outcome = ?result.outcome,
        turns = result.final_state.get_turn(),
        moves = %result.played_moves.join(" "),
        "game finished"
    );
    Ok(())
}

fn run_series(
    player1: PlayerKind,
    player2: PlayerKind,
    games: u16,
    max_plies: u32,
    args: &EngineArgs,
    board: RudderConfig,
) -> Result<(), EngineError> {
    let base_seed = args.seed.unwrap_or_else(rand::random);
    // Engine seeds advance once per player built.
    let next_seed = Cell::new(base_seed);
    let seed_for_game = || {
        let seed = next_seed.get();
        next_seed.set(seed.wrapping_add(1));
        Some(seed)
    };

    let stats = play_match_series(
        || Player::new("player1", build_engine(player1, args, seed_for_game())),
        || Player::new("player2", build_engine(player2, args, seed_for_game())),
        MatchSeriesConfig {
            games,
            base_seed,
            per_game: MatchConfig { board, max_plies },
        },
    )?;

    info!(report = %stats.report(), "series finished");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
