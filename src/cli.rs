//! Command-line interface for the x_rudder binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use x_rudder::game_state::rudder_rules::{
    RudderConfig, DEFAULT_HEIGHT, DEFAULT_PIECES_PER_SIDE, DEFAULT_SHIFTS, DEFAULT_WIDTH,
};
use x_rudder::search::board_scoring::ScorerKind;

/// X-Rudder - placement-and-shift board game with an alpha-beta engine
#[derive(Parser, Debug)]
#[command(name = "x_rudder")]
#[command(about = "Play X-Rudder against a human, the engine, or a random mover", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game, rendering the board after every turn
    Play {
        /// Who plays X (moves first)
        #[arg(long, value_enum, default_value = "human", env = "XRUDDER_X")]
        x: PlayerKind,

        /// Who plays O
        #[arg(long, value_enum, default_value = "ai", env = "XRUDDER_O")]
        o: PlayerKind,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Play a series of engine games and print win/draw statistics
    Series {
        #[arg(long, value_enum, default_value = "ai")]
        player1: BotKind,

        #[arg(long, value_enum, default_value = "random")]
        player2: BotKind,

        /// Number of games
        #[arg(short, long, default_value_t = 9, env = "XRUDDER_GAMES")]
        games: u16,

        /// Ply limit per game before it is scored as a draw
        #[arg(long, default_value_t = 200)]
        max_plies: u32,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        board: BoardArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Ai,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    Ai,
    Random,
}

impl From<BotKind> for PlayerKind {
    fn from(kind: BotKind) -> Self {
        match kind {
            BotKind::Ai => PlayerKind::Ai,
            BotKind::Random => PlayerKind::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScorerArg {
    Neighborhood,
    Balanced,
    Aggressive,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Neighborhood => ScorerKind::Neighborhood,
            ScorerArg::Balanced => ScorerKind::PatternBalanced,
            ScorerArg::Aggressive => ScorerKind::PatternAggressive,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Search depth in plies
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..),
        env = "XRUDDER_DEPTH"
    )]
    pub depth: u8,

    /// Static evaluation used at the search horizon
    #[arg(long, value_enum, default_value = "balanced", env = "XRUDDER_SCORER")]
    pub scorer: ScorerArg,

    /// Seed for move shuffling, random movers and side assignment
    #[arg(long, env = "XRUDDER_SEED")]
    pub seed: Option<u64>,

    /// Turns played from the fixed opening before searching
    #[arg(long, default_value_t = 1, env = "XRUDDER_BOOK_PLIES")]
    pub book_plies: u32,

    /// Soft per-move time budget in milliseconds
    #[arg(long, env = "XRUDDER_MOVETIME_MS")]
    pub movetime_ms: Option<u64>,

    /// Visit cells in raster order instead of rings around the last move
    #[arg(long)]
    pub raster: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Pieces each side may place
    #[arg(long, default_value_t = DEFAULT_PIECES_PER_SIDE)]
    pub pieces: u32,

    /// Shifts shared by both sides
    #[arg(long, default_value_t = DEFAULT_SHIFTS)]
    pub shifts: u32,
}

impl From<BoardArgs> for RudderConfig {
    fn from(args: BoardArgs) -> Self {
        RudderConfig {
            width: args.width,
            height: args.height,
            initial_pieces: args.pieces,
            initial_shifts: args.shifts,
        }
    }
}
