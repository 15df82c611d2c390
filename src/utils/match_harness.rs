//! Head-to-head match driver and series statistics.
//!
//! Runs two `Player`s against each other without any terminal I/O. A side
//! that has no legal move has its turn skipped; two skips in a row mean the
//! board is locked and the game is scored as a draw.

use std::time::Instant;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::errors::EngineError;
use crate::game_state::rudder_rules::RudderConfig;
use crate::game_state::rudder_types::*;
use crate::player::Player;
use crate::utils::coordinates::format_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(Side),
    Draw,
    DrawLocked,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Draw,
    DrawLocked,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub board: RudderConfig,
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: RudderConfig::default(),
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub skipped_turns: u32,
    pub x_move_count: u32,
    pub o_move_count: u32,
    pub x_total_time_ns: u128,
    pub o_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesStats {
    pub started_at: DateTime<Local>,
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    fn new(games: u16) -> Self {
        Self {
            started_at: Local::now(),
            games,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            outcomes: Vec::new(),
            player1_moves: 0,
            player2_moves: 0,
            player1_total_time_ns: 0,
            player2_total_time_ns: 0,
        }
    }

    pub fn player1_ms_per_move(&self) -> f64 {
        mean_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_ms_per_move(&self) -> f64 {
        mean_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn overall_ms_per_move(&self) -> f64 {
        mean_ms(
            self.player1_total_time_ns + self.player2_total_time_ns,
            self.player1_moves + self.player2_moves,
        )
    }

    pub fn report(&self) -> String {
        format!(
            "started={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_ms_per_move(),
            self.player2_ms_per_move(),
            self.overall_ms_per_move()
        )
    }
}

/// Play one game from the configured empty board.
///
/// `on_turn` sees the starting position and the position after every turn,
/// which is where a caller hooks in rendering.
pub fn play_match(
    player_x: &mut Player,
    player_o: &mut Player,
    config: &MatchConfig,
    mut on_turn: impl FnMut(&GameState),
) -> Result<MatchResult, EngineError> {
    player_x.new_game();
    player_o.new_game();

    let mut state = GameState::from_config(&config.board);
    let mut played_moves = Vec::<String>::new();
    let mut skipped_turns = 0u32;
    let mut consecutive_skips = 0u32;
    let mut x_move_count = 0u32;
    let mut o_move_count = 0u32;
    let mut x_total_time_ns = 0u128;
    let mut o_total_time_ns = 0u128;

    on_turn(&state);

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(result) = state.get_winner() {
            outcome = match result {
                Outcome::Win(side) => MatchOutcome::Win(side),
                Outcome::Draw => MatchOutcome::Draw,
            };
            break;
        }

        let mover = state.side_to_move();
        let player = match mover {
            Side::X => &mut *player_x,
            Side::O => &mut *player_o,
        };

        if !player.can_move(&state) {
            warn!(?mover, turn = state.get_turn(), "no legal move, skipping turn");
            state.pass_turn()?;
            skipped_turns += 1;
            consecutive_skips += 1;
            on_turn(&state);
            if consecutive_skips >= 2 {
                outcome = MatchOutcome::DrawLocked;
                break;
            }
            continue;
        }
        consecutive_skips = 0;

        let started = Instant::now();
        let mv = player.make_move(&mut state)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::X => {
                x_move_count = x_move_count.saturating_add(1);
                x_total_time_ns = x_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::O => {
                o_move_count = o_move_count.saturating_add(1);
                o_total_time_ns = o_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        debug!(player = player.name(), mv = %format_move(&mv), "move played");
        played_moves.push(format_move(&mv));
        on_turn(&state);
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(result) = state.get_winner() {
            outcome = match result {
                Outcome::Win(side) => MatchOutcome::Win(side),
                Outcome::Draw => MatchOutcome::Draw,
            };
        }
    }

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        skipped_turns,
        x_move_count,
        o_move_count,
        x_total_time_ns,
        o_total_time_ns,
    })
}

/// Play a series of games and aggregate win/loss/draw statistics.
///
/// Sides are assigned per game from a generator seeded with `base_seed`.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, EngineError>
where
    F1: Fn() -> Player,
    F2: Fn() -> Player,
{
    let mut stats = MatchSeriesStats::new(config.games);
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_x = side_rng.random_bool(0.5);
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            game = i + 1,
            games = config.games,
            x = if player1_is_x { "player1" } else { "player2" },
            "starting game"
        );

        let result = if player1_is_x {
            play_match(&mut player1, &mut player2, &config.per_game, |_| {})?
        } else {
            play_match(&mut player2, &mut player1, &config.per_game, |_| {})?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_x {
            (result.x_move_count, result.o_move_count, result.x_total_time_ns, result.o_total_time_ns)
        } else {
            (result.o_move_count, result.x_move_count, result.o_total_time_ns, result.x_total_time_ns)
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let series_outcome = match result.outcome {
            MatchOutcome::Win(side) => {
                let player = if (side == Side::X) == player1_is_x {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            MatchOutcome::Draw => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
            MatchOutcome::DrawLocked => {
                stats.draws += 1;
                SeriesOutcome::DrawLocked
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(series_outcome);

        info!(
            game = i + 1,
            result = ?series_outcome,
            plies = result.final_state.get_turn(),
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "game finished"
        );
    }

    Ok(stats)
}

fn mean_ms(total_ns: u128, moves: u32) -> f64 {
    match moves {
        0 => 0.0,
        n => total_ns as f64 / f64::from(n) / 1e6,
    }
}
