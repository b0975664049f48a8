use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use lib2048::agent::{Game, GameAgent};
use lib2048::ai::{common, AlphaBeta, AlphaBetaConfig};
use lib2048::config::EngineConfig;
use lib2048::engine::{Board, GameState, Score};
use log::{debug, info};
use rayon::prelude::*;

/// Play many seeded games with the alpha-beta player and summarize them.
#[derive(Parser, Debug)]
#[command(name = "selfplay", version)]
struct Args {
    /// Engine TOML config (defaults to the classic 4x4 game)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of games to play
    #[arg(long, value_name = "N", default_value_t = 16)]
    games: u64,
    /// Seed of the first game; game i uses seed + i
    #[arg(long, value_name = "N", default_value_t = 0)]
    seed: u64,
    /// Alpha-beta search depth
    #[arg(long, value_name = "N", default_value_t = 3)]
    depth: u32,
    /// Per-game move limit
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,
    /// Worker threads (rayon default when omitted)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Outcome {
    seed: u64,
    moves: u64,
    score: Score,
    highest_tile: u64,
    state: GameState,
}

fn play(cfg: &EngineConfig, seed: u64, depth: u32, max_moves: Option<u64>) -> Result<Outcome> {
    let mut game = Game::seeded(cfg, seed)?;
    let mut player = AlphaBeta::with_config(AlphaBetaConfig { depth });
    let mut moves = 0u64;
    while !game.game_state().is_terminal() && max_moves.map_or(true, |max| moves < max) {
        let board = Board::deserialize_with(&common::current_state(&game), cfg)?;
        let Some(direction) = player.best_move(&board) else {
            break;
        };
        game.make_move(direction);
        moves += 1;
    }
    let outcome = Outcome {
        seed,
        moves,
        score: game.score(),
        highest_tile: game.board().highest_tile(),
        state: game.game_state(),
    };
    debug!("{:?}", outcome);
    Ok(outcome)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => EngineConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("failed to configure thread pool")?;
    }
    info!("playing {} games from seed {} at depth {}", args.games, args.seed, args.depth);

    let start = Instant::now();
    let pb = ProgressBar::new(args.games);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} games ({eta})",
        )?
        .progress_chars("=>-"),
    );
    let outcomes: Vec<Outcome> = (0..args.games)
        .into_par_iter()
        .map(|i| {
            let r = play(&cfg, args.seed.wrapping_add(i), args.depth, args.max_moves);
            pb.inc(1);
            r
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    let wins = outcomes.iter().filter(|o| o.state == GameState::Win).count();
    let losses = outcomes.iter().filter(|o| o.state == GameState::Loss).count();
    let total_moves: u64 = outcomes.iter().map(|o| o.moves).sum();
    let mean_score = if outcomes.is_empty() {
        0.0
    } else {
        outcomes.iter().map(|o| o.score as f64).sum::<f64>() / outcomes.len() as f64
    };
    let best = outcomes.iter().max_by_key(|o| (o.score, o.highest_tile));
    let elapsed = start.elapsed().as_secs_f64().max(1e-6);

    println!(
        "games: {} | wins: {} | losses: {} | unfinished: {}",
        outcomes.len(),
        wins,
        losses,
        outcomes.len() - wins - losses
    );
    println!("mean score: {:.1}", mean_score);
    if let Some(b) = best {
        println!(
            "max score: {} (seed {}, highest tile {}, {} moves)",
            b.score, b.seed, b.highest_tile, b.moves
        );
    }
    info!(
        "{} moves in {:.1}s ({:.1} moves/sec)",
        total_moves,
        elapsed,
        total_moves as f64 / elapsed
    );
    Ok(())
}
