use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use lib2048::agent::{Game, GameAgent};
use lib2048::ai::{common, AlphaBeta, AlphaBetaConfig};
use lib2048::config::EngineConfig;
use lib2048::engine::Board;
use lib2048::serialization::SerializedBoard;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Play one game of 2048 with the alpha-beta player.
#[derive(Parser, Debug)]
#[command(name = "lib2048", version)]
struct Args {
    /// Engine TOML config (defaults to the classic 4x4 game)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// RNG seed for tile spawns (random when omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Alpha-beta search depth
    #[arg(long, value_name = "N", default_value_t = 3)]
    depth: u32,
    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,
    /// Start from a JSON serialized board instead of a fresh one
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,
    /// Only print the final board and summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => EngineConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}, depth {}, {}x{} grid", args.depth, cfg.side_len, cfg.side_len);

    let mut game = match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let ser: SerializedBoard =
                serde_json::from_str(&text).context("board file is not valid JSON")?;
            let board = Board::deserialize_with(&ser, &cfg).context("board file is malformed")?;
            Game::from_board(board, StdRng::seed_from_u64(seed))
        }
        None => Game::seeded(&cfg, seed)?,
    };

    let mut player = AlphaBeta::with_config(AlphaBetaConfig { depth: args.depth });
    let start = Instant::now();
    let mut move_count: u64 = 0;
    let mut peak_nodes: u64 = 0;
    if !args.quiet {
        println!("{}", game.board());
    }

    while !game.game_state().is_terminal() {
        if args.max_moves.is_some_and(|max| move_count >= max) {
            info!("move limit reached");
            break;
        }
        let board = Board::deserialize_with(&common::current_state(&game), &cfg)?;
        let Some(direction) = player.best_move(&board) else {
            break;
        };
        game.make_move(direction);
        move_count += 1;
        peak_nodes = peak_nodes.max(player.last_stats().nodes);
        if !args.quiet {
            println!("{direction}");
            println!("{}", game.board());
        }
    }

    if args.quiet {
        println!("{}", game.board());
    }
    let elapsed = start.elapsed().as_secs_f64().max(1e-6);
    println!(
        "Moves made: {}, Score: {}, Highest tile: {}, State: {:?}",
        move_count,
        game.score(),
        game.board().highest_tile(),
        game.game_state()
    );
    info!(
        "{:.1} moves/sec, max states considered for a move: {}",
        move_count as f64 / elapsed,
        peak_nodes
    );
    Ok(())
}
