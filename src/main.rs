use anyhow::{Context, Result};
use clap::Parser;
use isobot::agents::AgentKind;
use isobot::board::{Board, GameState, Move};
use isobot::config::AgentConfig;
use isobot::game::{self, DEFAULT_TIME_LIMIT_MS};
use isobot::search::eval::HeuristicKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one game of knight's Isolation between two agents", long_about = None)]
struct Args {
    /// Agent for player 1: random, greedy, minimax, alphabeta
    #[arg(long, default_value = "alphabeta")]
    p1: AgentKind,

    /// Agent for player 2
    #[arg(long, default_value = "minimax")]
    p2: AgentKind,

    /// Board width
    #[arg(long, default_value_t = 7)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: i32,

    /// Per-move time limit in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    time_limit: u64,

    /// JSON agent config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed minimax depth
    #[arg(long)]
    depth: Option<u32>,

    /// Heuristic, e.g. improved, aggressive, corner_distance
    #[arg(long)]
    heuristic: Option<HeuristicKind>,

    /// Seed for random agents and the alpha-beta root fallback
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<AgentConfig> {
    let mut cfg = match &args.config {
        Some(path) => AgentConfig::from_json_file(path)
            .with_context(|| format!("loading agent config {}", path.display()))?,
        None => AgentConfig::default(),
    };
    if let Some(d) = args.depth { cfg.search_depth = d; }
    if let Some(h) = args.heuristic { cfg.heuristic = h; }
    if let Some(s) = args.seed { cfg.seed = s; }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.width < 3 || args.height < 3 {
        anyhow::bail!("board must be at least 3x3, got {}x{}", args.width, args.height);
    }
    let cfg = load_config(&args)?;

    let mut p1 = args.p1.build(&cfg, args.width, args.height);
    // Different stream for the second seat so two random agents do not mirror.
    let cfg2 = AgentConfig { seed: cfg.seed.wrapping_add(1), ..cfg.clone() };
    let mut p2 = args.p2.build(&cfg2, args.width, args.height);

    let board = Board::try_new(args.width, args.height)?;
    println!("{} (1) vs {} (2) on {}x{}, {} ms per move", args.p1, args.p2, args.width, args.height, args.time_limit);
    let outcome = game::play(board.clone(), [p1.as_mut(), p2.as_mut()], args.time_limit);

    let mut replay = board;
    for (ply, mv) in outcome.history.iter().enumerate() {
        let side = replay.active_player();
        replay.apply_move(*mv).context("replaying game history")?;
        if args.verbose {
            println!("ply {:>2}: player {} -> {}\n{}", ply + 1, side, mv, replay);
        }
    }
    if !args.verbose {
        let moves: Vec<String> = outcome.history.iter().map(Move::to_string).collect();
        println!("moves: {}", moves.join(" "));
        println!("{}", replay);
    }
    println!("winner: player {} ({:?})", outcome.winner, outcome.reason);
    Ok(())
}
