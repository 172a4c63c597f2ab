use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use isobot::agents::AgentKind;
use isobot::board::{Board, Player};
use isobot::config::AgentConfig;
use isobot::game::{self, EndReason, DEFAULT_TIME_LIMIT_MS};
use isobot::search::eval::HeuristicKind;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "isobot-tournament", version, about = "Round-robin Isolation tournament between agents")]
struct Args {
    /// Comma-separated agents, e.g. random,greedy,minimax,alphabeta
    #[arg(long, value_delimiter = ',', default_value = "random,greedy,minimax,alphabeta")]
    agents: Vec<AgentKind>,

    /// Heuristic used by every search agent
    #[arg(long, default_value = "corner_distance")]
    heuristic: HeuristicKind,

    /// Games per ordered pairing (each side plays first this many times)
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Per-move time limit in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    time_limit: u64,

    /// Board size (square)
    #[arg(long, default_value_t = 7)]
    size: i32,

    /// Parallel games (1 = sequential)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Base seed; each game derives its own
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write a JSON report here
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct MatchRecord {
    first: AgentKind,
    second: AgentKind,
    winner: AgentKind,
    reason: EndReason,
    plies: usize,
}

#[derive(Debug, Default, Clone, Serialize)]
struct Standing {
    agent: String,
    wins: usize,
    losses: usize,
    timeouts: usize,
    forfeits: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.agents.len() < 2 { anyhow::bail!("need at least two agents"); }
    let start = Board::try_new(args.size, args.size)?;

    let mut schedule = Vec::new();
    for &a in &args.agents {
        for &b in &args.agents {
            if a == b { continue; }
            for g in 0..args.games { schedule.push((a, b, g)); }
        }
    }

    let pb = ProgressBar::new(schedule.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let run = |&(first, second, g): &(AgentKind, AgentKind, usize)| {
        let seed = args.seed ^ ((g as u64) << 8) ^ ((first as u64) << 4) ^ (second as u64);
        let cfg = AgentConfig { heuristic: args.heuristic, seed, ..AgentConfig::default() };
        let cfg2 = AgentConfig { seed: seed.wrapping_add(1), ..cfg.clone() };
        let mut a = first.build(&cfg, args.size, args.size);
        let mut b = second.build(&cfg2, args.size, args.size);
        let out = game::play(start.clone(), [a.as_mut(), b.as_mut()], args.time_limit);
        pb.inc(1);
        let winner = if out.winner == Player::One { first } else { second };
        MatchRecord { first, second, winner, reason: out.reason, plies: out.history.len() }
    };

    let records: Vec<MatchRecord> = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()
            .context("building thread pool")?;
        pool.install(|| schedule.par_iter().map(run).collect())
    } else {
        schedule.iter().map(run).collect()
    };
    pb.finish_and_clear();

    let mut standings: Vec<Standing> = args
        .agents
        .iter()
        .map(|a| Standing { agent: a.to_string(), ..Standing::default() })
        .collect();
    for r in &records {
        let loser = if r.winner == r.first { r.second } else { r.first };
        for s in standings.iter_mut() {
            if s.agent == r.winner.to_string() { s.wins += 1; }
            if s.agent == loser.to_string() {
                s.losses += 1;
                match r.reason {
                    EndReason::Timeout => s.timeouts += 1,
                    EndReason::Forfeit => s.forfeits += 1,
                    EndReason::Isolated => {}
                }
            }
        }
    }

    println!("{:<10} {:>6} {:>6} {:>8} {:>8} {:>7}", "agent", "wins", "losses", "timeouts", "forfeits", "win%");
    for s in &standings {
        let played = (s.wins + s.losses).max(1);
        println!(
            "{:<10} {:>6} {:>6} {:>8} {:>8} {:>6.1}%",
            s.agent, s.wins, s.losses, s.timeouts, s.forfeits, 100.0 * s.wins as f64 / played as f64
        );
    }

    if let Some(path) = &args.out {
        let payload = serde_json::json!({ "standings": standings, "games": records });
        std::fs::write(path, serde_json::to_string_pretty(&payload)?)
            .with_context(|| format!("writing report {}", path.display()))?;
    }
    Ok(())
}
