use clap::Parser;
use isobot::board::{Board, Move, Player};
use isobot::perft::{perft, tree_nodes};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree node counts for knight's Isolation")]
struct Args {
    /// Deepest ply to count
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board size (square)
    #[arg(long, default_value_t = 7)]
    size: i32,
    /// Player 1 location as row,col (requires --p2)
    #[arg(long, value_delimiter = ',', num_args = 2)]
    p1: Option<Vec<i32>>,
    /// Player 2 location as row,col
    #[arg(long, value_delimiter = ',', num_args = 2)]
    p2: Option<Vec<i32>>,
    /// Report elapsed time and nodes per second
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = match (&args.p1, &args.p2) {
        (Some(a), Some(b)) => Board::with_positions(
            args.size, args.size, Move::new(a[0], a[1]), Move::new(b[0], b[1]), &[], Player::One,
        )?,
        (None, None) => Board::try_new(args.size, args.size)?,
        _ => anyhow::bail!("--p1 and --p2 must be given together"),
    };

    for d in 1..=args.depth {
        let t0 = Instant::now();
        let leaves = perft(&board, d)?;
        let total = tree_nodes(&board, d)?;
        let dt = t0.elapsed().as_secs_f64();
        if args.nps {
            let nps = if dt > 0.0 { total as f64 / dt } else { 0.0 };
            println!("depth {d}: leaves {leaves} nodes {total} elapsed {dt:.3}s nps {nps:.1}");
        } else {
            println!("depth {d}: leaves {leaves} nodes {total}");
        }
    }
    Ok(())
}
