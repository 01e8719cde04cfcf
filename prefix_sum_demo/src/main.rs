mod args;

use args::Args;
use clap::Parser;
use prefix_sum_tree::{PrefixSumTree, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn initial_values(args: &Args) -> Vec<i64> {
    match args.random_len {
        Some(len) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            (0..len).map(|_| rng.gen_range(-100..=100)).collect()
        }
        None => args.values.clone(),
    }
}

fn run(args: &Args) -> Result<()> {
    let mut tree: PrefixSumTree<i64> = initial_values(args).into_iter().collect();
    println!("nodes: {}", tree);
    println!("sum() = {}", tree.sum());
    if !tree.is_empty() {
        let last = tree.size() - 1;
        println!("sum({}) = {}", last / 2, tree.prefix_sum(last / 2)?);
    }

    let (start, end) = args.query_range();
    println!("sum({}, {}) = {}", start, end, tree.range_sum(start, end)?);

    let (update_start, update_end) = args.update_range();
    if tree.update(update_start, update_end, args.delta)? {
        info!(update_start, update_end, delta = args.delta, "applied update");
        println!("sum({}, {}) = {}", start, end, tree.range_sum(start, end)?);
    } else {
        println!(
            "update({}, {}) is out of bounds for a tree of size {}",
            update_start,
            update_end,
            tree.size()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    run(&args)
}
