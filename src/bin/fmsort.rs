use std::process;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fmsort::msort::{is_sorted, sort_parallel, sort_sequential};

#[derive(Parser)]
#[command(
    name = "fmsort",
    about = "Sort a list of random integers with threaded merge sort"
)]
struct Cli {
    /// Number of elements in the random list to be sorted
    count: usize,

    /// Number of worker threads (must be a power of two)
    #[arg(short = 'P', long = "threads", default_value_t = 1, value_name = "P")]
    threads: usize,

    /// Seed the input generator for reproducible runs
    #[arg(long = "seed", value_name = "SEED")]
    seed: Option<u64>,
}

fn report_sorted(data: &[i64]) {
    if is_sorted(data) {
        println!("data is sorted");
    } else {
        println!("data is not sorted");
    }
}

fn main() {
    let cli = Cli::parse();

    let mut data: Vec<i64> = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..cli.count).map(|_| rng.random()).collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..cli.count).map(|_| rng.random()).collect()
        }
    };

    println!("Sorting {} integers in {} threads", cli.count, cli.threads);
    report_sorted(&data);

    let start = Instant::now();
    if cli.threads == 1 {
        sort_sequential(&mut data);
    } else if let Err(e) = sort_parallel(&mut data, cli.threads) {
        eprintln!("fmsort: {e}");
        process::exit(2);
    }
    let elapsed = start.elapsed();

    println!("Elapsed: {:.4} seconds", elapsed.as_secs_f64());
    report_sorted(&data);
}
