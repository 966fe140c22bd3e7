//! Token Cleaning Benchmarking Tool
//!
//! Measures the throughput of the cleaning operations on a real token
//! file, one token per whitespace-separated field. Useful for sizing the
//! cleaning stage of a frequency-counting pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark accent folding only
//! ./target/release/clean_bench /path/to/tokens.txt accents
//!
//! # Benchmark punctuation stripping only
//! ./target/release/clean_bench /path/to/tokens.txt punctuation
//!
//! # Benchmark classification only
//! ./target/release/clean_bench /path/to/tokens.txt classify
//!
//! # Run everything
//! ./target/release/clean_bench /path/to/tokens.txt all
//! ```
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large input file (10MB+) for stable measurements
//! - Pin to one core with `taskset` if numbers jitter between runs

use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use peneira_core::analyzer::{remove_accents_into, remove_punctuation_into};
use peneira_core::classify::classify;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: clean_bench <path> [accents|punctuation|classify|all]");
        process::exit(1);
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes).expect("input must be valid UTF-8");
    let tokens: Vec<&str> = input.split_whitespace().collect();

    println!("File size : {} bytes", input.len());
    println!("Tokens    : {}\n", tokens.len());

    match mode {
        "accents" => bench_accents(&tokens),
        "punctuation" => bench_punctuation(&tokens),
        "classify" => bench_classify(&tokens),
        _ => {
            bench_accents(&tokens);
            bench_punctuation(&tokens);
            bench_classify(&tokens);
        }
    }

    Ok(())
}

fn bench_accents(tokens: &[&str]) {
    let mut buf = String::with_capacity(64);

    let elapsed = measure(|| {
        let mut folded = 0usize;
        for token in tokens {
            remove_accents_into(token, &mut buf);
            folded += buf.len();
        }
        folded
    });

    report("Accent folding", tokens.len(), elapsed);
}

fn bench_punctuation(tokens: &[&str]) {
    let mut buf = String::with_capacity(64);

    let elapsed = measure(|| {
        let mut kept = 0usize;
        for token in tokens {
            remove_punctuation_into(token, &mut buf);
            kept += buf.len();
        }
        kept
    });

    report("Punctuation strip", tokens.len(), elapsed);
}

fn bench_classify(tokens: &[&str]) {
    let elapsed = measure(|| {
        let mut markers = 0usize;
        for token in tokens {
            if classify(token).is_marker() {
                markers += 1;
            }
        }
        markers
    });

    report("Classification", tokens.len(), elapsed);
}

/// Runs `work` with warmup, returns the best measured duration.
fn measure<F: FnMut() -> usize>(mut work: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(work());
    }

    let mut best = Duration::MAX;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        std::hint::black_box(work());
        best = best.min(start.elapsed());
    }
    best
}

fn report(label: &str, tokens: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { tokens as f64 / secs } else { 0.0 };

    println!("=== {label} ===");
    println!("Elapsed    : {:.3} s", secs);
    println!("Tokens/sec : {:.0}\n", rate);
}
