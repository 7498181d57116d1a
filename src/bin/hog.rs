//! Command-line entry point for the strategy experiments.

use rust_hog::{run_experiments, ExperimentConfig, DEFAULT_NUM_SAMPLES};

struct Args {
    run_experiments: bool,
    seed: u64,
    num_samples: u32,
}

fn print_usage() {
    println!("Usage: hog [--run-experiments] [--seed S] [--samples N]");
    println!();
    println!("Options:");
    println!("  --run-experiments, -r  Run strategy experiments and print the report");
    println!("  --seed S               Base RNG seed (default: 0)");
    println!(
        "  --samples N            Samples per Monte Carlo estimate (default: {DEFAULT_NUM_SAMPLES})"
    );
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut run = false;
    let mut seed = 0u64;
    let mut num_samples = DEFAULT_NUM_SAMPLES;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--run-experiments" | "-r" => {
                run = true;
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--samples" => {
                i += 1;
                if i < args.len() {
                    num_samples = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --samples value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: hog [--run-experiments] [--seed S] [--samples N]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        run_experiments: run,
        seed,
        num_samples,
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = parse_args();
    if !args.run_experiments {
        return;
    }

    let config = ExperimentConfig::new()
        .with_seed(args.seed)
        .with_num_samples(args.num_samples);

    match run_experiments(&config) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Experiment failed: {e}");
            std::process::exit(1);
        }
    }
}
