//! Suite runner
//!
//! Runs the benchmark suites sequentially and writes JSON/Markdown reports.

use clap::Parser;

use qvb_benchmark::report::{generate_markdown_report, save_combined_json, save_markdown_report};
use qvb_benchmark::suites;
use qvb_benchmark::{RunConfig, Suite};

#[derive(Parser, Debug)]
#[command(name = "qvb-bench", about = "Run the qvb benchmark suites")]
struct Args {
    /// Suite family to run: core, device, app, or all
    #[arg(long, default_value = "all")]
    suite: String,

    /// Timed repetitions per benchmark and grid point
    #[arg(long, default_value_t = 5)]
    trials: usize,

    /// Untimed warmup runs before the trials
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Write all results to this JSON file
    #[arg(long)]
    json: Option<String>,

    /// Write the Markdown report to this file
    #[arg(long)]
    markdown: Option<String>,
}

fn select_suites(family: &str) -> Vec<Suite> {
    match family {
        "core" => vec![
            suites::core::circuit_evaluation(),
            suites::core::gradient_computation(),
            suites::core::optimization(),
            suites::core::state_allocation(),
        ],
        "device" => vec![suites::device::circuit_evaluation()],
        "app" => vec![suites::app::vqe_evaluation(), suites::app::qaoa_evaluation()],
        _ => suites::all_suites(),
    }
}

fn main() -> qvb_benchmark::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = RunConfig {
        trials: args.trials,
        warmup: args.warmup,
    };

    let mut results = Vec::new();
    for suite in select_suites(&args.suite) {
        log::info!("running suite {}", suite.name);
        let result = suite.run(&config);
        let failures = result.failures().count();
        if failures > 0 {
            log::warn!("suite {} had {} failing benchmarks", result.name, failures);
        }
        results.push(result);
    }

    if let Some(path) = &args.json {
        save_combined_json(&results, path)?;
        log::info!("wrote {path}");
    }
    match &args.markdown {
        Some(path) => {
            save_markdown_report(&results, path)?;
            log::info!("wrote {path}");
        }
        None => print!("{}", generate_markdown_report(&results)),
    }

    Ok(())
}
