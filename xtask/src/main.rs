use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-share ledger workspace",
    long_about = "A unified CLI for running the ledger demo, benchmarks\n\
                  and CI checks in the ride-share ledger workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the sample ledger in support/ and dispatch one trip
    Demo {
        /// Passenger requesting the trip
        #[arg(long, default_value_t = 5)]
        passenger_id: i64,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, demo, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the demo against the sample data
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_demo(passenger_id: i64) {
    let id = passenger_id.to_string();

    step("Ledger summary");
    run_cargo(&["run", "-p", "ledger_cli", "--", "--data-dir", "support", "summary"]);

    step(&format!("Request a trip for passenger {id}"));
    run_cargo(&[
        "run",
        "-p",
        "ledger_cli",
        "--",
        "--data-dir",
        "support",
        "request-trip",
        &id,
    ]);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ledger_core");
    run_cargo(&["test", "-p", "ledger_core"]);

    step("Test ledger_cli");
    run_cargo(&["test", "-p", "ledger_cli"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "ledger_core", "--bench", "dispatch"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { passenger_id } => run_demo(passenger_id),
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demo => run_demo(5),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    run_demo(5);
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
