use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the fare comparison workspace",
    long_about = "A unified CLI for running the demo comparison, benchmarks,\n\
                  and CI checks in the fare comparison workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an offline demo comparison with a fixed seed
    Demo,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
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
    /// Run benchmarks
    Bench,
    /// Run check + bench
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

    step("Test fare_core");
    run_cargo(&["test", "-p", "fare_core"]);

    step("Test fare_service");
    run_cargo(&["test", "-p", "fare_service"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            run_cargo(&[
                "run",
                "-p",
                "fare_service",
                "--bin",
                "fare_compare",
                "--",
                "Central Station",
                "Old Town",
                "--hour",
                "18",
                "--seed",
                "42",
                "--pretty",
            ]);
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_bench();
            }
        },
    }
}
