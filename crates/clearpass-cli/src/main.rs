mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::benchmark::BenchmarkArgs;
use commands::statement::{AnalyzeArgs, ParseArgs, RatiosArgs};

/// Statement normalization and underwriting ratios
#[derive(Parser)]
#[command(
    name = "cpass",
    version,
    about = "Statement normalization and underwriting ratios",
    long_about = "A CLI for normalizing financial statement exports into canonical \
                  line items and deriving underwriting ratios with decimal precision. \
                  Reads CSV statement tables in long or multi-year wide layouts, \
                  computes ratio suites from basics JSON, and reports industry \
                  benchmark medians."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a statement table and report basics, ratios, and benchmarks
    Analyze(AnalyzeArgs),
    /// Normalize a statement table into canonical basics only
    Parse(ParseArgs),
    /// Compute underwriting ratios from a basics document
    Ratios(RatiosArgs),
    /// Look up industry benchmark medians
    Benchmark(BenchmarkArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::statement::run_analyze(args),
        Commands::Parse(args) => commands::statement::run_parse(args),
        Commands::Ratios(args) => commands::statement::run_ratios(args),
        Commands::Benchmark(args) => commands::benchmark::run_benchmark(args),
        Commands::Version => {
            println!("cpass {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
