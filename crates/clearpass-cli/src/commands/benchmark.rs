use clap::Args;
use serde_json::Value;

use clearpass_core::{benchmark_for, industries, Benchmark};

/// Arguments for benchmark lookup
#[derive(Args)]
pub struct BenchmarkArgs {
    /// Industry name (exact match; unknown names use the default row)
    #[arg(long)]
    pub industry: Option<String>,

    /// List every industry row in the benchmark table
    #[arg(long)]
    pub list: bool,
}

pub fn run_benchmark(args: BenchmarkArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.list {
        let rows: Vec<Benchmark> = industries().into_iter().map(benchmark_for).collect();
        return Ok(serde_json::to_value(rows)?);
    }

    let industry = args
        .industry
        .ok_or("--industry is required (or pass --list)")?;
    Ok(serde_json::to_value(benchmark_for(&industry))?)
}
