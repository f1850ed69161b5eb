use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use u_benchsearch::bench::{BenchmarkRunner, FunctionRunConfig};
use u_benchsearch::config::{load_search_config, BenchmarkPlan};
use u_benchsearch::oracle::FunctionRegistry;
use u_benchsearch::report::{format_analysis_table, save_dimension};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sample benchmark functions and compare blind, local and iterative local search"
)]
struct Args {
    /// Benchmark plan: dimensions on line 1, then `id,min,max` per line
    #[arg(default_value = "config.txt")]
    config: PathBuf,

    /// Search config: iterations on line 1, alpha on line 2
    #[arg(long, default_value = "SearchAlgorithmConfig.txt")]
    search_config: PathBuf,

    /// Directory receiving the CSV reports
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Base random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Accepted-move cap of each local convergence loop (0 = unlimited)
    #[arg(long)]
    max_local_steps: Option<usize>,

    /// Also write every ranked sample to its own CSV file
    #[arg(long, default_value_t = false)]
    save_batches: bool,

    /// Print the registered function IDs and exit
    #[arg(long, default_value_t = false)]
    list_functions: bool,
}

/// Log filter from `RUST_LOG`-style directives, `info` when absent or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let args = Args::parse();
    let registry = FunctionRegistry::standard();

    if args.list_functions {
        for (id, name) in registry.listing() {
            println!("Function ID: {id}\tFunction Name: {name}");
        }
        return Ok(());
    }

    let plan = BenchmarkPlan::load(&args.config).map_err(|e| {
        format!("failed to read benchmark plan {}: {e}", args.config.display())
    })?;
    let mut search = load_search_config(&args.search_config).map_err(|e| {
        format!(
            "failed to read search config {}: {e}",
            args.search_config.display()
        )
    })?;
    if let Some(steps) = args.max_local_steps {
        search = search.with_max_local_steps(steps);
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let stem = args
        .config
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("config")
        .to_string();
    let runs = plan.runs(FunctionRunConfig::DEFAULT_SAMPLES);

    tracing::info!(
        dimensions = ?plan.dimensions,
        functions = runs.len(),
        iterations = search.iterations,
        alpha = search.alpha,
        base_seed,
        "starting benchmark"
    );

    for &dimensions in &plan.dimensions {
        let report =
            BenchmarkRunner::run_dimension(dimensions, &runs, &search, &registry, base_seed);
        let written = save_dimension(&report, &args.output_dir, &stem, args.save_batches)?;
        tracing::info!(dimensions, files = written.len(), "reports saved");
        println!("{}", format_analysis_table(&report));
    }

    Ok(())
}
