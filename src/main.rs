//! arb-cycles — cyclic AMM arbitrage detection over a static pool-reserve
//! snapshot.
//!
//! Phase 1: The Cartographer (token interning, pool graph, ETH oracle)
//! Phase 2: The Brain (cycle enumeration, bottleneck-bounded optimization,
//! aggregation)

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arb_cycles::config::Config;
use arb_cycles::output::{write_csv, write_json_top_k};
use arb_cycles::pool_loader::load_snapshot;
use arb_cycles::run;

/// Detect cyclic AMM arbitrage opportunities in a static pool-reserve
/// snapshot.
#[derive(Debug, Parser)]
#[command(name = "arb-cycles", version, about)]
struct Args {
    /// Path to the pool snapshot JSON file.
    snapshot: PathBuf,

    /// Optional TOML file overlaying the default tunable constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the full ranked CSV report.
    #[arg(long, default_value = "arb_results.csv")]
    csv_out: PathBuf,

    /// Where to write the top-K JSON report.
    #[arg(long, default_value = "arb_results.json")]
    json_out: PathBuf,
}

fn print_banner() {
    println!();
    println!("{}", style("=============================================").cyan());
    println!("{}", style(" arb-cycles — cyclic AMM arbitrage detector").cyan().bold());
    println!("{}", style("=============================================").cyan());
    println!();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("arb_cycles=info")),
        )
        .init();

    print_banner();

    let args = Args::parse();

    let mut config = Config::from_env().wrap_err("loading configuration from environment")?;
    if let Some(path) = &args.config {
        config = config
            .merge_toml_file(path)
            .wrap_err_with(|| format!("loading config overlay from {}", path.display()))?;
    }

    println!(
        "{} Loading snapshot from {}",
        style("→").blue(),
        style(args.snapshot.display()).cyan()
    );
    let pools = load_snapshot(&args.snapshot)
        .wrap_err_with(|| format!("loading pool snapshot from {}", args.snapshot.display()))?;
    println!("{} Loaded {} pool records", style("✓").green(), pools.len());

    println!();
    println!("{}", style("═══ PHASE 1+2: GRAPH, ORACLE, CYCLES, OPTIMIZE ═══").blue().bold());
    let start = Instant::now();
    let out = run(&pools, &config);
    let elapsed = start.elapsed();

    println!(
        "{} Built graph: {} nodes, {} edges ({} pools skipped)",
        style("✓").green(),
        out.graph.node_count(),
        out.graph.edge_count(),
        out.graph_stats.skipped_total()
    );
    println!(
        "{} Found {} candidate cycles, {} net-profitable, in {:?}",
        style("✓").green(),
        out.cycles_found,
        out.results.len(),
        elapsed
    );

    println!();
    if out.results.is_empty() {
        println!("{}", style("═══ RESULTS: no profitable cycle found ═══").yellow().bold());
    } else {
        println!(
            "{}",
            style(format!("═══ RESULTS: {} profitable cycle(s) ═══", out.results.len()))
                .green()
                .bold()
        );
        println!();
        for (i, result) in out.results.iter().take(config.json_top_k).enumerate() {
            let path: Vec<&str> = result
                .path
                .iter()
                .map(|&id| out.interner.resolve(id).unwrap_or("?"))
                .collect();
            println!(
                "{}. {} | net: {:.6} ETH | input: {:.6}",
                i + 1,
                style(path.join(" -> ")).cyan(),
                result.net_profit_eth,
                result.opt_input
            );
        }
    }

    let weth_id = out.interner.lookup(&config.weth_address).unwrap_or(usize::MAX);
    let csv_file = std::fs::File::create(&args.csv_out)
        .wrap_err_with(|| format!("creating {}", args.csv_out.display()))?;
    write_csv(csv_file, &out.results, &out.interner, weth_id)
        .wrap_err_with(|| format!("writing {}", args.csv_out.display()))?;

    let json_file = std::fs::File::create(&args.json_out)
        .wrap_err_with(|| format!("creating {}", args.json_out.display()))?;
    write_json_top_k(json_file, &out.results, &out.interner, config.json_top_k)
        .wrap_err_with(|| format!("writing {}", args.json_out.display()))?;

    println!();
    println!(
        "{} Wrote {} and {}",
        style("✓").green(),
        args.csv_out.display(),
        args.json_out.display()
    );

    Ok(())
}
