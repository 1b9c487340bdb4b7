//! Cyclic AMM arbitrage detection over a static pool-reserve snapshot.
//!
//! Phase 1: The Cartographer (token interning, pool graph, ETH oracle)
//! Phase 2: The Brain (cycle enumeration, bottleneck-bounded optimization,
//! aggregation)

pub mod brain;
pub mod config;
pub mod error;
pub mod graph;
pub mod interner;
pub mod oracle;
pub mod output;
pub mod pool;
pub mod pool_loader;

use brain::aggregator::{aggregate, ArbResult};
use brain::spfa::find_cycles;
use config::Config;
use graph::{build_graph, BuildStats, Graph};
use interner::TokenInterner;
use oracle::price_from_weth;
use pool::PoolFields;

/// Everything the pipeline produced, for the caller to report or write out.
pub struct RunOutput {
    pub results: Vec<ArbResult>,
    pub interner: TokenInterner,
    pub graph_stats: BuildStats,
    pub graph: Graph,
    pub cycles_found: usize,
}

/// Run the full pipeline over an already-loaded snapshot: build the graph,
/// price every token against WETH, enumerate candidate cycles, optimize and
/// rank them (`spec.md` §5).
pub fn run<P: PoolFields>(pools: &[P], config: &Config) -> RunOutput {
    let mut interner = TokenInterner::new();
    let (graph, graph_stats) = build_graph(pools.iter(), &mut interner, config);

    let weth_id = interner.get_id(&config.weth_address);
    let price = price_from_weth(&graph, weth_id);

    let cycles = find_cycles(&graph, config);
    let cycles_found = cycles.len();

    let results = aggregate(&graph, &cycles, &price, config);

    RunOutput {
        results,
        interner,
        graph_stats,
        graph,
        cycles_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool::{PoolRecord, TokenRef};

    fn record(t0: &str, t1: &str, r0: &str, r1: &str, usd: &str) -> PoolRecord {
        PoolRecord {
            token0: TokenRef { id: t0.to_string() },
            token1: TokenRef { id: t1.to_string() },
            reserve0: r0.to_string(),
            reserve1: r1.to_string(),
            reserve_usd: usd.to_string(),
        }
    }

    #[test]
    fn empty_snapshot_yields_no_results() {
        let config = Config::default();
        let pools: Vec<PoolRecord> = Vec::new();
        let out = run(&pools, &config);
        assert!(out.results.is_empty());
        assert_eq!(out.cycles_found, 0);
    }

    #[test]
    fn single_fair_pool_has_no_cycles() {
        let config = Config::default();
        let pools = vec![record(
            &config.weth_address,
            "0xusdc",
            "1000",
            "2930000",
            "6000000",
        )];
        let out = run(&pools, &config);
        assert!(out.results.is_empty());
    }

    #[test]
    fn triangular_mispricing_against_weth_is_detected() {
        let mut config = Config::default();
        config.gas_cost_eth = 0.0;
        config.net_profit_floor = 0.0;
        config.min_tvl_usd = 0.0;
        // A genuine negative cycle never drains SPFA's queue; cap steps low.
        config.spfa_step_cap = 200;

        let weth = config.weth_address.clone();
        let pools = vec![
            record(&weth, "0xb", "1000", "1000", "1000000"),
            record("0xb", "0xc", "1000", "1000", "1000000"),
            record("0xc", &weth, "1000", "1010", "1000000"),
        ];

        let out = run(&pools, &config);
        assert!(out.cycles_found > 0);
        assert!(!out.results.is_empty());
        assert!(out.results[0].net_profit_eth > 0.0);
    }

    #[test]
    fn high_gas_cost_prunes_every_result() {
        let mut config = Config::default();
        config.gas_cost_eth = 1_000_000.0;
        config.min_tvl_usd = 0.0;
        config.spfa_step_cap = 200;

        let weth = config.weth_address.clone();
        let pools = vec![
            record(&weth, "0xb", "1000", "1000", "1000000"),
            record("0xb", "0xc", "1000", "1000", "1000000"),
            record("0xc", &weth, "1000", "1010", "1000000"),
        ];

        let out = run(&pools, &config);
        assert!(out.results.is_empty());
    }
}
