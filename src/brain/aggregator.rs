//! Result Aggregator
//!
//! Step 2.3: optimize every candidate cycle in parallel, filter to the
//! net-profitable ones, and rank them (`spec.md` §4.6).

use rayon::prelude::*;

use crate::brain::optimizer::golden_section_search;
use crate::brain::spfa::Cycle;
use crate::config::Config;
use crate::graph::Graph;

/// One fully-optimized, net-profitable arbitrage candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ArbResult {
    pub base_id: usize,
    pub path: Cycle,
    pub opt_input: f64,
    pub gross_profit_base: f64,
    pub net_profit_eth: f64,
}

/// Optimize every cycle, convert gross profit (denominated in the cycle's
/// base token) to ETH via `price`, subtract the fixed gas cost, and keep
/// only results clearing `config.net_profit_floor` (`spec.md` §4.6).
///
/// Per-cycle optimization is embarrassingly parallel — cycles share no
/// mutable state — so the fan-out runs on rayon's pool; the final sort is
/// always applied afterwards to keep output order deterministic regardless
/// of scheduling.
pub fn aggregate(graph: &Graph, cycles: &[Cycle], price: &[f64], config: &Config) -> Vec<ArbResult> {
    let mut results: Vec<ArbResult> = cycles
        .par_iter()
        .filter_map(|path| {
            let base_id = *path.first()?;
            let (opt_input, gross_profit_base) = golden_section_search(graph, path, config);
            if gross_profit_base <= 0.0 {
                return None;
            }

            let base_price_eth = price.get(base_id).copied().unwrap_or(0.0);
            if base_price_eth <= 0.0 {
                return None;
            }

            let net_profit_eth = gross_profit_base * base_price_eth - config.gas_cost_eth;
            if net_profit_eth <= config.net_profit_floor {
                return None;
            }

            Some(ArbResult {
                base_id,
                path: path.clone(),
                opt_input,
                gross_profit_base,
                net_profit_eth,
            })
        })
        .collect();

    results.sort_unstable_by(|a, b| {
        b.net_profit_eth
            .partial_cmp(&a.net_profit_eth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::interner::TokenInterner;
    use crate::oracle::price_from_weth;
    use crate::pool::{PoolRecord, TokenRef};

    fn record(t0: &str, t1: &str, r0: &str, r1: &str) -> PoolRecord {
        PoolRecord {
            token0: TokenRef { id: t0.to_string() },
            token1: TokenRef { id: t1.to_string() },
            reserve0: r0.to_string(),
            reserve1: r1.to_string(),
            reserve_usd: "10000000".to_string(),
        }
    }

    #[test]
    fn empty_cycle_set_yields_no_results() {
        let config = Config::default();
        let graph = Graph::new();
        let results = aggregate(&graph, &[], &[], &config);
        assert!(results.is_empty());
    }

    #[test]
    fn profitable_cycle_survives_when_base_is_weth() {
        let mut config = Config::default();
        config.gas_cost_eth = 0.0;
        config.net_profit_floor = 0.0;

        let mut interner = TokenInterner::new();
        let pools = vec![
            record("WETH", "B", "1000", "1000"),
            record("B", "C", "1000", "1000"),
            record("C", "WETH", "1000", "1010"),
        ];
        let (graph, _) = build_graph(pools.iter(), &mut interner, &config);

        let weth = interner.lookup("WETH").unwrap();
        let b = interner.lookup("B").unwrap();
        let c = interner.lookup("C").unwrap();
        let cycle: Cycle = vec![weth, b, c, weth];

        let price = price_from_weth(&graph, weth);
        let results = aggregate(&graph, &[cycle], &price, &config);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].base_id, weth);
        assert!(results[0].net_profit_eth > 0.0);
    }

    #[test]
    fn results_are_sorted_descending_by_net_profit() {
        let mut config = Config::default();
        config.gas_cost_eth = 0.0;
        config.net_profit_floor = 0.0;

        let mut interner = TokenInterner::new();
        let pools = vec![
            record("WETH", "B", "1000", "1000"),
            record("B", "A", "1000", "1030"),
            record("A", "WETH", "1000", "1000"),
            record("WETH", "D", "1000", "1000"),
            record("D", "E", "1000", "1010"),
            record("E", "WETH", "1000", "1000"),
        ];
        let (graph, _) = build_graph(pools.iter(), &mut interner, &config);
        let weth = interner.lookup("WETH").unwrap();
        let price = price_from_weth(&graph, weth);

        let cycle_a: Cycle = vec![
            weth,
            interner.lookup("B").unwrap(),
            interner.lookup("A").unwrap(),
            weth,
        ];
        let cycle_b: Cycle = vec![
            weth,
            interner.lookup("D").unwrap(),
            interner.lookup("E").unwrap(),
            weth,
        ];

        let results = aggregate(&graph, &[cycle_b, cycle_a], &price, &config);
        assert_eq!(results.len(), 2);
        assert!(results[0].net_profit_eth >= results[1].net_profit_eth);
    }

    #[test]
    fn zero_price_base_is_excluded() {
        let mut config = Config::default();
        config.gas_cost_eth = 0.0;
        config.net_profit_floor = 0.0;

        let mut interner = TokenInterner::new();
        let pools = vec![
            record("A", "B", "1000", "1000"),
            record("B", "C", "1000", "1000"),
            record("C", "A", "1000", "1010"),
        ];
        let (graph, _) = build_graph(pools.iter(), &mut interner, &config);

        // WETH never appears; price vector is all zero.
        let price = vec![0.0; graph.node_count()];
        let a = interner.lookup("A").unwrap();
        let b = interner.lookup("B").unwrap();
        let c = interner.lookup("C").unwrap();
        let cycle: Cycle = vec![a, b, c, a];

        let results = aggregate(&graph, &[cycle], &price, &config);
        assert!(results.is_empty());
    }
}
