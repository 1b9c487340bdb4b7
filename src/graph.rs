//! Pool Graph Builder
//!
//! Step 1.1: The Map Maker
//!
//! Converts raw pool records into a directed multi-adjacency graph
//! (`spec.md` §4.2). Edge weight is `-ln((r_out / r_in) * FEE)`: a negative
//! weight sum over a cycle is an arbitrage opportunity ignoring slippage.
//!
//! Dense integer token IDs index directly into `Graph::adj`, a contiguous
//! adjacency list-of-lists (`spec.md` §9 Design Note) — no graph library,
//! no node/edge handles, just `Vec<Vec<Edge>>`.

use tracing::{debug, warn};

use crate::config::Config;
use crate::interner::TokenInterner;
use crate::pool::PoolFields;

/// Reserves below this are treated as empty/degenerate (`spec.md` §3).
pub const EPS_RESERVE: f64 = 1e-6;

/// A directed half-view of a pool, from token `u` to token `v`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub to: usize,
    pub r_in: f64,
    pub r_out: f64,
    pub weight: f64,
}

/// Adjacency-list graph over dense token IDs.
#[derive(Debug, Default)]
pub struct Graph {
    pub adj: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self { adj: Vec::new() }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    fn ensure_node(&mut self, id: usize) {
        if self.adj.len() <= id {
            self.adj.resize(id + 1, Vec::new());
        }
    }

    fn push_edge(&mut self, from: usize, edge: Edge) {
        self.ensure_node(from);
        self.adj[from].push(edge);
    }

    /// Find the first edge `u -> v`, mirroring `calc_profit`/`get_bottleneck`'s
    /// "first match wins" hop lookup (`spec.md` §4.5).
    pub fn find_edge(&self, u: usize, v: usize) -> Option<&Edge> {
        self.adj.get(u)?.iter().find(|e| e.to == v)
    }
}

/// Outcome of building the graph: the graph itself plus load counters for
/// the caller to log (`spec.md` §7: per-pool malformed records are
/// "silently skipped, counted implicitly by the loaded total").
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildStats {
    pub loaded: usize,
    pub skipped_low_tvl: usize,
    pub skipped_degenerate_reserve: usize,
    pub skipped_parse_error: usize,
}

impl BuildStats {
    pub fn skipped_total(&self) -> usize {
        self.skipped_low_tvl + self.skipped_degenerate_reserve + self.skipped_parse_error
    }
}

/// Build the pool graph from an iterable of pool records (`spec.md` §4.2).
pub fn build_graph<'a, P, I>(pools: I, interner: &mut TokenInterner, config: &Config) -> (Graph, BuildStats)
where
    P: PoolFields + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut graph = Graph::new();
    let mut stats = BuildStats::default();

    for pool in pools {
        let reserve_usd: f64 = match pool.reserve_usd().parse() {
            Ok(v) => v,
            Err(_) => {
                stats.skipped_parse_error += 1;
                continue;
            }
        };
        if reserve_usd < config.min_tvl_usd {
            stats.skipped_low_tvl += 1;
            continue;
        }

        let r0: f64 = match pool.reserve0().parse() {
            Ok(v) => v,
            Err(_) => {
                stats.skipped_parse_error += 1;
                continue;
            }
        };
        let r1: f64 = match pool.reserve1().parse() {
            Ok(v) => v,
            Err(_) => {
                stats.skipped_parse_error += 1;
                continue;
            }
        };
        if r0 < EPS_RESERVE || r1 < EPS_RESERVE {
            stats.skipped_degenerate_reserve += 1;
            continue;
        }

        let u = interner.get_id(pool.token0_id());
        let v = interner.get_id(pool.token1_id());
        graph.ensure_node(u.max(v));

        let w01 = -((r1 / r0) * config.fee).ln();
        let w10 = -((r0 / r1) * config.fee).ln();

        graph.push_edge(
            u,
            Edge {
                to: v,
                r_in: r0,
                r_out: r1,
                weight: w01,
            },
        );
        graph.push_edge(
            v,
            Edge {
                to: u,
                r_in: r1,
                r_out: r0,
                weight: w10,
            },
        );

        stats.loaded += 1;
    }

    if stats.skipped_total() > 0 {
        warn!(
            skipped_low_tvl = stats.skipped_low_tvl,
            skipped_degenerate_reserve = stats.skipped_degenerate_reserve,
            skipped_parse_error = stats.skipped_parse_error,
            "skipped malformed or illiquid pool records"
        );
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        loaded = stats.loaded,
        "graph built"
    );

    (graph, stats)
}
