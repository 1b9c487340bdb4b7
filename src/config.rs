//! Configuration module for the arbitrage engine.
//!
//! Handles the tunable constants from `spec.md` §6, loadable from
//! environment variables and an optional TOML overlay file.

use eyre::Result;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Tunable constants governing graph construction, cycle search and ranking.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum pool TVL (USD) to admit a pool into the graph.
    pub min_tvl_usd: f64,

    /// AMM swap fee multiplier (e.g. 0.997 for a 0.3% fee).
    pub fee: f64,

    /// Fixed gas cost, denominated in ETH, deducted from gross profit.
    pub gas_cost_eth: f64,

    /// WETH token address, used as the ETH-pricing anchor.
    pub weth_address: String,

    /// SPFA relaxation step cap.
    pub spfa_step_cap: u64,

    /// Maximum parent-walk depth when reconstructing a cycle.
    pub cycle_walk_depth: usize,

    /// Number of golden-section search iterations.
    pub golden_section_iterations: u32,

    /// Minimum net profit (ETH) for a result to be retained.
    pub net_profit_floor: f64,

    /// Fraction of a hop's incoming reserve the bottleneck probe may use.
    pub bottleneck_utilization: f64,

    /// Number of top results written to the JSON output.
    pub json_top_k: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. Reads a `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::default();

        if let Ok(v) = env::var("MIN_TVL_USD") {
            cfg.min_tvl_usd = v.parse().unwrap_or(cfg.min_tvl_usd);
        }
        if let Ok(v) = env::var("FEE") {
            cfg.fee = v.parse().unwrap_or(cfg.fee);
        }
        if let Ok(v) = env::var("GAS_COST_ETH") {
            cfg.gas_cost_eth = v.parse().unwrap_or(cfg.gas_cost_eth);
        }
        if let Ok(v) = env::var("WETH_ADDRESS") {
            cfg.weth_address = v;
        }
        if let Ok(v) = env::var("SPFA_STEP_CAP") {
            cfg.spfa_step_cap = v.parse().unwrap_or(cfg.spfa_step_cap);
        }
        if let Ok(v) = env::var("JSON_TOP_K") {
            cfg.json_top_k = v.parse().unwrap_or(cfg.json_top_k);
        }

        Ok(cfg)
    }

    /// Overlay a TOML config file on top of the current values. Missing
    /// fields in the file keep whatever value was already set.
    pub fn merge_toml_file(mut self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let overrides: TomlOverrides = toml::from_str(&text)?;
        overrides.apply(&mut self);
        Ok(self)
    }
}

/// Partial config read from a TOML file; every field is optional so a file
/// only needs to mention what it wants to change.
#[derive(Debug, Default, Deserialize)]
struct TomlOverrides {
    min_tvl_usd: Option<f64>,
    fee: Option<f64>,
    gas_cost_eth: Option<f64>,
    weth_address: Option<String>,
    spfa_step_cap: Option<u64>,
    cycle_walk_depth: Option<usize>,
    golden_section_iterations: Option<u32>,
    net_profit_floor: Option<f64>,
    bottleneck_utilization: Option<f64>,
    json_top_k: Option<usize>,
}

impl TomlOverrides {
    fn apply(self, cfg: &mut Config) {
        if let Some(v) = self.min_tvl_usd {
            cfg.min_tvl_usd = v;
        }
        if let Some(v) = self.fee {
            cfg.fee = v;
        }
        if let Some(v) = self.gas_cost_eth {
            cfg.gas_cost_eth = v;
        }
        if let Some(v) = self.weth_address {
            cfg.weth_address = v;
        }
        if let Some(v) = self.spfa_step_cap {
            cfg.spfa_step_cap = v;
        }
        if let Some(v) = self.cycle_walk_depth {
            cfg.cycle_walk_depth = v;
        }
        if let Some(v) = self.golden_section_iterations {
            cfg.golden_section_iterations = v;
        }
        if let Some(v) = self.net_profit_floor {
            cfg.net_profit_floor = v;
        }
        if let Some(v) = self.bottleneck_utilization {
            cfg.bottleneck_utilization = v;
        }
        if let Some(v) = self.json_top_k {
            cfg.json_top_k = v;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_tvl_usd: 50_000.0,
            fee: 0.997,
            gas_cost_eth: 0.0128,
            weth_address: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
            spfa_step_cap: 20_000_000,
            cycle_walk_depth: 20,
            golden_section_iterations: 20,
            net_profit_floor: 1e-4,
            bottleneck_utilization: 0.50,
            json_top_k: 10,
        }
    }
}
