//! Bottleneck-Bounded Optimizer
//!
//! Step 2.2: for a candidate cycle, compute the maximum safe input via a
//! forward reserve-depletion probe, then golden-section search over input
//! size to maximize realized profit in the base token (`spec.md` §4.5).

use crate::config::Config;
use crate::graph::Graph;

/// Below this, a simulated running amount is treated as drained to nothing.
const DUST_FLOOR: f64 = 1e-15;

/// Constant-product AMM output for a given input and reserves
/// (`spec.md` §4.5, `GLOSSARY`).
pub fn get_amount_out(amount_in: f64, reserve_in: f64, reserve_out: f64) -> f64 {
    if amount_in <= 0.0 {
        return 0.0;
    }
    let amount_in_with_fee = amount_in * 997.0;
    let numerator = amount_in_with_fee * reserve_out;
    let denominator = reserve_in * 1000.0 + amount_in_with_fee;
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Simulate `amount_in` forward along `path`, returning `output - input`,
/// or the `-1.0` sentinel if any hop is missing or the running amount
/// drains to dust — a value below any realistic loss, steering the
/// optimizer away from infeasible input sizes.
pub fn calc_profit(graph: &Graph, amount_in: f64, path: &[usize]) -> f64 {
    if amount_in == 0.0 {
        return 0.0;
    }
    let mut curr = amount_in;
    for hop in path.windows(2) {
        let (u, v) = (hop[0], hop[1]);
        match graph.find_edge(u, v) {
            Some(edge) => curr = get_amount_out(curr, edge.r_in, edge.r_out),
            None => return -1.0,
        }
        if curr <= DUST_FLOOR {
            return -1.0;
        }
    }
    curr - amount_in
}

/// Probe a tiny input through `path` and bound the search interval so no
/// hop consumes more than `utilization` of its incoming reserve, assuming
/// the probe's amount ratio scales linearly at each hop — adequate because
/// the bottleneck only bounds the interval the golden-section search
/// refines inside (`spec.md` §4.5).
pub fn get_bottleneck(graph: &Graph, path: &[usize], utilization: f64) -> f64 {
    let mut limit = 1e18_f64;
    let mut simulated = 0.001_f64;
    let initial = simulated;

    for hop in path.windows(2) {
        let (u, v) = (hop[0], hop[1]);
        if let Some(edge) = graph.find_edge(u, v) {
            let max_pool = edge.r_in * utilization;
            let ratio = simulated / initial;
            if ratio > 1e-9 {
                let local_limit = max_pool / ratio;
                if local_limit < limit {
                    limit = local_limit;
                }
            }
            simulated = get_amount_out(simulated, edge.r_in, edge.r_out);
        }
    }
    limit
}

/// Golden-section search for the profit-maximizing input size along
/// `path`, bounded by the bottleneck probe (`spec.md` §4.5). The
/// constant-product composition along a fixed path is unimodal in input
/// size, so golden-section converges without gradients.
pub fn golden_section_search(graph: &Graph, path: &[usize], config: &Config) -> (f64, f64) {
    let limit = get_bottleneck(graph, path, config.bottleneck_utilization);
    if limit <= 0.0 {
        return (0.0, -1.0);
    }

    let mut low = limit * 1e-4;
    let mut high = limit;

    if low >= high {
        return (low, calc_profit(graph, low, path));
    }

    let phi = (5.0_f64.sqrt() - 1.0) / 2.0;
    let mut c = high - (high - low) * phi;
    let mut d = low + (high - low) * phi;
    let mut p_c = calc_profit(graph, c, path);
    let mut p_d = calc_profit(graph, d, path);

    for _ in 0..config.golden_section_iterations {
        if p_c > p_d {
            high = d;
            d = c;
            p_d = p_c;
            c = high - (high - low) * phi;
            p_c = calc_profit(graph, c, path);
        } else {
            low = c;
            c = d;
            p_c = p_d;
            d = low + (high - low) * phi;
            p_d = calc_profit(graph, d, path);
        }
    }

    let opt = (low + high) / 2.0;
    (opt, calc_profit(graph, opt, path))
}
