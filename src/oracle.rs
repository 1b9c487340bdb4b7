//! ETH Pricing Oracle
//!
//! Step 1.2: breadth-first traversal from the WETH node computes an
//! ETH-equivalent price for every reachable token (`spec.md` §4.3).
//!
//! For node `u` dequeued, each outgoing edge to an unvisited `v` sets
//! `price[v] = price[u] * (r_in / r_out)`: the spot price of `v` in units
//! of `u` is `r_out / r_in` from `u`'s perspective, so the price of `v` in
//! ETH is the price of `u` in ETH times `r_in / r_out` along the traversal
//! edge. Unvisited nodes retain `price = 0.0`.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::Graph;

/// Compute `price[token] in ETH` for every token reachable from `weth_id`.
/// If `weth_id` is out of range (WETH absent from the graph), every price
/// is zero.
pub fn price_from_weth(graph: &Graph, weth_id: usize) -> Vec<f64> {
    let n = graph.node_count();
    let mut price = vec![0.0; n];

    if weth_id >= n {
        return price;
    }

    let mut visited = vec![false; n];
    price[weth_id] = 1.0;
    visited[weth_id] = true;

    let mut queue = VecDeque::new();
    queue.push_back(weth_id);

    while let Some(u) = queue.pop_front() {
        for edge in &graph.adj[u] {
            let v = edge.to;
            if !visited[v] {
                price[v] = price[u] * (edge.r_in / edge.r_out);
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    debug!(reached = visited.iter().filter(|v| **v).count(), total = n, "oracle BFS complete");
    price
}
