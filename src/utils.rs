use std::time::{Duration, Instant};

use rand::Rng;

use crate::types::*;
use crate::graph_representation::GraphArray;

pub mod binary_heap;

/// runs `function` once and returns the elapsed time together with its result
pub fn measure_time<T, F: FnOnce() -> T>(function: F) -> (Duration, T) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}

/// Creates a random directed graph. Every node gets `edges_per_node` outgoing arcs
/// with weights in `1..=max_weight`, node i also gets an arc to i + 1 so that every
/// node is reachable from node 0.
pub fn create_random_graph(rng: &mut impl Rng, num_nodes: usize, edges_per_node: usize, max_weight: Weight) -> GraphArray {
    let max_weight = max_weight.max(1);
    let mut arcs: Vec<(NodeId, NodeId, Weight)> = Vec::with_capacity(num_nodes * (edges_per_node + 1));

    for node_index in 0..num_nodes {
        if node_index + 1 < num_nodes {
            arcs.push((node_index as NodeId, (node_index + 1) as NodeId, rng.gen_range(1..=max_weight)));
        }

        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..num_nodes) as NodeId;
            arcs.push((node_index as NodeId, target, rng.gen_range(1..=max_weight)));
        }
    }

    GraphArray::from_arcs(num_nodes, &arcs)
}
