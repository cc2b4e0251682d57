use crate::types::*;
use crate::graph_representation::Graph;
use crate::heap_dict::HeapDict;

/// Shortest path distance from `start` to `goal`, `None` if `goal` is unreachable.
///
/// Tentative distances live in a [`HeapDict`], an improved distance simply
/// overwrites the queued one.
pub fn dijkstra(start: NodeId, goal: NodeId, graph: &impl Graph) -> Option<Weight> {
    let mut to_visit: HeapDict<NodeId, Weight> = HeapDict::with_capacity(graph.num_nodes());
    to_visit.set(start, 0);

    let mut distance_table: Vec<Weight> = vec![INFINITY; graph.num_nodes()];
    distance_table[start as usize] = 0;

    while let Ok((node_id, distance)) = to_visit.popitem() {
        if node_id == goal {
            return Some(distance);
        }

        relax_edges(node_id, distance, graph, &mut distance_table, &mut to_visit);
    }

    None
}

/// distances from `start` to every node, unreachable nodes keep `INFINITY`
pub fn dijkstra_all(start: NodeId, graph: &impl Graph) -> Vec<Weight> {
    let mut to_visit: HeapDict<NodeId, Weight> = HeapDict::with_capacity(graph.num_nodes());
    to_visit.set(start, 0);

    let mut distance_table: Vec<Weight> = vec![INFINITY; graph.num_nodes()];
    distance_table[start as usize] = 0;

    while let Ok((node_id, distance)) = to_visit.popitem() {
        relax_edges(node_id, distance, graph, &mut distance_table, &mut to_visit);
    }

    distance_table
}

fn relax_edges(
    node_id: NodeId,
    distance: Weight,
    graph: &impl Graph,
    distance_table: &mut Vec<Weight>,
    to_visit: &mut HeapDict<NodeId, Weight>
) {
    for edge_id in graph.edge_ids(node_id) {
        let target_node = graph.target_id(node_id, edge_id);
        let new_distance = distance + graph.weight(node_id, edge_id);

        if distance_table[target_node as usize] > new_distance {
            distance_table[target_node as usize] = new_distance;

            to_visit.set(target_node, new_distance);
        }
    }
}
