use crate::types::*;
use std::ops::Range;

pub trait Graph {

    fn node_ids(&self) -> Range<NodeId>;
    fn edge_ids(&self, node: NodeId) -> Range<EdgeId>;
    fn target_id(&self, node: NodeId, edge_id: EdgeId) -> NodeId;
    fn weight(&self, node: NodeId, edge_id: EdgeId) -> Weight;

    fn num_nodes(&self) -> usize {
        self.node_ids().len()
    }
}

/// adjacency array: the outgoing edges of node i are `first_edge[i]..first_edge[i + 1]`
#[derive(Clone, Debug)]
pub struct GraphArray {

    first_edge: EdgeIds,
    target_node: NodeIds,
    weights: Weights,
}

impl GraphArray {

    pub fn new(first_edge: EdgeIds, target_node: NodeIds, weights: Weights) -> GraphArray {
        GraphArray {
            first_edge,
            target_node,
            weights,
        }
    }

    /// builds the adjacency array from a list of (source, target, weight) arcs
    pub fn from_arcs(num_nodes: usize, arcs: &[(NodeId, NodeId, Weight)]) -> GraphArray {
        let mut outgoing: Vec<Vec<(NodeId, Weight)>> = vec![Vec::new(); num_nodes];

        for (source, target, weight) in arcs {
            outgoing[*source as usize].push((*target, *weight));
        }

        let mut first_edge: EdgeIds = vec![0; num_nodes + 1];
        let mut target_node: NodeIds = Vec::with_capacity(arcs.len());
        let mut weights: Weights = Vec::with_capacity(arcs.len());

        let mut first_edge_index = 0;

        for node_index in 0..num_nodes {
            first_edge[node_index] = first_edge_index;

            for (adj_node, weight) in &outgoing[node_index] {
                target_node.push(*adj_node);
                weights.push(*weight);
                first_edge_index += 1;
            }
        }

        first_edge[num_nodes] = first_edge_index;

        GraphArray::new(first_edge, target_node, weights)
    }

    pub fn num_edges(&self) -> usize {
        self.target_node.len()
    }
}

impl Graph for GraphArray {

    fn node_ids(&self) -> Range<NodeId> {
        0..((self.first_edge.len() as NodeId) - 1)
    }

    fn edge_ids(&self, node: NodeId) -> Range<EdgeId> {
        self.first_edge[node as usize]..self.first_edge[(node as usize) + 1]
    }

    fn target_id(&self, _node: NodeId, edge_id: EdgeId) -> NodeId {
        self.target_node[edge_id as usize]
    }

    fn weight(&self, _node: NodeId, edge_id: EdgeId) -> Weight {
        self.weights[edge_id as usize]
    }
}
