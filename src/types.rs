use std;

/// handle of an entry inside the heap's entry arena
pub type EntryId = usize;

pub type NodeId = u32;
pub type EdgeId = u32;
pub type Weight = u32;

pub const INFINITY: Weight = std::u32::MAX / 2;

pub type NodeIds = Vec<NodeId>;
pub type EdgeIds = Vec<EdgeId>;
pub type Weights = Vec<Weight>;
