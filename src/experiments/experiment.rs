use std::time::Duration;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{types::{NodeId, Weight, INFINITY}, heap_dict::HeapDict, error::HeapDictError, graph_algorithms::dijkstra_all, utils::{create_random_graph, measure_time}};

/// a single call against a `HeapDict<u64, u64>`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Set(u64, u64),
    Get(u64),
    Delete(u64),
    PopItem,
    PeekItem,
}

/// number of executed operations by kind, plus the number of calls that failed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub sets: usize,
    pub gets: usize,
    pub deletes: usize,
    pub pops: usize,
    pub peeks: usize,
    pub key_not_found: usize,
    pub empty_container: usize,
}

impl OperationCounts {

    fn record_error(&mut self, error: HeapDictError) {
        match error {
            HeapDictError::KeyNotFound => self.key_not_found += 1,
            HeapDictError::EmptyContainer => self.empty_container += 1,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ExperimentVariables {
    pub num_keys: usize,
    pub num_operations: usize,
    pub num_iterations: usize,
    pub seed: u64,
}

#[derive(Copy, Clone, Debug)]
pub struct GraphVariables {
    pub num_nodes: usize,
    pub edges_per_node: usize,
    pub max_weight: Weight,
    pub num_iterations: usize,
    pub seed: u64,
}

pub struct ExperimentResult {
    pub iteration: usize,
    pub duration: Duration,
    pub counts: OperationCounts,
    pub remaining_entries: usize,
}

pub struct DijkstraResult {
    pub iteration: usize,
    pub duration: Duration,
    pub reachable_nodes: usize,
}

pub struct Experiment {
    pub name: String, // a unique identifier for this workload
    pub workload: Box<dyn Fn(&mut StdRng, &ExperimentVariables) -> Vec<Operation>> // creates the operations of one iteration
}

impl Experiment {

    pub fn new(name: &str, workload: impl Fn(&mut StdRng, &ExperimentVariables) -> Vec<Operation> + 'static) -> Self {
        Experiment {
            name: String::from(name),
            workload: Box::new(workload)
        }
    }

    pub fn all_experiments() -> Vec<Self> {
        let mut experiments = Vec::new();

        experiments.push(Experiment::new("mixed", create_mixed_operations));

        // insert every key once, then drain the queue
        experiments.push(Experiment::new("insert_then_drain", |rng, variables| {
            let mut operations: Vec<Operation> = (0..variables.num_keys as u64)
                .map(|key| Operation::Set(key, rng.gen()))
                .collect();
            operations.extend((0..variables.num_keys).map(|_| Operation::PopItem));

            operations
        }));

        // Dijkstra-like pattern: priorities of queued keys only ever decrease
        experiments.push(Experiment::new("decrease_key", |rng, variables| {
            let num_keys = variables.num_keys.max(1) as u64;
            let mut current: Vec<u64> = (0..num_keys).map(|_| rng.gen_range(u64::MAX / 2..u64::MAX)).collect();
            let mut operations: Vec<Operation> = current.iter().enumerate()
                .map(|(key, priority)| Operation::Set(key as u64, *priority))
                .collect();

            for _ in 0..variables.num_operations {
                let key = rng.gen_range(0..num_keys);
                let decrease = rng.gen_range(0..=current[key as usize] / 2);
                current[key as usize] -= decrease;
                operations.push(Operation::Set(key, current[key as usize]));
            }
            operations.extend((0..num_keys).map(|_| Operation::PopItem));

            operations
        }));

        experiments
    }
}

/// random mix of all operations on keys in `0..num_keys`
pub fn create_mixed_operations(rng: &mut StdRng, variables: &ExperimentVariables) -> Vec<Operation> {
    let num_keys = variables.num_keys.max(1) as u64;

    (0..variables.num_operations).map(|_| {
        let key = rng.gen_range(0..num_keys);

        match rng.gen_range(0..20) {
            0..=9 => Operation::Set(key, rng.gen_range(0..num_keys * 4)),
            10..=12 => Operation::Get(key),
            13..=15 => Operation::Delete(key),
            16..=18 => Operation::PopItem,
            _ => Operation::PeekItem,
        }
    }).collect()
}

/// applies `operations` in order, failed calls are counted and otherwise ignored
pub fn run_operations(heap_dict: &mut HeapDict<u64, u64>, operations: &[Operation]) -> OperationCounts {
    let mut counts = OperationCounts::default();

    for operation in operations {
        let result = match *operation {
            Operation::Set(key, priority) => {
                counts.sets += 1;
                heap_dict.set(key, priority);
                Ok(())
            },
            Operation::Get(key) => {
                counts.gets += 1;
                heap_dict.get(&key).map(|_| ())
            },
            Operation::Delete(key) => {
                counts.deletes += 1;
                heap_dict.delete(&key).map(|_| ())
            },
            Operation::PopItem => {
                counts.pops += 1;
                heap_dict.popitem().map(|_| ())
            },
            Operation::PeekItem => {
                counts.peeks += 1;
                heap_dict.peekitem().map(|_| ())
            },
        };

        if let Err(error) = result {
            counts.record_error(error);
        }
    }

    counts
}

/// times `num_iterations` runs of the given workload, every iteration starts from an empty queue
pub fn heap_dict_experiment(experiment: &Experiment, variables: &ExperimentVariables) -> Vec<ExperimentResult> {
    let mut rng = StdRng::seed_from_u64(variables.seed);
    let mut results = Vec::with_capacity(variables.num_iterations);

    for iteration in 0..variables.num_iterations {
        let operations = (experiment.workload)(&mut rng, variables);
        let mut heap_dict: HeapDict<u64, u64> = HeapDict::with_capacity(variables.num_keys);

        let (duration, counts) = measure_time(|| run_operations(&mut heap_dict, &operations));
        debug!("{} iteration {}: {} operations in {:?}", experiment.name, iteration, operations.len(), duration);

        results.push(ExperimentResult {
            iteration,
            duration,
            counts,
            remaining_entries: heap_dict.len(),
        });
    }

    results
}

/// times single source Dijkstra runs from random start nodes on a random graph
pub fn dijkstra_experiment(variables: &GraphVariables) -> Vec<DijkstraResult> {
    let mut rng = StdRng::seed_from_u64(variables.seed);
    let graph = create_random_graph(&mut rng, variables.num_nodes, variables.edges_per_node, variables.max_weight);
    debug!("created graph with {} nodes and {} edges", variables.num_nodes, graph.num_edges());

    let mut results = Vec::with_capacity(variables.num_iterations);
    if variables.num_nodes == 0 {
        return results;
    }

    for iteration in 0..variables.num_iterations {
        let start = rng.gen_range(0..variables.num_nodes) as NodeId;
        let (duration, distances) = measure_time(|| dijkstra_all(start, &graph));

        results.push(DijkstraResult {
            iteration,
            duration,
            reachable_nodes: distances.iter().filter(|distance| **distance != INFINITY).count(),
        });
    }

    results
}
