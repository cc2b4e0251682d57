extern crate rand;
extern crate log;

pub mod types;
pub mod error;

pub mod heap_dict;
pub mod graph_representation;
pub mod graph_algorithms;
pub mod utils;

pub mod experiments;
