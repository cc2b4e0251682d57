use std::process;

use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, error, info};
use heap_dict::experiments::experiment::{Experiment, ExperimentVariables, GraphVariables, heap_dict_experiment, dijkstra_experiment};

#[derive(Parser)]
struct Opts {

    /// increase log output, may be repeated
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: u8,

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Subcommand)]
enum SubCommand {
    Benchmark(BenchmarkCommand),
    Dijkstra(DijkstraCommand)
}

#[derive(Args)]
struct BenchmarkCommand {

    /// name of the workload to run (mixed, insert_then_drain, decrease_key)
    #[clap(short, long, default_value="mixed")]
    workload: String,

    /// number of distinct keys used by the workload
    #[clap(short = 'k', long, default_value="10000")]
    num_keys: usize,

    /// number of operations per iteration
    #[clap(short = 'o', long, default_value="100000")]
    num_operations: usize,

    /// number of iterations
    #[clap(short = 'i', long, default_value="25")]
    num_iterations: usize,

    /// seed of the random workload
    #[clap(short, long, default_value="0")]
    seed: u64
}

#[derive(Args)]
struct DijkstraCommand {

    /// number of nodes of the random graph
    #[clap(short = 'n', long, default_value="100000")]
    num_nodes: usize,

    /// random outgoing edges per node
    #[clap(short, long, default_value="4")]
    edges_per_node: usize,

    /// largest edge weight
    #[clap(short = 'w', long, default_value="1000")]
    max_weight: u32,

    /// number of queries from random start nodes
    #[clap(short = 'i', long, default_value="25")]
    num_iterations: usize,

    /// seed of the random graph and start nodes
    #[clap(short, long, default_value="0")]
    seed: u64
}

fn main() {
    let opts: Opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .format_timestamp_millis()
        .filter_level(level)
        .init();

    match opts.subcmd {
        SubCommand::Benchmark(benchmark) => {
            let variables = ExperimentVariables {
                num_keys: benchmark.num_keys,
                num_operations: benchmark.num_operations,
                num_iterations: benchmark.num_iterations,
                seed: benchmark.seed
            };

            let experiments = Experiment::all_experiments();
            let experiment = match experiments.iter().find(|experiment| experiment.name == benchmark.workload) {
                Some(experiment) => experiment,
                None => {
                    let names: Vec<&str> = experiments.iter().map(|experiment| experiment.name.as_str()).collect();
                    error!("unknown workload {}, available: {}", benchmark.workload, names.join(", "));
                    process::exit(1);
                }
            };

            info!("running workload {} with {:?}", experiment.name, variables);

            for result in heap_dict_experiment(experiment, &variables) {
                println!("{},{:?},{},{},{}",
                    result.iteration,
                    result.duration.as_nanos(),
                    result.counts.key_not_found,
                    result.counts.empty_container,
                    result.remaining_entries
                );
            }
        },
        SubCommand::Dijkstra(dijkstra) => {
            let variables = GraphVariables {
                num_nodes: dijkstra.num_nodes,
                edges_per_node: dijkstra.edges_per_node,
                max_weight: dijkstra.max_weight,
                num_iterations: dijkstra.num_iterations,
                seed: dijkstra.seed
            };

            info!("running dijkstra with {:?}", variables);

            for result in dijkstra_experiment(&variables) {
                println!("{},{:?},{}", result.iteration, result.duration.as_nanos(), result.reachable_nodes);
            }
        }
    }
}
