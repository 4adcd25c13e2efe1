use std::path::PathBuf;

use log::{LevelFilter, info};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use structopt::StructOpt;
use twice_around::{log::build_logger_for_verbosity, prelude::*};

#[derive(Debug, StructOpt)]
#[structopt(about = "Generates random connected instances")]
struct Opt {
    #[structopt(short, long, default_value = "100")]
    nodes: NumNodes,

    /// Probability of each non-tree edge (ignored for metric instances)
    #[structopt(short, long, default_value = "0.1")]
    probability: f64,

    /// Largest edge weight plus one (ignored for metric instances)
    #[structopt(short = "w", long, default_value = "100")]
    max_weight: Weight,

    /// Complete graph over random points with Euclidean weights
    #[structopt(short, long)]
    metric: bool,

    /// Side length of the grid points are placed on (metric instances only)
    #[structopt(short, long, default_value = "1000")]
    extent: u32,

    #[structopt(short, long)]
    seed: Option<u64>,

    /// Output file; writes to stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    anyhow::ensure!(opt.nodes > 0, "at least one node required");
    anyhow::ensure!(
        (0.0..=1.0).contains(&opt.probability),
        "probability must be within [0, 1]"
    );
    anyhow::ensure!(opt.max_weight > 0, "max weight must be positive");
    anyhow::ensure!(opt.extent > 0, "extent must be positive");

    let mut rng = match opt.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let graph = if opt.metric {
        AdjArray::random_metric(&mut rng, opt.nodes, opt.extent)
    } else {
        AdjArray::random_connected_gnp(&mut rng, opt.nodes, opt.probability, 0..opt.max_weight)
    };
    debug_assert!(graph.is_connected());

    info!(
        "Generated graph with {} nodes and {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    if let Some(path) = &opt.output {
        graph.try_write_graph_file(path)?;
    } else {
        graph.try_write_graph(std::io::stdout().lock())?;
    }

    Ok(())
}
