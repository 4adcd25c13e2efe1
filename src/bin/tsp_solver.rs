use std::{io::Write, path::PathBuf};

use log::{LevelFilter, info};
use structopt::StructOpt;
use twice_around::{log::build_logger_for_verbosity, prelude::*};

#[derive(Debug, StructOpt)]
#[structopt(about = "Approximates a TSP tour with the twice-around-the-tree heuristic")]
struct Opts {
    /// Instance file; reads from stdin if omitted
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Report file; writes to stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// MST strategy: "scan" or "heap"
    #[structopt(short, long, default_value = "scan")]
    strategy: PrimStrategy,

    /// Emit the report as JSON
    #[structopt(long)]
    json: bool,

    /// Additionally write the MST in DOT format to this file
    #[structopt(long, parse(from_os_str))]
    dot: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<LoadedGraph> {
    if let Some(path) = path {
        Ok(LoadedGraph::try_read_graph_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(LoadedGraph::try_read_graph(stdin)?)
    }
}

fn write_report(solution: &Solution, opts: &Opts) -> anyhow::Result<()> {
    if let Some(path) = &opts.output {
        info!("Write report to {}", path.display());
        solution.write_file(path, opts.json)?;
    } else {
        let mut writer = std::io::stdout().lock();
        if opts.json {
            solution.write_json(&mut writer)?;
        } else {
            solution.write_text(&mut writer)?;
        }
        writer.flush()?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let loaded = load_graph(&opts.input)?;
    let solution = Solution::solve(loaded, opts.strategy)?;

    if let Some(path) = &opts.dot {
        info!("Write MST to {}", path.display());
        solution.mst.tree().try_write_dot_file(path)?;
    }

    write_report(&solution, &opts)
}
