use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    errors::Result,
    graph::*,
    io::{AdjacencyWriter, LoadedGraph},
    mst::{PrimStrategy, SpanningTree, prim},
    tour::{Tour, TreeWalk},
};

/// Everything computed for one instance: the input graph, its MST, the walk around the
/// tree and the resulting circuit
#[derive(Clone, Debug)]
pub struct Solution {
    pub graph: AdjArray,
    pub mst: SpanningTree,
    pub walk: TreeWalk,
    pub tour: Tour,
}

/// Machine-readable summary of a [`Solution`]
#[derive(Serialize)]
pub struct Report<'a> {
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    mst_weight: Weight,
    mst_edges: &'a [WeightedEdge],
    walk: &'a [Node],
    circuit: &'a [Node],
    circuit_length: Weight,
}

impl Solution {
    /// Runs the full pipeline. The candidate list is handed over to Prim's algorithm,
    /// the graph itself is kept to measure the circuit.
    pub fn solve(loaded: LoadedGraph, strategy: PrimStrategy) -> Result<Self> {
        let LoadedGraph { graph, candidates } = loaded;

        let mst = prim(graph.number_of_nodes(), candidates, strategy)?;
        let walk = TreeWalk::new(mst.tree(), 0);
        let tour = Tour::from_walk(&graph, &walk);

        Ok(Self {
            graph,
            mst,
            walk,
            tour,
        })
    }

    pub fn report(&self) -> Report<'_> {
        Report {
            number_of_nodes: self.graph.number_of_nodes(),
            number_of_edges: self.graph.number_of_edges(),
            mst_weight: self.mst.total_weight(),
            mst_edges: self.mst.edges(),
            walk: self.walk.nodes(),
            circuit: self.tour.circuit(),
            circuit_length: self.tour.length(),
        }
    }

    /// Writes the human-readable report: both adjacency listings, the walk, the circuit
    /// and its length
    pub fn write_text<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "the graph:")?;
        self.graph.try_write_adjacency(&mut writer)?;

        writeln!(writer, "the mst:")?;
        self.mst.tree().try_write_adjacency(&mut writer)?;

        writeln!(writer, "traversal:")?;
        for WeightedEdge(u, v, w) in self.walk.steps() {
            writeln!(writer, "{u} -> {v} ({w})")?;
        }

        writeln!(writer, "Hamiltonian circuit: {}", self.tour)?;
        writeln!(writer, "circuit length: {}", self.tour.length())
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.report())?;
        writeln!(writer)
    }

    /// Writes the text report, or the JSON report if `json` is set, to the file at `path`
    pub fn write_file<P: AsRef<Path>>(&self, path: P, json: bool) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        if json {
            self.write_json(&mut writer)?;
        } else {
            self.write_text(&mut writer)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{errors::GraphError, io::GraphReader};

    const FOUR_NODES: &str = "p tsp 4 5\n0 1 1\n1 2 2\n2 3 1\n0 3 4\n0 2 3\n";

    fn solve(input: &str, strategy: PrimStrategy) -> Result<Solution> {
        Solution::solve(LoadedGraph::try_read_graph(input.as_bytes())?, strategy)
    }

    #[test]
    fn text_report() {
        let solution = solve(FOUR_NODES, PrimStrategy::Scan).unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        solution.write_text(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "the graph:\n\
             0: 1(1) 3(4) 2(3)\n\
             1: 0(1) 2(2)\n\
             2: 1(2) 3(1) 0(3)\n\
             3: 2(1) 0(4)\n\
             the mst:\n\
             0: 1(1)\n\
             1: 0(1) 2(2)\n\
             2: 1(2) 3(1)\n\
             3: 2(1)\n\
             traversal:\n\
             0 -> 1 (1)\n\
             1 -> 2 (2)\n\
             2 -> 3 (1)\n\
             3 -> 2 (1)\n\
             2 -> 1 (2)\n\
             1 -> 0 (1)\n\
             Hamiltonian circuit: 0, 1, 2, 3\n\
             circuit length: 8\n"
        );
    }

    #[test]
    fn json_report() {
        let solution = solve(FOUR_NODES, PrimStrategy::Heap).unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        solution.write_json(&mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["number_of_nodes"], 4);
        assert_eq!(value["number_of_edges"], 5);
        assert_eq!(value["mst_weight"], 4);
        assert_eq!(value["circuit"], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(value["circuit_length"], 8);
        assert_eq!(value["mst_edges"][1], serde_json::json!([1, 2, 2]));
        assert_eq!(value["walk"].as_array().map(|w| w.len()), Some(7));
    }

    #[test]
    fn report_file() {
        let solution = solve(FOUR_NODES, PrimStrategy::Scan).unwrap();
        let dir = tempfile::tempdir().expect("Cannot create temp dir");

        let text_path = dir.path().join("report.txt");
        solution.write_file(&text_path, false).unwrap();
        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.starts_with("the graph:\n"));
        assert!(text.ends_with("Hamiltonian circuit: 0, 1, 2, 3\ncircuit length: 8\n"));

        let json_path = dir.path().join("report.json");
        solution.write_file(&json_path, true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["circuit_length"], 8);

        assert!(
            solution
                .write_file(dir.path().join("missing/report.txt"), false)
                .is_err()
        );
    }

    #[test]
    fn disconnected_input() {
        let result = solve("p tsp 4 2\n0 1 1\n2 3 1\n", PrimStrategy::Scan);
        assert!(matches!(
            result,
            Err(GraphError::DisconnectedGraph {
                reached: 2,
                number_of_nodes: 4
            })
        ));
    }
}
