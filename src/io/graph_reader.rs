use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use fxhash::FxHashSet;
use log::info;

use crate::{
    errors::{GraphError, Result},
    graph::*,
};

/// A graph as loaded from an instance file together with the candidate list for Prim's
/// algorithm. `candidates` contains each edge twice, `(u, v, w)` directly followed by
/// `(v, u, w)`, in the order of the input.
#[derive(Clone, Debug)]
pub struct LoadedGraph {
    pub graph: AdjArray,
    pub candidates: Vec<WeightedEdge>,
}

pub trait GraphReader: Sized {
    fn try_read_graph<R: BufRead>(reader: R) -> Result<Self>;

    fn try_read_graph_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_graph(buf_reader)
    }
}

impl GraphReader for LoadedGraph {
    fn try_read_graph<R: BufRead>(reader: R) -> Result<Self> {
        let mut edge_reader = EdgeListReader::try_new(reader)?;

        // nothing is sized by the header before all edge lines are checked against it
        let edges: Vec<WeightedEdge> = edge_reader.by_ref().collect::<Result<_>>()?;

        let mut graph = AdjArray::new(edge_reader.number_of_nodes());
        let mut candidates = Vec::with_capacity(2 * edges.len());

        for edge in edges {
            graph.add_edge(edge.start(), edge.end(), edge.weight());
            candidates.push(edge);
            candidates.push(edge.reverse());
        }

        info!(
            "Read graph with {} nodes and {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        Ok(Self { graph, candidates })
    }
}

impl GraphReader for AdjArray {
    fn try_read_graph<R: BufRead>(reader: R) -> Result<Self> {
        Ok(LoadedGraph::try_read_graph(reader)?.graph)
    }
}

/// Parses the line-based instance format
///
/// ```text
/// c comment
/// p tsp <number of nodes> <number of edges>
/// <u> <v> <weight>
/// ```
///
/// Nodes are 0-based. Lines starting with `c` as well as blank lines are skipped.
/// Yields each edge once; self-loops, repeated edges, out-of-range nodes and a wrong
/// number of edge lines are reported as [`GraphError::MalformedGraph`]. So is a node that
/// appears in no edge line, unless it is the only node. Hence a successful read announces
/// at most twice as many nodes as there are edge lines.
pub struct EdgeListReader<R> {
    lines: Lines<R>,
    line_number: usize,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    edges_read: NumEdges,
    seen: FxHashSet<Edge>,
    touched: FxHashSet<Node>,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut edge_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            number_of_nodes: 0,
            number_of_edges: 0,
            edges_read: 0,
            seen: FxHashSet::default(),
            touched: FxHashSet::default(),
        };

        (edge_reader.number_of_nodes, edge_reader.number_of_edges) = edge_reader.parse_header()?;
        Ok(edge_reader)
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($self : expr, $cond : expr, $info : expr) => {
        if !($cond) {
            return Err($self.malformed($info));
        }
    };
}

macro_rules! parse_next_value {
    ($self : expr, $iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err($self.malformed(format!("Premature end of line when parsing {}.", $name)));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err($self.malformed(format!("Invalid value found. Cannot parse {}.", $name)));
            }
        }
    }};
}

impl<R: BufRead> EdgeListReader<R> {
    fn malformed(&self, reason: impl Into<String>) -> GraphError {
        GraphError::MalformedGraph {
            line: self.line_number,
            reason: reason.into(),
        }
    }

    fn next_content_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
        Ok(None)
    }

    fn parse_header(&mut self) -> Result<(NumNodes, NumEdges)> {
        let line = self.next_content_line()?;

        let Some(line) = line else {
            return Err(self.malformed("No header found"));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            self,
            parts.next() == Some("p"),
            "Invalid header found; line should start with p"
        );

        raise_error_unless!(
            self,
            parts.next() == Some("tsp"),
            "Invalid header found; file type should be \"tsp\""
        );

        let number_of_nodes: NumNodes = parse_next_value!(self, parts, "Header>Number of nodes");
        let number_of_edges: NumEdges = parse_next_value!(self, parts, "Header>Number of edges");

        raise_error_unless!(
            self,
            parts.next().is_none(),
            "Invalid header found; expected end of line"
        );

        raise_error_unless!(
            self,
            number_of_nodes > 0,
            "Invalid header found; graph needs at least one node"
        );

        Ok((number_of_nodes, number_of_edges))
    }

    fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge>> {
        let Some(line) = self.next_content_line()? else {
            raise_error_unless!(
                self,
                self.edges_read == self.number_of_edges,
                format!(
                    "Expected {} edges but found only {}",
                    self.number_of_edges, self.edges_read
                )
            );
            let touched = self.touched.len() as NumNodes;
            raise_error_unless!(
                self,
                self.number_of_nodes == 1 || touched == self.number_of_nodes,
                format!(
                    "Only {} of {} nodes appear in an edge",
                    touched, self.number_of_nodes
                )
            );
            return Ok(None);
        };

        self.edges_read += 1;
        raise_error_unless!(
            self,
            self.edges_read <= self.number_of_edges,
            format!("Expected only {} edges", self.number_of_edges)
        );

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(self, parts, "Source node");
        let dest: Node = parse_next_value!(self, parts, "Target node");
        let weight: Weight = parse_next_value!(self, parts, "Weight");

        raise_error_unless!(self, parts.next().is_none(), "Expected end of line");

        for u in [from, dest] {
            raise_error_unless!(
                self,
                u < self.number_of_nodes,
                format!("Node {u} out of range 0..{}", self.number_of_nodes)
            );
        }

        let edge = WeightedEdge(from, dest, weight);
        raise_error_unless!(self, !edge.is_loop(), format!("Self-loop at node {from}"));
        raise_error_unless!(
            self,
            self.seen.insert(edge.edge().normalized()),
            format!("Repeated edge {{{from}, {dest}}}")
        );
        self.touched.extend([from, dest]);

        Ok(Some(edge))
    }
}
