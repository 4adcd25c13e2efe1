use super::*;
use crate::errors::{InvariantCheck, InvariantViolation};
use std::fmt;

/// Weighted undirected graph stored as one list of outgoing records per node.
/// Every undirected edge {u, v} is kept twice, as (u, v, w) at `u` and (v, u, w) at `v`,
/// and both lists keep insertion order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
}

macro_rules! forward {
    ($single : ident, $internal : ident, $type : ty) => {
        fn $single(&self, node: Node) -> $type {
            self.adj[node as usize].$internal()
        }
    };
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for AdjArray {
    forward!(edges_of, records, &[WeightedEdge]);
    forward!(degree_of, degree, NumNodes);
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if u == v || self.adj[u as usize].has_neighbor(v) {
            return false;
        }

        self.adj[u as usize].push(WeightedEdge(u, v, weight));
        self.adj[v as usize].push(WeightedEdge(v, u, weight));

        self.number_of_edges += 1;
        true
    }
}

impl AdjArray {
    /// Creates a graph with `n` nodes and inserts `edges` in the given order
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Creates a graph just large enough to hold all `edges`
    pub fn test_only_from(
        edges: impl Clone + IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| e.into())
            .map(|e| e.0.max(e.1) + 1)
            .max()
            .unwrap_or(0);

        Self::from_edges(n, edges)
    }
}

impl InvariantCheck<InvariantViolation> for AdjArray {
    fn is_correct(&self) -> Result<(), InvariantViolation> {
        for u in self.vertices() {
            for &record in self.edges_of(u) {
                if record.start() != u {
                    return Err(InvariantViolation::MisplacedRecord(record, u));
                }

                let reverse = record.reverse();
                if !self.edges_of(record.end()).contains(&reverse) {
                    return Err(InvariantViolation::MissingReverse(record));
                }
            }
        }

        Ok(())
    }
}

#[derive(Default, Clone, PartialEq, Eq)]
struct Neighborhood {
    edges: Vec<WeightedEdge>,
}

impl Neighborhood {
    fn degree(&self) -> NumNodes {
        self.edges.len() as NumNodes
    }

    fn records(&self) -> &[WeightedEdge] {
        &self.edges
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.edges.iter().any(|e| e.end() == v)
    }

    fn push(&mut self, record: WeightedEdge) {
        self.edges.push(record);
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use super::super::io::DotWriter;
        use std::str;

        let mut buf = Vec::new();
        if self.try_write_dot(&mut buf).is_ok() {
            f.write_str(str::from_utf8(&buf).map_err(|_| fmt::Error)?.trim())?;
        }

        Ok(())
    }
}
