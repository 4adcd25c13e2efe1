use super::*;
use serde::Serialize;
use std::cmp::Ordering;

pub trait EdgeOps {
    fn normalized(&self) -> Self;
    fn is_normalized(&self) -> bool;
    fn is_loop(&self) -> bool;
    fn reverse(&self) -> Self;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

/// Directed record `(start, end, weight)` of an undirected weighted edge.
///
/// Records are ordered by weight first; ties are broken by start and then by end node.
/// Prim's algorithm relies on this being a total order to select edges deterministically.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    pub fn start(&self) -> Node {
        self.0
    }

    pub fn end(&self) -> Node {
        self.1
    }

    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.2, self.0, self.1).cmp(&(other.2, other.0, other.1))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl EdgeOps for Edge {
    fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl EdgeOps for WeightedEdge {
    fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        value.edge()
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
