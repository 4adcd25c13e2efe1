pub mod adj_array;
pub mod connectivity;
pub mod edge;
pub mod generators;
pub mod traversal;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = u64;

use std::ops::Range;

pub use adj_array::*;
pub use connectivity::*;
pub use edge::*;
pub use generators::*;
pub use traversal::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices. In contrast to self.vertices(), the range does
    /// not borrow self and hence may be used where a mutable reference of self is needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of undirected edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the outgoing edge records of `u` in insertion order. Each record
    /// starts at `u`.
    /// ** Panics if the u >= n **
    fn edges_of(&self, u: Node) -> &[WeightedEdge];

    /// Returns the neighbors of `u` in insertion order
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges_of(u).iter().map(|e| e.end())
    }

    /// Returns the number of neighbors of from [`u`]
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).len() as NumNodes
    }

    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Iterates over all directed records, grouped by start node
    fn directed_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(|u| self.edges_of(u).iter().copied())
    }

    /// Iterates over every undirected edge exactly once in normalized form
    fn undirected_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.directed_edges().filter(|e| e.is_normalized())
    }
}

/// Looks up edge weights by endpoints
pub trait WeightLookup {
    /// Returns the weight of the edge (u, v) if it exists. Scans the adjacency
    /// list of `u`; if parallel records exist, the first one wins.
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* exactly if the graph contains the directed edge (u, v)
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

impl<G: AdjacencyList> WeightLookup for G {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.edges_of(u)
            .iter()
            .find(|e| e.end() == v)
            .map(|e| e.weight())
    }
}

/// Sums up the weights of all undirected edges
pub trait TotalWeight {
    fn total_weight(&self) -> Weight;
}

impl<G: AdjacencyList> TotalWeight for G {
    fn total_weight(&self) -> Weight {
        self.undirected_edges().map(|e| e.weight()).sum()
    }
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge {u, v} by appending the record (u, v, w) to the
    /// list of `u` and (v, u, w) to the list of `v`.
    /// ** Panics if the edge is already contained or possibly if u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(self.try_add_edge(u, v, weight))
    }

    /// Adds the undirected edge {u, v} unless it is already present.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Can panic if u, v >= n, depending on implementation **
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v, w);
        }
    }
}
