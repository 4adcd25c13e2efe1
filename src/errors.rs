use thiserror::Error;

use crate::graph::{Node, NumEdges, NumNodes, WeightedEdge};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph in line {line}: {reason}")]
    MalformedGraph { line: usize, reason: String },

    #[error("graph is disconnected; only {reached} of {number_of_nodes} nodes are reachable from node 0")]
    DisconnectedGraph {
        reached: NumNodes,
        number_of_nodes: NumNodes,
    },
}

/// Violations reported by [`InvariantCheck`] implementations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("edge {0:?} has no reverse record")]
    MissingReverse(WeightedEdge),

    #[error("record {0:?} is stored at node {1}")]
    MisplacedRecord(WeightedEdge, Node),

    #[error("tree over {number_of_nodes} nodes has {number_of_edges} edges")]
    WrongEdgeCount {
        number_of_nodes: NumNodes,
        number_of_edges: NumEdges,
    },

    #[error("tree does not span node {0}")]
    NotSpanning(Node),
}

pub type Result<T> = std::result::Result<T, GraphError>;
