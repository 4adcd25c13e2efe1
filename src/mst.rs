//! Minimum spanning trees via Prim's algorithm.
//!
//! The tree is always grown from node 0. In each of the `n - 1` rounds the minimum frontier
//! edge, i.e. the smallest record `(u, v, w)` with `u` already in the tree and `v` not, is
//! added in both directions. Records are compared by [`WeightedEdge`]'s total order, so ties
//! in weight are resolved by the smaller start node and then by the smaller end node. Both
//! strategies implement exactly this selection and thus produce identical trees, including
//! the order in which edges are inserted into the adjacency lists.

use std::{cmp::Reverse, collections::BinaryHeap, fmt, str::FromStr};

use log::{debug, info, trace};

use crate::{
    errors::{GraphError, InvariantCheck, InvariantViolation, Result},
    graph::*,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrimStrategy {
    /// Rescans the whole candidate list in each round and afterwards drops all candidates
    /// within the tree. Runs in time O(n * m).
    #[default]
    Scan,

    /// Keeps the frontier in a binary heap and skips stale entries lazily.
    /// Runs in time O(m log m).
    Heap,
}

impl FromStr for PrimStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "scan" => Ok(PrimStrategy::Scan),
            "heap" => Ok(PrimStrategy::Heap),
            _ => Err(format!("unknown strategy \"{s}\"; expected \"scan\" or \"heap\"")),
        }
    }
}

impl fmt::Display for PrimStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimStrategy::Scan => "scan",
            PrimStrategy::Heap => "heap",
        })
    }
}

/// A minimum spanning tree together with the sequence in which its edges were selected
#[derive(Clone, Debug)]
pub struct SpanningTree {
    tree: AdjArray,
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// The tree as adjacency structure; each edge is stored in both directions
    pub fn tree(&self) -> &AdjArray {
        &self.tree
    }

    /// The selected edges in selection order, each oriented from the tree towards the
    /// newly reached node
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.tree.number_of_nodes()
    }

    fn with_capacity(n: NumNodes) -> Self {
        Self {
            tree: AdjArray::new(n),
            edges: Vec::with_capacity((n as usize).saturating_sub(1)),
            total_weight: 0,
        }
    }

    fn push(&mut self, edge: WeightedEdge) {
        debug!("select {:?}", edge);
        self.tree.add_edge(edge.start(), edge.end(), edge.weight());
        self.edges.push(edge);
        self.total_weight += edge.weight();
    }
}

impl InvariantCheck<InvariantViolation> for SpanningTree {
    fn is_correct(&self) -> std::result::Result<(), InvariantViolation> {
        self.tree.is_correct()?;

        let n = self.tree.number_of_nodes();
        if self.tree.number_of_edges() + 1 != n as NumEdges {
            return Err(InvariantViolation::WrongEdgeCount {
                number_of_nodes: n,
                number_of_edges: self.tree.number_of_edges(),
            });
        }

        // n - 1 edges and connected implies acyclic
        let mut bfs = self.tree.bfs(0);
        bfs.by_ref().for_each(drop);
        if let Some(u) = self.tree.vertices().find(|&u| !bfs.did_visit_node(u)) {
            return Err(InvariantViolation::NotSpanning(u));
        }

        Ok(())
    }
}

/// Computes a minimum spanning tree rooted at node 0 over `number_of_nodes` nodes.
/// `candidates` has to contain each undirected edge in both directions (see
/// [`crate::io::LoadedGraph`]); records pointing into the tree are never selected.
///
/// Returns [`GraphError::DisconnectedGraph`] if some node cannot be reached from node 0.
///
/// # Example
/// ```
/// use twice_around::{graph::*, mst::*};
///
/// let candidates: Vec<_> = [(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4), (0, 2, 3)]
///     .into_iter()
///     .map(WeightedEdge::from)
///     .flat_map(|e| [e, e.reverse()])
///     .collect();
///
/// let mst = prim(4, candidates, PrimStrategy::Scan).unwrap();
/// assert_eq!(mst.total_weight(), 4);
/// assert_eq!(mst.edges(), &[WeightedEdge(0, 1, 1), WeightedEdge(1, 2, 2), WeightedEdge(2, 3, 1)]);
/// ```
pub fn prim(
    number_of_nodes: NumNodes,
    candidates: Vec<WeightedEdge>,
    strategy: PrimStrategy,
) -> Result<SpanningTree> {
    info!(
        "Compute MST over {} nodes from {} candidate records using strategy {}",
        number_of_nodes,
        candidates.len(),
        strategy
    );

    if number_of_nodes == 0 {
        return Ok(SpanningTree::with_capacity(0));
    }

    let mst = match strategy {
        PrimStrategy::Scan => prim_scan(number_of_nodes, candidates)?,
        PrimStrategy::Heap => prim_heap(number_of_nodes, candidates)?,
    };

    info!("MST has {} edges and weight {}", mst.edges.len(), mst.total_weight);
    debug_assert!(mst.is_correct().is_ok());
    Ok(mst)
}

fn prim_scan(n: NumNodes, mut candidates: Vec<WeightedEdge>) -> Result<SpanningTree> {
    let mut mst = SpanningTree::with_capacity(n);
    let mut known = vec![false; n as usize];
    known[0] = true;

    for reached in 1..n {
        let shortest = candidates
            .iter()
            .filter(|e| known[e.start() as usize] && !known[e.end() as usize])
            .min()
            .copied()
            .ok_or(GraphError::DisconnectedGraph {
                reached,
                number_of_nodes: n,
            })?;

        mst.push(shortest);
        known[shortest.end() as usize] = true;

        // edges within the tree can never be selected again
        candidates.retain(|e| !known[e.start() as usize] || !known[e.end() as usize]);
        trace!("{} candidates remain", candidates.len());
    }

    Ok(mst)
}

fn prim_heap(n: NumNodes, candidates: Vec<WeightedEdge>) -> Result<SpanningTree> {
    let mut outgoing = vec![Vec::new(); n as usize];
    for e in candidates {
        outgoing[e.start() as usize].push(e);
    }

    let mut mst = SpanningTree::with_capacity(n);
    let mut known = vec![false; n as usize];
    let mut frontier: BinaryHeap<Reverse<WeightedEdge>> = BinaryHeap::new();

    let reach = |u: Node, known: &mut [bool], frontier: &mut BinaryHeap<Reverse<WeightedEdge>>| {
        known[u as usize] = true;
        frontier.extend(
            outgoing[u as usize]
                .iter()
                .filter(|e| !known[e.end() as usize])
                .map(|&e| Reverse(e)),
        );
    };

    reach(0, &mut known, &mut frontier);

    for reached in 1..n {
        let shortest = loop {
            match frontier.pop() {
                Some(Reverse(e)) if !known[e.end() as usize] => break e,
                Some(_) => continue,
                None => {
                    return Err(GraphError::DisconnectedGraph {
                        reached,
                        number_of_nodes: n,
                    });
                }
            }
        };

        mst.push(shortest);
        reach(shortest.end(), &mut known, &mut frontier);
        trace!("{} records in frontier", frontier.len());
    }

    Ok(mst)
}
