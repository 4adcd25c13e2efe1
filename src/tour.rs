//! Twice-around-the-tree: walk every tree edge there and back, then skip repeated nodes.

use std::fmt;

use itertools::Itertools;
use log::{debug, info, trace};
use serde::Serialize;

use crate::{graph::*, mst::SpanningTree};

/// The closed walk around a tree that traverses each tree edge exactly twice.
///
/// The walk starts at the root and visits children in adjacency-list order (depth-first,
/// pre-order). Once all children of a node are done, the walk returns to that node's
/// traversal parent. Hence it has length `2 * (n - 1) + 1` and ends at the root again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeWalk {
    nodes: Vec<Node>,
    steps: Vec<WeightedEdge>,
    first_visits: Vec<usize>,
}

struct Frame {
    node: Node,
    next: usize,
    entered_by: Option<WeightedEdge>,
}

impl TreeWalk {
    /// Walks the tree from `root`. Uses an explicit stack, so deep trees are fine.
    /// Nodes not reachable from `root` are not part of the walk.
    pub fn new<G: AdjacencyList>(tree: &G, root: Node) -> Self {
        let mut visited = vec![false; tree.len()];
        visited[root as usize] = true;

        let mut walk = Self {
            nodes: vec![root],
            steps: Vec::with_capacity(2 * tree.len().saturating_sub(1)),
            first_visits: vec![0],
        };

        let mut stack = vec![Frame {
            node: root,
            next: 0,
            entered_by: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let edges = tree.edges_of(frame.node);

            if let Some(&edge) = edges.get(frame.next) {
                frame.next += 1;
                if visited[edge.end() as usize] {
                    continue;
                }

                visited[edge.end() as usize] = true;
                walk.first_visits.push(walk.nodes.len());
                walk.step(edge);

                stack.push(Frame {
                    node: edge.end(),
                    next: 0,
                    entered_by: Some(edge),
                });
            } else if let Some(Frame {
                entered_by: Some(edge),
                ..
            }) = stack.pop()
            {
                walk.step(edge.reverse());
            }
        }

        debug!(
            "Walked {} steps around tree with {} nodes",
            walk.steps.len(),
            tree.number_of_nodes()
        );

        walk
    }

    fn step(&mut self, edge: WeightedEdge) {
        trace!("{} -> {} ({})", edge.start(), edge.end(), edge.weight());
        self.nodes.push(edge.end());
        self.steps.push(edge);
    }

    /// The nodes in walking order, including revisits; first and last node are the root
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The tree edges in walking order; `steps()[i]` leads from `nodes()[i]` to `nodes()[i + 1]`
    pub fn steps(&self) -> &[WeightedEdge] {
        &self.steps
    }

    /// Total weight of the walk, i.e. twice the weight of the walked tree
    pub fn length(&self) -> Weight {
        self.steps.iter().map(|e| e.weight()).sum()
    }

    /// Keeps only the first occurrence of each node, preserving the walking order
    pub fn shortcut(&self) -> Vec<Node> {
        self.first_visits.iter().map(|&i| self.nodes[i]).collect()
    }
}

/// A Hamiltonian circuit (implicitly closed by returning to its first node) and its length
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tour {
    circuit: Vec<Node>,
    length: Weight,
}

impl Tour {
    /// Runs the twice-around-the-tree heuristic on `mst`, rooted at node 0, and measures
    /// the resulting circuit in `graph`
    pub fn from_tree<G: AdjacencyList>(graph: &G, mst: &SpanningTree) -> Self {
        let walk = TreeWalk::new(mst.tree(), 0);
        Self::from_walk(graph, &walk)
    }

    pub fn from_walk<G: AdjacencyList>(graph: &G, walk: &TreeWalk) -> Self {
        let tour = Self {
            circuit: walk.shortcut(),
            length: Self::length_in(graph, walk),
        };

        info!(
            "Circuit over {} nodes has length {} (walk length {})",
            tour.circuit.len(),
            tour.length,
            walk.length()
        );

        tour
    }

    /// Measures the shortcut circuit of `walk`, including the hop back to the start.
    ///
    /// Each hop from `u` to `v` costs the weight of the edge {u, v} in `graph`. If `graph`
    /// has no such edge, the hop costs the part of the walk between the first visits of `u`
    /// and `v`, i.e. the tree path the walk actually takes.
    pub fn length_in<G: AdjacencyList>(graph: &G, walk: &TreeWalk) -> Weight {
        if walk.first_visits.len() < 2 {
            return 0;
        }

        let prefix: Vec<Weight> = std::iter::once(0)
            .chain(walk.steps.iter().scan(0, |sum, e| {
                *sum += e.weight();
                Some(*sum)
            }))
            .collect();

        walk.first_visits
            .iter()
            .copied()
            .chain(std::iter::once(walk.nodes.len() - 1))
            .tuple_windows()
            .map(|(i, j)| {
                let (u, v) = (walk.nodes[i], walk.nodes[j]);
                graph.weight_of(u, v).unwrap_or_else(|| {
                    trace!("no edge {{{u}, {v}}}; follow the tree instead");
                    prefix[j] - prefix[i]
                })
            })
            .sum()
    }

    /// Nodes in visiting order
    pub fn circuit(&self) -> &[Node] {
        &self.circuit
    }

    pub fn length(&self) -> Weight {
        self.length
    }

    /// Returns true iff the circuit contains each node of `0..n` exactly once
    pub fn is_hamiltonian(&self, n: NumNodes) -> bool {
        let mut seen = vec![false; n as usize];
        self.circuit.len() == n as usize
            && self.circuit.iter().all(|&u| {
                (u as usize) < seen.len() && !std::mem::replace(&mut seen[u as usize], true)
            })
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.circuit.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        errors::InvariantCheck,
        mst::{PrimStrategy, prim},
        testing::*,
    };
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn solve(graph: &AdjArray) -> (SpanningTree, TreeWalk, Tour) {
        let mst = prim(
            graph.number_of_nodes(),
            candidates_of(graph),
            PrimStrategy::Scan,
        )
        .unwrap();
        let walk = TreeWalk::new(mst.tree(), 0);
        let tour = Tour::from_walk(graph, &walk);
        (mst, walk, tour)
    }

    #[test]
    fn four_nodes() {
        let graph =
            AdjArray::test_only_from([(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 4), (0, 2, 3)]);
        let (mst, walk, tour) = solve(&graph);

        assert_eq!(walk.nodes(), &[0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(walk.length(), 2 * mst.total_weight());
        assert_eq!(tour.circuit(), &[0, 1, 2, 3]);
        assert!(tour.is_hamiltonian(4));

        // 0-1 (1) + 1-2 (2) + 2-3 (1) + 3-0 (4)
        assert_eq!(tour.length(), 8);
        assert!(tour.length() >= mst.total_weight());
        assert!(tour.length() <= 2 * mst.total_weight());
        assert_eq!(tour.to_string(), "0, 1, 2, 3");
        assert_eq!(Tour::from_tree(&graph, &mst), tour);
    }

    #[test]
    fn single_edge() {
        let graph = AdjArray::test_only_from([(0, 1, 5)]);
        let (mst, walk, tour) = solve(&graph);

        assert_eq!(mst.total_weight(), 5);
        assert_eq!(walk.nodes(), &[0, 1, 0]);
        assert_eq!(tour.circuit(), &[0, 1]);
        assert_eq!(tour.length(), 10);
    }

    #[test]
    fn single_node() {
        let graph = AdjArray::new(1);
        let (_, walk, tour) = solve(&graph);

        assert_eq!(walk.nodes(), &[0]);
        assert!(walk.steps().is_empty());
        assert_eq!(tour.circuit(), &[0]);
        assert_eq!(tour.length(), 0);
    }

    #[test]
    fn star_backtracks_to_center() {
        let graph = AdjArray::test_only_from([(0, 1, 3), (0, 2, 1), (0, 3, 2)]);
        let (mst, walk, tour) = solve(&graph);

        // children are visited in selection order 2, 3, 1
        assert_eq!(walk.nodes(), &[0, 2, 0, 3, 0, 1, 0]);
        assert_eq!(tour.circuit(), &[0, 2, 3, 1]);

        // leaves are not adjacent; each hop between them walks through the center
        assert_eq!(tour.length(), 1 + (1 + 2) + (2 + 3) + 3);
        assert_eq!(tour.length(), 2 * mst.total_weight());
    }

    #[test]
    fn backtracks_to_parent_not_first_neighbor() {
        //       0
        //      / \
        //     1   4
        //    / \
        //   2   3
        let tree = AdjArray::test_only_from([(0, 1, 1), (1, 2, 1), (1, 3, 1), (0, 4, 1)]);
        let walk = TreeWalk::new(&tree, 0);

        assert_eq!(walk.nodes(), &[0, 1, 2, 1, 3, 1, 0, 4, 0]);
        assert_eq!(walk.shortcut(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn hops_are_measured_by_node() {
        // tree 0-2-1 plus the direct edge {0, 1} which is too heavy for the tree
        let graph = AdjArray::test_only_from([(0, 2, 1), (2, 1, 1), (0, 1, 5)]);
        let (_, walk, tour) = solve(&graph);

        assert_eq!(walk.nodes(), &[0, 2, 1, 2, 0]);
        assert_eq!(tour.circuit(), &[0, 2, 1]);
        assert_eq!(tour.length(), 1 + 1 + 5);
    }

    #[test]
    fn walk_is_twice_around() {
        let rng = &mut Pcg64::seed_from_u64(31337);

        for _ in 0..200 {
            let n = rng.gen_range(2..40);
            let graph = AdjArray::random_connected_gnp(rng, n, 0.1, 1..50);
            let (mst, walk, tour) = solve(&graph);
            assert!(mst.is_correct().is_ok());

            let nodes = walk.nodes();
            assert_eq!(nodes.len(), 2 * (n as usize - 1) + 1);
            assert_eq!(nodes.first(), Some(&0));
            assert_eq!(nodes.last(), Some(&0));

            for (step, (u, v)) in walk.steps().iter().zip(nodes.iter().tuple_windows()) {
                assert_eq!((step.start(), step.end()), (*u, *v));
                assert_eq!(mst.tree().weight_of(*u, *v), Some(step.weight()));
            }

            let counts = walk.steps().iter().map(|e| e.normalized()).counts();
            assert_eq!(counts.len(), n as usize - 1);
            assert!(counts.values().all(|&c| c == 2));

            assert_eq!(walk.length(), 2 * mst.total_weight());
            assert!(tour.is_hamiltonian(n));
            assert_eq!(tour.circuit()[0], 0);
        }
    }

    #[test]
    fn metric_bound() {
        let rng = &mut Pcg64::seed_from_u64(2024);

        for graph in generate_metric_graph_stream(rng, 30).take(200) {
            let (mst, _, tour) = solve(&graph);

            assert!(tour.is_hamiltonian(graph.number_of_nodes()));
            assert!(tour.length() >= mst.total_weight(), "{graph:?}");
            assert!(tour.length() <= 2 * mst.total_weight(), "{graph:?}");
        }
    }

    #[test]
    fn hamiltonian_check() {
        let tour = Tour {
            circuit: vec![0, 2, 1],
            length: 0,
        };
        assert!(tour.is_hamiltonian(3));
        assert!(!tour.is_hamiltonian(4));
        assert!(!tour.is_hamiltonian(2));

        let tour = Tour {
            circuit: vec![0, 1, 1],
            length: 0,
        };
        assert!(!tour.is_hamiltonian(3));
    }
}
