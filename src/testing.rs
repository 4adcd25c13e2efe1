use super::graph::*;
use itertools::Itertools as _;
use rand::Rng;

/// All directed records of `graph` as candidate list for Prim's algorithm
pub fn candidates_of(graph: &AdjArray) -> Vec<WeightedEdge> {
    graph.directed_edges().collect()
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, child: usize) -> usize {
        if self.parent[child] != child {
            let parent = self.find(self.parent[child]);
            self.parent[child] = parent;
        }
        self.parent[child]
    }

    /// Returns true iff `u` and `v` were in different sets
    fn unite(&mut self, u: usize, v: usize) -> bool {
        let (pu, pv) = (self.find(u), self.find(v));
        self.parent[pu] = pv;
        pu != pv
    }
}

/// Weight of a minimum spanning forest computed with Kruskal's algorithm; serves as
/// reference for the Prim implementation
pub fn kruskal_weight(graph: &AdjArray) -> Weight {
    let mut uf = UnionFind::new(graph.len());
    graph
        .undirected_edges()
        .sorted()
        .filter(|e| uf.unite(e.start() as usize, e.end() as usize))
        .map(|e| e.weight())
        .sum()
}

/// Infinite stream of complete metric graphs with 2 to `max_nodes` nodes
pub fn generate_metric_graph_stream(
    rng: &mut impl Rng,
    max_nodes: NumNodes,
) -> impl Iterator<Item = AdjArray> + '_ {
    std::iter::repeat_with(move || {
        let n = rng.gen_range(2..=max_nodes);
        AdjArray::random_metric(&mut *rng, n, 1000)
    })
}
