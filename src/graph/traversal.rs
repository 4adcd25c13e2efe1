use super::*;
use std::collections::VecDeque;

/// Breadth-first search from a single start node; yields each reachable node once.
/// After the iterator is exhausted, [`BFS::did_visit_node`] tells which nodes were reached.
pub struct BFS<'a, G> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> BFS<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }

    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }
}

impl<G: AdjacencyList> Iterator for BFS<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !std::mem::replace(&mut self.visited[v as usize], true) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over the nodes reachable from `start` in breadth-first order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}
