use super::*;

pub trait Connectivity {
    /// Returns the number of nodes reachable from `start` (including `start`)
    fn number_of_reachable_nodes(&self, start: Node) -> NumNodes;

    fn is_connected(&self) -> bool;
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn number_of_reachable_nodes(&self, start: Node) -> NumNodes {
        self.bfs(start).count() as NumNodes
    }

    fn is_connected(&self) -> bool {
        self.is_empty() || self.number_of_reachable_nodes(0) == self.number_of_nodes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn is_connected() {
        let mut graph = AdjArray::new(7);
        graph.add_edges([(1, 2, 1), (2, 3, 1), (4, 5, 1)]);

        assert!(!graph.is_connected());
        assert_eq!(graph.number_of_reachable_nodes(0), 1);
        assert_eq!(graph.number_of_reachable_nodes(3), 3);

        graph.add_edges([(0, 1, 1), (3, 4, 1), (5, 6, 1)]);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_reachable_nodes(6), 7);

        assert!(AdjArray::new(0).is_connected());
        assert!(AdjArray::new(1).is_connected());
    }
}
