use std::io::Write;

use super::super::graph::*;

/// Renders the adjacency lists in insertion order, one node per line:
/// `<u>: <v>(<w>) <v>(<w>) ...`
pub trait AdjacencyWriter {
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl<T> AdjacencyWriter for T
where
    T: AdjacencyList,
{
    fn try_write_adjacency<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for u in self.vertices() {
            write!(writer, "{u}:")?;
            for WeightedEdge(_, v, w) in self.edges_of(u) {
                write!(writer, " {v}({w})")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hard_coded() {
        let graph = AdjArray::test_only_from([(0, 1, 1), (1, 2, 2), (0, 2, 3)]);

        let mut buffer: Vec<u8> = Vec::new();
        graph.try_write_adjacency(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "0: 1(1) 2(3)\n1: 0(1) 2(2)\n2: 1(2) 0(3)\n"
        );
    }

    #[test]
    fn isolated_nodes() {
        let graph = AdjArray::new(2);

        let mut buffer: Vec<u8> = Vec::new();
        graph.try_write_adjacency(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0:\n1:\n");
    }
}
