use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::super::graph::*;

/// Writes a graph in the instance format understood by [`super::GraphReader`]
pub trait GraphWriter {
    fn try_write_graph<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<T> GraphWriter for T
where
    T: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "p tsp {} {}",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;

        for WeightedEdge(u, v, w) in self.undirected_edges() {
            writeln!(writer, "{u} {v} {w}")?;
        }

        Ok(())
    }

    fn try_write_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(&mut writer)?;
        writer.flush()
    }
}
