use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::super::graph::*;

/// produces a minimalistic DOT representation of the graph with weights as edge labels
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_dot_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }
}

impl<T> DotWriter for T
where
    T: AdjacencyList,
{
    fn try_write_dot<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        write!(writer, "graph G {{")?;
        for u in self.vertices().filter(|&u| self.degree_of(u) == 0) {
            write!(writer, "v{u}; ")?;
        }
        for WeightedEdge(u, v, w) in self.undirected_edges() {
            write!(writer, "v{u}--v{v}[label={w}]; ")?;
        }
        write!(writer, r"}}")
    }
}
