pub mod adjacency_writer;
pub use adjacency_writer::AdjacencyWriter;

pub mod dot_writer;
pub use dot_writer::DotWriter;

pub mod graph_reader;
pub use graph_reader::*;

pub mod graph_writer;
pub use graph_writer::GraphWriter;
