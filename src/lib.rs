pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod mst;
pub mod report;
pub mod tour;

pub mod prelude {
    pub use super::errors::{GraphError, InvariantCheck, InvariantViolation};
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::mst::*;
    pub use super::report::*;
    pub use super::tour::*;
}

#[cfg(test)]
mod testing;
