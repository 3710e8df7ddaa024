// Domain model for callbench.

pub mod callgraph;
pub mod error;
pub mod partition;
pub mod shape;
