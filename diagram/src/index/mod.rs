pub mod graph;

pub use graph::{AdjacencyGraph, MAX_PATH_DEPTH};
