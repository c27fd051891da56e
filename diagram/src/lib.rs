pub mod export;
pub mod index;
pub mod store;
pub mod template;

pub use export::ExportDocument;
pub use index::{AdjacencyGraph, MAX_PATH_DEPTH};
pub use store::{Diagram, DiagramError};
pub use template::Template;
