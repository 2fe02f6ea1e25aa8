pub use crate::colour::Colour;
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::land::Land;
pub use crate::search::{Bfs, BfsIndices};
