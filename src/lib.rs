//! An undirected, unweighted graph over arbitrary payloads, stored as a
//! bit-packed adjacency matrix, with lazy breadth-first traversal.
//!
//! The graph is the substrate for map colouring: vertices are usually
//! [`Land`] regions painted with a [`Colour`], but any payload type works.
//! Lookups by payload need `PartialEq`; the [`Display`](std::fmt::Display)
//! rendering needs `Display`.
//!
//! ```
//! use land_graph::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.extend(["A", "B", "C"]);
//! graph.add_edge(&"A", &"B");
//! graph.add_edge(&"B", &"C");
//!
//! assert_eq!(graph.vertex_neighbours(&"B"), vec![&"A", &"C"]);
//! assert!(graph.is_connected());
//! assert_eq!(graph.bfs(&"A").copied().collect::<Vec<_>>(), ["A", "B", "C"]);
//!
//! graph.remove_vertex(&"B")?;
//! assert!(!graph.is_connected());
//! # Ok::<(), GraphError>(())
//! ```
pub mod adjacency_matrix;
pub mod colour;
pub mod error;
pub mod graph;
pub mod land;
pub mod prelude;
pub mod search;
pub mod tracing_support;

mod debug;
mod test_support;
mod triangular;

pub use colour::Colour;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use land::Land;
pub use search::{Bfs, BfsIndices};
