//! [`Graph`] is an undirected, unweighted graph backed by an adjacency
//! matrix.
//!
//! Vertices hold arbitrary payloads and are identified by dense indices
//! `0..len()` assigned in insertion order.  Payloads are looked up by value
//! with `PartialEq`; duplicates are allowed and value lookups resolve to the
//! lowest matching index.
//!
//! Only removals from an empty graph are errors.  Every other miss (an
//! unknown payload or an out-of-range index) is answered with `None`,
//! `false` or an empty result, or the call does nothing.
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;

use crate::adjacency_matrix::SymmetricBitMatrix;
use crate::debug::format_debug;
use crate::error::{GraphError, Result};
use crate::search::{Bfs, BfsIndices};
use crate::tracing_support::{graph_debug, graph_trace};

/// Name reported in [`GraphError::EmptyCollection`].
const COLLECTION_NAME: &str = "graph";

/// An undirected graph over payloads of type `T`.
///
/// Storage is allocated for [`capacity`](Graph::capacity) vertices up front.
/// Adding a vertex to a full graph doubles the capacity; existing vertices,
/// their indices and their edges are unaffected.  Removing a vertex shifts
/// every higher index down by one and keeps all edges that did not touch the
/// removed vertex.
#[derive(Clone)]
pub struct Graph<T> {
    vertices: Vec<T>,
    /// Cells outside the leading `len()` × `len()` block are always unset.
    adjacency: SymmetricBitMatrix,
}

impl<T> Graph<T> {
    /// Capacity used by [`Graph::new`].
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty graph with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty graph with room for `capacity` vertices.  The
    /// capacity is not a limit; the graph grows past it as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(capacity),
            adjacency: SymmetricBitMatrix::with_size(capacity),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices the graph can hold before it next grows.
    pub fn capacity(&self) -> usize {
        self.adjacency.size()
    }

    pub fn index_is_valid(&self, index: usize) -> bool {
        index < self.vertices.len()
    }

    /// Returns the payload at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not valid.  Use [`get`](Self::get) for a checked
    /// lookup.
    pub fn at(&self, index: usize) -> &T {
        &self.vertices[index]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    /// All payloads in index order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Appends a vertex with no edges and returns its index.
    pub fn add_vertex(&mut self, vertex: T) -> usize {
        let index = self.vertices.len();
        if index == self.capacity() {
            self.expand_capacity();
        }
        self.adjacency.clear_lower_row(index);
        self.vertices.push(vertex);
        index
    }

    fn expand_capacity(&mut self) {
        let new_capacity = (self.capacity() * 2).max(1);
        graph_debug!(
            from = self.capacity(),
            to = new_capacity,
            "expanding graph capacity"
        );
        self.vertices.reserve_exact(new_capacity - self.vertices.len());
        self.adjacency.grow(new_capacity);
    }

    /// Removes the vertex at `index` together with its edges and returns its
    /// payload, or `None` if the index is not valid.
    ///
    /// Fails with [`GraphError::EmptyCollection`] if the graph has no
    /// vertices.
    pub fn remove_vertex_at(&mut self, index: usize) -> Result<Option<T>> {
        if self.is_empty() {
            return Err(GraphError::EmptyCollection(COLLECTION_NAME));
        }
        if !self.index_is_valid(index) {
            return Ok(None);
        }
        self.adjacency.remove_row_and_column(index, self.vertices.len());
        let vertex = self.vertices.remove(index);
        graph_debug!(index, remaining = self.vertices.len(), "removed vertex");
        Ok(Some(vertex))
    }

    /// Connects the vertices at `index1` and `index2`.  Does nothing unless
    /// both indices are valid.  Equal indices make a self-loop.
    pub fn add_edge_at(&mut self, index1: usize, index2: usize) {
        if self.index_is_valid(index1) && self.index_is_valid(index2) {
            self.adjacency.set(index1, index2, true);
            graph_trace!(index1, index2, "added edge");
        }
    }

    /// Disconnects the vertices at `index1` and `index2`.  Does nothing
    /// unless both indices are valid.
    pub fn remove_edge_at(&mut self, index1: usize, index2: usize) {
        if self.index_is_valid(index1) && self.index_is_valid(index2) {
            self.adjacency.set(index1, index2, false);
            graph_trace!(index1, index2, "removed edge");
        }
    }

    /// Whether an edge joins the vertices at `index1` and `index2`.  False if
    /// either index is not valid.
    pub fn has_edge(&self, index1: usize, index2: usize) -> bool {
        self.index_is_valid(index1)
            && self.index_is_valid(index2)
            && self.adjacency.get(index1, index2)
    }

    /// Indices adjacent to `index`, in increasing order.  Empty if `index`
    /// is not valid.
    pub fn neighbour_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let len = if self.index_is_valid(index) {
            self.vertices.len()
        } else {
            0
        };
        self.adjacency.row(index, len)
    }

    /// Number of neighbours of the vertex at `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbour_indices(index).count()
    }

    /// Iterates over edges as index pairs `(i, j)` with `i <= j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.len()
    }

    /// Breadth-first traversal of indices starting at `start`.  Empty if
    /// `start` is not valid.
    pub fn bfs_indices(&self, start: usize) -> BfsIndices<'_, T> {
        BfsIndices::new(self, Some(start))
    }

    /// Breadth-first traversal of payloads starting at index `start`.  Empty
    /// if `start` is not valid.
    pub fn bfs_from(&self, start: usize) -> Bfs<'_, T> {
        Bfs::new(self, Some(start))
    }

    /// Whether every vertex is reachable from vertex 0.  An empty graph is
    /// not connected.
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && self.bfs_indices(0).count() == self.vertices.len()
    }

    /// Removes every vertex and edge.  The capacity is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

impl<T> Graph<T>
where
    T: PartialEq,
{
    /// Index of the first vertex equal to `vertex`.
    pub fn index_of(&self, vertex: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Removes the first vertex equal to `vertex` together with its edges and
    /// returns its payload, or `None` if there is no such vertex.
    ///
    /// Fails with [`GraphError::EmptyCollection`] if the graph has no
    /// vertices.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<Option<T>> {
        if self.is_empty() {
            return Err(GraphError::EmptyCollection(COLLECTION_NAME));
        }
        match self.index_of(vertex) {
            Some(index) => self.remove_vertex_at(index),
            None => Ok(None),
        }
    }

    /// Connects two vertices by value.  Does nothing if either is missing.
    pub fn add_edge(&mut self, vertex1: &T, vertex2: &T) {
        if let (Some(index1), Some(index2)) = (self.index_of(vertex1), self.index_of(vertex2)) {
            self.add_edge_at(index1, index2);
        }
    }

    /// Disconnects two vertices by value.  Does nothing if either is
    /// missing.
    ///
    /// Fails with [`GraphError::EmptyCollection`] if the graph has no
    /// vertices.
    pub fn remove_edge(&mut self, vertex1: &T, vertex2: &T) -> Result<()> {
        if self.is_empty() {
            return Err(GraphError::EmptyCollection(COLLECTION_NAME));
        }
        if let (Some(index1), Some(index2)) = (self.index_of(vertex1), self.index_of(vertex2)) {
            self.remove_edge_at(index1, index2);
        }
        Ok(())
    }

    /// Payloads adjacent to `vertex`, in increasing index order.  Empty if
    /// `vertex` is not in the graph.
    pub fn vertex_neighbours(&self, vertex: &T) -> Vec<&T> {
        match self.index_of(vertex) {
            Some(index) => self
                .neighbour_indices(index)
                .map(|neighbour| &self.vertices[neighbour])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Breadth-first traversal of payloads starting at `start`.  Empty if
    /// `start` is not in the graph.
    pub fn bfs(&self, start: &T) -> Bfs<'_, T> {
        Bfs::new(self, self.index_of(start))
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Graph<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> Extend<T> for Graph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }
}

impl<T> FromIterator<T> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<T> Debug for Graph<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "Graph")
    }
}

/// Renders the adjacency matrix as a 0/1 grid followed by a table of each
/// vertex and its neighbours.
impl<T> Display for Graph<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Graph is empty");
        }
        let len = self.vertices.len();

        write!(f, "Adjacency Matrix:\n---------------\nindex\n\t")?;
        for i in 0..len {
            write!(f, "{i:<2}")?;
        }
        write!(f, "\n\n")?;
        for i in 0..len {
            write!(f, "{i}\t")?;
            for j in 0..len {
                write!(f, "{} ", u8::from(self.adjacency.get(i, j)))?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "\n\nVertex Values\n-------------\nindex\tvalue\tadjacent values\n\n"
        )?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            write!(f, "{i}\t{vertex}\t\t")?;
            for j in self.neighbour_indices(i) {
                write!(f, "{} ", self.vertices[j])?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
