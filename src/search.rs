use std::collections::VecDeque;
use std::iter::FusedIterator;

use bitvec::vec::BitVec;

use crate::graph::Graph;

/// Lazy breadth-first traversal over vertex indices.
///
/// Each index is enqueued at most once, so the traversal always terminates.
/// When a vertex is dequeued its unvisited neighbours are enqueued in
/// increasing index order, which fixes the relative order of vertices within
/// a layer.  The traversal borrows the graph for its whole lifetime and is
/// not restartable; once exhausted it keeps returning `None`.
pub struct BfsIndices<'g, T> {
    graph: &'g Graph<T>,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'g, T> BfsIndices<'g, T> {
    /// Starts a traversal at `start`.  A missing or invalid start index
    /// yields an empty traversal.
    pub(crate) fn new(graph: &'g Graph<T>, start: Option<usize>) -> Self {
        let mut visited = BitVec::repeat(false, graph.len());
        let mut queue = VecDeque::new();
        if let Some(start) = start.filter(|&index| graph.index_is_valid(index)) {
            visited.set(start, true);
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, T> Iterator for BfsIndices<'g, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let graph = self.graph;
        for neighbour in graph.neighbour_indices(index) {
            if !self.visited.replace(neighbour, true) {
                self.queue.push_back(neighbour);
            }
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.queue.len();
        (pending, Some(pending + self.visited.count_zeros()))
    }
}

impl<'g, T> FusedIterator for BfsIndices<'g, T> {}

/// Lazy breadth-first traversal yielding vertex payloads.  See
/// [`BfsIndices`] for the visiting order.
pub struct Bfs<'g, T> {
    indices: BfsIndices<'g, T>,
}

impl<'g, T> Bfs<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, start: Option<usize>) -> Self {
        Self {
            indices: BfsIndices::new(graph, start),
        }
    }

    /// Continues the traversal yielding indices instead of payloads.
    pub fn into_indices(self) -> BfsIndices<'g, T> {
        self.indices
    }
}

impl<'g, T> Iterator for Bfs<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.indices.graph;
        self.indices.next().map(|index| &graph.vertices()[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'g, T> FusedIterator for Bfs<'g, T> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// 0 - 1, 0 - 2, 1 - 3
    fn create_simple_graph() -> Graph<usize> {
        let mut graph = Graph::with_capacity(4);
        graph.extend(0..4);
        graph.add_edge_at(0, 1);
        graph.add_edge_at(0, 2);
        graph.add_edge_at(1, 3);
        graph
    }

    fn create_cyclic_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.extend(["x", "y", "z"]);
        graph.add_edge(&"x", &"y");
        graph.add_edge(&"y", &"z");
        graph.add_edge(&"z", &"x");
        graph
    }

    #[test]
    fn test_bfs_simple_graph() {
        let graph = create_simple_graph();
        let visited: Vec<_> = graph.bfs_indices(0).collect();
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bfs_from_leaf() {
        let graph = create_simple_graph();
        let visited: Vec<_> = graph.bfs_from(3).copied().collect();
        assert_eq!(visited, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_bfs_neighbours_in_index_order() {
        let mut graph = Graph::new();
        graph.extend(["hub", "d", "c", "b", "a"]);
        for leaf in ["a", "b", "c", "d"] {
            graph.add_edge(&leaf, &"hub");
        }
        let visited: Vec<_> = graph.bfs(&"hub").copied().collect();
        assert_eq!(visited, vec!["hub", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let graph = create_cyclic_graph();
        let visited: Vec<_> = graph.bfs(&"y").copied().collect();
        assert_eq!(visited, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_bfs_self_loop() {
        let mut graph = create_cyclic_graph();
        graph.add_edge(&"x", &"x");
        assert_eq!(graph.bfs(&"x").count(), 3);
    }

    #[test]
    fn test_bfs_only_reachable() {
        let mut graph = create_simple_graph();
        graph.add_vertex(4);
        graph.add_vertex(5);
        graph.add_edge_at(4, 5);
        let visited: HashSet<_> = graph.bfs_indices(5).collect();
        assert_eq!(visited, HashSet::from([4, 5]));
    }

    #[test]
    fn test_bfs_invalid_start() {
        let graph = create_simple_graph();
        assert_eq!(graph.bfs_indices(4).next(), None);
        assert_eq!(graph.bfs_from(usize::MAX).count(), 0);
        assert_eq!(graph.bfs(&17).count(), 0);
    }

    #[test]
    fn test_bfs_empty_graph() {
        let graph = Graph::<u8>::new();
        assert_eq!(graph.bfs_indices(0).count(), 0);
    }

    #[test]
    fn test_bfs_is_fused() {
        let graph = create_cyclic_graph();
        let mut bfs = graph.bfs(&"z");
        assert_eq!(bfs.by_ref().count(), 3);
        assert_eq!(bfs.next(), None);
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn test_bfs_is_lazy() {
        let graph = create_simple_graph();
        let mut bfs = graph.bfs_indices(0);
        assert_eq!(bfs.next(), Some(0));
        // Only the first layer has been discovered so far.
        assert_eq!(bfs.queue, VecDeque::from([1, 2]));
        assert_eq!(bfs.size_hint(), (2, Some(3)));
    }

    #[test]
    fn test_into_indices() {
        let graph = create_cyclic_graph();
        let mut bfs = graph.bfs(&"x");
        assert_eq!(bfs.next(), Some(&"x"));
        let rest: Vec<_> = bfs.into_indices().collect();
        assert_eq!(rest, vec![1, 2]);
    }
}
