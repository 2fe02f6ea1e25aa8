#![cfg(test)]

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::graph::Graph;

/// A random graph for property tests.  The initial capacity is kept small so
/// that generation usually exercises growth.
#[derive(Debug, Clone)]
pub struct ArbGraph<T> {
    pub graph: Graph<T>,
}

impl<T> Arbitrary for ArbGraph<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let capacity = usize::arbitrary(g) % 6;
        let num_vertices = usize::arbitrary(g) % 20;
        let num_edges = usize::arbitrary(g) % 50;
        let num_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Graph::with_capacity(capacity);
        for _ in 0..num_vertices {
            graph.add_vertex(T::arbitrary(g));
        }
        if num_vertices > 0 {
            for _ in 0..num_edges {
                let i = usize::arbitrary(g) % num_vertices;
                let j = usize::arbitrary(g) % num_vertices;
                graph.add_edge_at(i, j);
            }
            for _ in 0..num_self_loops {
                let i = usize::arbitrary(g) % num_vertices;
                graph.add_edge_at(i, i);
            }
        }
        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().any(|item| !seen.insert(item))
}

/// Checks the structural invariants of a graph.
pub fn check_graph_consistency<T>(graph: &Graph<T>) {
    let n = graph.len();
    assert_eq!(graph.vertices().len(), n);
    assert!(graph.capacity() >= n, "capacity {} < len {n}", graph.capacity());
    for (i, j) in graph.edges() {
        assert!(i <= j, "edge ({i}, {j}) not in canonical order");
        assert!(j < n, "edge ({i}, {j}) touches inactive slot");
    }
    for i in 0..n {
        let neighbours: Vec<_> = graph.neighbour_indices(i).collect();
        assert!(neighbours.is_sorted(), "neighbours of {i} out of order");
        for j in neighbours {
            assert!(graph.has_edge(j, i), "edge ({i}, {j}) not symmetric");
        }
    }
}

/// Counts drops of the values it hands out.
pub struct DropCounter {
    count: Cell<usize>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            count: Cell::new(0),
        }
    }

    pub fn drop_count(&self) -> usize {
        self.count.get()
    }

    pub fn new_value(&self) -> DroppableValue<'_> {
        DroppableValue(self)
    }
}

pub struct DroppableValue<'a>(&'a DropCounter);

impl<'a> Drop for DroppableValue<'a> {
    fn drop(&mut self) {
        self.0.count.set(self.0.count.get() + 1);
    }
}
