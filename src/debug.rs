use std::fmt::{Debug, Formatter};

use crate::graph::Graph;

struct EdgeTag(usize, usize);

impl Debug for EdgeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}

struct VertexDebug<'a, T>(&'a [T]);

impl<'a, T> Debug for VertexDebug<'a, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.0.iter().enumerate()).finish()
    }
}

struct EdgeDebug<'a>(&'a [(usize, usize)]);

impl<'a> Debug for EdgeDebug<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|&(i, j)| EdgeTag(i, j)))
            .finish()
    }
}

/// Formats a graph as its vertices keyed by index and its edges as
/// `i -- j` tags, sorted.
pub(crate) fn format_debug<T>(graph: &Graph<T>, f: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    T: Debug,
{
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_unstable();
    f.debug_struct(name)
        .field("vertices", &VertexDebug(graph.vertices()))
        .field("edges", &EdgeDebug(&edges))
        .finish()
}
