use thiserror::Error;

/// Errors reported by graph mutations.
///
/// Only precondition violations on an empty container are errors.  Lookups
/// that find nothing are answered with `None`, `false` or an empty result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A removal was attempted on a container with no vertices.
    #[error("the {0} is empty")]
    EmptyCollection(&'static str),
}

pub type Result<T> = std::result::Result<T, GraphError>;
