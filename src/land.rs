use std::fmt::{Display, Formatter};

use derivative::Derivative;

use crate::colour::Colour;

/// A named map region with its current colour.
///
/// Equality, hashing and ordering look only at the name and the colour;
/// ordering is by name, then colour.  The domain and the neighbour list are
/// bookkeeping for the colouring search and do not take part in comparisons.
///
/// The neighbour list is a relation kept by the caller.  It is independent of
/// the edges of any [`Graph`](crate::Graph) the region is stored in, and
/// nothing here keeps the two in step.
#[derive(Derivative, Clone, Debug, Default)]
#[derivative(PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Land {
    name: String,
    colour: Colour,
    /// Colours the region may take; `None` means unrestricted.
    #[derivative(
        PartialEq = "ignore",
        Hash = "ignore",
        PartialOrd = "ignore",
        Ord = "ignore"
    )]
    domain: Option<Vec<Colour>>,
    #[derivative(
        PartialEq = "ignore",
        Hash = "ignore",
        PartialOrd = "ignore",
        Ord = "ignore"
    )]
    neighbours: Vec<Land>,
}

impl Land {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Land {
            name: name.into(),
            colour,
            domain: None,
            neighbours: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    pub fn domain(&self) -> Option<&[Colour]> {
        self.domain.as_deref()
    }

    pub fn set_domain(&mut self, domain: impl Into<Vec<Colour>>) {
        self.domain = Some(domain.into());
    }

    pub fn clear_domain(&mut self) {
        self.domain = None;
    }

    /// Whether `colour` is permitted by the domain.  A region without a
    /// domain permits every colour.
    pub fn allows(&self, colour: Colour) -> bool {
        self.domain
            .as_ref()
            .is_none_or(|domain| domain.contains(&colour))
    }

    pub fn neighbours(&self) -> &[Land] {
        &self.neighbours
    }

    pub fn set_neighbours(&mut self, neighbours: Vec<Land>) {
        self.neighbours = neighbours;
    }

    pub fn add_neighbour(&mut self, neighbour: Land) {
        self.neighbours.push(neighbour);
    }
}

impl Display for Land {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.colour)
    }
}
