//! Domain-specific identifier types.

use std::fmt;

/// Worker rank within the process group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub usize);

impl Rank {
    /// The rank that collects the final grid.
    pub const COORDINATOR: Self = Rank(0);

    /// Get the raw ordinal.
    pub fn get(self) -> usize {
        self.0
    }

    /// Whether this rank exchanges with its predecessor first.
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Whether this is the coordinator rank.
    pub fn is_coordinator(self) -> bool {
        self == Self::COORDINATOR
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

impl From<usize> for Rank {
    fn from(value: usize) -> Self {
        Rank(value)
    }
}

/// One step of the simulation, counted from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    /// The initial grid.
    pub const INITIAL: Self = Generation(0);

    /// Get the next generation.
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}
