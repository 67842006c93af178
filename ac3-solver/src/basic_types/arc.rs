use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// A directed pair of variables `(source, target)`.
///
/// Revising an arc checks the values of `source` against the domain of `target` and prunes the
/// values of `source` which have no support. The arcs `(x, y)` and `(y, x)` are different; the
/// solver never generates the reverse of an arc by itself.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Arc<Var> {
    pub source: Var,
    pub target: Var,
}

impl<Var> Arc<Var> {
    pub fn new(source: Var, target: Var) -> Self {
        Arc { source, target }
    }

    /// Returns the arc pointing in the other direction.
    pub fn reversed(self) -> Self {
        Arc {
            source: self.target,
            target: self.source,
        }
    }
}

impl<Var> From<(Var, Var)> for Arc<Var> {
    fn from((source, target): (Var, Var)) -> Self {
        Arc::new(source, target)
    }
}

impl<Var: Debug> Display for Arc<Var> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.source, self.target)
    }
}

/// Identifies one of the arcs which were supplied to the solver.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArcId(usize);

impl StorageKey for ArcId {
    fn index(&self) -> usize {
        self.0
    }

    fn create_from_index(index: usize) -> Self {
        ArcId(index)
    }
}

impl Display for ArcId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a{}", self.0)
    }
}
