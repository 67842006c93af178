pub(crate) mod step_iterator;

use crate::engine::Domains;
#[cfg(doc)]
use crate::ArcConsistencySolver;

/// The result of a call to [`ArcConsistencySolver::solve`].
#[derive(Debug)]
pub enum PropagationResult<'solver, Var, Value> {
    /// Every supplied arc is consistent; provides the pruned domains.
    Consistent(&'solver Domains<Var, Value>),
    /// A domain became empty, so no assignment satisfies the constraints. The domains that were
    /// pruned so far should not be relied upon.
    Inconsistent,
}

impl<'solver, Var, Value> PropagationResult<'solver, Var, Value> {
    pub fn is_consistent(&self) -> bool {
        matches!(self, PropagationResult::Consistent(_))
    }

    /// Returns the pruned domains if the result is consistent.
    pub fn domains(&self) -> Option<&'solver Domains<Var, Value>> {
        match self {
            PropagationResult::Consistent(domains) => Some(*domains),
            PropagationResult::Inconsistent => None,
        }
    }
}
