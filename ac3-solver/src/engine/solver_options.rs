#[cfg(doc)]
use crate::ArcConsistencySolver;

/// Options for the [`ArcConsistencySolver`] which determine how it behaves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Which arcs are put back on the worklist after a revision removed values.
    pub requeue_policy: RequeuePolicy,
}

/// Determines which arcs are enqueued again after revising `(x_i, x_j)` removed values from the
/// domain of `x_i`.
///
/// In both cases the arcs are enqueued in the order in which they were supplied, and arcs which are
/// still pending are enqueued again rather than deduplicated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RequeuePolicy {
    /// Every supplied arc of the form `(x_j, _)`.
    ///
    /// This is the literal update rule which this engine preserves; it is not the textbook AC-3
    /// update, which is [`RequeuePolicy::IncomingToSource`]. For two variables it reaches the arc
    /// consistent fixed point, but with more variables an arc `(x_k, x_i)` may be left revisable
    /// when the worklist runs empty.
    #[default]
    OutgoingFromTarget,
    /// Every supplied arc of the form `(_, x_i)`, i.e. every arc whose support may have been
    /// removed. The domains are arc consistent for every supplied arc once the worklist is empty.
    IncomingToSource,
}
