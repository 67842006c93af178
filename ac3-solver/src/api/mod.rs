mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of propagation with the [`ArcConsistencySolver`].
    //!
    //! There are two ways of running the solver:
    //! - **eagerly**, using [`ArcConsistencySolver::solve`], which produces a
    //!   [`PropagationResult`];
    //! - **step by step**, using [`ArcConsistencySolver::steps`], which produces a
    //!   [`StepIterator`] yielding an [`IteratedStep`] for every processed arc.
    pub use crate::api::outputs::step_iterator::IteratedStep;
    pub use crate::api::outputs::step_iterator::Step;
    pub use crate::api::outputs::step_iterator::StepIterator;
    pub use crate::api::outputs::PropagationResult;
    #[cfg(doc)]
    use crate::ArcConsistencySolver;
}
