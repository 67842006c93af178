mod arc_queue;
mod constraint_registry;
mod domains;
pub(crate) mod revision;
mod solver_options;
mod solver_statistics;

pub(crate) use arc_queue::ArcQueue;
pub use constraint_registry::BinaryConstraint;
pub use constraint_registry::ConstraintRegistry;
pub use domains::Domains;
pub use solver_options::RequeuePolicy;
pub use solver_options::SolverOptions;
pub use solver_statistics::PropagationStatistics;
