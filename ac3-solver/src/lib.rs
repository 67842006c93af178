//! # AC-3
//! An arc-consistency propagation engine for finite-domain binary constraint satisfaction
//! problems, based on the AC-3 algorithm.
//!
//! A problem consists of variables, each with a finite domain of candidate values, and binary
//! constraints which are registered on ordered pairs of variables. Given a collection of _arcs_
//! (ordered pairs `(x_i, x_j)`), the [`ArcConsistencySolver`] removes every value of `x_i` which
//! has no support in the domain of `x_j`, and keeps doing so until nothing changes any more or a
//! domain becomes empty.
//!
//! # Using the solver
//! The first step is to **create the domains** and to **register the constraints**:
//! ```rust
//! # use ac3_solver::constraints;
//! # use ac3_solver::ConstraintRegistry;
//! # use ac3_solver::Domains;
//! let domains: Domains<_, _> = [("x", vec![1, 2, 3]), ("y", vec![1, 2, 3])]
//!     .into_iter()
//!     .collect();
//!
//! let mut registry: ConstraintRegistry<&str, i32> = ConstraintRegistry::default();
//! let _ = registry
//!     .add("x", "y", constraints::less_than())
//!     .add("y", "x", constraints::greater_than());
//! ```
//!
//! Afterwards, the solver is created from the arcs to enforce and **propagation** can be run
//! in one go:
//! ```rust
//! # use ac3_solver::constraints;
//! # use ac3_solver::results::PropagationResult;
//! # use ac3_solver::ArcConsistencySolver;
//! # use ac3_solver::ConstraintRegistry;
//! # use ac3_solver::Domains;
//! # let domains: Domains<_, _> = [("x", vec![1, 2, 3]), ("y", vec![1, 2, 3])]
//! #     .into_iter()
//! #     .collect();
//! # let mut registry = ConstraintRegistry::default();
//! # let _ = registry
//! #     .add("x", "y", constraints::less_than())
//! #     .add("y", "x", constraints::greater_than());
//! let mut solver = ArcConsistencySolver::new([("x", "y"), ("y", "x")], domains, registry)?;
//!
//! let result = solver.solve()?;
//! assert_eq!(Some([1, 2].as_slice()), result.domains().and_then(|d| d.get(&"x")));
//! # Ok::<(), ac3_solver::PropagationError<&str>>(())
//! ```
//!
//! # Observing the propagation
//! The propagation can also be performed one arc at a time using
//! [`ArcConsistencySolver::steps`]. Every [`results::Step`] exposes the revised arc, the domains
//! after the revision and the arcs which were put back on the worklist:
//! ```rust
//! # use ac3_solver::constraints;
//! # use ac3_solver::results::IteratedStep;
//! # use ac3_solver::ArcConsistencySolver;
//! # use ac3_solver::ConstraintRegistry;
//! # use ac3_solver::Domains;
//! # let domains: Domains<_, _> = [("x", vec![1]), ("y", vec![1])].into_iter().collect();
//! # let mut registry = ConstraintRegistry::default();
//! # let _ = registry
//! #     .add("x", "y", constraints::less_than())
//! #     .add("y", "x", constraints::greater_than());
//! let mut solver = ArcConsistencySolver::new([("x", "y"), ("y", "x")], domains, registry)?;
//! let mut steps = solver.steps();
//!
//! loop {
//!     match steps.next_step()? {
//!         IteratedStep::Step(step) => println!("{:?} -> {:?}", step.arc(), step.domains()),
//!         IteratedStep::Inconsistent => println!("A domain became empty"),
//!         IteratedStep::Finished => break,
//!     }
//! }
//! # Ok::<(), ac3_solver::PropagationError<&str>>(())
//! ```
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;

pub mod constraints;
pub mod statistics;

pub use convert_case;

// All exports of the API are exported directly from the crate root.
mod api;

pub use api::*;

pub use crate::api::solver::ArcConsistencySolver;
pub use crate::basic_types::Arc;
pub use crate::basic_types::ArcId;
pub use crate::basic_types::PropagationError;
pub use crate::engine::BinaryConstraint;
pub use crate::engine::ConstraintRegistry;
pub use crate::engine::Domains;
pub use crate::engine::PropagationStatistics;
pub use crate::engine::RequeuePolicy;
pub use crate::engine::SolverOptions;
