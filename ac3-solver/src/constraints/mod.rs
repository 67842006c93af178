//! Defines the binary constraints which are provided out of the box and can be registered in a
//! [`ConstraintRegistry`].
//!
//! Any closure `Fn(&Value, &Value) -> bool` is a constraint as well; the types in this module
//! exist for the common relations and print nicely in logs.
//!
//! # Example
//! ```
//! # use ac3_solver::constraints;
//! # use ac3_solver::ConstraintRegistry;
//! let mut registry: ConstraintRegistry<&str, i32> = ConstraintRegistry::default();
//!
//! // x < y, pruned in both directions.
//! let _ = registry
//!     .add("x", "y", constraints::less_than())
//!     .add("y", "x", constraints::greater_than());
//! ```

mod comparison;
mod predicate;

pub use comparison::*;
pub use predicate::*;

#[cfg(doc)]
use crate::ConstraintRegistry;
