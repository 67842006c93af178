mod arc;
mod propagation_error;

pub use arc::*;
pub use propagation_error::*;
