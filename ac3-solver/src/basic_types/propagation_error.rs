use thiserror::Error;

use super::Arc;
#[cfg(doc)]
use crate::ArcConsistencySolver;

/// Errors caused by inputs to the [`ArcConsistencySolver`] which refer to variables that do not
/// have a domain.
///
/// Note that an inconsistent problem is not an error; it is reported as
/// [`crate::results::PropagationResult::Inconsistent`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropagationError<Var> {
    /// One of the endpoints of a supplied arc has no domain.
    #[error("the arc {arc} refers to {variable:?}, which has no domain")]
    ArcWithoutDomain { arc: Arc<Var>, variable: Var },
    /// One of the endpoints of a registered constraint has no domain.
    #[error("a constraint on {arc} refers to {variable:?}, which has no domain")]
    ConstraintWithoutDomain { arc: Arc<Var>, variable: Var },
    /// A revision was requested for a variable which has no domain.
    #[error("the variable {0:?} has no domain")]
    MissingDomain(Var),
}

#[cfg(test)]
mod tests {
    use super::PropagationError;
    use crate::Arc;

    #[test]
    fn messages_name_the_offending_variable() {
        let error = PropagationError::ArcWithoutDomain {
            arc: Arc::new("x", "z"),
            variable: "z",
        };

        assert_eq!(
            "the arc (\"x\", \"z\") refers to \"z\", which has no domain",
            error.to_string()
        );
        assert_eq!(
            "the variable \"q\" has no domain",
            PropagationError::MissingDomain("q").to_string()
        );
    }
}
