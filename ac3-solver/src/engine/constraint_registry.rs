use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

use crate::basic_types::Arc;
use crate::containers::HashMap;

/// A binary compatibility predicate between the values of two variables.
///
/// For a constraint registered on the ordered pair `(x_i, x_j)`, [`BinaryConstraint::check`] is
/// called with a value of `x_i` as `x` and a value of `x_j` as `y`. Implementations must be pure:
/// the solver may skip checks once a value is known to be supported.
pub trait BinaryConstraint<Value> {
    /// Returns true if `x` (for the source variable) is compatible with `y` (for the target
    /// variable).
    fn check(&self, x: &Value, y: &Value) -> bool;
}

impl<Value, F> BinaryConstraint<Value> for F
where
    F: Fn(&Value, &Value) -> bool,
{
    fn check(&self, x: &Value, y: &Value) -> bool {
        self(x, y)
    }
}

/// The constraints of a problem, keyed by the ordered pair of variables which they relate.
///
/// A pair may have several constraints. A value of the source variable is supported if *any* of
/// the constraints of the pair accepts it together with *any* value of the target variable; the
/// constraints of a pair are therefore combined as a disjunction.
pub struct ConstraintRegistry<Var, Value> {
    constraints: HashMap<Var, HashMap<Var, Vec<Box<dyn BinaryConstraint<Value>>>>>,
    num_constraints: usize,
}

impl<Var, Value> Default for ConstraintRegistry<Var, Value> {
    fn default() -> Self {
        ConstraintRegistry {
            constraints: HashMap::default(),
            num_constraints: 0,
        }
    }
}

impl<Var: Debug, Value> Debug for ConstraintRegistry<Var, Value> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .constraints
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, constraints)| ((source, target), constraints.len()))
            })
            .collect::<Vec<_>>();

        f.debug_struct("ConstraintRegistry")
            .field("num_constraints", &self.num_constraints)
            .field("pairs", &pairs)
            .finish()
    }
}

impl<Var: Clone + Eq + Hash, Value> ConstraintRegistry<Var, Value> {
    /// Registers `constraint` on the ordered pair `(source, target)`.
    ///
    /// The constraint is only used when revising the arc `(source, target)`; register a
    /// constraint on `(target, source)` as well to prune in both directions.
    pub fn add(
        &mut self,
        source: Var,
        target: Var,
        constraint: impl BinaryConstraint<Value> + 'static,
    ) -> &mut Self {
        self.constraints
            .entry(source)
            .or_default()
            .entry(target)
            .or_default()
            .push(Box::new(constraint));
        self.num_constraints += 1;

        self
    }

    /// Returns the constraints registered on the ordered pair `(source, target)`.
    pub fn constraints_for(
        &self,
        source: &Var,
        target: &Var,
    ) -> &[Box<dyn BinaryConstraint<Value>>] {
        self.constraints
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The total number of registered constraints over all pairs.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Returns every ordered pair which has at least one constraint.
    pub fn pairs(&self) -> impl Iterator<Item = Arc<Var>> + '_ {
        self.constraints.iter().flat_map(|(source, targets)| {
            targets
                .keys()
                .map(move |target| Arc::new(source.clone(), target.clone()))
        })
    }
}
