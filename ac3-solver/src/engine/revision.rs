use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use super::BinaryConstraint;
use super::ConstraintRegistry;
use super::Domains;
use super::PropagationStatistics;
use crate::ac3_assert_advanced;
use crate::ac3_assert_moderate;
use crate::basic_types::PropagationError;

/// Removes every value of `source` which is not supported by the domain of `target` under the
/// constraints registered on `(source, target)`.
///
/// A value `x` is supported if there is a value `y` of `target` and a constraint `c` of the pair
/// such that `c.check(x, y)` holds. Consequently, when the pair has no constraints at all, no value
/// of `source` is supported.
///
/// The values of `source` are partitioned based on the domains as they were before the revision,
/// after which the supported part is written back. The domain of `target` is only read.
///
/// Returns whether at least one value was removed.
pub(crate) fn revise<Var, Value>(
    domains: &mut Domains<Var, Value>,
    constraints: &ConstraintRegistry<Var, Value>,
    statistics: &mut PropagationStatistics,
    source: &Var,
    target: &Var,
) -> Result<bool, PropagationError<Var>>
where
    Var: Clone + Eq + Hash + Debug,
    Value: Clone + PartialEq + Debug,
{
    let source_values = domains.try_get(source)?;
    let target_values = domains.try_get(target)?;
    let pair_constraints = constraints.constraints_for(source, target);

    let mut num_checks = 0;
    let (supported, unsupported): (Vec<Value>, Vec<Value>) = source_values
        .iter()
        .cloned()
        .partition(|x| is_supported(x, target_values, pair_constraints, &mut num_checks));

    ac3_assert_moderate!(supported.len() + unsupported.len() == source_values.len());
    ac3_assert_advanced!(
        supported.iter().all(|value| source_values.contains(value)),
        "a revision may only keep values of the snapshot of {source:?}"
    );

    statistics.num_revisions += 1;
    statistics.num_constraint_checks += num_checks;

    if unsupported.is_empty() {
        return Ok(false);
    }

    for value in unsupported.iter() {
        trace!("Removing {value:?} from {source:?}, no support in {target:?}");
    }

    statistics.num_successful_revisions += 1;
    statistics.num_values_removed += unsupported.len() as u64;
    domains.assign(source, supported);

    Ok(true)
}

/// Returns the first value of `source` which has no support in `target`, or [`None`] if the arc
/// `(source, target)` cannot be revised any further.
pub(crate) fn find_unsupported<'a, Var, Value>(
    domains: &'a Domains<Var, Value>,
    constraints: &ConstraintRegistry<Var, Value>,
    source: &Var,
    target: &Var,
) -> Result<Option<&'a Value>, PropagationError<Var>>
where
    Var: Clone + Eq + Hash + Debug,
{
    let source_values = domains.try_get(source)?;
    let target_values = domains.try_get(target)?;
    let pair_constraints = constraints.constraints_for(source, target);

    let mut num_checks = 0;
    Ok(source_values
        .iter()
        .find(|&x| !is_supported(x, target_values, pair_constraints, &mut num_checks)))
}

fn is_supported<Value>(
    x: &Value,
    target_values: &[Value],
    constraints: &[Box<dyn BinaryConstraint<Value>>],
    num_checks: &mut u64,
) -> bool {
    target_values.iter().any(|y| {
        constraints.iter().any(|constraint| {
            *num_checks += 1;
            constraint.check(x, y)
        })
    })
}
