#![allow(
    dead_code,
    reason = "every test binary includes this module but not all of them use every helper"
)]

use ac3_solver::constraints;
use ac3_solver::ConstraintRegistry;
use ac3_solver::Domains;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn domains<const N: usize>(
    domains: [(&'static str, Vec<i32>); N],
) -> Domains<&'static str, i32> {
    domains.into_iter().collect()
}

/// The constraint `x < y`, registered in both directions.
pub(crate) fn less_than(x: &'static str, y: &'static str) -> ConstraintRegistry<&'static str, i32> {
    let mut registry = ConstraintRegistry::default();
    let _ = registry
        .add(x, y, constraints::less_than())
        .add(y, x, constraints::greater_than());
    registry
}

/// Registers `variables[i] != variables[j]` on every ordered pair and returns the arcs of all
/// those pairs.
pub(crate) fn all_different(
    registry: &mut ConstraintRegistry<&'static str, i32>,
    variables: &[&'static str],
) -> Vec<(&'static str, &'static str)> {
    let mut arcs = Vec::new();
    for &source in variables {
        for &target in variables {
            if source != target {
                let _ = registry.add(source, target, constraints::not_equals());
                arcs.push((source, target));
            }
        }
    }
    arcs
}
