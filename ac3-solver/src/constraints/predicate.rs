use std::fmt::Debug;
use std::fmt::Formatter;

use crate::engine::BinaryConstraint;

/// A constraint which accepts every pair of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl<Value> BinaryConstraint<Value> for Always {
    fn check(&self, _x: &Value, _y: &Value) -> bool {
        true
    }
}

/// A constraint which rejects every pair of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Never;

impl<Value> BinaryConstraint<Value> for Never {
    fn check(&self, _x: &Value, _y: &Value) -> bool {
        false
    }
}

/// Creates a constraint which holds for every pair of values.
pub fn always() -> Always {
    Always
}

/// Creates a constraint which holds for no pair of values.
pub fn never() -> Never {
    Never
}

/// A named constraint backed by a closure.
///
/// Plain closures are constraints too; wrapping one in a [`Predicate`] gives it a name which shows
/// up in [`Debug`] output.
#[derive(Clone)]
pub struct Predicate<F> {
    name: &'static str,
    check: F,
}

impl<F> Debug for Predicate<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

impl<F> Predicate<F> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<Value, F> BinaryConstraint<Value> for Predicate<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    fn check(&self, x: &Value, y: &Value) -> bool {
        (self.check)(x, y)
    }
}

/// Creates a named constraint from the provided closure.
pub fn predicate<Value, F>(name: &'static str, check: F) -> Predicate<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    Predicate { name, check }
}
