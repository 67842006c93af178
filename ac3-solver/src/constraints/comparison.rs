use std::marker::PhantomData;

use crate::engine::BinaryConstraint;

/// The relation used by a [`Comparison`] constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

/// The constraint `x <relation> y`, where `x` is a value of the source variable and `y` a value
/// of the target variable.
#[derive(Debug)]
pub struct Comparison<Value> {
    relation: Relation,
    value: PhantomData<fn(&Value, &Value) -> bool>,
}

impl<Value> Clone for Comparison<Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Value> Copy for Comparison<Value> {}

impl<Value> Comparison<Value> {
    pub fn new(relation: Relation) -> Self {
        Comparison {
            relation,
            value: PhantomData,
        }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }
}

impl<Value: PartialOrd> BinaryConstraint<Value> for Comparison<Value> {
    fn check(&self, x: &Value, y: &Value) -> bool {
        match self.relation {
            Relation::Equal => x == y,
            Relation::NotEqual => x != y,
            Relation::LessThan => x < y,
            Relation::LessThanOrEqual => x <= y,
            Relation::GreaterThan => x > y,
            Relation::GreaterThanOrEqual => x >= y,
        }
    }
}

/// Creates the constraint `x == y`.
pub fn equals<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::Equal)
}

/// Creates the constraint `x != y`.
pub fn not_equals<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::NotEqual)
}

/// Creates the constraint `x < y`.
///
/// Its mirror image, for the reverse arc, is [`greater_than`].
pub fn less_than<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::LessThan)
}

/// Creates the constraint `x <= y`.
pub fn less_than_or_equals<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::LessThanOrEqual)
}

/// Creates the constraint `x > y`.
pub fn greater_than<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::GreaterThan)
}

/// Creates the constraint `x >= y`.
pub fn greater_than_or_equals<Value: PartialOrd>() -> Comparison<Value> {
    Comparison::new(Relation::GreaterThanOrEqual)
}
