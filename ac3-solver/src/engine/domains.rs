use std::fmt::Debug;
use std::hash::Hash;

use crate::basic_types::PropagationError;
use crate::containers::HashMap;

/// The domain store: for every variable, the values which are still candidates.
///
/// The order of the values within a domain carries no meaning, but it is preserved so that the
/// steps of a run are reproducible. Domains only ever shrink while the
/// [`ArcConsistencySolver`](crate::ArcConsistencySolver) runs.
#[derive(Clone, Debug)]
pub struct Domains<Var, Value> {
    domains: HashMap<Var, Vec<Value>>,
}

impl<Var, Value> Default for Domains<Var, Value> {
    fn default() -> Self {
        Domains {
            domains: HashMap::default(),
        }
    }
}

impl<Var: Eq + Hash, Value: PartialEq> PartialEq for Domains<Var, Value> {
    fn eq(&self, other: &Self) -> bool {
        self.domains == other.domains
    }
}

impl<Var: Eq + Hash, Value: Eq> Eq for Domains<Var, Value> {}

impl<Var: Eq + Hash, Value> Domains<Var, Value> {
    /// Sets the domain of `variable`, returning the previous domain if there was one.
    pub fn insert(
        &mut self,
        variable: Var,
        values: impl IntoIterator<Item = Value>,
    ) -> Option<Vec<Value>> {
        self.domains.insert(variable, values.into_iter().collect())
    }

    /// Returns the current values of `variable`, or [`None`] if it has no domain.
    pub fn get(&self, variable: &Var) -> Option<&[Value]> {
        self.domains.get(variable).map(Vec::as_slice)
    }

    pub fn contains_variable(&self, variable: &Var) -> bool {
        self.domains.contains_key(variable)
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// The total number of values over all domains.
    pub fn num_values(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, &[Value])> {
        self.domains
            .iter()
            .map(|(variable, values)| (variable, values.as_slice()))
    }

    /// Returns a variable whose domain is empty, if any.
    pub fn first_empty(&self) -> Option<&Var> {
        self.domains
            .iter()
            .find(|(_, values)| values.is_empty())
            .map(|(variable, _)| variable)
    }

    pub fn into_inner(self) -> HashMap<Var, Vec<Value>> {
        self.domains
    }
}

impl<Var: Eq + Hash + Clone + Debug, Value> Domains<Var, Value> {
    pub(crate) fn try_get(&self, variable: &Var) -> Result<&[Value], PropagationError<Var>> {
        self.get(variable)
            .ok_or_else(|| PropagationError::MissingDomain(variable.clone()))
    }

    /// Replaces the domain of `variable` by `values`.
    ///
    /// Only used by revisions, which never add values.
    pub(crate) fn assign(&mut self, variable: &Var, values: Vec<Value>) {
        if let Some(domain) = self.domains.get_mut(variable) {
            *domain = values;
        }
    }
}

impl<Var: Eq + Hash, Value: PartialEq> Domains<Var, Value> {
    /// Returns true if every domain of `self` is contained in the corresponding domain of
    /// `other`, and `self` has no variables which `other` does not have.
    pub fn is_subset_of(&self, other: &Domains<Var, Value>) -> bool {
        self.domains.iter().all(|(variable, values)| {
            other
                .get(variable)
                .is_some_and(|superset| values.iter().all(|value| superset.contains(value)))
        })
    }
}

impl<Var: Eq + Hash, Value> FromIterator<(Var, Vec<Value>)> for Domains<Var, Value> {
    fn from_iter<T: IntoIterator<Item = (Var, Vec<Value>)>>(iter: T) -> Self {
        Domains {
            domains: iter.into_iter().collect(),
        }
    }
}

impl<Var: Eq + Hash, Value> From<HashMap<Var, Vec<Value>>> for Domains<Var, Value> {
    fn from(domains: HashMap<Var, Vec<Value>>) -> Self {
        Domains { domains }
    }
}
