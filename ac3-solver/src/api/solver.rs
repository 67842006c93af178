use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

use crate::basic_types::Arc;
use crate::basic_types::ArcId;
use crate::basic_types::PropagationError;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::engine::revision;
use crate::engine::ConstraintRegistry;
use crate::engine::Domains;
use crate::engine::PropagationStatistics;
use crate::engine::SolverOptions;
#[cfg(doc)]
use crate::engine::RequeuePolicy;
use crate::results::IteratedStep;
use crate::results::PropagationResult;
use crate::results::StepIterator;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;

/// Enforces arc consistency on a binary constraint satisfaction problem using AC-3.
///
/// The solver is constructed from the arcs to enforce, the initial domains of the variables and
/// the constraints between them. Propagation prunes the domains in place until either every
/// supplied arc is consistent or a domain becomes empty.
///
/// # Example
/// ```rust
/// # use ac3_solver::constraints;
/// # use ac3_solver::results::PropagationResult;
/// # use ac3_solver::Arc;
/// # use ac3_solver::ArcConsistencySolver;
/// # use ac3_solver::ConstraintRegistry;
/// # use ac3_solver::Domains;
/// let domains: Domains<_, _> = [("x", vec![1, 2, 3]), ("y", vec![1, 2, 3])]
///     .into_iter()
///     .collect();
///
/// let mut registry = ConstraintRegistry::default();
/// let _ = registry
///     .add("x", "y", constraints::less_than())
///     .add("y", "x", constraints::greater_than());
///
/// let arcs = [Arc::new("x", "y"), Arc::new("y", "x")];
/// let mut solver = ArcConsistencySolver::new(arcs, domains, registry)?;
///
/// match solver.solve()? {
///     PropagationResult::Consistent(domains) => {
///         assert_eq!(Some([1, 2].as_slice()), domains.get(&"x"));
///         assert_eq!(Some([2, 3].as_slice()), domains.get(&"y"));
///     }
///     PropagationResult::Inconsistent => unreachable!(),
/// }
/// # Ok::<(), ac3_solver::PropagationError<&str>>(())
/// ```
#[derive(Debug)]
pub struct ArcConsistencySolver<Var, Value> {
    /// The arcs supplied at construction, in the order in which they were supplied.
    pub(crate) arcs: KeyedVec<ArcId, Arc<Var>>,
    /// For every variable, the supplied arcs of which it is the source.
    pub(crate) outgoing: HashMap<Var, Vec<ArcId>>,
    /// For every variable, the supplied arcs of which it is the target.
    pub(crate) incoming: HashMap<Var, Vec<ArcId>>,
    pub(crate) domains: Domains<Var, Value>,
    pub(crate) constraints: ConstraintRegistry<Var, Value>,
    pub(crate) statistics: PropagationStatistics,
    pub(crate) options: SolverOptions,
}

impl<Var, Value> ArcConsistencySolver<Var, Value>
where
    Var: Clone + Eq + Hash + Debug,
    Value: Clone + PartialEq + Debug,
{
    /// Creates a solver for the provided arcs, domains and constraints with the default
    /// [`SolverOptions`].
    ///
    /// The solver does not add the reverse of an arc; both `(x, y)` and `(y, x)` should be
    /// supplied to prune in both directions.
    ///
    /// Returns an error if an arc, or a pair with registered constraints, refers to a variable
    /// which has no domain.
    pub fn new(
        arcs: impl IntoIterator<Item = impl Into<Arc<Var>>>,
        domains: Domains<Var, Value>,
        constraints: ConstraintRegistry<Var, Value>,
    ) -> Result<Self, PropagationError<Var>> {
        Self::with_options(arcs, domains, constraints, SolverOptions::default())
    }

    /// Creates a solver for the provided arcs, domains and constraints; see
    /// [`ArcConsistencySolver::new`].
    pub fn with_options(
        arcs: impl IntoIterator<Item = impl Into<Arc<Var>>>,
        domains: Domains<Var, Value>,
        constraints: ConstraintRegistry<Var, Value>,
        options: SolverOptions,
    ) -> Result<Self, PropagationError<Var>> {
        let arcs: KeyedVec<ArcId, Arc<Var>> = arcs.into_iter().map(Into::into).collect();

        for arc in arcs.iter() {
            if let Some(variable) = missing_endpoint(arc, &domains) {
                return Err(PropagationError::ArcWithoutDomain {
                    arc: arc.clone(),
                    variable,
                });
            }

            if constraints
                .constraints_for(&arc.source, &arc.target)
                .is_empty()
            {
                warn!(
                    "The arc {arc} has no constraints; revising it empties the domain of {:?}",
                    arc.source
                );
            }
        }

        for arc in constraints.pairs() {
            if let Some(variable) = missing_endpoint(&arc, &domains) {
                return Err(PropagationError::ConstraintWithoutDomain { arc, variable });
            }
        }

        let mut outgoing: HashMap<Var, Vec<ArcId>> = HashMap::default();
        let mut incoming: HashMap<Var, Vec<ArcId>> = HashMap::default();
        for arc_id in arcs.keys() {
            let arc = &arcs[arc_id];
            outgoing.entry(arc.source.clone()).or_default().push(arc_id);
            incoming.entry(arc.target.clone()).or_default().push(arc_id);
        }

        Ok(ArcConsistencySolver {
            arcs,
            outgoing,
            incoming,
            domains,
            constraints,
            statistics: PropagationStatistics::default(),
            options,
        })
    }

    /// Revises the arc `(source, target)`: removes every value of `source` which is not supported
    /// by any value of `target` under any of the constraints registered on the pair.
    ///
    /// Returns whether a value was removed, or an error if either variable has no domain. The
    /// domain of `target` is never modified.
    pub fn revise(&mut self, source: &Var, target: &Var) -> Result<bool, PropagationError<Var>> {
        revision::revise(
            &mut self.domains,
            &self.constraints,
            &mut self.statistics,
            source,
            target,
        )
    }

    /// Propagates until a fixed point is reached or a domain becomes empty.
    ///
    /// The worklist is initialised with the supplied arcs every time this method is called, and
    /// propagation continues from the current domains. With [`RequeuePolicy::IncomingToSource`]
    /// a second call does not remove any further values. With the default
    /// [`RequeuePolicy::OutgoingFromTarget`] the first run may stop while an arc can still be
    /// revised, in which case a second call prunes further.
    pub fn solve(&mut self) -> Result<PropagationResult<'_, Var, Value>, PropagationError<Var>> {
        let mut steps = self.steps();
        loop {
            match steps.next_step()? {
                IteratedStep::Step(_) => {}
                IteratedStep::Inconsistent => return Ok(PropagationResult::Inconsistent),
                IteratedStep::Finished => break,
            }
        }

        Ok(PropagationResult::Consistent(&self.domains))
    }

    /// Returns a [`StepIterator`] which performs the propagation one arc at a time.
    ///
    /// No work is done until [`StepIterator::next_step`] is called; dropping the iterator stops
    /// the propagation, leaving the domains as they were after the last step.
    pub fn steps(&mut self) -> StepIterator<'_, Var, Value> {
        StepIterator::new(self)
    }

    /// Returns the first value of `arc.source` without support in `arc.target`, or [`None`] if
    /// the arc cannot be revised any further.
    pub fn find_unsupported(
        &self,
        arc: &Arc<Var>,
    ) -> Result<Option<&Value>, PropagationError<Var>> {
        revision::find_unsupported(&self.domains, &self.constraints, &arc.source, &arc.target)
    }

    /// Returns true if no supplied arc can be revised any further, i.e. the domains are at the
    /// fixed point of propagation.
    pub fn is_arc_consistent(&self) -> bool {
        self.arcs
            .iter()
            .all(|arc| matches!(self.find_unsupported(arc), Ok(None)))
    }
}

impl<Var, Value> ArcConsistencySolver<Var, Value> {
    pub fn domains(&self) -> &Domains<Var, Value> {
        &self.domains
    }

    pub fn into_domains(self) -> Domains<Var, Value> {
        self.domains
    }

    /// The supplied arcs, in the order in which they were supplied.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc<Var>> {
        self.arcs.iter()
    }

    pub fn constraints(&self) -> &ConstraintRegistry<Var, Value> {
        &self.constraints
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    pub fn statistics(&self) -> PropagationStatistics {
        self.statistics
    }

    /// Logs the statistics of the solver, if statistic logging has been configured with
    /// [`crate::statistics::configure_statistic_logging`].
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(&StatisticLogger::new(["ac3"]));
            log_statistic_postfix();
        }
    }
}

fn missing_endpoint<Var, Value>(arc: &Arc<Var>, domains: &Domains<Var, Value>) -> Option<Var>
where
    Var: Clone + Eq + Hash,
{
    [&arc.source, &arc.target]
        .into_iter()
        .find(|variable| !domains.contains_variable(variable))
        .cloned()
}
