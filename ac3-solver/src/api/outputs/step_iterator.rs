//! Contains the structures corresponding to step-by-step propagation.

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use log::info;

use crate::ac3_assert_advanced;
use crate::ac3_assert_simple;
use crate::basic_types::Arc;
use crate::basic_types::ArcId;
use crate::basic_types::PropagationError;
use crate::containers::KeyedVec;
use crate::engine::revision;
use crate::engine::ArcQueue;
use crate::engine::Domains;
use crate::engine::RequeuePolicy;
use crate::ArcConsistencySolver;

/// Performs the propagation of an [`ArcConsistencySolver`] one arc at a time.
///
/// Every call to [`StepIterator::next_step`] takes one arc from the worklist, revises it and
/// enqueues the arcs which have to be revisited. Once the worklist is empty, a final
/// [`Step`] without an arc is produced. If a domain becomes empty,
/// [`IteratedStep::Inconsistent`] is produced instead. After either of those, the iterator only
/// yields [`IteratedStep::Finished`].
///
/// The iterator owns the worklist of the run; it cannot be restarted. Dropping it early is safe
/// and leaves the domains as they were after the last step.
#[derive(Debug)]
pub struct StepIterator<'solver, Var, Value> {
    solver: &'solver mut ArcConsistencySolver<Var, Value>,
    worklist: ArcQueue,
    state: RunState,
    /// The arcs enqueued by the most recent revision.
    enqueued: Vec<ArcId>,
    num_processed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    NotStarted,
    Running,
    Terminated,
}

impl<'solver, Var, Value> StepIterator<'solver, Var, Value>
where
    Var: Clone + Eq + Hash + Debug,
    Value: Clone + PartialEq + Debug,
{
    pub(crate) fn new(solver: &'solver mut ArcConsistencySolver<Var, Value>) -> Self {
        StepIterator {
            solver,
            worklist: ArcQueue::default(),
            state: RunState::NotStarted,
            enqueued: Vec::new(),
            num_processed: 0,
        }
    }

    /// Performs one iteration of the propagation.
    ///
    /// Returns an error if a revision refers to a variable without a domain; the iterator is
    /// finished afterwards.
    pub fn next_step(&mut self) -> Result<IteratedStep<'_, Var, Value>, PropagationError<Var>> {
        match self.state {
            RunState::Terminated => return Ok(IteratedStep::Finished),
            RunState::NotStarted => {
                if !self.start() {
                    return Ok(IteratedStep::Inconsistent);
                }
            }
            RunState::Running => {}
        }

        let Some(arc_id) = self.worklist.pop() else {
            return Ok(self.finish());
        };

        self.num_processed += 1;
        self.enqueued.clear();

        let solver = &mut *self.solver;
        let arc = &solver.arcs[arc_id];

        let revised = match revision::revise(
            &mut solver.domains,
            &solver.constraints,
            &mut solver.statistics,
            &arc.source,
            &arc.target,
        ) {
            Ok(revised) => revised,
            Err(error) => {
                self.state = RunState::Terminated;
                return Err(error);
            }
        };

        if !revised {
            debug!("Revised {arc}: no values removed");
            return Ok(IteratedStep::Step(Step {
                arc: Some(arc),
                domains: &solver.domains,
                arcs: &solver.arcs,
                enqueued: None,
            }));
        }

        if solver
            .domains
            .get(&arc.source)
            .is_some_and(<[Value]>::is_empty)
        {
            self.state = RunState::Terminated;
            info!(
                "Propagation is inconsistent: revising {arc} emptied the domain of {:?} after {} revisions",
                arc.source, self.num_processed
            );
            return Ok(IteratedStep::Inconsistent);
        }

        let requeued = match solver.options.requeue_policy {
            RequeuePolicy::OutgoingFromTarget => solver.outgoing.get(&arc.target),
            RequeuePolicy::IncomingToSource => solver.incoming.get(&arc.source),
        };
        self.enqueued.extend(requeued.into_iter().flatten().copied());
        self.worklist.enqueue_all(self.enqueued.iter().copied());
        solver.statistics.num_arcs_enqueued += self.enqueued.len() as u64;

        debug!(
            "Revised {arc}: enqueued {} arcs, {} pending",
            self.enqueued.len(),
            self.worklist.len()
        );

        Ok(IteratedStep::Step(Step {
            arc: Some(arc),
            domains: &solver.domains,
            arcs: &solver.arcs,
            enqueued: Some(self.enqueued.as_slice()),
        }))
    }

    /// Seeds the worklist with the supplied arcs. Returns false if a domain is already empty, in
    /// which case the run is over before it started.
    fn start(&mut self) -> bool {
        self.state = RunState::Running;
        self.solver.statistics.num_runs += 1;

        if let Some(variable) = self.solver.domains.first_empty() {
            info!("Propagation is inconsistent: the domain of {variable:?} is empty");
            self.state = RunState::Terminated;
            return false;
        }

        self.worklist = ArcQueue::new(self.solver.arcs.keys());
        self.solver.statistics.num_arcs_enqueued += self.worklist.num_enqueued();

        true
    }

    fn finish(&mut self) -> IteratedStep<'_, Var, Value> {
        self.state = RunState::Terminated;
        self.enqueued.clear();

        info!(
            "Propagation reached a fixed point after {} revisions ({} arcs enqueued)",
            self.num_processed,
            self.worklist.num_enqueued()
        );
        ac3_assert_simple!(self.worklist.is_empty());
        ac3_assert_simple!(self.solver.domains.first_empty().is_none());
        if self.solver.options.requeue_policy == RequeuePolicy::IncomingToSource {
            ac3_assert_advanced!(
                self.solver.is_arc_consistent(),
                "the worklist ran empty while an arc can still be revised"
            );
        }

        IteratedStep::Step(Step {
            arc: None,
            domains: &self.solver.domains,
            arcs: &self.solver.arcs,
            enqueued: None,
        })
    }
}

/// One record of the propagation performed by a [`StepIterator`].
#[derive(Debug)]
pub struct Step<'a, Var, Value> {
    arc: Option<&'a Arc<Var>>,
    domains: &'a Domains<Var, Value>,
    arcs: &'a KeyedVec<ArcId, Arc<Var>>,
    enqueued: Option<&'a [ArcId]>,
}

impl<Var, Value> Clone for Step<'_, Var, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Var, Value> Copy for Step<'_, Var, Value> {}

impl<'a, Var, Value> Step<'a, Var, Value> {
    /// The arc which was revised in this step, or [`None`] for the final step.
    pub fn arc(&self) -> Option<&'a Arc<Var>> {
        self.arc
    }

    /// The domains after this step.
    pub fn domains(&self) -> &'a Domains<Var, Value> {
        self.domains
    }

    /// The arcs which were put on the worklist because of this step, in the order in which they
    /// were enqueued.
    ///
    /// This is [`None`] if the revision did not remove any value and for the final step. If a
    /// value was removed but there were no arcs to enqueue, the iterator is empty.
    pub fn enqueued(&self) -> Option<impl Iterator<Item = &'a Arc<Var>> + 'a> {
        let arcs = self.arcs;
        self.enqueued
            .map(move |enqueued| enqueued.iter().map(move |&arc_id| &arcs[arc_id]))
    }

    /// The number of arcs which were put on the worklist because of this step.
    pub fn num_enqueued(&self) -> usize {
        self.enqueued.map_or(0, <[ArcId]>::len)
    }

    /// Returns true if this is the final step of a consistent run.
    pub fn is_final(&self) -> bool {
        self.arc.is_none()
    }
}

/// Enum which specifies the status of the call to [`StepIterator::next_step`].
#[derive(Debug)]
pub enum IteratedStep<'a, Var, Value> {
    /// An arc was revised, or (if [`Step::is_final`]) the worklist ran empty and the domains are
    /// at a fixed point.
    Step(Step<'a, Var, Value>),
    /// A domain became empty; there is no consistent domain to report.
    Inconsistent,
    /// The run is over; no more steps follow.
    Finished,
}
