use crate::statistics::create_statistics_struct;

create_statistics_struct!(
    /// Counters of the work done by an [`ArcConsistencySolver`](crate::ArcConsistencySolver),
    /// accumulated over all of its runs.
    PropagationStatistics {
        /// The number of times propagation was started
        num_runs,
        /// The number of arcs which have been revised
        num_revisions,
        /// The number of revisions which removed at least one value
        num_successful_revisions,
        /// The number of values which have been removed from the domains
        num_values_removed,
        /// The number of arcs which were put on the worklist, including the initial arcs
        num_arcs_enqueued,
        /// The number of times a constraint was evaluated on a pair of values
        num_constraint_checks,
});
