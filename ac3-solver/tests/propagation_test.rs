#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use ac3_solver::constraints;
use ac3_solver::results::PropagationResult;
use ac3_solver::Arc;
use ac3_solver::ArcConsistencySolver;
use ac3_solver::ConstraintRegistry;
use ac3_solver::Domains;
use ac3_solver::PropagationError;
use ac3_solver::RequeuePolicy;
use ac3_solver::SolverOptions;
use helpers::all_different;
use helpers::domains;
use helpers::init_logger;
use helpers::less_than;

const INCOMING: SolverOptions = SolverOptions {
    requeue_policy: RequeuePolicy::IncomingToSource,
};

#[test]
fn strict_inequality_is_pruned_to_its_supports() {
    init_logger();
    let mut solver = ArcConsistencySolver::new(
        [("x", "y"), ("y", "x")],
        domains([("x", vec![1, 2, 3]), ("y", vec![1, 2, 3])]),
        less_than("x", "y"),
    )
    .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    let domains = result.domains().expect("x < y is satisfiable");
    assert_eq!(Some([1, 2].as_slice()), domains.get(&"x"));
    assert_eq!(Some([2, 3].as_slice()), domains.get(&"y"));
}

#[test]
fn strict_inequality_on_equal_singletons_is_inconsistent() {
    init_logger();
    let mut solver = ArcConsistencySolver::new(
        [("x", "y"), ("y", "x")],
        domains([("x", vec![1]), ("y", vec![1])]),
        less_than("x", "y"),
    )
    .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    assert!(matches!(result, PropagationResult::Inconsistent));
    // Propagation stops at the first emptied domain; the reverse arc is never revised.
    assert_eq!(1, solver.statistics().num_revisions);
}

#[test]
fn trivially_true_constraint_changes_nothing() {
    init_logger();
    let mut registry = ConstraintRegistry::default();
    let _ = registry
        .add("x", "y", constraints::always())
        .add("y", "x", constraints::always());
    let initial = domains([("x", vec![1, 2]), ("y", vec![1, 2])]);
    let mut solver =
        ArcConsistencySolver::new([("x", "y"), ("y", "x")], initial.clone(), registry)
            .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    assert_eq!(Some(&initial), result.domains());
    assert_eq!(0, solver.statistics().num_successful_revisions);
    assert_eq!(0, solver.statistics().num_values_removed);
}

#[test]
fn empty_initial_domain_is_inconsistent_without_revising() {
    init_logger();
    let mut solver = ArcConsistencySolver::new(
        [("x", "y"), ("y", "x")],
        domains([("x", vec![]), ("y", vec![1, 2])]),
        less_than("x", "y"),
    )
    .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    assert!(!result.is_consistent());
    assert_eq!(0, solver.statistics().num_revisions);
}

#[test]
fn arc_without_constraints_empties_its_source() {
    init_logger();
    let mut registry = ConstraintRegistry::default();
    let _ = registry.add("y", "x", constraints::always());
    let mut solver = ArcConsistencySolver::new(
        [("x", "y"), ("y", "x")],
        domains([("x", vec![1, 2]), ("y", vec![1, 2])]),
        registry,
    )
    .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    assert!(matches!(result, PropagationResult::Inconsistent));
    assert_eq!(Some([].as_slice()), solver.domains().get(&"x"));
}

#[test]
fn constraints_of_one_pair_are_combined_as_disjunction() {
    init_logger();
    let mut registry = ConstraintRegistry::default();
    // x == y or x == y + 10: neither alone supports both 1 and 12.
    let _ = registry
        .add("x", "y", constraints::equals())
        .add("x", "y", |x: &i32, y: &i32| *x == y + 10)
        .add("y", "x", constraints::always());
    let mut solver = ArcConsistencySolver::new(
        [("x", "y"), ("y", "x")],
        domains([("x", vec![1, 5, 12]), ("y", vec![1, 2])]),
        registry,
    )
    .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    let domains = result.domains().expect("x = 1 is supported");
    assert_eq!(Some([1, 12].as_slice()), domains.get(&"x"));
    assert_eq!(Some([1, 2].as_slice()), domains.get(&"y"));
}

#[test]
fn all_different_chain_is_pruned_to_singletons_with_both_policies() {
    init_logger();
    for options in [SolverOptions::default(), INCOMING] {
        let mut registry = ConstraintRegistry::default();
        let arcs = all_different(&mut registry, &["a", "b", "c"]);
        let mut solver = ArcConsistencySolver::with_options(
            arcs,
            domains([("a", vec![1]), ("b", vec![1, 2]), ("c", vec![1, 2, 3])]),
            registry,
            options,
        )
        .expect("every variable has a domain");

        let result = solver.solve().expect("no lookup errors");

        let domains = result.domains().expect("a = 1, b = 2, c = 3 is a solution");
        assert_eq!(Some([1].as_slice()), domains.get(&"a"));
        assert_eq!(Some([2].as_slice()), domains.get(&"b"));
        assert_eq!(Some([3].as_slice()), domains.get(&"c"));
        assert!(solver.is_arc_consistent());
    }
}

#[test]
fn map_colouring_of_australia() {
    init_logger();
    let borders = [
        ("wa", "nt"),
        ("wa", "sa"),
        ("nt", "sa"),
        ("nt", "q"),
        ("sa", "q"),
        ("sa", "nsw"),
        ("sa", "v"),
        ("q", "nsw"),
        ("nsw", "v"),
    ];
    let mut registry = ConstraintRegistry::default();
    let mut arcs = Vec::new();
    for (first, second) in borders {
        let _ = registry
            .add(first, second, constraints::not_equals())
            .add(second, first, constraints::not_equals());
        arcs.extend([Arc::new(first, second), Arc::new(second, first)]);
    }

    // Red = 0, green = 1, blue = 2; western australia is red and the northern territory green.
    let all = vec![0, 1, 2];
    let initial = domains([
        ("wa", vec![0]),
        ("nt", vec![1]),
        ("sa", all.clone()),
        ("q", all.clone()),
        ("nsw", all.clone()),
        ("v", all.clone()),
        ("t", all),
    ]);
    let mut solver = ArcConsistencySolver::with_options(arcs, initial.clone(), registry, INCOMING)
        .expect("every variable has a domain");

    let result = solver.solve().expect("no lookup errors");

    let domains = result.domains().expect("the map can be coloured");
    assert_eq!(Some([2].as_slice()), domains.get(&"sa"));
    assert_eq!(Some([0].as_slice()), domains.get(&"q"));
    assert_eq!(Some([1].as_slice()), domains.get(&"nsw"));
    assert_eq!(Some([0].as_slice()), domains.get(&"v"));
    // Tasmania is not part of any arc.
    assert_eq!(Some([0, 1, 2].as_slice()), domains.get(&"t"));
    assert!(domains.is_subset_of(&initial));
    assert!(solver.is_arc_consistent());
}

fn four_queens(first_column: i32) -> ArcConsistencySolver<usize, i32> {
    let mut registry = ConstraintRegistry::default();
    let mut arcs = Vec::new();
    for source in 0..4_usize {
        for target in (0..4_usize).filter(|&target| target != source) {
            let distance = source.abs_diff(target) as i32;
            let _ = registry.add(
                source,
                target,
                constraints::predicate("queens", move |x: &i32, y: &i32| {
                    x != y && (x - y).abs() != distance
                }),
            );
            arcs.push((source, target));
        }
    }

    let domains: Domains<usize, i32> = (0..4_usize)
        .map(|row| {
            let columns = if row == 0 {
                vec![first_column]
            } else {
                (0..4).collect()
            };
            (row, columns)
        })
        .collect();

    ArcConsistencySolver::with_options(arcs, domains, registry, INCOMING)
        .expect("every variable has a domain")
}

#[test]
fn four_queens_with_corner_queen_is_inconsistent() {
    init_logger();
    let mut solver = four_queens(0);

    let result = solver.solve().expect("no lookup errors");

    assert!(matches!(result, PropagationResult::Inconsistent));
}

#[test]
fn four_queens_with_second_column_queen_is_solved_by_propagation() {
    init_logger();
    let mut solver = four_queens(1);

    let result = solver.solve().expect("no lookup errors");

    let domains = result.domains().expect("1, 3, 0, 2 is a solution");
    for (row, column) in [1, 3, 0, 2].into_iter().enumerate() {
        assert_eq!(Some([column].as_slice()), domains.get(&row));
    }
}

#[test]
fn requeueing_outgoing_arcs_of_the_target_can_stop_early() {
    init_logger();
    let problem = || {
        let mut registry = ConstraintRegistry::default();
        let _ = registry
            .add("a", "b", constraints::equals())
            .add("c", "a", constraints::equals());
        (
            [("c", "a"), ("a", "b")],
            domains([("a", vec![1, 2]), ("b", vec![1]), ("c", vec![1, 2])]),
            registry,
        )
    };

    let (arcs, initial, registry) = problem();
    let mut solver =
        ArcConsistencySolver::new(arcs, initial, registry).expect("every variable has a domain");
    let _ = solver.solve().expect("no lookup errors");

    // Revising (a, b) only re-enqueues arcs leaving b, of which there are none.
    assert_eq!(Some([1].as_slice()), solver.domains().get(&"a"));
    assert_eq!(Some([1, 2].as_slice()), solver.domains().get(&"c"));
    assert!(!solver.is_arc_consistent());
    assert_eq!(
        Ok(Some(&2)),
        solver.find_unsupported(&Arc::new("c", "a"))
    );

    let (arcs, initial, registry) = problem();
    let mut solver = ArcConsistencySolver::with_options(arcs, initial, registry, INCOMING)
        .expect("every variable has a domain");
    let _ = solver.solve().expect("no lookup errors");

    assert_eq!(Some([1].as_slice()), solver.domains().get(&"c"));
    assert!(solver.is_arc_consistent());
}

#[test]
fn fixed_point_is_idempotent() {
    init_logger();
    let mut registry = ConstraintRegistry::default();
    let arcs = all_different(&mut registry, &["a", "b", "c", "d"]);
    let mut solver = ArcConsistencySolver::with_options(
        arcs.clone(),
        domains([
            ("a", vec![1, 2]),
            ("b", vec![2]),
            ("c", vec![1, 2, 3, 4]),
            ("d", vec![2, 3, 4]),
        ]),
        registry,
        INCOMING,
    )
    .expect("every variable has a domain");

    let _ = solver.solve().expect("no lookup errors");
    let fixed_point = solver.domains().clone();

    for (source, target) in arcs {
        assert_eq!(Ok(false), solver.revise(&source, &target));
    }
    assert_eq!(&fixed_point, solver.domains());

    let result = solver.solve().expect("no lookup errors");
    assert_eq!(Some(&fixed_point), result.domains());
}

#[test]
fn removed_values_have_no_support() {
    init_logger();
    let initial = domains([("x", vec![1, 2, 3, 4]), ("y", vec![2, 3]), ("z", vec![3, 4])]);
    let mut registry = less_than("x", "y");
    let _ = registry
        .add("y", "z", constraints::less_than())
        .add("z", "y", constraints::greater_than());
    let arcs = [("x", "y"), ("y", "x"), ("y", "z"), ("z", "y")];
    let mut solver = ArcConsistencySolver::with_options(arcs, initial.clone(), registry, INCOMING)
        .expect("every variable has a domain");

    let _ = solver.solve().expect("no lookup errors");

    // Every removed value of x is unsupported by the remaining values of y.
    let remaining_y = solver.domains().get(&"y").expect("y has a domain").to_vec();
    for x in initial.get(&"x").expect("x has a domain") {
        let kept = solver
            .domains()
            .get(&"x")
            .is_some_and(|values| values.contains(x));
        assert_eq!(kept, remaining_y.iter().any(|y| x < y));
    }
    assert_eq!(Some([1, 2].as_slice()), solver.domains().get(&"x"));
    assert_eq!(Some([2, 3].as_slice()), solver.domains().get(&"y"));
    assert_eq!(Some([3, 4].as_slice()), solver.domains().get(&"z"));
}

#[test]
fn arcs_and_constraints_must_refer_to_known_variables() {
    init_logger();
    let result = ArcConsistencySolver::new(
        [("x", "y"), ("y", "w")],
        domains([("x", vec![1]), ("y", vec![2])]),
        less_than("x", "y"),
    );
    assert_eq!(
        Some(PropagationError::ArcWithoutDomain {
            arc: Arc::new("y", "w"),
            variable: "w",
        }),
        result.err()
    );

    let result = ArcConsistencySolver::new(
        [("x", "y")],
        domains([("x", vec![1]), ("y", vec![2])]),
        less_than("w", "y"),
    );
    assert!(matches!(
        result,
        Err(PropagationError::ConstraintWithoutDomain { variable: "w", .. })
    ));
}

#[test]
fn second_run_continues_from_the_pruned_domains() {
    init_logger();
    let problem = |options| {
        let mut registry = ConstraintRegistry::default();
        let _ = registry
            .add("a", "b", constraints::equals())
            .add("c", "a", constraints::equals());
        ArcConsistencySolver::with_options(
            [("c", "a"), ("a", "b")],
            domains([("a", vec![1, 2]), ("b", vec![1]), ("c", vec![1, 2])]),
            registry,
            options,
        )
        .expect("every variable has a domain")
    };

    // The first run leaves (c, a) revisable; the reseeded worklist of the second run revises it.
    let mut solver = problem(SolverOptions::default());
    let _ = solver.solve().expect("no lookup errors");
    assert_eq!(Some([1, 2].as_slice()), solver.domains().get(&"c"));
    assert_eq!(1, solver.statistics().num_values_removed);

    let result = solver.solve().expect("no lookup errors");
    assert_eq!(
        Some([1].as_slice()),
        result.domains().and_then(|domains| domains.get(&"c"))
    );
    assert_eq!(2, solver.statistics().num_values_removed);
    assert!(solver.is_arc_consistent());

    // Requeueing the incoming arcs reaches the fixed point in one run.
    let mut solver = problem(INCOMING);
    let _ = solver.solve().expect("no lookup errors");
    let removed = solver.statistics().num_values_removed;
    let _ = solver.solve().expect("no lookup errors");
    assert_eq!(removed, solver.statistics().num_values_removed);
    assert_eq!(Some([1].as_slice()), solver.domains().get(&"c"));
}
