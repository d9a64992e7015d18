use super::*;
use crate::objective::{FacilityLocationObjective, InteractionObjective};

fn open_count(decisions: &[bool]) -> f64 {
    decisions.iter().filter(|&&open| open).count() as f64
}

fn negated_open_count(decisions: &[bool]) -> f64 {
    -open_count(decisions)
}

fn constant(_: &[bool]) -> f64 {
    7.5
}

/// 1.0 when exactly one facility is open, 0.0 otherwise. Neither submodular
/// nor resolvable by lattice reduction; forces the branching path.
fn exactly_one_open(decisions: &[bool]) -> f64 {
    if decisions.iter().filter(|&&open| open).count() == 1 {
        1.0
    } else {
        0.0
    }
}

#[test]
fn test_open_count_fixes_everything_open() {
    let mut reduction = Reduction::new(&open_count, 3, Monotonicity::Submodular);
    let decisions = reduction.reduce().to_vec();

    assert_eq!(decisions, vec![true, true, true]);
    assert!(reduction.is_resolved());
    // one productive sweep (4 calls) plus the convergence check sweep (2),
    // plus the three marginal tests in the first sweep
    assert_eq!(reduction.profit_calls(), 7);

    // full reduction on top is a no-op
    let resolved = reduction.decisions().to_vec();
    reduction.reduce_fully();
    assert_eq!(reduction.decisions(), resolved.as_slice());
}

#[test]
fn test_constant_objective_boundary_tie_breaks() {
    let mut submodular = Reduction::new(&constant, 2, Monotonicity::Submodular);
    submodular.reduce();
    assert!(submodular.is_resolved());
    assert_eq!(submodular.decisions(), &[true, true]);

    let mut supermodular = Reduction::new(&constant, 2, Monotonicity::Supermodular);
    supermodular.reduce();
    assert!(supermodular.is_resolved());
    assert_eq!(supermodular.decisions(), &[false, false]);
}

#[test]
fn test_supermodular_closes_pure_losses() {
    let mut reduction = Reduction::new(&negated_open_count, 4, Monotonicity::Supermodular);
    reduction.reduce();
    assert!(reduction.is_resolved());
    assert_eq!(reduction.decisions(), &[false; 4]);
}

#[test]
fn test_empty_instance_is_noop() {
    let mut reduction = Reduction::new(&open_count, 0, Monotonicity::Submodular);
    assert_eq!(reduction.sweep(), 0);
    assert!(reduction.reduce().is_empty());
    assert!(reduction.reduce_fully().is_empty());
    assert!(reduction.is_resolved());
    assert_eq!(reduction.profit_calls(), 0);
}

#[test]
fn test_ambiguous_set_shrinks_monotonically() {
    let objective = FacilityLocationObjective::new(8, 3);
    let mut reduction = Reduction::new(&objective, 8, Monotonicity::Submodular);

    let mut previous = reduction.ambiguity().to_vec();
    loop {
        let changed = reduction.sweep();
        let current = reduction.ambiguity().to_vec();
        for (i, (&was, &is)) in previous.iter().zip(current.iter()).enumerate() {
            assert!(
                was || !is,
                "facility {} became ambiguous again after being fixed",
                i
            );
        }
        if changed == 0 {
            break;
        }
        previous = current;
    }
}

#[test]
fn test_fixed_decisions_never_change() {
    let objective = FacilityLocationObjective::new(8, 5);
    let mut reduction = Reduction::new(&objective, 8, Monotonicity::Submodular);

    let mut fixed: Vec<Option<bool>> = vec![None; 8];
    loop {
        let changed = reduction.sweep();
        for i in 0..8 {
            if !reduction.ambiguity()[i] {
                let value = reduction.decisions()[i];
                match fixed[i] {
                    None => fixed[i] = Some(value),
                    Some(previous) => assert_eq!(previous, value, "facility {} flipped", i),
                }
            }
        }
        if changed == 0 {
            break;
        }
    }
}

#[test]
fn test_reduce_is_idempotent() {
    let objective = FacilityLocationObjective::new(6, 7);
    let mut reduction = Reduction::new(&objective, 6, Monotonicity::Submodular);
    reduction.reduce();

    let decisions = reduction.decisions().to_vec();
    let ambiguity = reduction.ambiguity().to_vec();
    let calls = reduction.profit_calls();

    reduction.reduce();
    assert_eq!(reduction.decisions(), decisions.as_slice());
    assert_eq!(reduction.ambiguity(), ambiguity.as_slice());
    // the convergence check itself still costs the two aggregate evaluations
    assert_eq!(reduction.profit_calls(), calls + 2);
}

#[test]
fn test_call_counts_are_deterministic() {
    let objective = FacilityLocationObjective::new(7, 11);

    let mut first = Reduction::new(&objective, 7, Monotonicity::Submodular);
    first.reduce_fully();

    let mut second = Reduction::new(&objective, 7, Monotonicity::Submodular);
    second.reduce_fully();

    assert!(first.profit_calls() > 0);
    assert_eq!(first.profit_calls(), second.profit_calls());
    assert_eq!(first.decisions(), second.decisions());
}

#[test]
fn test_full_reduction_resolves_everything() {
    for n in 0..=6 {
        let objective = FacilityLocationObjective::new(n, 13);
        let mut reduction = Reduction::new(&objective, n, Monotonicity::Submodular);
        reduction.reduce_fully();
        assert!(reduction.is_resolved(), "residual ambiguity at n = {}", n);
    }
}

#[test]
fn test_branching_tie_prefers_closed_child() {
    // lattice reduction fixes nothing here; both fully-resolved branches
    // tie at profit 1.0 and the closed-first child must win
    let mut reduction = Reduction::new(&exactly_one_open, 2, Monotonicity::Submodular);
    reduction.reduce_fully();
    assert!(reduction.is_resolved());
    assert_eq!(reduction.decisions(), &[false, true]);
}

#[test]
fn test_full_reduction_matches_brute_force_submodular() {
    for seed in [1, 2, 3] {
        let objective = FacilityLocationObjective::new(8, seed);
        let (_, optimal_profit) = brute_force(&objective, 8);

        let mut reduction = Reduction::new(&objective, 8, Monotonicity::Submodular);
        reduction.reduce_fully();
        let profit = objective.evaluate(reduction.decisions());

        assert!(
            (profit - optimal_profit).abs() <= 1e-6,
            "seed {}: EAE profit {} vs brute force {}",
            seed,
            profit,
            optimal_profit
        );
    }
}

#[test]
fn test_full_reduction_matches_brute_force_supermodular() {
    for seed in [4, 5, 6] {
        let objective = InteractionObjective::new(7, seed);
        let (_, optimal_profit) = brute_force(&objective, 7);

        let mut reduction = Reduction::new(&objective, 7, Monotonicity::Supermodular);
        reduction.reduce_fully();
        let profit = objective.evaluate(reduction.decisions());

        assert!(
            (profit - optimal_profit).abs() <= 1e-6,
            "seed {}: EAE profit {} vs brute force {}",
            seed,
            profit,
            optimal_profit
        );
    }
}

#[test]
fn test_with_state_respects_prefixed_decisions() {
    // facility 0 already fixed open; only facility 1 is up for reduction
    let mut reduction = Reduction::with_state(
        &negated_open_count,
        vec![true, false],
        vec![false, true],
        Monotonicity::Supermodular,
    )
    .unwrap();
    reduction.reduce();
    assert!(reduction.is_resolved());
    assert_eq!(reduction.decisions(), &[true, false]);
}

#[test]
fn test_with_state_length_mismatch() {
    let result = Reduction::with_state(
        &open_count,
        vec![true, false, true],
        vec![true],
        Monotonicity::Submodular,
    );
    assert!(matches!(
        result,
        Err(crate::ReductionError::LengthMismatch {
            decisions: 3,
            ambiguous: 1,
        })
    ));
}

#[test]
fn test_stats_snapshot() {
    let objective = FacilityLocationObjective::new(5, 17);
    let mut reduction = Reduction::new(&objective, 5, Monotonicity::Submodular);

    let before = reduction.stats();
    assert_eq!(before.num_facilities, 5);
    assert_eq!(before.num_ambiguous, 5);
    assert_eq!(before.num_fixed(), 0);
    assert_eq!(before.percent_eliminated(), 0.0);
    assert_eq!(before.profit_calls, 0);

    reduction.reduce_fully();
    let after = reduction.stats();
    assert_eq!(after.num_ambiguous, 0);
    assert_eq!(after.percent_eliminated(), 100.0);
    assert!(after.profit_calls > 0);
}
