//! Validation harness: reduction output versus brute-force ground truth
//!
//! Runs lattice or full reduction over a curated set of instances and checks
//! every decision the reducer fixed against an independent exhaustive
//! search. Distinct decision vectors can share the same maximal profit, so a
//! disagreement on a fixed index is tolerated when both complete assignments
//! are within a small profit tolerance of each other; anything beyond that
//! fails fast with a report of the offending instance.

use std::fmt;

use crate::objective::Objective;
use crate::reducer::{brute_force, Monotonicity, Reduction};

/// Profit tolerance under which two differing assignments count as tied
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Which reduction scheme a validation case exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Lattice reduction only; residual ambiguity is left unchecked
    Lattice,
    /// Full reduction; every facility must come out fixed
    Full,
}

/// One validation instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationCase {
    /// Number of facilities
    pub num_facilities: usize,
    /// Monotonicity class the reducer assumes
    pub mode: Monotonicity,
    /// Reduction scheme to run
    pub scheme: Scheme,
}

/// The default case set: lattice reduction at several sizes plus one full
/// reduction, all submodular
pub fn default_cases() -> Vec<ValidationCase> {
    let lattice = |num_facilities| ValidationCase {
        num_facilities,
        mode: Monotonicity::Submodular,
        scheme: Scheme::Lattice,
    };
    vec![
        lattice(3),
        lattice(3),
        lattice(5),
        lattice(10),
        ValidationCase {
            num_facilities: 5,
            mode: Monotonicity::Submodular,
            scheme: Scheme::Full,
        },
    ]
}

/// A fixed decision that contradicts the brute-force optimum beyond tolerance
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    /// The offending case
    pub case: ValidationCase,
    /// Index of the contradicting facility
    pub facility: usize,
    /// The decision the reducer fixed
    pub reduced: bool,
    /// The brute-force optimal decision at that index
    pub optimal: bool,
    /// Profit of the reducer's complete decision vector
    pub reduced_profit: f64,
    /// Profit of the brute-force optimum
    pub optimal_profit: f64,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let describe = |open: bool| if open { "open" } else { "closed" };
        write!(
            f,
            "{:?} reduction of {} facilities ({:?}): facility {} fixed {} but brute force \
             says {} (profits {} vs {})",
            self.case.scheme,
            self.case.num_facilities,
            self.case.mode,
            self.facility,
            describe(self.reduced),
            describe(self.optimal),
            self.reduced_profit,
            self.optimal_profit
        )
    }
}

impl std::error::Error for ValidationFailure {}

/// Summary of a successful validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of cases run
    pub cases_run: usize,
    /// Objective evaluations across all reduction runs (brute force excluded)
    pub profit_calls: u64,
}

/// Validate reduction output against brute force over a set of cases
///
/// `make_objective` builds a fresh objective per case (typically keyed on
/// the case's facility count). For each case the chosen scheme runs to
/// completion, brute force finds the true optimum independently, and every
/// index the reducer fixed must match it - unless the two complete
/// assignments land within `tolerance` of each other in profit, which marks
/// a legal tie. The first mismatch beyond tolerance aborts the run.
///
/// # Examples
///
/// ```
/// use lattice_ae::{default_cases, validate, FacilityLocationObjective, DEFAULT_TOLERANCE};
///
/// let report = validate(
///     |case| FacilityLocationObjective::new(case.num_facilities, 1),
///     &default_cases(),
///     DEFAULT_TOLERANCE,
/// )
/// .unwrap();
/// assert_eq!(report.cases_run, 5);
/// ```
pub fn validate<O, M>(
    make_objective: M,
    cases: &[ValidationCase],
    tolerance: f64,
) -> Result<ValidationReport, ValidationFailure>
where
    O: Objective,
    M: Fn(&ValidationCase) -> O,
{
    let mut profit_calls = 0;

    for case in cases {
        let objective = make_objective(case);
        let (optimal, optimal_profit) = brute_force(&objective, case.num_facilities);

        let mut reduction = Reduction::new(&objective, case.num_facilities, case.mode);
        match case.scheme {
            Scheme::Lattice => {
                reduction.reduce();
            }
            Scheme::Full => {
                reduction.reduce_fully();
            }
        }
        profit_calls += reduction.profit_calls();

        let reduced_profit = objective.evaluate(reduction.decisions());
        for facility in 0..case.num_facilities {
            if reduction.ambiguity()[facility] {
                continue;
            }
            let reduced = reduction.decisions()[facility];
            if reduced != optimal[facility] && (reduced_profit - optimal_profit).abs() > tolerance {
                return Err(ValidationFailure {
                    case: *case,
                    facility,
                    reduced,
                    optimal: optimal[facility],
                    reduced_profit,
                    optimal_profit,
                });
            }
        }
    }

    Ok(ValidationReport {
        cases_run: cases.len(),
        profit_calls,
    })
}
