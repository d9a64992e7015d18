//! # Lattice Ambiguity Elimination
//!
//! This crate implements a reduction heuristic for binary
//! facility-location-style decision problems: given `n` facilities, each
//! either open or closed, and a black-box profit function over the resulting
//! 0/1 vector, it proves as many per-facility decisions optimal as possible
//! without exhaustive search, by exploiting monotonicity (submodularity or
//! supermodularity) of the objective.
//!
//! ## Overview
//!
//! Every facility starts *ambiguous*. Each pass of the lattice reducer
//! evaluates the objective at the two extremes of the remaining decision
//! lattice - all ambiguous facilities open (supremum) and all closed
//! (infimum) - and tests each ambiguous facility's marginal value there.
//! When the sign is decisive for the declared monotonicity class, that
//! facility's decision is fixed for the rest of the run. Passes repeat until
//! nothing new can be fixed.
//!
//! ## Three Ways to Use the Engine
//!
//! ### 1. Lattice reduction (AE)
//!
//! Narrow a fully ambiguous instance down to a residual ambiguous set:
//!
//! ```
//! use lattice_ae::{FacilityLocationObjective, Monotonicity, Reduction};
//!
//! let objective = FacilityLocationObjective::new(10, 1);
//! let mut reduction = Reduction::new(&objective, 10, Monotonicity::Submodular);
//! reduction.reduce();
//!
//! let stats = reduction.stats();
//! println!(
//!     "{} of 10 decisions proven optimal in {} profit calls",
//!     stats.num_fixed(),
//!     stats.profit_calls
//! );
//! ```
//!
//! ### 2. Full reduction (EAE)
//!
//! Resolve everything exactly; lattice reduction first, then
//! branch-and-reduce on whatever ambiguity is left:
//!
//! ```
//! use lattice_ae::{FacilityLocationObjective, Monotonicity, Reduction};
//!
//! let objective = FacilityLocationObjective::new(8, 1);
//! let mut reduction = Reduction::new(&objective, 8, Monotonicity::Submodular);
//! reduction.reduce_fully();
//! assert!(reduction.is_resolved());
//! ```
//!
//! ### 3. Validation against brute force
//!
//! The exhaustive oracle defines ground truth for testing; the harness
//! tolerates distinct optima that tie in profit:
//!
//! ```
//! use lattice_ae::{default_cases, validate, FacilityLocationObjective, DEFAULT_TOLERANCE};
//!
//! let report = validate(
//!     |case| FacilityLocationObjective::new(case.num_facilities, 1),
//!     &default_cases(),
//!     DEFAULT_TOLERANCE,
//! )
//! .expect("reduction disagreed with brute force");
//! println!("{} cases validated", report.cases_run);
//! ```
//!
//! ## Bring Your Own Objective
//!
//! The engine only requires an [`Objective`]: a pure, deterministic mapping
//! from a decision vector to a profit. Plain functions work directly:
//!
//! ```
//! use lattice_ae::{Monotonicity, Reduction};
//!
//! fn open_count(decisions: &[bool]) -> f64 {
//!     decisions.iter().filter(|&&open| open).count() as f64
//! }
//!
//! let mut reduction = Reduction::new(&open_count, 3, Monotonicity::Submodular);
//! assert_eq!(reduction.reduce(), &[true, true, true]);
//! ```
//!
//! Objectives with random parameters must materialize them once at
//! construction (see [`InteractionObjective`] and
//! [`FacilityLocationObjective`]); per-call reseeding breaks the purity
//! contract and makes reduction results irreproducible.
//!
//! ## Cost Model
//!
//! Lattice reduction costs two aggregate evaluations plus two per-ambiguous
//! facility per pass, and converges in at most `n` passes (typically far
//! fewer). Full reduction is worst-case exponential in the *residual*
//! ambiguity, which strong monotonicity usually shrinks dramatically -
//! it is the exactness fallback, not the common path. Every instance counts
//! its objective evaluations ([`Reduction::profit_calls`]) for reporting.

// Public modules
pub mod error;
pub mod objective;
pub mod reducer;
pub mod validation;

// Re-export high-level public API
pub use error::ReductionError;
pub use objective::{
    write_truth_table, FacilityLocationObjective, InteractionObjective, Objective,
};
pub use reducer::{brute_force, Monotonicity, Reduction, ReductionStats};
pub use validation::{
    default_cases, validate, Scheme, ValidationCase, ValidationFailure, ValidationReport,
    DEFAULT_TOLERANCE,
};
