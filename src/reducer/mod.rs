//! The lattice-based ambiguity-reduction engine
//!
//! This module implements ambiguity elimination (AE) for binary
//! facility-location decision problems: given `n` facilities and a black-box
//! profit objective, it proves as many open/closed decisions optimal as
//! monotonicity reasoning allows, without exhaustive search.
//!
//! A [`Reduction`] starts with every facility *ambiguous* and repeatedly
//! tests each ambiguous facility at the two extreme points of the remaining
//! decision lattice: the supremum (all ambiguous facilities open) and the
//! infimum (all ambiguous facilities closed). When the marginal value of a
//! facility at the relevant extreme has the decisive sign for the declared
//! [`Monotonicity`] class, the facility's decision is fixed for good. The
//! procedure iterates to a fixed point ([`Reduction::reduce`]); residual
//! ambiguity can then be resolved exactly by branch-and-reduce
//! ([`Reduction::reduce_fully`]).
//!
//! The exhaustive [`brute_force`] search provides ground truth for
//! validation; it is never part of the production path.

mod brute_force;

pub use brute_force::brute_force;

use crate::error::ReductionError;
use crate::objective::Objective;

/// Monotonicity class of the objective, fixed at construction
///
/// Selects which inequality direction lets a marginal-value test fix a
/// facility. Declaring the wrong class for an objective does not crash the
/// reducer, but its output is then unreliable; brute-force validation is the
/// only check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    /// Marginal values shrink as the open set grows
    ///
    /// A facility still worth opening at the lattice supremum is worth
    /// opening everywhere; one not worth opening at the infimum is worth
    /// opening nowhere.
    Submodular,
    /// Marginal values grow as the open set grows
    ///
    /// The mirror image: a facility not worth opening at the supremum is
    /// closed for good, one worth opening at the infimum is open for good.
    Supermodular,
}

/// Statistics snapshot of a reduction instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStats {
    /// Total number of facilities
    pub num_facilities: usize,
    /// Facilities still ambiguous
    pub num_ambiguous: usize,
    /// Objective evaluations charged to this instance so far
    pub profit_calls: u64,
}

impl ReductionStats {
    /// Facilities with a final decision
    pub fn num_fixed(&self) -> usize {
        self.num_facilities - self.num_ambiguous
    }

    /// Percentage of decisions eliminated from the search space
    pub fn percent_eliminated(&self) -> f64 {
        if self.num_facilities == 0 {
            return 100.0;
        }
        self.num_fixed() as f64 / self.num_facilities as f64 * 100.0
    }
}

/// A reduction instance: tri-state decision state plus the injected objective
///
/// Holds the decision vector (`true` = open), the ambiguity vector (`true` =
/// still undetermined), the monotonicity mode and a counter of objective
/// evaluations. All facilities start ambiguous with a closed placeholder
/// decision; the placeholder never influences the result.
///
/// Cloning yields an independent deep copy, which is how
/// [`reduce_fully`](Reduction::reduce_fully) branches.
///
/// # Examples
///
/// ```
/// use lattice_ae::{Monotonicity, Reduction};
///
/// fn open_count(decisions: &[bool]) -> f64 {
///     decisions.iter().filter(|&&open| open).count() as f64
/// }
///
/// let mut reduction = Reduction::new(&open_count, 3, Monotonicity::Submodular);
/// let decisions = reduction.reduce();
/// assert_eq!(decisions, &[true, true, true]);
/// assert_eq!(reduction.num_ambiguous(), 0);
/// ```
#[derive(Clone)]
pub struct Reduction<'a> {
    objective: &'a dyn Objective,
    decisions: Vec<bool>,
    ambiguous: Vec<bool>,
    mode: Monotonicity,
    profit_calls: u64,
}

impl<'a> Reduction<'a> {
    /// Create a fresh instance with every facility ambiguous
    ///
    /// `num_facilities = 0` is valid; every operation on such an instance is
    /// a no-op over the empty vector.
    pub fn new(objective: &'a dyn Objective, num_facilities: usize, mode: Monotonicity) -> Self {
        Reduction {
            objective,
            decisions: vec![false; num_facilities],
            ambiguous: vec![true; num_facilities],
            mode,
            profit_calls: 0,
        }
    }

    /// Create an instance from externally prepared state
    ///
    /// Facilities with `ambiguous[i] == false` are treated as already fixed
    /// to `decisions[i]` and will never be revisited.
    ///
    /// # Errors
    ///
    /// Returns [`ReductionError::LengthMismatch`] when the two vectors
    /// disagree in length.
    pub fn with_state(
        objective: &'a dyn Objective,
        decisions: Vec<bool>,
        ambiguous: Vec<bool>,
        mode: Monotonicity,
    ) -> Result<Self, ReductionError> {
        if decisions.len() != ambiguous.len() {
            return Err(ReductionError::LengthMismatch {
                decisions: decisions.len(),
                ambiguous: ambiguous.len(),
            });
        }
        Ok(Reduction {
            objective,
            decisions,
            ambiguous,
            mode,
            profit_calls: 0,
        })
    }

    /// Number of facilities in this instance
    pub fn num_facilities(&self) -> usize {
        self.decisions.len()
    }

    /// The current decision vector (`true` = open)
    ///
    /// Entries whose ambiguity flag is still set are placeholders, not
    /// claims of optimality.
    pub fn decisions(&self) -> &[bool] {
        &self.decisions
    }

    /// The current ambiguity vector (`true` = undetermined)
    pub fn ambiguity(&self) -> &[bool] {
        &self.ambiguous
    }

    /// Facilities still ambiguous
    pub fn num_ambiguous(&self) -> usize {
        self.ambiguous.iter().filter(|&&a| a).count()
    }

    /// Whether every facility has a final decision
    pub fn is_resolved(&self) -> bool {
        self.ambiguous.iter().all(|&a| !a)
    }

    /// The monotonicity class this instance was constructed with
    pub fn mode(&self) -> Monotonicity {
        self.mode
    }

    /// Objective evaluations charged to this instance so far
    ///
    /// Purely informational; never used for control flow.
    pub fn profit_calls(&self) -> u64 {
        self.profit_calls
    }

    /// Statistics snapshot
    pub fn stats(&self) -> ReductionStats {
        ReductionStats {
            num_facilities: self.num_facilities(),
            num_ambiguous: self.num_ambiguous(),
            profit_calls: self.profit_calls,
        }
    }

    fn evaluate(&mut self, decisions: &[bool]) -> f64 {
        self.profit_calls += 1;
        self.objective.evaluate(decisions)
    }

    /// Marginal-without: evaluate `reference` with `index` forced closed
    fn profit_without(&mut self, reference: &mut [bool], index: usize) -> f64 {
        let previous = reference[index];
        reference[index] = false;
        let profit = self.evaluate(reference);
        reference[index] = previous;
        profit
    }

    /// Marginal-with: evaluate `reference` with `index` forced open
    fn profit_with(&mut self, reference: &mut [bool], index: usize) -> f64 {
        let previous = reference[index];
        reference[index] = true;
        let profit = self.evaluate(reference);
        reference[index] = previous;
        profit
    }

    /// Run one full supremum + infimum pass
    ///
    /// Returns the number of facilities newly fixed. Both pass vectors are
    /// built from the decisions as they stood when the sweep started; newly
    /// fixed values are committed only at the end of the sweep.
    pub fn sweep(&mut self) -> usize {
        let n = self.decisions.len();
        if n == 0 {
            return 0;
        }

        let mut pending = self.decisions.clone();
        let mut num_changed = 0;

        // supremum of the remaining lattice: every ambiguous facility open
        let mut supremum = self.decisions.clone();
        for i in 0..n {
            if self.ambiguous[i] {
                supremum[i] = true;
            }
        }
        let sup_profit = self.evaluate(&supremum);

        for i in 0..n {
            if !self.ambiguous[i] {
                continue;
            }
            let without = self.profit_without(&mut supremum, i);
            match self.mode {
                Monotonicity::Submodular => {
                    // still profitable when everything else is open: the
                    // marginal can only grow on smaller sets, so open for good
                    if sup_profit - without >= 0.0 {
                        self.ambiguous[i] = false;
                        pending[i] = true;
                        num_changed += 1;
                    }
                }
                Monotonicity::Supermodular => {
                    if sup_profit - without <= 0.0 {
                        self.ambiguous[i] = false;
                        pending[i] = false;
                        num_changed += 1;
                    }
                }
            }
        }

        // infimum of the remaining lattice: every ambiguous facility closed
        let mut infimum = self.decisions.clone();
        for i in 0..n {
            if self.ambiguous[i] {
                infimum[i] = false;
            }
        }
        let inf_profit = self.evaluate(&infimum);

        for i in 0..n {
            if !self.ambiguous[i] {
                continue;
            }
            let with = self.profit_with(&mut infimum, i);
            match self.mode {
                Monotonicity::Submodular => {
                    // not profitable even when everything else is closed:
                    // the marginal only shrinks from here, so close for good
                    if with - inf_profit <= 0.0 {
                        self.ambiguous[i] = false;
                        pending[i] = false;
                        num_changed += 1;
                    }
                }
                Monotonicity::Supermodular => {
                    if with - inf_profit >= 0.0 {
                        self.ambiguous[i] = false;
                        pending[i] = true;
                        num_changed += 1;
                    }
                }
            }
        }

        self.decisions = pending;
        num_changed
    }

    /// Run lattice reduction (AE) to its fixed point
    ///
    /// Sweeps until a full pass fixes nothing. Terminates within
    /// `num_facilities` sweeps because the ambiguous set strictly shrinks
    /// whenever a sweep reports progress. Facilities left ambiguous keep
    /// their placeholder decision.
    pub fn reduce(&mut self) -> &[bool] {
        while self.sweep() > 0 {}
        &self.decisions
    }

    /// Run full reduction (EAE): lattice reduction plus exact branching
    ///
    /// After [`reduce`](Reduction::reduce) converges, any residual ambiguity
    /// is resolved by branching on the lowest ambiguous index: two
    /// independent child copies fix it closed and open respectively, recurse,
    /// and the more profitable resolved child wins (the closed child is
    /// evaluated first and keeps ties). Child evaluation counts and the two
    /// decisive evaluations are folded into this instance's counter.
    ///
    /// Always leaves zero ambiguous facilities. Worst-case exponential in
    /// the residual ambiguity after lattice reduction; this is the exactness
    /// fallback, not the common path.
    pub fn reduce_fully(&mut self) -> &[bool] {
        self.reduce();

        if let Some(index) = self.ambiguous.iter().position(|&a| a) {
            let mut closed_child = self.branch(index, false);
            closed_child.reduce_fully();

            let mut open_child = self.branch(index, true);
            open_child.reduce_fully();

            let child_calls = closed_child.profit_calls + open_child.profit_calls;
            let closed_profit = self.evaluate(&closed_child.decisions);
            let open_profit = self.evaluate(&open_child.decisions);

            let winner = if open_profit > closed_profit {
                open_child
            } else {
                closed_child
            };
            self.decisions = winner.decisions;
            self.ambiguous = winner.ambiguous;
            self.profit_calls += child_calls;
        }

        &self.decisions
    }

    /// Independent child with `index` fixed, counter reset to zero
    fn branch(&self, index: usize, open: bool) -> Self {
        let mut child = self.clone();
        child.profit_calls = 0;
        child.decisions[index] = open;
        child.ambiguous[index] = false;
        child
    }
}

impl std::fmt::Debug for Reduction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reduction")
            .field("decisions", &self.decisions)
            .field("ambiguous", &self.ambiguous)
            .field("mode", &self.mode)
            .field("profit_calls", &self.profit_calls)
            .finish()
    }
}

#[cfg(test)]
mod tests;
