//! Synthetic interaction-profit objective

use super::Objective;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed costs plus pairwise interaction profit between open facilities
///
/// Each open facility `i` contributes its fixed cost (drawn once from
/// `2n * Uniform(-1, 0.1)`, so usually a penalty) plus `delta / distance(i, j)`
/// for every other open facility `j`. With unit distances the interaction
/// term rewards opening facilities together, which makes the objective
/// supermodular: the marginal value of opening a facility grows with the set
/// of facilities already open.
///
/// All random parameters are materialized at construction from the given
/// seed; [`evaluate`] is a pure function of the decision vector.
///
/// [`evaluate`]: Objective::evaluate
///
/// # Examples
///
/// ```
/// use lattice_ae::{InteractionObjective, Objective};
///
/// let objective = InteractionObjective::new(4, 1);
/// let all_closed = objective.evaluate(&[false; 4]);
/// assert_eq!(all_closed, 0.0);
///
/// // same seed, same profits
/// let again = InteractionObjective::new(4, 1);
/// assert_eq!(
///     objective.evaluate(&[true, false, true, true]),
///     again.evaluate(&[true, false, true, true]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct InteractionObjective {
    /// Per-facility fixed cost, added when the facility is open
    fixed_costs: Vec<f64>,
    /// Pairwise distances, row-major `n * n`
    distances: Vec<f64>,
    /// Interaction strength between open pairs
    delta: f64,
}

impl InteractionObjective {
    /// Create an instance with `num_facilities` facilities and unit distances
    ///
    /// Fixed costs are sampled once from `2n * Uniform(-1, 0.1)` using a
    /// seeded generator.
    pub fn new(num_facilities: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = 2.0 * num_facilities as f64;
        let fixed_costs = (0..num_facilities)
            .map(|_| scale * rng.gen_range(-1.0..0.1))
            .collect();

        InteractionObjective {
            fixed_costs,
            distances: vec![1.0; num_facilities * num_facilities],
            delta: 1.0,
        }
    }

    /// Number of facilities in this instance
    pub fn num_facilities(&self) -> usize {
        self.fixed_costs.len()
    }
}

impl Objective for InteractionObjective {
    fn evaluate(&self, decisions: &[bool]) -> f64 {
        let n = self.fixed_costs.len();
        debug_assert_eq!(decisions.len(), n);

        let mut profit = 0.0;
        for i in 0..n {
            if !decisions[i] {
                continue;
            }
            profit += self.fixed_costs[i];
            for j in 0..n {
                if j != i && decisions[j] {
                    profit += self.delta / self.distances[i * n + j];
                }
            }
        }
        profit
    }
}
