//! Exhaustive ground-truth search

use crate::objective::Objective;

/// Find a provably optimal decision vector by enumerating all `2^n` of them
///
/// Recursive enumeration over facility positions; the objective is evaluated
/// only on completed vectors, and at each level the more profitable of the
/// two completed branches is kept (the open branch keeps ties). Returns the
/// winning vector together with its profit.
///
/// This is the canonical ground truth for validating the reduction engine.
/// Its cost is exponential; never use it in a production decision path.
///
/// # Examples
///
/// ```
/// use lattice_ae::brute_force;
///
/// fn open_count(decisions: &[bool]) -> f64 {
///     decisions.iter().filter(|&&open| open).count() as f64
/// }
///
/// let (optimal, profit) = brute_force(&open_count, 3);
/// assert_eq!(optimal, vec![true, true, true]);
/// assert_eq!(profit, 3.0);
/// ```
pub fn brute_force(objective: &dyn Objective, num_facilities: usize) -> (Vec<bool>, f64) {
    let mut decisions = vec![false; num_facilities];
    descend(objective, &mut decisions, 0)
}

fn descend(objective: &dyn Objective, decisions: &mut [bool], index: usize) -> (Vec<bool>, f64) {
    if index == decisions.len() {
        return (decisions.to_vec(), objective.evaluate(decisions));
    }

    decisions[index] = false;
    let closed = descend(objective, decisions, index + 1);

    decisions[index] = true;
    let open = descend(objective, decisions, index + 1);

    decisions[index] = false;

    if closed.1 > open.1 {
        closed
    } else {
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(decisions: &[bool]) -> f64 {
        decisions.iter().filter(|&&open| open).count() as f64
    }

    #[test]
    fn test_empty_instance() {
        let (optimal, profit) = brute_force(&open_count, 0);
        assert!(optimal.is_empty());
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn test_finds_unique_optimum() {
        // profit peaks at exactly the pattern [true, false, true]
        fn spiked(decisions: &[bool]) -> f64 {
            if decisions == [true, false, true] {
                10.0
            } else {
                0.0
            }
        }
        let (optimal, profit) = brute_force(&spiked, 3);
        assert_eq!(optimal, vec![true, false, true]);
        assert_eq!(profit, 10.0);
    }

    #[test]
    fn test_tie_prefers_open_branch() {
        fn constant(_: &[bool]) -> f64 {
            1.0
        }
        let (optimal, profit) = brute_force(&constant, 2);
        assert_eq!(optimal, vec![true, true]);
        assert_eq!(profit, 1.0);
    }
}
