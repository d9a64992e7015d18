//! Profit objectives for facility-location decision problems
//!
//! The reduction engine treats the objective as a black box: any type
//! implementing [`Objective`] maps a full open/closed decision vector to a
//! real-valued profit. The engine never inspects an objective's internals
//! beyond calling [`Objective::evaluate`].
//!
//! Two synthetic instance families are provided:
//!
//! - [`InteractionObjective`] - fixed costs plus pairwise interaction profit
//!   between open facilities (supermodular).
//! - [`FacilityLocationObjective`] - uncapacitated facility location recast
//!   as a maximization problem (submodular).
//!
//! Both materialize all random parameters once at construction from a
//! caller-supplied seed, so profit is a pure, reproducible function of the
//! decision vector for the lifetime of the instance.

mod facility;
mod interaction;

pub use facility::FacilityLocationObjective;
pub use interaction::InteractionObjective;

use std::io::{self, Write};

/// A profit function over open/closed decision vectors
///
/// Implementations must be deterministic and pure: the returned profit may
/// depend only on the decision vector, never on call order or per-call
/// randomness. Violating this contract does not crash the reducer but makes
/// its output meaningless (and unfalsifiable short of brute-force
/// validation).
///
/// The trait is implemented for any `Fn(&[bool]) -> f64`, so plain functions
/// and closures can serve as ad-hoc objectives:
///
/// ```
/// use lattice_ae::Objective;
///
/// fn open_count(decisions: &[bool]) -> f64 {
///     decisions.iter().filter(|&&open| open).count() as f64
/// }
///
/// let objective: &dyn Objective = &open_count;
/// assert_eq!(objective.evaluate(&[true, false, true]), 2.0);
/// ```
pub trait Objective {
    /// Evaluate the profit of a complete decision vector
    ///
    /// `decisions[i]` is `true` when facility `i` is open.
    fn evaluate(&self, decisions: &[bool]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[bool]) -> f64,
{
    fn evaluate(&self, decisions: &[bool]) -> f64 {
        self(decisions)
    }
}

/// Write the full truth table of an objective to `out`
///
/// Enumerates all `2^n` decision vectors in lexicographic order (facility 0
/// varying slowest, closed before open) and writes one line per vector: the
/// `n` decisions as `0`/`1` followed by the profit.
///
/// This is a diagnostic aid with exponential cost; the reduction engine
/// never calls it.
///
/// # Examples
///
/// ```
/// use lattice_ae::write_truth_table;
///
/// fn open_count(decisions: &[bool]) -> f64 {
///     decisions.iter().filter(|&&open| open).count() as f64
/// }
///
/// let mut table = Vec::new();
/// write_truth_table(&open_count, 1, &mut table).unwrap();
/// assert_eq!(String::from_utf8(table).unwrap(), "0 0\n1 1\n");
/// ```
pub fn write_truth_table<W: Write>(
    objective: &dyn Objective,
    num_facilities: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut decisions = vec![false; num_facilities];
    write_rows(objective, &mut decisions, 0, out)
}

fn write_rows<W: Write>(
    objective: &dyn Objective,
    decisions: &mut [bool],
    index: usize,
    out: &mut W,
) -> io::Result<()> {
    if index == decisions.len() {
        for &open in decisions.iter() {
            write!(out, "{} ", open as u8)?;
        }
        return writeln!(out, "{}", objective.evaluate(decisions));
    }

    decisions[index] = false;
    write_rows(objective, decisions, index + 1, out)?;

    decisions[index] = true;
    write_rows(objective, decisions, index + 1, out)?;

    decisions[index] = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(decisions: &[bool]) -> f64 {
        decisions.iter().filter(|&&open| open).count() as f64
    }

    #[test]
    fn test_closure_objective() {
        let objective: &dyn Objective = &open_count;
        assert_eq!(objective.evaluate(&[]), 0.0);
        assert_eq!(objective.evaluate(&[true, true, false]), 2.0);
    }

    #[test]
    fn test_truth_table_order() {
        let mut out = Vec::new();
        write_truth_table(&open_count, 2, &mut out).unwrap();
        let table = String::from_utf8(out).unwrap();
        assert_eq!(table, "0 0 0\n0 1 1\n1 0 1\n1 1 2\n");
    }

    #[test]
    fn test_truth_table_empty_instance() {
        let mut out = Vec::new();
        write_truth_table(&open_count, 0, &mut out).unwrap();
        // a single row: the empty vector and its profit
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }
}
