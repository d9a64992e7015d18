//! Error types for the lattice reduction library
//!
//! This module provides error types that can be distinguished programmatically.
//! Most of the engine is infallible by construction; errors arise only at the
//! seams where externally prepared state or I/O enters the crate.

use std::fmt;
use std::io;

/// The main error type for the lattice reduction library
#[derive(Debug)]
pub enum ReductionError {
    /// Decision and ambiguity vectors disagree in length
    ///
    /// A reduction instance requires both vectors to describe the same set of
    /// facilities. This occurs when seeding an instance from externally
    /// prepared state via [`Reduction::with_state`].
    ///
    /// [`Reduction::with_state`]: crate::Reduction::with_state
    LengthMismatch {
        /// Length of the supplied decision vector
        decisions: usize,
        /// Length of the supplied ambiguity vector
        ambiguous: usize,
    },

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while writing a truth table dump.
    Io(io::Error),
}

impl fmt::Display for ReductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionError::LengthMismatch {
                decisions,
                ambiguous,
            } => write!(
                f,
                "Decision vector has {} entries but ambiguity vector has {}. \
                 Both vectors must describe the same facilities.",
                decisions, ambiguous
            ),
            ReductionError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ReductionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReductionError::Io(err) => Some(err),
            _ => None,
        }
    }
}

// Conversion from io::Error to ReductionError
impl From<io::Error> for ReductionError {
    fn from(err: io::Error) -> Self {
        ReductionError::Io(err)
    }
}

// Conversion from ReductionError to io::Error for callers living in io-land
impl From<ReductionError> for io::Error {
    fn from(err: ReductionError) -> Self {
        match err {
            ReductionError::Io(io_err) => io_err,
            other => io::Error::other(other),
        }
    }
}
