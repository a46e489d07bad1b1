//! Error types for circuit construction and mutation.

use galvan_core::{BranchId, JunctionId};
use std::error::Error;
use std::fmt;

/// Errors detected while building or mutating a circuit topology.
#[derive(Clone, Debug, PartialEq)]
pub enum CircuitError {
    /// The builder was given zero junctions.
    NoJunctions,
    /// A branch references a junction id outside the declared range.
    UnknownJunction {
        /// Index of the offending branch in declaration order.
        branch_index: usize,
        /// The out-of-range junction id.
        junction: JunctionId,
    },
    /// A branch connects a junction to itself.
    SelfLoop {
        /// Index of the offending branch in declaration order.
        branch_index: usize,
    },
    /// A branch length is NaN, infinite, zero, or negative.
    InvalidLength {
        /// Index of the offending branch in declaration order.
        branch_index: usize,
        /// The rejected length.
        length: f64,
    },
    /// A mutation referenced a branch id this topology never issued.
    UnknownBranch {
        /// The unrecognized branch id.
        branch: BranchId,
    },
    /// A solver wrote a NaN or infinite current.
    NonFiniteCurrent {
        /// The target branch.
        branch: BranchId,
        /// The rejected current.
        current: f64,
    },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoJunctions => write!(f, "circuit has no junctions"),
            Self::UnknownJunction {
                branch_index,
                junction,
            } => {
                write!(f, "branch {branch_index} references unknown junction {junction}")
            }
            Self::SelfLoop { branch_index } => {
                write!(f, "branch {branch_index} connects a junction to itself")
            }
            Self::InvalidLength {
                branch_index,
                length,
            } => {
                write!(
                    f,
                    "branch {branch_index} length must be finite and positive, got {length}"
                )
            }
            Self::UnknownBranch { branch } => write!(f, "unknown branch {branch}"),
            Self::NonFiniteCurrent { branch, current } => {
                write!(f, "current for branch {branch} must be finite, got {current}")
            }
        }
    }
}

impl Error for CircuitError {}
