//! Strongly-typed entity handles.
//!
//! All cross-entity references in Galvan are integer handles into
//! arena-style storage: a particle refers to its branch by [`BranchId`],
//! a branch refers to its endpoints by [`JunctionId`]. Reassigning a
//! particle to another branch is an index swap, never a pointer update.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a branch (wire segment) within a circuit.
///
/// Branches are registered at circuit construction and assigned sequential
/// IDs. `BranchId(n)` corresponds to the n-th branch added to the topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub u32);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BranchId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a junction (graph node where branches meet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JunctionId(pub u32);

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for JunctionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a current marker owned by a particle store.
///
/// Particle stores never destroy particles, so a `ParticleId` stays valid
/// for the lifetime of the store that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented by the external clock each time the simulation advances
/// one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A short list of branch handles.
///
/// Uses `SmallVec<[BranchId; 8]>` to avoid heap allocation for realistic
/// junction degrees (a junction with more than 8 incident branches spills
/// to the heap transparently). Returned by adjacency queries.
pub type BranchList = SmallVec<[BranchId; 8]>;
