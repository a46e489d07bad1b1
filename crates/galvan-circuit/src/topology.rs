//! Arena-indexed reference circuit backend.

use crate::branch::Branch;
use crate::circuit::Circuit;
use crate::error::CircuitError;
use galvan_core::{BranchId, BranchList, JunctionId};

/// The reference [`Circuit`] backend.
///
/// Junctions are implicit (`JunctionId(0)..JunctionId(n)`), branches live in
/// a flat arena indexed by [`BranchId`], and per-junction adjacency lists are
/// precomputed at build time. Lookups during tick execution are plain index
/// arithmetic; nothing allocates after construction.
///
/// # Examples
///
/// ```
/// use galvan_circuit::{Circuit, CircuitTopology};
/// use galvan_core::{BranchId, JunctionId};
///
/// // Two branches in series: 0 --a--> 1 --b--> 2
/// let mut circuit = CircuitTopology::builder()
///     .junctions(3)
///     .branch(JunctionId(0), JunctionId(1), 10.0)
///     .branch(JunctionId(1), JunctionId(2), 5.0)
///     .build()
///     .unwrap();
///
/// circuit.set_current(BranchId(0), 2.0).unwrap();
/// assert_eq!(circuit.branch(BranchId(0)).unwrap().current(), 2.0);
/// assert_eq!(circuit.adjacent_branches(JunctionId(1)).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CircuitTopology {
    junction_count: u32,
    branches: Vec<Branch>,
    adjacency: Vec<BranchList>,
}

/// Builder for [`CircuitTopology`].
///
/// Junction count is required; branches are optional (a branchless circuit
/// is legal and simply carries no current).
#[derive(Clone, Debug, Default)]
pub struct CircuitBuilder {
    junction_count: u32,
    branches: Vec<(JunctionId, JunctionId, f64)>,
}

impl CircuitTopology {
    /// Create a new builder.
    pub fn builder() -> CircuitBuilder {
        CircuitBuilder::default()
    }

    /// Write a solved current onto a branch.
    ///
    /// Called by the external circuit solver between ticks; the propagation
    /// engine itself never mutates the graph.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` was not issued by this topology or `current`
    /// is NaN or infinite.
    pub fn set_current(&mut self, id: BranchId, current: f64) -> Result<(), CircuitError> {
        if !current.is_finite() {
            return Err(CircuitError::NonFiniteCurrent {
                branch: id,
                current,
            });
        }
        let branch = self
            .branches
            .get_mut(id.0 as usize)
            .ok_or(CircuitError::UnknownBranch { branch: id })?;
        branch.set_current(current);
        Ok(())
    }

    /// Handles of all branches, in arena order.
    pub fn branch_ids(&self) -> impl Iterator<Item = BranchId> + '_ {
        (0..self.branches.len() as u32).map(BranchId)
    }
}

impl Circuit for CircuitTopology {
    fn junction_count(&self) -> usize {
        self.junction_count as usize
    }

    fn branch_count(&self) -> usize {
        self.branches.len()
    }

    fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.get(id.0 as usize)
    }

    fn adjacent_branches(&self, junction: JunctionId) -> BranchList {
        self.adjacency
            .get(junction.0 as usize)
            .cloned()
            .unwrap_or_default()
    }
}

impl CircuitBuilder {
    /// Set the number of junctions. Ids run `0..count`.
    pub fn junctions(mut self, count: u32) -> Self {
        self.junction_count = count;
        self
    }

    /// Append a branch from `start` to `end` with the given length.
    ///
    /// The branch receives the next sequential [`BranchId`] at build time.
    pub fn branch(mut self, start: JunctionId, end: JunctionId, length: f64) -> Self {
        self.branches.push((start, end, length));
        self
    }

    /// Build the topology, validating all declarations.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the junction count is zero
    /// - a branch references a junction id `>=` the junction count
    /// - a branch connects a junction to itself
    /// - a branch length is NaN, infinite, zero, or negative
    pub fn build(self) -> Result<CircuitTopology, CircuitError> {
        if self.junction_count == 0 {
            return Err(CircuitError::NoJunctions);
        }

        let mut branches = Vec::with_capacity(self.branches.len());
        let mut adjacency = vec![BranchList::new(); self.junction_count as usize];

        for (index, (start, end, length)) in self.branches.into_iter().enumerate() {
            for junction in [start, end] {
                if junction.0 >= self.junction_count {
                    return Err(CircuitError::UnknownJunction {
                        branch_index: index,
                        junction,
                    });
                }
            }
            if start == end {
                return Err(CircuitError::SelfLoop {
                    branch_index: index,
                });
            }
            if !length.is_finite() || length <= 0.0 {
                return Err(CircuitError::InvalidLength {
                    branch_index: index,
                    length,
                });
            }

            let id = BranchId(index as u32);
            adjacency[start.0 as usize].push(id);
            adjacency[end.0 as usize].push(id);
            branches.push(Branch::new(start, end, length));
        }

        Ok(CircuitTopology {
            junction_count: self.junction_count,
            branches,
            adjacency,
        })
    }
}
