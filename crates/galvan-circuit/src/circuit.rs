//! The core `Circuit` trait.

use crate::branch::Branch;
use galvan_core::{BranchId, BranchList, JunctionId};

/// Read-only graph surface consumed by the propagation engine.
///
/// Concrete backends (the reference [`CircuitTopology`](crate::CircuitTopology),
/// or a renderer's own scene graph) implement it to expose branch data and
/// junction adjacency. The engine holds it as `&dyn Circuit`, so the trait
/// is object-safe by design.
///
/// # Determinism
///
/// [`adjacent_branches`](Circuit::adjacent_branches) must return branches in
/// a stable, backend-defined order: the engine's density tie-break resolves
/// to the first enumerated candidate, so enumeration order is
/// behavior-relevant.
pub trait Circuit {
    /// Number of junctions in the graph.
    fn junction_count(&self) -> usize;

    /// Number of branches in the graph.
    fn branch_count(&self) -> usize;

    /// Look up a branch by handle.
    ///
    /// Returns `None` if the handle was not issued by this circuit.
    fn branch(&self, id: BranchId) -> Option<&Branch>;

    /// All branches incident to `junction`, in stable enumeration order.
    ///
    /// Returns an empty list for an unknown junction.
    fn adjacent_branches(&self, junction: JunctionId) -> BranchList;

    /// Largest absolute current over all branches, 0 if there are none.
    ///
    /// Default implementation scans every branch; backends may override
    /// with a cached value if the solver maintains one.
    fn max_current_magnitude(&self) -> f64 {
        let mut max = 0.0f64;
        for i in 0..self.branch_count() {
            if let Some(branch) = self.branch(BranchId(i as u32)) {
                max = max.max(branch.current().abs());
            }
        }
        max
    }
}
