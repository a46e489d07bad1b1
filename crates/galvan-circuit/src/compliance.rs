//! Shared invariant checks every `Circuit` backend must satisfy.
//!
//! Called from backend test modules with a constructed instance; panics
//! with a descriptive message on the first violated invariant.

use crate::circuit::Circuit;
use galvan_core::{BranchId, JunctionId};

/// Run every compliance check against `circuit`.
pub(crate) fn run_full_compliance(circuit: &dyn Circuit) {
    check_branch_lookup(circuit);
    check_adjacency_is_symmetric(circuit);
    check_adjacency_is_deterministic(circuit);
}

/// Every id below `branch_count` resolves; the first id past it does not.
fn check_branch_lookup(circuit: &dyn Circuit) {
    for i in 0..circuit.branch_count() {
        assert!(
            circuit.branch(BranchId(i as u32)).is_some(),
            "branch {i} must resolve",
        );
    }
    assert!(
        circuit.branch(BranchId(circuit.branch_count() as u32)).is_none(),
        "branch lookup past the arena must return None",
    );
}

/// Each branch appears exactly once in the adjacency of each endpoint, and
/// adjacency lists never mention branches that are not incident.
fn check_adjacency_is_symmetric(circuit: &dyn Circuit) {
    for j in 0..circuit.junction_count() {
        let junction = JunctionId(j as u32);
        for id in circuit.adjacent_branches(junction) {
            let branch = circuit
                .branch(id)
                .unwrap_or_else(|| panic!("adjacency of junction {junction} lists unknown branch {id}"));
            assert!(
                branch.start() == junction || branch.end() == junction,
                "branch {id} listed at junction {junction} but is not incident to it",
            );
        }
    }

    for i in 0..circuit.branch_count() {
        let id = BranchId(i as u32);
        let branch = circuit.branch(id).unwrap();
        for junction in [branch.start(), branch.end()] {
            let listed = circuit
                .adjacent_branches(junction)
                .iter()
                .filter(|&&b| b == id)
                .count();
            assert_eq!(
                listed, 1,
                "branch {id} must appear exactly once in the adjacency of junction {junction}",
            );
        }
    }
}

/// Two enumerations of the same junction agree. Enumeration order is
/// behavior-relevant: density tie-breaks resolve to the first candidate.
fn check_adjacency_is_deterministic(circuit: &dyn Circuit) {
    for j in 0..circuit.junction_count() {
        let junction = JunctionId(j as u32);
        let first = circuit.adjacent_branches(junction);
        let second = circuit.adjacent_branches(junction);
        assert_eq!(
            first.as_slice(),
            second.as_slice(),
            "adjacency of junction {junction} must be stable",
        );
    }
}
