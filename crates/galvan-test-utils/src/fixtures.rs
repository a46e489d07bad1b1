//! Standard circuit shapes used across the workspace's tests.
//!
//! Three topologies cover the interesting propagation cases:
//!
//! - [`series_loop`] — a closed ring; markers circulate forever.
//! - [`parallel_pair`] — a ring with two parallel middle paths; junction
//!   transitions must pick between competing outgoing branches.
//! - [`dead_end`] — a single open branch; markers strand at the far end.

use galvan_circuit::{CircuitBuilder, CircuitTopology};
use galvan_core::JunctionId;
use galvan_particle::{seed_uniform, ParticleSet};

/// A closed ring of `branch_count` branches, each of the given length.
///
/// Branch `i` runs junction `i` → junction `(i + 1) % branch_count`, so a
/// uniform positive current circulates markers forever.
///
/// # Panics
///
/// Panics if `branch_count < 2` or `length` is invalid; fixtures fail
/// fast rather than returning errors.
pub fn series_loop(branch_count: u32, length: f64) -> CircuitTopology {
    assert!(branch_count >= 2, "a loop needs at least two branches");
    let mut builder = CircuitBuilder::default().junctions(branch_count);
    for i in 0..branch_count {
        builder = builder.branch(
            JunctionId(i),
            JunctionId((i + 1) % branch_count),
            length,
        );
    }
    builder.build().expect("series loop must be well-formed")
}

/// A ring with two parallel middle paths.
///
/// ```text
///        B (len 5)
///       ↗        ↘
/// j0 -A-> j1      j2 -D-> j0
///       ↘        ↗
///        C (len 2)
/// ```
///
/// Branch ids: A = 0 (len 10), B = 1, C = 2, D = 3 (len 10). Markers
/// crossing j1 must choose between B and C by density.
pub fn parallel_pair() -> CircuitTopology {
    CircuitTopology::builder()
        .junctions(3)
        .branch(JunctionId(0), JunctionId(1), 10.0)
        .branch(JunctionId(1), JunctionId(2), 5.0)
        .branch(JunctionId(1), JunctionId(2), 2.0)
        .branch(JunctionId(2), JunctionId(0), 10.0)
        .build()
        .expect("parallel pair must be well-formed")
}

/// A single open branch; markers pushed past the far junction strand.
pub fn dead_end(length: f64) -> CircuitTopology {
    CircuitTopology::builder()
        .junctions(2)
        .branch(JunctionId(0), JunctionId(1), length)
        .build()
        .expect("dead end must be well-formed")
}

/// Set every branch's current to the same signed value.
///
/// Not Kirchhoff-consistent on forked topologies, which is fine: the
/// engine consumes whatever currents the solver hands it.
pub fn energize_uniform(circuit: &mut CircuitTopology, current: f64) {
    let ids: Vec<_> = circuit.branch_ids().collect();
    for id in ids {
        circuit
            .set_current(id, current)
            .expect("fixture branch ids are valid");
    }
}

/// Seed markers every `separation` units along every branch of `circuit`.
pub fn seeded_particles(circuit: &CircuitTopology, separation: f64) -> ParticleSet {
    use galvan_circuit::Circuit;
    let branches = circuit
        .branch_ids()
        .filter_map(|id| circuit.branch(id).map(|b| (id, b.length())))
        .collect::<Vec<_>>();
    seed_uniform(branches, separation).expect("fixture layout must be valid")
}
