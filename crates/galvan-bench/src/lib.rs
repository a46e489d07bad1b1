//! Shared scenario builders for the Galvan benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use galvan_circuit::CircuitTopology;
use galvan_core::ParticleAccess;
use galvan_particle::ParticleSet;
use galvan_test_utils::{energize_uniform, seeded_particles, series_loop};

/// A circulating ring scenario sized for steady-state benchmarking.
///
/// `branch_count` branches of length 10 in a closed loop, all carrying the
/// same current, seeded with markers every 0.56 units. Enough junction
/// crossings happen per tick to exercise the transition search without the
/// workload degenerating into pure equalization.
pub fn ring_scene(branch_count: u32, current: f64) -> (CircuitTopology, ParticleSet) {
    let mut circuit = series_loop(branch_count, 10.0);
    energize_uniform(&mut circuit, current);
    let particles = seeded_particles(&circuit, 0.56);
    assert!(!particles.is_empty(), "benchmark scene must contain markers");
    (circuit, particles)
}
