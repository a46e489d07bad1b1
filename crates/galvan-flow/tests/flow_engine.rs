//! Cross-crate scenarios: the engine driving real circuit and marker
//! backends over many ticks.

use galvan_circuit::{Circuit, CircuitTopology};
use galvan_core::{BranchId, JunctionId, ParticleId, TickId};
use galvan_flow::{FlowConfig, FlowEngine, StepContext};
use galvan_particle::ParticleSet;
use galvan_test_utils::{dead_end, energize_uniform, parallel_pair, seeded_particles};
use proptest::prelude::*;

/// Config that moves a marker by exactly `current * dt` while the global
/// scale stays 1.
fn unit_config() -> FlowConfig {
    FlowConfig {
        speed_scale: 1.0,
        max_step: 100.0,
        ..FlowConfig::default()
    }
}

fn run_ticks(
    engine: &mut FlowEngine,
    circuit: &CircuitTopology,
    particles: &mut ParticleSet,
    ticks: u64,
    dt: f64,
) {
    for tick in 1..=ticks {
        let mut ctx = StepContext::new(circuit, particles, TickId(tick), dt);
        engine.update(&mut ctx);
    }
}

#[test]
fn marker_crosses_onto_the_sole_outgoing_branch() {
    // A (len 10) feeds j1; B (len 5) is the only branch leaving it.
    let mut circuit = CircuitTopology::builder()
        .junctions(3)
        .branch(JunctionId(0), JunctionId(1), 10.0)
        .branch(JunctionId(1), JunctionId(2), 5.0)
        .build()
        .unwrap();
    energize_uniform(&mut circuit, 1.0);

    let mut particles = ParticleSet::new();
    let mover = particles.insert(BranchId(0), 9.6);

    let mut engine = FlowEngine::new(unit_config()).unwrap();
    // dx = 1.0 → new_x = 10.6 → overshoot 0.6 past the end junction.
    let mut ctx = StepContext::new(&circuit, &mut particles, TickId(1), 1.0);
    engine.update(&mut ctx);

    let p = particles.particle(mover).unwrap();
    assert_eq!(p.branch(), BranchId(1));
    assert!((p.position() - 0.6).abs() < 1e-12);
}

#[test]
fn middle_marker_relaxes_monotonically_toward_the_midpoint() {
    // Zero current: propagation holds every marker, only equalization acts.
    let circuit = dead_end(10.0);
    let mut particles = ParticleSet::new();
    particles.insert(BranchId(0), 2.0);
    let middle = particles.insert(BranchId(0), 5.0);
    particles.insert(BranchId(0), 9.0);

    let config = FlowConfig::default();
    let per_update_bound =
        config.correction_against_current * config.equalize_scale + 1e-12;
    let mut engine = FlowEngine::new(config).unwrap();

    let mut previous = 5.0;
    for tick in 1..=10u64 {
        let mut ctx = StepContext::new(&circuit, &mut particles, TickId(tick), 1.0);
        engine.update(&mut ctx);
        let position = particles.particle(middle).unwrap().position();

        assert!(position >= previous, "relaxation must not reverse");
        assert!(position <= 5.5, "relaxation must not overshoot the midpoint");
        assert!(
            position - previous <= per_update_bound,
            "per-update correction exceeded its bound: {} → {}",
            previous,
            position
        );
        previous = position;
    }

    // Outer markers have only one neighbor each and must not have moved.
    assert_eq!(particles.particle(ParticleId(0)).unwrap().position(), 2.0);
    assert_eq!(particles.particle(ParticleId(2)).unwrap().position(), 9.0);
}

#[test]
fn equal_seeds_replay_identical_trajectories() {
    let run = |seed: u64| -> Vec<(BranchId, f64)> {
        let mut circuit = parallel_pair();
        energize_uniform(&mut circuit, 2.0);
        let mut particles = seeded_particles(&circuit, 0.56);
        let config = FlowConfig {
            seed,
            ..FlowConfig::default()
        };
        let mut engine = FlowEngine::new(config).unwrap();
        run_ticks(&mut engine, &circuit, &mut particles, 50, 0.03);
        particles
            .iter()
            .map(|(_, p)| (p.branch(), p.position()))
            .collect()
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn stranded_marker_stays_put_across_ticks() {
    let mut circuit = dead_end(10.0);
    energize_uniform(&mut circuit, 1.0);
    let mut particles = ParticleSet::new();
    let mover = particles.insert(BranchId(0), 9.6);

    let mut engine = FlowEngine::new(unit_config()).unwrap();
    for tick in 1..=3u64 {
        let mut ctx = StepContext::new(&circuit, &mut particles, TickId(tick), 1.0);
        let summary = engine.update(&mut ctx);
        assert_eq!(summary.stranded, 1, "tick {tick} should strand the marker");
    }
    assert_eq!(particles.particle(mover).unwrap().position(), 9.6);
}

#[test]
fn reported_percent_recovers_after_a_spike() {
    let mut circuit = dead_end(10.0);
    let mut particles = ParticleSet::new();
    particles.insert(BranchId(0), 1.0);

    let config = FlowConfig {
        speed_scale: 1.0,
        max_step: 0.5,
        smoothing_window: 4,
        ..FlowConfig::default()
    };
    let mut engine = FlowEngine::new(config).unwrap();

    // One slowed tick (current 2.0 → scale 0.25), then calm ticks.
    energize_uniform(&mut circuit, 2.0);
    let mut ctx = StepContext::new(&circuit, &mut particles, TickId(1), 1.0);
    assert_eq!(engine.update(&mut ctx).scale, 0.25);

    energize_uniform(&mut circuit, 0.1);
    for tick in 2..=10u64 {
        let mut ctx = StepContext::new(&circuit, &mut particles, TickId(tick), 1.0);
        assert_eq!(engine.update(&mut ctx).scale, 1.0);
    }
    // The spike sample has rolled out of the window.
    assert_eq!(engine.time_scale_percent(), 100.0);
}

proptest! {
    /// The bounds invariant holds across random currents, timesteps, seeds,
    /// and marker layouts: after any update, every marker sits within
    /// `[0, length]` of whatever branch it ended on.
    #[test]
    fn markers_stay_within_their_branches(
        current in -5.0f64..5.0,
        dt in 0.001f64..0.1,
        ticks in 1u64..30,
        seed in proptest::num::u64::ANY,
        separation in 0.3f64..2.0,
    ) {
        let mut circuit = parallel_pair();
        energize_uniform(&mut circuit, current);
        let mut particles = seeded_particles(&circuit, separation);
        let config = FlowConfig { seed, ..FlowConfig::default() };
        let mut engine = FlowEngine::new(config).unwrap();

        for tick in 1..=ticks {
            let mut ctx = StepContext::new(&circuit, &mut particles, TickId(tick), dt);
            let summary = engine.update(&mut ctx);
            prop_assert!(summary.scale > 0.0 && summary.scale <= 1.0);
        }

        for (id, p) in particles.iter() {
            let length = circuit.branch(p.branch()).unwrap().length();
            prop_assert!(
                p.position() >= 0.0 && p.position() <= length,
                "particle {} at {} outside [0, {}]",
                id, p.position(), length,
            );
        }
    }

    /// The damping scale follows its closed form exactly.
    #[test]
    fn scale_matches_its_closed_form(
        current in -20.0f64..20.0,
        dt in 0.0f64..2.0,
        max_step in 0.01f64..1.0,
    ) {
        let mut circuit = dead_end(10.0);
        energize_uniform(&mut circuit, current);
        let mut particles = ParticleSet::new();

        let config = FlowConfig { max_step, ..FlowConfig::default() };
        let speed_scale = config.speed_scale;
        let mut engine = FlowEngine::new(config).unwrap();
        let mut ctx = StepContext::new(&circuit, &mut particles, TickId(1), dt);
        let summary = engine.update(&mut ctx);

        let raw_step = current.abs() * speed_scale * dt;
        let expected = if raw_step >= max_step { max_step / raw_step } else { 1.0 };
        prop_assert!((summary.scale - expected).abs() < 1e-12);
    }
}
