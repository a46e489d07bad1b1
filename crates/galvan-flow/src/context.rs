//! Per-tick execution context handed to the engine.

use galvan_circuit::Circuit;
use galvan_core::{ParticleAccess, TickId};

/// Everything one tick needs: the circuit graph, the marker store, the tick
/// id, and the elapsed simulation time.
///
/// Uses dynamic dispatch (`&dyn Circuit`, `&mut dyn ParticleAccess`) so the
/// engine never depends on a concrete backend and tests can substitute
/// purpose-built collaborators. The external clock constructs one context
/// per tick and passes it to [`FlowEngine::update`](crate::FlowEngine::update).
pub struct StepContext<'a> {
    circuit: &'a dyn Circuit,
    particles: &'a mut dyn ParticleAccess,
    tick: TickId,
    dt: f64,
}

impl<'a> StepContext<'a> {
    /// Construct a context for one tick.
    ///
    /// `dt` is elapsed simulation time in seconds and must be non-negative;
    /// a zero `dt` is legal and leaves every marker in place.
    pub fn new(
        circuit: &'a dyn Circuit,
        particles: &'a mut dyn ParticleAccess,
        tick: TickId,
        dt: f64,
    ) -> Self {
        debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
        Self {
            circuit,
            particles,
            tick,
            dt,
        }
    }

    /// The circuit graph.
    ///
    /// Returned at the context's full lifetime so branch borrows can
    /// coexist with later mutable particle access.
    pub fn circuit(&self) -> &'a dyn Circuit {
        self.circuit
    }

    /// Read-only marker access.
    pub fn particles(&self) -> &dyn ParticleAccess {
        &*self.particles
    }

    /// Mutable marker access.
    pub fn particles_mut(&mut self) -> &mut dyn ParticleAccess {
        self.particles
    }

    /// Current tick id.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Elapsed simulation time for this tick, in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galvan_circuit::CircuitTopology;
    use galvan_core::{BranchId, JunctionId};
    use galvan_particle::ParticleSet;

    #[test]
    fn context_exposes_collaborators() {
        let circuit = CircuitTopology::builder()
            .junctions(2)
            .branch(JunctionId(0), JunctionId(1), 3.0)
            .build()
            .unwrap();
        let mut particles = ParticleSet::new();
        particles.insert(BranchId(0), 1.0);

        let mut ctx = StepContext::new(&circuit, &mut particles, TickId(7), 0.02);
        assert_eq!(ctx.tick(), TickId(7));
        assert_eq!(ctx.dt(), 0.02);
        assert_eq!(ctx.circuit().branch_count(), 1);
        assert_eq!(ctx.particles().len(), 1);

        ctx.particles_mut().set_position(galvan_core::ParticleId(0), 2.0);
        assert_eq!(ctx.particles().position_of(galvan_core::ParticleId(0)), 2.0);
    }
}
