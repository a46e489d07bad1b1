//! Galvan: an electron-flow animation engine for interactive circuit
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Galvan sub-crates. For most users, adding `galvan` as a single
//! dependency is sufficient.
//!
//! Galvan animates discrete current markers along a circuit's wires so that
//! visible marker density and speed approximate current magnitude and
//! direction. It solves no circuit physics: an external solver supplies
//! each branch's signed current, and the engine turns that into bounded,
//! evenly spaced marker motion.
//!
//! # Quick start
//!
//! ```rust
//! use galvan::prelude::*;
//!
//! // A two-branch series circuit: j0 --A--> j1 --B--> j2.
//! let mut circuit = CircuitTopology::builder()
//!     .junctions(3)
//!     .branch(JunctionId(0), JunctionId(1), 10.0)
//!     .branch(JunctionId(1), JunctionId(2), 5.0)
//!     .build()
//!     .unwrap();
//! circuit.set_current(BranchId(0), 1.0).unwrap();
//! circuit.set_current(BranchId(1), 1.0).unwrap();
//!
//! // Markers every 0.56 scene units along every branch.
//! let branches: Vec<_> = circuit
//!     .branch_ids()
//!     .map(|id| (id, circuit.branch(id).unwrap().length()))
//!     .collect();
//! let mut particles = seed_uniform(branches, 0.56).unwrap();
//!
//! // Drive one tick.
//! let mut engine = FlowEngine::new(FlowConfig::default()).unwrap();
//! let mut ctx = StepContext::new(&circuit, &mut particles, TickId(1), 0.03);
//! let summary = engine.update(&mut ctx);
//! assert!(summary.scale > 0.0 && summary.scale <= 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `galvan-core` | Handles, the `Particle` record, core traits |
//! | [`circuit`] | `galvan-circuit` | The `Circuit` trait and graph backend |
//! | [`particle`] | `galvan-particle` | Marker storage and layout |
//! | [`flow`] | `galvan-flow` | The propagation engine and its config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handles, the `Particle` record, and core traits (`galvan-core`).
pub use galvan_core as types;

/// The `Circuit` trait, graph backend, and builder (`galvan-circuit`).
pub use galvan_circuit as circuit;

/// Marker storage and uniform layout (`galvan-particle`).
pub use galvan_particle as particle;

/// The propagation engine, config, and smoothing window (`galvan-flow`).
pub use galvan_flow as flow;

/// The types most applications need, importable in one line.
pub mod prelude {
    pub use galvan_circuit::{Circuit, CircuitBuilder, CircuitError, CircuitTopology};
    pub use galvan_core::{
        BranchId, JunctionId, Particle, ParticleAccess, ParticleId, TickId,
    };
    pub use galvan_flow::{ConfigError, FlowConfig, FlowEngine, StepContext, TickSummary};
    pub use galvan_particle::{seed_uniform, ParticleSet};
}
