//! Electron-flow propagation engine.
//!
//! [`FlowEngine`] animates discrete current markers along a circuit's
//! branches so that visible marker density and speed approximate current
//! magnitude and direction. It solves no physics of its own: an external
//! solver supplies each branch's signed current, and the engine turns that
//! into bounded per-tick marker motion.
//!
//! Each [`update`](FlowEngine::update) performs three phases:
//!
//! 1. **Scale** — derive a global damping factor in `(0, 1]` that caps the
//!    largest possible marker displacement this tick, so current spikes
//!    never teleport markers across the scene.
//! 2. **Propagate** — advance every marker along its branch; a marker that
//!    runs off an end crosses the junction onto the least-crowded branch
//!    whose current flows away from it.
//! 3. **Equalize** — relax marker spacing toward uniformity, visiting the
//!    markers in a freshly shuffled order each round to avoid directional
//!    artefacts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod engine;
pub mod smoothing;

pub use config::{ConfigError, FlowConfig};
pub use context::StepContext;
pub use engine::{FlowEngine, TickSummary};
pub use smoothing::RollingAverage;
