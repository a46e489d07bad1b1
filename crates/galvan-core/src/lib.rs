//! Core types and traits for the Galvan circuit-animation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions used throughout the Galvan workspace: typed
//! entity handles, the [`Particle`] record, the [`ParticleAccess`]
//! collaborator trait, and the propagation error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod particle;
pub mod traits;

pub use error::PropagateError;
pub use id::{BranchId, BranchList, JunctionId, ParticleId, TickId};
pub use particle::Particle;
pub use traits::ParticleAccess;
