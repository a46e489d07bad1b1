//! Current-marker storage for Galvan simulations.
//!
//! [`ParticleSet`] is the reference implementation of the
//! [`ParticleAccess`](galvan_core::ParticleAccess) collaborator: a flat
//! particle arena plus a per-branch occupancy index that keeps neighbor and
//! density queries cheap. [`layout`] seeds a set with uniformly spaced
//! markers so a freshly built circuit starts visually steady.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod layout;
pub mod set;

pub use layout::seed_uniform;
pub use set::ParticleSet;
