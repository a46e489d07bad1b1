//! Circuit graph topology for Galvan simulations.
//!
//! This crate defines the [`Circuit`] trait, the graph surface through
//! which the propagation engine reads branch currents and enumerates the
//! branches incident to a junction, along with the arena-indexed reference
//! backend [`CircuitTopology`] and its builder.
//!
//! The engine never owns the graph. An external solver computes each
//! branch's signed current and writes it back through
//! [`CircuitTopology::set_current`] between ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod branch;
pub mod circuit;
pub mod error;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use branch::Branch;
pub use circuit::Circuit;
pub use error::CircuitError;
pub use topology::{CircuitBuilder, CircuitTopology};
