//! Reusable circuit fixtures for Galvan tests and benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{dead_end, energize_uniform, parallel_pair, seeded_particles, series_loop};
