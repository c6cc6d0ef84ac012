// zscope-stats/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod statistics;
pub mod scoring;

/// Common type definitions
pub type ZScore = f64;

/// Smallest sample size for which a Bessel-corrected deviation exists.
pub const MIN_SAMPLE_SIZE: usize = 2;
