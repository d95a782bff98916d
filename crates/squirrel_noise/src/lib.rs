//! Deterministic lattice noise and seedable RNG primitives.
//!
//! Maps an integer lattice position (1-4 axes) plus an unsigned seed to a
//! pseudo-random integer of the same width, using only wrapping integer
//! arithmetic. Same inputs produce the same output on every platform, and
//! no state is read or written anywhere, so every function is safe to call
//! from any number of threads. Flipping a single input bit flips about
//! half of the output bits.
//!
//! Two independently tuned families are provided: the canonical 32-bit
//! family and a 64-bit family with its own constants. See [`noise`] for
//! the function grid and naming convention, [`convert`] for the float
//! mappings, and [`rng`] for sequential draws.

#![forbid(unsafe_code)]

pub mod convert;
pub mod noise;
pub mod rng;

pub use convert::{to_signed_f32, to_signed_f64, to_unit_f32, to_unit_f64};
pub use noise::{
  noise_1d_f32, noise_1d_f64, noise_1d_sf32, noise_1d_sf64, noise_1d_u32, noise_1d_u64,
  noise_2d_f32, noise_2d_f64, noise_2d_sf32, noise_2d_sf64, noise_2d_u32, noise_2d_u64,
  noise_3d_f32, noise_3d_f64, noise_3d_sf32, noise_3d_sf64, noise_3d_u32, noise_3d_u64,
  noise_4d_f32, noise_4d_f64, noise_4d_sf32, noise_4d_sf64, noise_4d_u32, noise_4d_u64,
};
pub use rng::NoiseRng;
