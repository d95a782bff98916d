//! Deterministic noise over 1-4 dimensional integer lattice positions.
//!
//! Raw bit noise, not gradient noise: each lattice point maps to an
//! independent pseudo-random value. Positions participate through their
//! two's-complement bit pattern, so negative axes are ordinary inputs and
//! every overflow along the way is defined wraparound.
//!
//! # Naming Convention
//!
//! `noise_{dims}d_{output}{bits}`
//!
//! - **dims**: number of position axes (1-4), folded in x, y, z, t order
//! - **output**: `u` = raw unsigned bits, `f` = float in `[0, 1)`,
//!   `sf` = signed float in `[-1, 1)`
//! - **bits**: `32` (canonical family) or `64` (independently tuned family)
//!
//! # Examples
//!
//! - `noise_1d_u32` - 1 axis in, raw u32 out
//! - `noise_3d_sf32` - 3 axes in, f32 in [-1, 1) out
//! - `noise_4d_u64` - 4 axes in, raw u64 out
//!
//! Higher dimensions are the 1D mixer applied to a pre-folded position:
//! each extra axis is weighted by a fixed odd constant and added in, so
//! `noise_2d_u32(x, 0, s) == noise_1d_u32(x, s)`.

use crate::convert::{to_signed_f32, to_signed_f64, to_unit_f32, to_unit_f64};

// Ladder constants for the 32-bit family. Fixed forever: changing any
// constant or shift distance re-keys every field this family has ever
// generated, and is a breaking change.
const NOISE32_1: u32 = 0xd2a8_0a3f;
const NOISE32_2: u32 = 0xa884_f197;
const NOISE32_3: u32 = 0x6c73_6f4b;
const NOISE32_4: u32 = 0xb79f_3abb;
const NOISE32_5: u32 = 0x1b56_c4f5;

// Odd primes weighting the y/z/t axes before the 1D mix.
const FOLD32_Y: u32 = 198_491_317;
const FOLD32_Z: u32 = 6_542_989;
const FOLD32_T: u32 = 357_239;

// Ladder constants for the 64-bit family. Tuned separately; this is not a
// widening of the 32-bit ladder and produces unrelated fields.
const NOISE64_1: u64 = 0xff51_afd7_ed55_8ccd;
const NOISE64_2: u64 = 0x9e37_79b9_7f4a_7c15;
const NOISE64_3: u64 = 0xbf58_476d_1ce4_e5b9;
const NOISE64_4: u64 = 0xc4ce_b9fe_1a85_ec53;
const NOISE64_5: u64 = 0x94d0_49bb_1331_11eb;

const FOLD64_Y: u64 = 0x2545_f491_4f6c_dd1d;
const FOLD64_Z: u64 = 0x6eed_0e9d_a4d9_4a4f;
const FOLD64_T: u64 = 0xbb2e_fcec_3c39_611d;

/// Five-round multiply/add/xorshift ladder over a folded 32-bit position.
#[inline]
fn mix32(position: u32, seed: u32) -> u32 {
  let mut m = position.wrapping_mul(NOISE32_1);
  m = m.wrapping_add(seed);
  m ^= m >> 9;
  m = m.wrapping_add(NOISE32_2);
  m ^= m >> 11;
  m = m.wrapping_mul(NOISE32_3);
  m ^= m >> 13;
  m = m.wrapping_add(NOISE32_4);
  m ^= m >> 15;
  m = m.wrapping_mul(NOISE32_5);
  m ^= m >> 17;
  m
}

/// Five-round multiply/add/xorshift ladder over a folded 64-bit position.
#[inline]
fn mix64(position: u64, seed: u64) -> u64 {
  let mut m = position.wrapping_mul(NOISE64_1);
  m = m.wrapping_add(seed);
  m ^= m >> 33;
  m = m.wrapping_add(NOISE64_2);
  m ^= m >> 29;
  m = m.wrapping_mul(NOISE64_3);
  m ^= m >> 32;
  m = m.wrapping_add(NOISE64_4);
  m ^= m >> 30;
  m = m.wrapping_mul(NOISE64_5);
  m ^= m >> 31;
  m
}

#[inline]
fn fold1_32(x: i32) -> u32 {
  x as u32
}

#[inline]
fn fold2_32(x: i32, y: i32) -> u32 {
  fold1_32(x).wrapping_add(FOLD32_Y.wrapping_mul(y as u32))
}

#[inline]
fn fold3_32(x: i32, y: i32, z: i32) -> u32 {
  fold2_32(x, y).wrapping_add(FOLD32_Z.wrapping_mul(z as u32))
}

#[inline]
fn fold4_32(x: i32, y: i32, z: i32, t: i32) -> u32 {
  fold3_32(x, y, z).wrapping_add(FOLD32_T.wrapping_mul(t as u32))
}

#[inline]
fn fold1_64(x: i64) -> u64 {
  x as u64
}

#[inline]
fn fold2_64(x: i64, y: i64) -> u64 {
  fold1_64(x).wrapping_add(FOLD64_Y.wrapping_mul(y as u64))
}

#[inline]
fn fold3_64(x: i64, y: i64, z: i64) -> u64 {
  fold2_64(x, y).wrapping_add(FOLD64_Z.wrapping_mul(z as u64))
}

#[inline]
fn fold4_64(x: i64, y: i64, z: i64, t: i64) -> u64 {
  fold3_64(x, y, z).wrapping_add(FOLD64_T.wrapping_mul(t as u64))
}

/// Generate the raw/unit/signed variants for one axis count and bit width.
macro_rules! make_noise {
  ($dims:tt, $bits:tt, $int:ty, $uint:ty, $mix:ident, $fold:ident; $($axis:ident),+) => {
    paste::paste! {
      #[inline]
      pub fn [<noise_ $dims d_u $bits>]($($axis: $int,)+ seed: $uint) -> $uint {
        $mix($fold($($axis),+), seed)
      }

      #[inline]
      pub fn [<noise_ $dims d_f $bits>]($($axis: $int,)+ seed: $uint) -> [<f $bits>] {
        [<to_unit_f $bits>]($mix($fold($($axis),+), seed))
      }

      #[inline]
      pub fn [<noise_ $dims d_sf $bits>]($($axis: $int,)+ seed: $uint) -> [<f $bits>] {
        [<to_signed_f $bits>]($mix($fold($($axis),+), seed))
      }
    }
  };
}

make_noise!(1, 32, i32, u32, mix32, fold1_32; x);
make_noise!(2, 32, i32, u32, mix32, fold2_32; x, y);
make_noise!(3, 32, i32, u32, mix32, fold3_32; x, y, z);
make_noise!(4, 32, i32, u32, mix32, fold4_32; x, y, z, t);

make_noise!(1, 64, i64, u64, mix64, fold1_64; x);
make_noise!(2, 64, i64, u64, mix64, fold2_64; x, y);
make_noise!(3, 64, i64, u64, mix64, fold3_64; x, y, z);
make_noise!(4, 64, i64, u64, mix64, fold4_64; x, y, z, t);
