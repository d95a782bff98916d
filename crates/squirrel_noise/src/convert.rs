//! Raw noise bits to float interval mappings.

/// Convert raw bits to f32 in [0.0, 1.0) range.
#[inline]
pub fn to_unit_f32(bits: u32) -> f32 {
  // top 23 bits, scaled; never rounds up to 1.0
  (bits >> 9) as f32 * (1.0 / (1u32 << 23) as f32)
}

/// Convert raw bits to f32 in [-1.0, 1.0) range.
#[inline]
pub fn to_signed_f32(bits: u32) -> f32 {
  2.0 * to_unit_f32(bits) - 1.0
}

/// Convert raw bits to f64 in [0.0, 1.0) range.
#[inline]
pub fn to_unit_f64(bits: u64) -> f64 {
  // top 52 bits, scaled; never rounds up to 1.0
  (bits >> 12) as f64 * (1.0 / (1u64 << 52) as f64)
}

/// Convert raw bits to f64 in [-1.0, 1.0) range.
#[inline]
pub fn to_signed_f64(bits: u64) -> f64 {
  2.0 * to_unit_f64(bits) - 1.0
}
