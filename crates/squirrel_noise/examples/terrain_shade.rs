//! Renders a 2D noise field as ASCII shades.
//!
//! Run twice with the same seed and the output is identical; change the
//! seed and the whole field re-keys.
//!
//! ```sh
//! cargo run --example terrain_shade
//! ```

use squirrel_noise::noise_2d_f32;

const SHADES: &[u8] = b" .:-=+*#%@";
const WIDTH: i32 = 80;
const HEIGHT: i32 = 24;

fn main() {
  let seed = std::env::args()
    .nth(1)
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(7u32);

  for y in 0..HEIGHT {
    let mut line = String::with_capacity(WIDTH as usize);
    for x in 0..WIDTH {
      let v = noise_2d_f32(x, y, seed);
      let idx = (v * SHADES.len() as f32) as usize;
      line.push(SHADES[idx.min(SHADES.len() - 1)] as char);
    }
    println!("{line}");
  }
}
