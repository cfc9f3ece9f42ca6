use std::fmt::Write as _;

use crate::error::Result;

/// Writes a plain-text P3 PPM: magic, comment lines, dimensions, maxval 255,
/// then one `R G B` triplet per line in row-major order.
pub fn write_ppm(width: u32, height: u32, comments: &[(&str, u64)], pixels: &[(u8, u8, u8)]) -> Result<Vec<u8>> {
    debug_assert_eq!(pixels.len(), width as usize * height as usize);

    let mut out = String::with_capacity(pixels.len() * 12 + 64);
    out.push_str("P3\n");
    for (key, value) in comments {
        let _ = writeln!(out, "# {key} {value}");
    }
    let _ = writeln!(out, "{width} {height}");
    out.push_str("255\n");
    for &(r, g, b) in pixels {
        let _ = writeln!(out, "{r} {g} {b}");
    }
    Ok(out.into_bytes())
}
