//! Footer-row collaborator: a 5x7 bitmap glyph font and a layout calculator
//! that turns an optional title into a row-count reservation.
//!
//! This module is not part of the core byte pipeline. [`crate::codec::encode`]
//! only ever consumes a plain `footer_rows` count (the collaborator contract
//! in spec §6); the functions here are how the CLI produces that count and,
//! optionally, a rendered title strip to pass alongside it.

use crate::error::{MakoError, Result};
use crate::palette::ColorMode;

type Glyph = [u8; 7];

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SPACING: u32 = 1;
const MAX_SCALE: u32 = 8;

/// The reserved footer-row count and, when a title was supplied, the glyph
/// scale chosen to fit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLayout {
    pub footer_rows: u32,
    pub font_scale: Option<u32>,
}

/// Picks the largest integer glyph scale (8 down to 1) whose rendered title
/// fits within `width` columns and leaves at least one data row. Fails with
/// [`MakoError::TitleDoesNotFit`] if even scale 1 does not fit.
pub fn compute_footer_layout(width: u32, height: u32, title: Option<&str>) -> Result<FooterLayout> {
    let Some(text) = title else {
        return Ok(FooterLayout { footer_rows: 0, font_scale: None });
    };
    if text.is_empty() {
        return Ok(FooterLayout { footer_rows: 0, font_scale: None });
    }

    let char_count = text.chars().count() as u32;
    for scale in (1..=MAX_SCALE).rev() {
        let cell_width = (GLYPH_WIDTH + GLYPH_SPACING) * scale;
        let text_width = char_count * cell_width;
        let footer_rows = GLYPH_HEIGHT * scale + 2 * scale;
        if text_width <= width && footer_rows < height {
            return Ok(FooterLayout { footer_rows, font_scale: Some(scale) });
        }
    }
    Err(MakoError::TitleDoesNotFit)
}

/// Renders `title` into a `width * footer_rows` pixel strip: background
/// everywhere, glyph foreground pixels where the font says so. Both colors
/// are valid entries of `mode`'s palette, satisfying the codec's
/// "footer pixels must be valid palette colors" requirement.
pub fn render_footer_pixels(
    width: u32,
    footer_rows: u32,
    mode: ColorMode,
    title: &str,
    font_scale: u32,
) -> Result<Vec<(u8, u8, u8)>> {
    let bg_index = mode.white_index();
    let fg_index = if bg_index == 0 { 1 } else { 0 };
    let bg = mode.sample_to_rgb(bg_index)?;
    let fg = mode.sample_to_rgb(fg_index)?;

    let mut pixels = vec![bg; width as usize * footer_rows as usize];
    let cell_width = (GLYPH_WIDTH + GLYPH_SPACING) * font_scale;
    let mut cursor_x = 0u32;

    for ch in title.chars() {
        if let Some(glyph) = glyph_for(ch) {
            for row in 0..GLYPH_HEIGHT {
                let bits = glyph[row as usize];
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    for sy in 0..font_scale {
                        for sx in 0..font_scale {
                            let px = cursor_x + col * font_scale + sx;
                            let py = row * font_scale + sy;
                            if px < width && py < footer_rows {
                                pixels[(py * width + px) as usize] = fg;
                            }
                        }
                    }
                }
            }
        }
        cursor_x += cell_width;
    }

    Ok(pixels)
}

/// Looks up a glyph for an uppercase letter, digit, or space. Unmapped
/// characters (punctuation, non-ASCII) are simply skipped by the renderer.
fn glyph_for(ch: char) -> Option<Glyph> {
    match ch.to_ascii_uppercase() {
        'A' => Some([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => Some([0b01111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b01111]),
        'D' => Some([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
        'E' => Some([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => Some([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => Some([0b01111, 0b10000, 0b10000, 0b10011, 0b10001, 0b10001, 0b01111]),
        'H' => Some([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => Some([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'J' => Some([0b00001, 0b00001, 0b00001, 0b00001, 0b10001, 0b10001, 0b01110]),
        'K' => Some([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => Some([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Some([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Some([0b10001, 0b11001, 0b10101, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => Some([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => Some([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Some([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Some([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Some([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => Some([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => Some([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => Some([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => Some([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => Some([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        '0' => Some([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Some([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => Some([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => Some([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => Some([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Some([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Some([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Some([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Some([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Some([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        ' ' => Some([0; 7]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_title_reserves_no_rows() {
        let layout = compute_footer_layout(100, 100, None).unwrap();
        assert_eq!(layout.footer_rows, 0);
        assert_eq!(layout.font_scale, None);
    }

    #[test]
    fn title_fits_with_some_scale() {
        let layout = compute_footer_layout(200, 300, Some("MAKO")).unwrap();
        assert!(layout.font_scale.unwrap() >= 1);
        assert!(layout.footer_rows > 0 && layout.footer_rows < 300);
    }

    #[test]
    fn title_too_wide_for_tiny_page_is_rejected() {
        let err = compute_footer_layout(4, 8, Some("TOO LONG A TITLE")).unwrap_err();
        assert_eq!(err, MakoError::TitleDoesNotFit);
    }

    #[test]
    fn rendered_footer_pixels_are_all_palette_members() {
        let layout = compute_footer_layout(40, 100, Some("HI")).unwrap();
        let pixels =
            render_footer_pixels(40, layout.footer_rows, ColorMode::RgbCmyWhiteBlack, "HI", layout.font_scale.unwrap())
                .unwrap();
        for px in pixels {
            assert!(ColorMode::RgbCmyWhiteBlack.rgb_to_sample(px).is_ok());
        }
    }
}
