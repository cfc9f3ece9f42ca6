//! Top-level orchestration: `encode`, `decode`, and `self_test`, wiring the
//! dictionary codec, frame builder/parser, palette, and page orchestration
//! into the externally-facing operations of spec §6.

use crate::dictionary;
use crate::error::{MakoError, Result};
use crate::footer;
use crate::frame;
use crate::page::{self, PageGeometry, PageMetadata};
use crate::palette::ColorMode;
use crate::ppm;
use crate::rng;

pub const COMMENT_COLOR_CHANNELS: &str = "MAKOCODE_COLOR_CHANNELS";
pub const COMMENT_BITS: &str = "MAKOCODE_BITS";
pub const COMMENT_PAGE_COUNT: &str = "MAKOCODE_PAGE_COUNT";
pub const COMMENT_PAGE_INDEX: &str = "MAKOCODE_PAGE_INDEX";
pub const COMMENT_PAGE_BITS: &str = "MAKOCODE_PAGE_BITS";
pub const COMMENT_PAGE_WIDTH_PX: &str = "MAKOCODE_PAGE_WIDTH_PX";
pub const COMMENT_PAGE_HEIGHT_PX: &str = "MAKOCODE_PAGE_HEIGHT_PX";
pub const COMMENT_FOOTER_ROWS: &str = "MAKOCODE_FOOTER_ROWS";
pub const COMMENT_TITLE_FONT: &str = "MAKOCODE_TITLE_FONT";

/// Geometry used by [`self_test`], matching the small page size the
/// reference test harness uses so the binary search for a two-page payload
/// stays cheap.
const SELF_TEST_WIDTH: u32 = 64;
const SELF_TEST_HEIGHT: u32 = 64;

/// Encodes `payload` into one or more PPM (P3) page buffers under `mode`
/// and `geometry`. The codec only ever fills reserved footer rows with the
/// mode's background color; rendering a title into them is the caller's
/// job (see [`encode_with_title`]).
pub fn encode(payload: &[u8], mode: ColorMode, geometry: PageGeometry, title_font: Option<u32>) -> Result<Vec<Vec<u8>>> {
    build_pages(payload, mode, geometry, None, title_font)
}

/// Convenience wrapper used by the CLI: computes a footer layout for
/// `title`, renders it, and bakes the rendered strip into every page.
pub fn encode_with_title(
    payload: &[u8],
    mode: ColorMode,
    width: u32,
    height: u32,
    title: Option<&str>,
) -> Result<Vec<Vec<u8>>> {
    let layout = footer::compute_footer_layout(width, height, title)?;
    let geometry = PageGeometry::new(width, height, layout.footer_rows);

    let footer_pixels = match (title, layout.font_scale) {
        (Some(text), Some(scale)) if layout.footer_rows > 0 => {
            Some(footer::render_footer_pixels(width, layout.footer_rows, mode, text, scale)?)
        }
        _ => None,
    };

    build_pages(payload, mode, geometry, footer_pixels.as_deref(), layout.font_scale)
}

fn build_pages(
    payload: &[u8],
    mode: ColorMode,
    geometry: PageGeometry,
    footer_pixels: Option<&[(u8, u8, u8)]>,
    title_font: Option<u32>,
) -> Result<Vec<Vec<u8>>> {
    let compressed = dictionary::compress(payload)?;
    let compressed_bit_len = (compressed.len() as u64) * 8;
    let frame = frame::build_frame(&compressed, compressed_bit_len, mode)?;
    let cap = geometry.capacity_bits(mode)?;
    let n = page::page_count(frame.bit_count, cap);

    let mut pages = Vec::with_capacity(n as usize);
    for k in 0..n {
        let bits = page::page_bits(&frame.bytes, frame.bit_count, k, cap);
        let pixels = bits_to_pixels(&bits, mode, &geometry, footer_pixels)?;

        let mut comments = vec![
            (COMMENT_COLOR_CHANNELS, mode.as_u8() as u64),
            (COMMENT_BITS, compressed_bit_len),
            (COMMENT_PAGE_COUNT, n),
            (COMMENT_PAGE_INDEX, k + 1),
            (COMMENT_PAGE_BITS, cap),
            (COMMENT_PAGE_WIDTH_PX, geometry.width as u64),
            (COMMENT_PAGE_HEIGHT_PX, geometry.height as u64),
        ];
        if geometry.footer_rows > 0 {
            comments.push((COMMENT_FOOTER_ROWS, geometry.footer_rows as u64));
        }
        if let Some(font) = title_font {
            comments.push((COMMENT_TITLE_FONT, font as u64));
        }

        pages.push(ppm::write_ppm(geometry.width, geometry.height, &comments, &pixels)?);
    }
    Ok(pages)
}

fn bits_to_pixels(
    bits: &[u8],
    mode: ColorMode,
    geometry: &PageGeometry,
    footer_pixels: Option<&[(u8, u8, u8)]>,
) -> Result<Vec<(u8, u8, u8)>> {
    let sample_bits = mode.sample_bits();
    let data_rows = geometry.data_rows()?;
    let data_pixel_count = geometry.width as usize * data_rows as usize;

    let mut pixels = Vec::with_capacity(geometry.width as usize * geometry.height as usize);
    for p in 0..data_pixel_count {
        let mut sample: u16 = 0;
        for i in 0..sample_bits {
            let bit = bits[p * sample_bits as usize + i as usize];
            sample |= (bit as u16) << i;
        }
        pixels.push(mode.sample_to_rgb(sample)?);
    }

    match footer_pixels {
        Some(rendered) => pixels.extend_from_slice(rendered),
        None => {
            let bg = mode.sample_to_rgb(mode.white_index())?;
            pixels.resize(geometry.width as usize * geometry.height as usize, bg);
        }
    }
    Ok(pixels)
}

/// Decodes an ordered list of PPM page buffers back into the original
/// payload. `mode_override`, when given, always wins over any
/// `MAKOCODE_COLOR_CHANNELS` comment.
pub fn decode(pages: &[Vec<u8>], mode_override: Option<ColorMode>) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(MakoError::NoPagesSupplied);
    }

    let mut acc_meta: Option<PageMetadata> = None;
    let mut declared_indices: Vec<Option<u64>> = Vec::with_capacity(pages.len());
    let mut frame_bits: Vec<u8> = Vec::new();

    for raw in pages {
        let parsed = ppm::read_ppm(raw)?;

        let color_mode = match mode_override {
            Some(m) => m,
            None => {
                let value = parsed
                    .comments
                    .get(COMMENT_COLOR_CHANNELS)
                    .copied()
                    .ok_or(MakoError::InvalidColorMode { value: 0 })?;
                ColorMode::from_u8(value as u8)?
            }
        };

        let footer_rows = parsed.comments.get(COMMENT_FOOTER_ROWS).copied().unwrap_or(0) as u32;
        let data_rows = parsed.height.checked_sub(footer_rows).ok_or(MakoError::ZeroDimensionPage)?;
        let data_pixel_count = parsed.width as usize * data_rows as usize;
        let sample_bits = color_mode.sample_bits();

        let mut page_bits = Vec::with_capacity(data_pixel_count * sample_bits as usize);
        for (idx, &rgb) in parsed.pixels.iter().enumerate() {
            // Every pixel, footer rows included, must be a valid palette
            // color (spec §4.6); only data-area samples feed the bitstream.
            let sample = color_mode.rgb_to_sample(rgb)?;
            if idx < data_pixel_count {
                for i in 0..sample_bits {
                    page_bits.push(((sample >> i) & 1) as u8);
                }
            }
        }

        let cap = PageGeometry::new(parsed.width, parsed.height, footer_rows).capacity_bits(color_mode)?;
        if page_bits.len() as u64 != cap {
            return Err(MakoError::MetadataConflict { field: "page_bits" });
        }

        let metadata = PageMetadata {
            color_mode,
            payload_bit_count: parsed.comments.get(COMMENT_BITS).copied(),
            page_count: parsed.comments.get(COMMENT_PAGE_COUNT).copied(),
            cap,
            width: parsed.width,
            height: parsed.height,
            footer_rows,
        };
        page::merge_metadata(&mut acc_meta, metadata)?;
        declared_indices.push(parsed.comments.get(COMMENT_PAGE_INDEX).copied());

        frame_bits.extend(page_bits);
    }

    // Order sensitivity (spec §8 property 8): when every page declares an
    // index, it must match the caller's supplied order exactly.
    if declared_indices.iter().all(Option::is_some) {
        for (i, idx) in declared_indices.iter().enumerate() {
            let expected = (i as u64) + 1;
            let found = idx.expect("checked above");
            if found != expected {
                return Err(MakoError::PageOrderViolation { expected_index: expected, found_index: found });
            }
        }
    }

    let meta = acc_meta.expect("loop ran at least once: pages is non-empty");
    if let Some(declared_count) = meta.page_count {
        if declared_count != pages.len() as u64 {
            return Err(MakoError::MetadataConflict { field: "page_count" });
        }
    }

    let frame_bytes = page::pack_bits(&frame_bits);
    let frame_bit_count = frame_bits.len() as u64;
    let parsed_frame = frame::parse_frame(&frame_bytes, frame_bit_count, meta.color_mode, meta.payload_bit_count)?;
    dictionary::decompress(&parsed_frame.compressed_bytes, parsed_frame.compressed_bit_len)
}

/// Builds a deterministic payload sized to produce exactly two pages at a
/// small fixed page size, then verifies that encode -> decode round-trips
/// it byte-for-byte.
pub fn self_test(mode: ColorMode) -> Result<()> {
    let geometry = PageGeometry::new(SELF_TEST_WIDTH, SELF_TEST_HEIGHT, 0);
    let cap = geometry.capacity_bits(mode)?;

    let payload_len = find_two_page_payload_len(mode, cap)?;
    let seed = ((mode.as_u8() as u64) << 32) | payload_len as u64;
    let payload = rng::generate(seed, payload_len);

    let pages = encode(&payload, mode, geometry, None)?;
    if pages.len() != 2 {
        return Err(MakoError::MetadataConflict { field: "page_count" });
    }

    let decoded = decode(&pages, Some(mode))?;
    if decoded != payload {
        return Err(MakoError::MetadataConflict { field: "payload" });
    }
    Ok(())
}

/// Exponential doubling, then binary search, for the smallest payload
/// length whose frame bit count exceeds one page's capacity but not two.
/// Mirrors the reference test harness's two-page construction strategy.
fn find_two_page_payload_len(mode: ColorMode, cap: u64) -> Result<usize> {
    let frame_bits_for = |len: usize| -> Result<u64> {
        let seed = ((mode.as_u8() as u64) << 32) | len as u64;
        let payload = rng::generate(seed, len);
        let compressed = dictionary::compress(&payload)?;
        let compressed_bit_len = (compressed.len() as u64) * 8;
        Ok(frame::build_frame(&compressed, compressed_bit_len, mode)?.bit_count)
    };

    let max_payload_size: usize = (((cap as usize) * 2) / 8 + 1024).clamp(32, 1 << 22);

    let mut low = 0usize;
    let mut high = 1usize;
    let mut high_bits = frame_bits_for(high)?;
    while high_bits <= cap {
        low = high;
        if high >= max_payload_size {
            return Err(MakoError::MetadataConflict { field: "two_page_payload" });
        }
        high = (high * 2).min(max_payload_size);
        if high == low {
            high += 1;
        }
        high_bits = frame_bits_for(high)?;
    }

    let mut left = if low == 0 { 1 } else { low + 1 };
    let right_start = high;
    let mut right = right_start;
    let mut best = high;
    let mut best_bits = high_bits;
    while left <= right {
        let mid = left + (right - left) / 2;
        let mid_bits = frame_bits_for(mid)?;
        if mid_bits > cap {
            best = mid;
            best_bits = mid_bits;
            if mid == 0 || mid == left {
                break;
            }
            right = mid - 1;
        } else {
            left = mid + 1;
        }
    }

    if best_bits <= cap || best_bits > cap * 2 {
        return Err(MakoError::MetadataConflict { field: "two_page_payload" });
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_test_passes_for_every_mode() {
        for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
            self_test(mode).unwrap();
        }
    }

    #[test]
    fn empty_payload_round_trips_through_one_page() {
        let geometry = PageGeometry::new(8, 8, 0);
        let pages = encode(&[], ColorMode::Gray, geometry, None).unwrap();
        assert_eq!(pages.len(), 1);
        let decoded = decode(&pages, Some(ColorMode::Gray)).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn single_byte_round_trips() {
        let geometry = PageGeometry::new(16, 16, 0);
        let pages = encode(&[0x41], ColorMode::Gray, geometry, None).unwrap();
        assert_eq!(pages.len(), 1);
        let decoded = decode(&pages, Some(ColorMode::Gray)).unwrap();
        assert_eq!(decoded, vec![0x41]);
    }

    #[test]
    fn decode_with_no_pages_fails() {
        let err = decode(&[], None).unwrap_err();
        assert_eq!(err, MakoError::NoPagesSupplied);
    }

    #[test]
    fn page_order_violation_is_rejected() {
        let geometry = PageGeometry::new(32, 32, 0);
        let payload = rng::generate(0xC0FFEE, 4096);
        let pages = encode(&payload, ColorMode::RgbCmyWhiteBlack, geometry, None).unwrap();
        assert_eq!(pages.len(), 2);
        let reversed = vec![pages[1].clone(), pages[0].clone()];
        let err = decode(&reversed, Some(ColorMode::RgbCmyWhiteBlack)).unwrap_err();
        assert!(matches!(err, MakoError::PageOrderViolation { .. }));
    }
}
