//! Page geometry, capacity math, and the metadata consistency checks that
//! must hold across every page of one encode.

use crate::bitio::BitReader;
use crate::error::{MakoError, Result};
use crate::palette::ColorMode;

/// Width, height, and footer-row reservation of one output page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub footer_rows: u32,
}

impl PageGeometry {
    /// A4 at 300 DPI, the codec's default when the caller does not specify.
    pub const DEFAULT_WIDTH: u32 = 2480;
    pub const DEFAULT_HEIGHT: u32 = 3508;

    pub fn new(width: u32, height: u32, footer_rows: u32) -> Self {
        Self { width, height, footer_rows }
    }

    pub fn default_geometry() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, 0)
    }

    /// Rows available for payload bits: `height - footer_rows`.
    pub fn data_rows(&self) -> Result<u32> {
        if self.width == 0 || self.height == 0 {
            return Err(MakoError::ZeroDimensionPage);
        }
        self.height.checked_sub(self.footer_rows).filter(|&rows| rows > 0).ok_or(MakoError::ZeroDimensionPage)
    }

    /// Bits per page: `width * data_rows * sample_bits(mode)`.
    pub fn capacity_bits(&self, mode: ColorMode) -> Result<u64> {
        let data_rows = self.data_rows()?;
        Ok(self.width as u64 * data_rows as u64 * mode.sample_bits() as u64)
    }
}

/// `ceil(frame_bits / cap)`, at least 1 even when `frame_bits == 0`.
pub fn page_count(frame_bits: u64, cap: u64) -> u64 {
    if frame_bits == 0 || cap == 0 {
        return 1;
    }
    (frame_bits + cap - 1) / cap
}

/// Extracts exactly `cap` bits (one `u8` 0/1 value each) starting at
/// `page_index0 * cap` from `frame`. Reads past `frame_bit_count` return 0,
/// which is exactly the zero-filled tail the last page needs.
pub fn page_bits(frame: &[u8], frame_bit_count: u64, page_index0: u64, cap: u64) -> Vec<u8> {
    let mut reader = BitReader::new(frame, frame_bit_count);
    reader.seek(page_index0 * cap);
    (0..cap).map(|_| reader.read_bit()).collect()
}

/// Packs a slice of 0/1 bit values into bytes, LSB-first, zero-padding the
/// final byte.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit & 1 != 0 {
            out[i / 8] |= 1 << (i % 8);
        }
    }
    out
}

/// Fields that must be identical across every page of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub color_mode: ColorMode,
    pub payload_bit_count: Option<u64>,
    pub page_count: Option<u64>,
    pub cap: u64,
    pub width: u32,
    pub height: u32,
    pub footer_rows: u32,
}

/// Folds `incoming` into `acc`, failing on any field disagreement. The
/// first call establishes `acc`.
pub fn merge_metadata(acc: &mut Option<PageMetadata>, incoming: PageMetadata) -> Result<()> {
    match acc {
        None => {
            *acc = Some(incoming);
            Ok(())
        }
        Some(existing) => {
            if existing.color_mode != incoming.color_mode {
                return Err(MakoError::MetadataConflict { field: "color_mode" });
            }
            if existing.cap != incoming.cap {
                return Err(MakoError::MetadataConflict { field: "page_bits" });
            }
            if existing.width != incoming.width || existing.height != incoming.height {
                return Err(MakoError::MetadataConflict { field: "page_dimensions" });
            }
            if existing.footer_rows != incoming.footer_rows {
                return Err(MakoError::MetadataConflict { field: "footer_rows" });
            }
            merge_optional(&mut existing.payload_bit_count, incoming.payload_bit_count, "payload_bit_count")?;
            merge_optional(&mut existing.page_count, incoming.page_count, "page_count")?;
            Ok(())
        }
    }
}

fn merge_optional(existing: &mut Option<u64>, incoming: Option<u64>, field: &'static str) -> Result<()> {
    match (*existing, incoming) {
        (Some(a), Some(b)) if a != b => Err(MakoError::MetadataConflict { field }),
        (None, Some(_)) => {
            *existing = incoming;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_at_least_one() {
        assert_eq!(page_count(0, 100), 1);
        assert_eq!(page_count(100, 100), 1);
        assert_eq!(page_count(101, 100), 2);
        assert_eq!(page_count(200, 100), 2);
    }

    #[test]
    fn capacity_bits_matches_formula() {
        let geom = PageGeometry::new(32, 32, 0);
        assert_eq!(geom.capacity_bits(ColorMode::RgbCmyWhiteBlack).unwrap(), 32 * 32 * 3);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let geom = PageGeometry::new(0, 10, 0);
        assert!(geom.capacity_bits(ColorMode::Gray).is_err());
        let geom = PageGeometry::new(10, 4, 4);
        assert!(geom.capacity_bits(ColorMode::Gray).is_err());
    }

    #[test]
    fn metadata_conflict_is_detected() {
        let mut acc = None;
        let a = PageMetadata {
            color_mode: ColorMode::Gray,
            payload_bit_count: Some(100),
            page_count: Some(2),
            cap: 256,
            width: 16,
            height: 16,
            footer_rows: 0,
        };
        merge_metadata(&mut acc, a).unwrap();
        let mut b = a;
        b.color_mode = ColorMode::CmyWhite;
        let err = merge_metadata(&mut acc, b).unwrap_err();
        assert_eq!(err, MakoError::MetadataConflict { field: "color_mode" });
    }
}
