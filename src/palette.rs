//! Color modes: sample width, the fixed palette table per mode, and
//! bidirectional color lookup.

use crate::error::{MakoError, Result};

/// One of the three supported pixel-packing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 2-entry grayscale palette, 1 sample-bit per pixel.
    Gray,
    /// 4-entry CMY+white palette, 2 sample-bits per pixel.
    CmyWhite,
    /// 8-entry RGB+CMY+white+black palette, 3 sample-bits per pixel.
    RgbCmyWhiteBlack,
}

const PALETTE_GRAY: [(u8, u8, u8); 2] = [(0, 0, 0), (255, 255, 255)];
const PALETTE_CMYW: [(u8, u8, u8); 4] = [(255, 255, 255), (0, 255, 255), (255, 0, 255), (255, 255, 0)];
const PALETTE_RGB_CMY_WB: [(u8, u8, u8); 8] = [
    (255, 255, 255),
    (0, 0, 0),
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (0, 255, 255),
    (255, 0, 255),
    (255, 255, 0),
];

impl ColorMode {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(ColorMode::Gray),
            2 => Ok(ColorMode::CmyWhite),
            3 => Ok(ColorMode::RgbCmyWhiteBlack),
            other => Err(MakoError::InvalidColorMode { value: other }),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            ColorMode::Gray => 1,
            ColorMode::CmyWhite => 2,
            ColorMode::RgbCmyWhiteBlack => 3,
        }
    }

    /// Sample-bits per pixel: 1, 2, or 3.
    pub fn sample_bits(self) -> u32 {
        match self {
            ColorMode::Gray => 1,
            ColorMode::CmyWhite => 2,
            ColorMode::RgbCmyWhiteBlack => 3,
        }
    }

    /// Always 1 in this codec; kept as a named accessor to mirror the
    /// conceptual `samples_per_pixel` of the data model.
    pub fn samples_per_pixel(self) -> u32 {
        1
    }

    pub fn palette(self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorMode::Gray => &PALETTE_GRAY,
            ColorMode::CmyWhite => &PALETTE_CMYW,
            ColorMode::RgbCmyWhiteBlack => &PALETTE_RGB_CMY_WB,
        }
    }

    /// The palette index used as a footer/background fill by the
    /// encoder: the conventional "blank" entry is white, which sits at a
    /// different index in each palette.
    pub fn white_index(self) -> u16 {
        match self {
            ColorMode::Gray => 1,
            ColorMode::CmyWhite => 0,
            ColorMode::RgbCmyWhiteBlack => 0,
        }
    }

    pub fn sample_to_rgb(self, sample: u16) -> Result<(u8, u8, u8)> {
        self.palette()
            .get(sample as usize)
            .copied()
            .ok_or(MakoError::DictionaryCodeOutOfRange { code: sample, dict_size: self.palette().len() as u16 })
    }

    /// Exact-byte-equality reverse lookup; this codec tolerates no color
    /// drift.
    pub fn rgb_to_sample(self, rgb: (u8, u8, u8)) -> Result<u16> {
        self.palette()
            .iter()
            .position(|&entry| entry == rgb)
            .map(|idx| idx as u16)
            .ok_or(MakoError::UnknownPaletteColor { rgb })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_sample_bits() {
        for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
            assert_eq!(mode.palette().len(), 1 << mode.sample_bits());
        }
    }

    #[test]
    fn round_trips_every_palette_entry() {
        for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
            for (idx, &rgb) in mode.palette().iter().enumerate() {
                assert_eq!(mode.rgb_to_sample(rgb).unwrap(), idx as u16);
                assert_eq!(mode.sample_to_rgb(idx as u16).unwrap(), rgb);
            }
        }
    }

    #[test]
    fn unknown_color_is_rejected() {
        let err = ColorMode::Gray.rgb_to_sample((128, 128, 128)).unwrap_err();
        assert_eq!(err, MakoError::UnknownPaletteColor { rgb: (128, 128, 128) });
    }

    #[test]
    fn from_u8_rejects_out_of_range() {
        assert!(ColorMode::from_u8(0).is_err());
        assert!(ColorMode::from_u8(4).is_err());
        assert!(ColorMode::from_u8(1).is_ok());
    }
}
