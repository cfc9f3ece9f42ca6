//! Error types shared by every stage of the codec pipeline.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MakoError>;

/// Everything that can go wrong while encoding or decoding a page set.
///
/// Variants are grouped (in declaration order) into the four semantic
/// categories of the pipeline: malformed external input, a broken frame
/// invariant, resource exhaustion, and invalid caller configuration. Each
/// variant carries the data needed to build a precise diagnostic instead of
/// an opaque string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakoError {
    // ---- input-format errors (malformed PPM, unknown colors) ----
    /// The first token was not `P3`.
    BadMagic,
    /// Width, height, or maxval token was missing or unparsable.
    MissingDimensions,
    /// A pixel-channel token was not a decimal integer in 0..=255.
    NonNumericToken,
    /// `maxval` was present but not 255.
    BadMaxVal { found: u32 },
    /// Total channel-value count did not equal `width * height * 3`.
    PixelCountMismatch { expected: u64, found: u64 },
    /// A pixel's RGB triple is not a member of the active palette.
    UnknownPaletteColor { rgb: (u8, u8, u8) },

    // ---- frame-integrity errors ----
    /// Fewer bits were available than an operation required.
    UnderLengthFrame { have_bits: u64, need_bits: u64 },
    /// The 64-bit length header claims more payload bits than the frame holds.
    LengthExceedsFrame { header_bits: u64, available_bits: u64 },
    /// The frame header and a `MAKOCODE_BITS` comment disagree.
    LengthMetadataDisagreement { header_bits: u64, comment_bits: u64 },
    /// A decoded dictionary code exceeds the decoder's current table size.
    DictionaryCodeOutOfRange { code: u16, dict_size: u16 },
    /// Supplied pages were not in declared page-index order.
    PageOrderViolation { expected_index: u64, found_index: u64 },
    /// Two pages disagree on a field that must be identical across a frame.
    MetadataConflict { field: &'static str },
    /// No page buffers were supplied to decode.
    NoPagesSupplied,

    // ---- resource errors ----
    /// The LZW hash index could not find a free slot (should not occur under
    /// spec parameters: at most 3840 live entries against 8192 slots).
    HashTableExhausted,
    /// A buffer failed to grow.
    AllocationFailure,

    // ---- configuration errors ----
    /// `color_mode` was outside {1, 2, 3}.
    InvalidColorMode { value: u8 },
    /// A page geometry had a zero or footer-exceeding dimension.
    ZeroDimensionPage,
    /// A footer title does not fit the computed footer layout.
    TitleDoesNotFit,
}

impl fmt::Display for MakoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakoError::BadMagic => write!(f, "not a P3 PPM file (bad magic)"),
            MakoError::MissingDimensions => write!(f, "missing or unparsable PPM dimensions"),
            MakoError::NonNumericToken => write!(f, "expected a decimal pixel value"),
            MakoError::BadMaxVal { found } => write!(f, "unsupported maxval {found} (expected 255)"),
            MakoError::PixelCountMismatch { expected, found } => write!(
                f,
                "pixel channel count mismatch: expected {expected}, found {found}"
            ),
            MakoError::UnknownPaletteColor { rgb } => write!(
                f,
                "color ({}, {}, {}) is not in the active palette",
                rgb.0, rgb.1, rgb.2
            ),
            MakoError::UnderLengthFrame { have_bits, need_bits } => write!(
                f,
                "frame too short: have {have_bits} bits, need at least {need_bits}"
            ),
            MakoError::LengthExceedsFrame { header_bits, available_bits } => write!(
                f,
                "length header claims {header_bits} bits but only {available_bits} are available"
            ),
            MakoError::LengthMetadataDisagreement { header_bits, comment_bits } => write!(
                f,
                "frame header reports {header_bits} bits but MAKOCODE_BITS says {comment_bits}"
            ),
            MakoError::DictionaryCodeOutOfRange { code, dict_size } => write!(
                f,
                "dictionary code {code} exceeds current table size {dict_size}"
            ),
            MakoError::PageOrderViolation { expected_index, found_index } => write!(
                f,
                "expected page index {expected_index}, found {found_index}"
            ),
            MakoError::MetadataConflict { field } => {
                write!(f, "pages disagree on field `{field}`")
            }
            MakoError::NoPagesSupplied => write!(f, "no pages supplied to decode"),
            MakoError::HashTableExhausted => write!(f, "LZW hash index is full"),
            MakoError::AllocationFailure => write!(f, "buffer allocation failed"),
            MakoError::InvalidColorMode { value } => {
                write!(f, "invalid color mode {value} (expected 1, 2, or 3)")
            }
            MakoError::ZeroDimensionPage => write!(f, "page geometry has a zero-size dimension"),
            MakoError::TitleDoesNotFit => write!(f, "footer title does not fit the page layout"),
        }
    }
}

impl std::error::Error for MakoError {}
