//! Frame assembly and parsing: the 64-bit payload-bit-length header, the
//! compressed payload bits, byte alignment, and — for the 8-color palette
//! only — the whitening rotation over the whole byte-aligned frame.

mod builder;
mod parser;

pub use builder::build_frame;
pub use parser::{parse_frame, ParsedFrame};

/// Width of the frame's payload-bit-length header.
pub const HEADER_BITS: u32 = 64;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorMode;

    #[test]
    fn round_trips_through_build_and_parse() {
        let compressed = crate::dictionary::compress(b"hello world").unwrap();
        let compressed_bit_len = (compressed.len() as u64) * 8;

        for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
            let frame = build_frame(&compressed, compressed_bit_len, mode).unwrap();
            let parsed = parse_frame(&frame.bytes, frame.bit_count, mode, None).unwrap();
            assert_eq!(parsed.compressed_bit_len, compressed_bit_len);
            assert_eq!(parsed.compressed_bytes, compressed);
        }
    }

    #[test]
    fn mode_3_rotation_is_involutive() {
        let compressed = crate::dictionary::compress(b"whitened frame payload").unwrap();
        let compressed_bit_len = (compressed.len() as u64) * 8;
        let frame = build_frame(&compressed, compressed_bit_len, ColorMode::RgbCmyWhiteBlack).unwrap();
        let parsed = parse_frame(&frame.bytes, frame.bit_count, ColorMode::RgbCmyWhiteBlack, None).unwrap();
        assert_eq!(parsed.compressed_bytes, compressed);
    }

    #[test]
    fn header_metadata_disagreement_is_rejected() {
        let compressed = crate::dictionary::compress(b"x").unwrap();
        let compressed_bit_len = (compressed.len() as u64) * 8;
        let frame = build_frame(&compressed, compressed_bit_len, ColorMode::Gray).unwrap();
        let err = parse_frame(&frame.bytes, frame.bit_count, ColorMode::Gray, Some(compressed_bit_len + 8)).unwrap_err();
        assert!(matches!(err, crate::error::MakoError::LengthMetadataDisagreement { .. }));
    }

    #[test]
    fn under_length_frame_is_rejected() {
        let err = parse_frame(&[0u8; 4], 32, ColorMode::Gray, None).unwrap_err();
        assert!(matches!(err, crate::error::MakoError::UnderLengthFrame { .. }));
    }
}
