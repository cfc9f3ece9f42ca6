use crate::bitio::{BitReader, BitWriter};
use crate::error::{MakoError, Result};
use crate::palette::ColorMode;

use super::HEADER_BITS;

/// The compressed payload bytes recovered from a frame, plus the exact bit
/// length to hand to the dictionary decompressor.
pub struct ParsedFrame {
    pub compressed_bytes: Vec<u8>,
    pub compressed_bit_len: u64,
}

/// Inverts [`super::build_frame`]. `comment_bits`, when given, must agree
/// with the header or the frame is rejected (length header vs. metadata
/// agreement, spec §4.3/§9).
pub fn parse_frame(
    frame_bytes: &[u8],
    frame_bit_count: u64,
    mode: ColorMode,
    comment_bits: Option<u64>,
) -> Result<ParsedFrame> {
    if frame_bit_count < HEADER_BITS as u64 {
        return Err(MakoError::UnderLengthFrame { have_bits: frame_bit_count, need_bits: HEADER_BITS as u64 });
    }

    let mut working;
    let bytes: &[u8] = if mode == ColorMode::RgbCmyWhiteBlack {
        working = frame_bytes.to_vec();
        unwhiten(&mut working);
        &working
    } else {
        frame_bytes
    };

    let mut reader = BitReader::new(bytes, frame_bit_count);
    let header_bits = reader.read_bits(HEADER_BITS);

    if let Some(comment) = comment_bits {
        if comment != header_bits {
            return Err(MakoError::LengthMetadataDisagreement { header_bits, comment_bits: comment });
        }
    }

    let available_bits = frame_bit_count - HEADER_BITS as u64;
    if header_bits > available_bits {
        return Err(MakoError::LengthExceedsFrame { header_bits, available_bits });
    }

    let mut payload_writer = BitWriter::new();
    for _ in 0..header_bits {
        payload_writer.write_bit(reader.read_bit());
    }
    payload_writer.align_to_byte();
    if payload_writer.failed() {
        return Err(MakoError::AllocationFailure);
    }

    Ok(ParsedFrame { compressed_bytes: payload_writer.into_bytes(), compressed_bit_len: header_bits })
}

/// Inverse of the builder's whitening rotation: right-rotate each byte of
/// the full byte-aligned frame by the same cycling amount.
fn unwhiten(bytes: &mut [u8]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        let amount = ((i % 3) + 1) as u32;
        *byte = byte.rotate_right(amount);
    }
}
