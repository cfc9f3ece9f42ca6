use crate::bitio::BitWriter;
use crate::error::{MakoError, Result};
use crate::palette::ColorMode;

use super::HEADER_BITS;

/// A byte-aligned, optionally rotated frame ready for page slicing.
pub struct Frame {
    pub bytes: Vec<u8>,
    pub bit_count: u64,
}

/// Builds a frame from the compressor's output: a 64-bit length header
/// (`compressed.len() * 8`, since the dictionary compressor always returns
/// byte-aligned output) followed by the compressed bytes, byte-aligned,
/// then whitened for the 8-color palette.
pub fn build_frame(compressed: &[u8], compressed_bit_len: u64, mode: ColorMode) -> Result<Frame> {
    let mut writer = BitWriter::new();
    writer.write_bits(compressed_bit_len, HEADER_BITS);
    for &byte in compressed {
        writer.write_bits(byte as u64, 8);
    }
    writer.align_to_byte();
    if writer.failed() {
        return Err(MakoError::AllocationFailure);
    }

    let mut bytes = writer.into_bytes();
    if mode == ColorMode::RgbCmyWhiteBlack {
        whiten(&mut bytes);
    }
    let bit_count = (bytes.len() as u64) * 8;
    Ok(Frame { bytes, bit_count })
}

/// Per-byte left-rotation whose amount cycles `1, 2, 3` by byte index,
/// applied over the *entire* byte-aligned frame including the header.
fn whiten(bytes: &mut [u8]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        let amount = ((i % 3) + 1) as u32;
        *byte = byte.rotate_left(amount);
    }
}
