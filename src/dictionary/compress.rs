use super::hash_index::HashIndex;
use super::{CODE_BITS, DICT_LIMIT, FIRST_DICT_CODE};
use crate::bitio::BitWriter;
use crate::error::{MakoError, Result};

/// Compresses `input` with the 12-bit dictionary codec. Empty input
/// produces empty output. The returned bytes are always byte-aligned.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = BitWriter::new();
    let mut index = HashIndex::new();
    let mut dict_size = FIRST_DICT_CODE;
    let mut current_code = input[0] as u16;

    for &byte in &input[1..] {
        if let Some(code) = index.lookup(current_code, byte) {
            current_code = code;
            continue;
        }

        writer.write_bits(current_code as u64, CODE_BITS);
        if dict_size < DICT_LIMIT {
            if !index.insert(current_code, byte, dict_size) {
                return Err(MakoError::HashTableExhausted);
            }
            dict_size += 1;
        }
        current_code = byte as u16;
    }
    writer.write_bits(current_code as u64, CODE_BITS);
    writer.align_to_byte();

    if writer.failed() {
        return Err(MakoError::AllocationFailure);
    }
    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_whole_codes_before_padding() {
        let compressed = compress(b"aaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        // Every emitted code is exactly CODE_BITS wide; only the final
        // byte-alignment step may add up to 7 padding bits.
        let total_bits = (compressed.len() as u64) * 8;
        assert!(total_bits >= CODE_BITS as u64);
    }
}
