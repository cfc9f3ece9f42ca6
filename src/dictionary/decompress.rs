use super::{CODE_BITS, DICT_LIMIT, FIRST_DICT_CODE};
use crate::bitio::BitReader;
use crate::error::{MakoError, Result};

const SCRATCH_CAP: usize = DICT_LIMIT as usize;

/// Decompresses `bit_count` bits of `bytes` back into the original payload.
/// `bit_count` is the exact compressed-payload bit length reported by the
/// frame header, *not* `bytes.len() * 8` (those coincide only because the
/// compressor always byte-aligns on exit).
pub fn decompress(bytes: &[u8], bit_count: u64) -> Result<Vec<u8>> {
    if bit_count == 0 {
        return Ok(Vec::new());
    }
    if bit_count < CODE_BITS as u64 {
        return Err(MakoError::UnderLengthFrame { have_bits: bit_count, need_bits: CODE_BITS as u64 });
    }

    let mut reader = BitReader::new(bytes, bit_count);
    let mut prefix: Vec<u16> = Vec::with_capacity((DICT_LIMIT - FIRST_DICT_CODE) as usize);
    let mut suffix: Vec<u8> = Vec::with_capacity((DICT_LIMIT - FIRST_DICT_CODE) as usize);
    let mut dict_size = FIRST_DICT_CODE;
    let mut scratch = [0u8; SCRATCH_CAP];
    let mut output = Vec::new();

    let first_code = reader.read_bits(CODE_BITS) as u16;
    let mut prev = first_code;
    let mut prev_first = emit_sequence(first_code, &prefix, &suffix, &mut scratch, &mut output)?;

    while reader.remaining_bits() >= CODE_BITS as u64 {
        let code = reader.read_bits(CODE_BITS) as u16;
        let first = if code < dict_size {
            emit_sequence(code, &prefix, &suffix, &mut scratch, &mut output)?
        } else if code == dict_size {
            let first = emit_sequence(prev, &prefix, &suffix, &mut scratch, &mut output)?;
            output.push(prev_first);
            first
        } else {
            return Err(MakoError::DictionaryCodeOutOfRange { code, dict_size });
        };

        if dict_size < DICT_LIMIT {
            prefix.push(prev);
            suffix.push(first);
            dict_size += 1;
        }
        prev = code;
        prev_first = first;
    }

    Ok(output)
}

/// Reconstructs the byte sequence for `code` into `output`, returning the
/// sequence's first byte. Walks the prefix chain into `scratch` (in reverse
/// emission order) with no recursion, then pushes bytes in forward order.
fn emit_sequence(
    code: u16,
    prefix: &[u16],
    suffix: &[u8],
    scratch: &mut [u8; SCRATCH_CAP],
    output: &mut Vec<u8>,
) -> Result<u8> {
    let mut len = 0usize;
    let mut cur = code;
    loop {
        if cur < FIRST_DICT_CODE {
            scratch[len] = cur as u8;
            len += 1;
            break;
        }
        let idx = (cur - FIRST_DICT_CODE) as usize;
        let suffix_byte = *suffix
            .get(idx)
            .ok_or(MakoError::DictionaryCodeOutOfRange { code: cur, dict_size: FIRST_DICT_CODE + suffix.len() as u16 })?;
        scratch[len] = suffix_byte;
        len += 1;
        cur = prefix[idx];
        if len >= SCRATCH_CAP {
            return Err(MakoError::DictionaryCodeOutOfRange { code, dict_size: FIRST_DICT_CODE + suffix.len() as u16 });
        }
    }

    let first = scratch[len - 1];
    for &b in scratch[..len].iter().rev() {
        output.push(b);
    }
    Ok(first)
}
