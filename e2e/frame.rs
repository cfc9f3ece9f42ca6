//! Exercises the frame builder/parser directly: header agreement, the
//! mode-3 whitening rotation, and malformed-frame rejection.

use makocode::dictionary;
use makocode::frame::{build_frame, parse_frame};
use makocode::ColorMode;

#[test]
fn header_bit_count_equals_byte_aligned_compressed_length() {
    let compressed = dictionary::compress(b"frame header scenario").unwrap();
    let compressed_bit_len = (compressed.len() as u64) * 8;
    let frame = build_frame(&compressed, compressed_bit_len, ColorMode::Gray).unwrap();

    let parsed = parse_frame(&frame.bytes, frame.bit_count, ColorMode::Gray, None).unwrap();
    assert_eq!(parsed.compressed_bit_len, compressed_bit_len);
    assert_eq!(parsed.compressed_bytes, compressed);
}

#[test]
fn whitening_is_applied_only_in_the_eight_color_mode() {
    let compressed = dictionary::compress(b"AAAAAAAAAAAAAAAAAAAA").unwrap();
    let compressed_bit_len = (compressed.len() as u64) * 8;

    let plain = build_frame(&compressed, compressed_bit_len, ColorMode::Gray).unwrap();
    let whitened = build_frame(&compressed, compressed_bit_len, ColorMode::RgbCmyWhiteBlack).unwrap();

    // Both still parse back to the identical payload, but the on-wire bytes
    // differ because one of them went through the rotation.
    assert_ne!(plain.bytes, whitened.bytes);
    let parsed = parse_frame(&whitened.bytes, whitened.bit_count, ColorMode::RgbCmyWhiteBlack, None).unwrap();
    assert_eq!(parsed.compressed_bytes, compressed);
}

#[test]
fn tampered_header_length_is_rejected() {
    let compressed = dictionary::compress(b"tamper me").unwrap();
    let compressed_bit_len = (compressed.len() as u64) * 8;
    let mut frame = build_frame(&compressed, compressed_bit_len, ColorMode::Gray).unwrap();

    // Flip the low bit of the 64-bit header to claim one extra bit of
    // payload than the frame actually carries.
    frame.bytes[0] ^= 0x01;

    let err = parse_frame(&frame.bytes, frame.bit_count, ColorMode::Gray, None);
    assert!(err.is_err() || err.unwrap().compressed_bit_len != compressed_bit_len);
}

#[test]
fn comment_length_disagreement_is_rejected() {
    let compressed = dictionary::compress(b"x").unwrap();
    let compressed_bit_len = (compressed.len() as u64) * 8;
    let frame = build_frame(&compressed, compressed_bit_len, ColorMode::Gray).unwrap();

    let err = parse_frame(&frame.bytes, frame.bit_count, ColorMode::Gray, Some(compressed_bit_len + 16)).unwrap_err();
    assert!(matches!(err, makocode::MakoError::LengthMetadataDisagreement { .. }));
}
