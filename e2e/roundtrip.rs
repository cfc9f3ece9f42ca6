//! Black-box round-trip coverage across the scenarios a real encode/decode
//! session hits: empty input, a single byte, a highly repetitive block, and
//! a larger pseudo-random payload, each in every color mode.

use makocode::{decode, encode, ColorMode, PageGeometry};

fn round_trip(payload: &[u8], mode: ColorMode, geometry: PageGeometry) {
    let pages = encode(payload, mode, geometry, None).unwrap();
    let decoded = decode(&pages, Some(mode)).unwrap();
    assert_eq!(decoded, payload, "round trip mismatch for mode {mode:?}");
}

#[test]
fn empty_payload_round_trips_in_every_mode() {
    let geometry = PageGeometry::new(32, 32, 0);
    for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
        round_trip(&[], mode, geometry);
    }
}

#[test]
fn single_byte_round_trips_in_every_mode() {
    let geometry = PageGeometry::new(32, 32, 0);
    for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
        round_trip(&[0x41], mode, geometry);
    }
}

#[test]
fn all_zeros_block_round_trips() {
    let geometry = PageGeometry::new(64, 64, 0);
    let payload = vec![0u8; 1024];
    for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
        round_trip(&payload, mode, geometry);
    }
}

#[test]
fn pseudo_random_payload_round_trips() {
    let geometry = PageGeometry::new(128, 128, 0);
    let payload = makocode::rng::generate(0xDEADBEEFCAFE, 8192);
    for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
        round_trip(&payload, mode, geometry);
    }
}

#[test]
fn default_page_geometry_round_trips_a_small_file() {
    let payload = b"the quick brown fox jumps over the lazy dog".repeat(50);
    round_trip(&payload, ColorMode::RgbCmyWhiteBlack, PageGeometry::default_geometry());
}
