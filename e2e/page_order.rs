//! Multi-page orchestration: splitting a payload across pages, rejecting
//! shuffled page order, and rejecting cross-page metadata disagreement.

use makocode::{decode, encode, ColorMode, MakoError, PageGeometry};

fn two_page_payload() -> (Vec<u8>, PageGeometry) {
    let geometry = PageGeometry::new(32, 32, 0);
    // 32*32*3 = 3072 data bits per page; a few KB of pseudo-random bytes
    // compress poorly enough to overflow a single page.
    let payload = makocode::rng::generate(0xA5A5_1234, 4096);
    (payload, geometry)
}

#[test]
fn a_large_payload_splits_into_multiple_pages() {
    let (payload, geometry) = two_page_payload();
    let pages = encode(&payload, ColorMode::RgbCmyWhiteBlack, geometry, None).unwrap();
    assert!(pages.len() >= 2, "expected the payload to need more than one page");

    let decoded = decode(&pages, Some(ColorMode::RgbCmyWhiteBlack)).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn shuffled_pages_are_rejected() {
    let (payload, geometry) = two_page_payload();
    let pages = encode(&payload, ColorMode::RgbCmyWhiteBlack, geometry, None).unwrap();
    assert!(pages.len() >= 2);

    let mut shuffled = pages.clone();
    shuffled.swap(0, 1);
    let err = decode(&shuffled, Some(ColorMode::RgbCmyWhiteBlack)).unwrap_err();
    assert!(matches!(err, MakoError::PageOrderViolation { .. }));
}

#[test]
fn mixing_pages_from_different_geometries_is_rejected() {
    let payload_a = makocode::rng::generate(1, 64);
    let payload_b = makocode::rng::generate(2, 64);

    let pages_a = encode(&payload_a, ColorMode::Gray, PageGeometry::new(32, 32, 0), None).unwrap();
    let pages_b = encode(&payload_b, ColorMode::Gray, PageGeometry::new(48, 48, 0), None).unwrap();

    let mixed = vec![pages_a[0].clone(), pages_b[0].clone()];
    let err = decode(&mixed, Some(ColorMode::Gray)).unwrap_err();
    assert!(matches!(err, MakoError::MetadataConflict { .. } | MakoError::PageOrderViolation { .. }));
}

#[test]
fn decoding_with_no_pages_is_rejected() {
    let err = decode(&[], None).unwrap_err();
    assert_eq!(err, MakoError::NoPagesSupplied);
}
