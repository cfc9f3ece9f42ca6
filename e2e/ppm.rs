//! Exercises the PPM container directly: comment round-tripping and the
//! rejection paths for malformed page files.

use makocode::ppm::{read_ppm, write_ppm};
use makocode::MakoError;

#[test]
fn comments_survive_a_write_then_read_cycle() {
    let pixels = vec![(255, 255, 255); 9];
    let comments = [
        ("MAKOCODE_COLOR_CHANNELS", 3u64),
        ("MAKOCODE_BITS", 108),
        ("MAKOCODE_PAGE_COUNT", 1),
        ("MAKOCODE_PAGE_INDEX", 1),
    ];
    let bytes = write_ppm(3, 3, &comments, &pixels).unwrap();
    assert!(bytes.starts_with(b"P3\n"));

    let parsed = read_ppm(&bytes).unwrap();
    assert_eq!(parsed.width, 3);
    assert_eq!(parsed.height, 3);
    assert_eq!(parsed.pixels, pixels);
    for (key, value) in comments {
        assert_eq!(parsed.comments.get(key), Some(&value));
    }
}

#[test]
fn unrecognized_comment_keys_are_ignored() {
    let bytes = b"P3\n# NOT_A_MAKOCODE_KEY 42\n1 1\n255\n0 0 0\n".to_vec();
    let parsed = read_ppm(&bytes).unwrap();
    assert_eq!(parsed.pixels, vec![(0, 0, 0)]);
    assert!(parsed.comments.is_empty());
}

#[test]
fn non_numeric_channel_token_is_rejected() {
    let err = read_ppm(b"P3\n1 1\n255\nred green blue\n").unwrap_err();
    assert_eq!(err, MakoError::NonNumericToken);
}

#[test]
fn a_pixel_value_above_maxval_range_is_rejected() {
    let err = read_ppm(b"P3\n1 1\n255\n300 0 0\n").unwrap_err();
    assert_eq!(err, MakoError::NonNumericToken);
}
