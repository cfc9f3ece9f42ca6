//! Black-box coverage of the library's built-in self-test, across all
//! three color modes.

use makocode::{self_test, ColorMode};

#[test]
fn self_test_passes_for_gray() {
    self_test(ColorMode::Gray).unwrap();
}

#[test]
fn self_test_passes_for_cmy_white() {
    self_test(ColorMode::CmyWhite).unwrap();
}

#[test]
fn self_test_passes_for_rgb_cmy_white_black() {
    self_test(ColorMode::RgbCmyWhiteBlack).unwrap();
}
