//! MakoCode — a lossless codec between arbitrary byte streams and printable
//! raster images (plain-text PPM/P3), dictionary-compressed and packed
//! through a small fixed color palette so the output survives print/scan
//! or screenshot round trips.

pub mod bitio;
pub mod cli;
pub mod codec;
pub mod dictionary;
pub mod error;
pub mod footer;
pub mod frame;
pub mod page;
pub mod palette;
pub mod ppm;
pub mod rng;

pub use codec::{decode, encode, encode_with_title, self_test};
pub use error::{MakoError, Result};
pub use page::PageGeometry;
pub use palette::ColorMode;
