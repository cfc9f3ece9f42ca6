//! Command-line surface: `encode`, `decode`, and `test` subcommands,
//! mirroring the three operating modes of the reference tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "makocode", about = "Lossless byte-stream codec for printable raster images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print extra progress detail.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a file into one or more PPM page images.
    Encode {
        /// Input file to encode; reads stdin when omitted.
        input: Option<PathBuf>,

        /// Output path prefix; pages are written as `<prefix>.<n>.ppm`.
        #[arg(short, long, default_value = "page")]
        output: PathBuf,

        /// Pixel color mode.
        #[arg(short, long, value_enum, default_value_t = ColorModeArg::Rgb)]
        mode: ColorModeArg,

        /// Page width in pixels.
        #[arg(long, default_value_t = 2480)]
        width: u32,

        /// Page height in pixels.
        #[arg(long, default_value_t = 3508)]
        height: u32,

        /// Optional title rendered into a reserved footer strip.
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Decode one or more PPM page images back into the original file.
    Decode {
        /// Input page files, in order.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file; writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the color mode instead of trusting page comments.
        #[arg(short, long, value_enum)]
        mode: Option<ColorModeArg>,
    },

    /// Round-trip a deterministic generated payload through encode/decode.
    Test {
        /// Pixel color mode to exercise.
        #[arg(short, long, value_enum, default_value_t = ColorModeArg::Rgb)]
        mode: ColorModeArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorModeArg {
    Gray,
    Cmyw,
    Rgb,
}

impl From<ColorModeArg> for crate::palette::ColorMode {
    fn from(value: ColorModeArg) -> Self {
        match value {
            ColorModeArg::Gray => crate::palette::ColorMode::Gray,
            ColorModeArg::Cmyw => crate::palette::ColorMode::CmyWhite,
            ColorModeArg::Rgb => crate::palette::ColorMode::RgbCmyWhiteBlack,
        }
    }
}
