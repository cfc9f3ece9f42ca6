//! The `makocode` binary: argument parsing, dispatch, and the small amount
//! of file/stdio glue the library itself stays free of.

pub mod args;
pub mod log;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::codec;
use crate::page::PageGeometry;
use crate::palette::ColorMode;

use args::{Cli, Command};

/// Prints a top-level failure through the same display-level gate as the
/// rest of the CLI's console output (level 1, "errors only").
pub fn report_error(err: &anyhow::Error) {
    error_line!("makocode: {err:#}");
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.quiet {
        log::set_display_level(0);
    } else if cli.verbose {
        log::set_display_level(3);
    }

    match cli.command {
        Command::Encode { input, output, mode, width, height, title } => {
            run_encode(input.as_deref(), &output, mode.into(), width, height, title.as_deref())
        }
        Command::Decode { inputs, output, mode } => run_decode(&inputs, output.as_deref(), mode.map(Into::into)),
        Command::Test { mode } => run_test(mode.into()),
    }
}

fn run_encode(
    input: Option<&Path>,
    output_prefix: &Path,
    mode: ColorMode,
    width: u32,
    height: u32,
    title: Option<&str>,
) -> Result<()> {
    let payload = read_input(input)?;
    info!("encoding {} bytes", payload.len());

    let pages = if title.is_some() {
        codec::encode_with_title(&payload, mode, width, height, title)?
    } else {
        codec::encode(&payload, mode, PageGeometry::new(width, height, 0), None)?
    };

    verbose!("produced {} page(s)", pages.len());
    for (i, page) in pages.iter().enumerate() {
        let path = output_prefix.with_extension(format!("{}.ppm", i + 1));
        fs::write(&path, page).with_context(|| format!("writing {}", path.display()))?;
        verbose!("wrote {}", path.display());
    }
    Ok(())
}

fn run_decode(inputs: &[std::path::PathBuf], output: Option<&Path>, mode: Option<ColorMode>) -> Result<()> {
    let pages: Vec<Vec<u8>> =
        inputs.iter().map(fs::read).collect::<io::Result<_>>().context("reading page file")?;
    verbose!("decoding {} page(s)", pages.len());

    let payload = codec::decode(&pages, mode)?;
    match output {
        Some(path) => fs::write(path, &payload).with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout().write_all(&payload)?,
    }
    info!("decoded {} bytes", payload.len());
    Ok(())
}

fn run_test(mode: ColorMode) -> Result<()> {
    info!("running self-test for {mode:?}");
    match codec::self_test(mode) {
        Ok(()) => {
            info!("self-test passed");
            Ok(())
        }
        Err(e) => bail!("self-test failed: {e}"),
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

use log::{error_line, info, verbose};
