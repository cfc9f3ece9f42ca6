use std::collections::HashMap;

use crate::error::{MakoError, Result};

/// The parsed contents of one PPM page: its declared dimensions, its pixels
/// in row-major order, and any `MAKOCODE_*` numeric comment annotations
/// found along the way.
pub struct ParsedPpm {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<(u8, u8, u8)>,
    pub comments: HashMap<String, u64>,
}

pub fn read_ppm(bytes: &[u8]) -> Result<ParsedPpm> {
    let mut tok = Tokenizer::new(bytes);

    let magic = tok.next_token().ok_or(MakoError::BadMagic)?;
    if magic != "P3" {
        return Err(MakoError::BadMagic);
    }

    let width: u32 = tok.next_token().and_then(|t| t.parse().ok()).ok_or(MakoError::MissingDimensions)?;
    let height: u32 = tok.next_token().and_then(|t| t.parse().ok()).ok_or(MakoError::MissingDimensions)?;
    let maxval: u32 = tok.next_token().and_then(|t| t.parse().ok()).ok_or(MakoError::MissingDimensions)?;
    if maxval != 255 {
        return Err(MakoError::BadMaxVal { found: maxval });
    }

    let expected = width as u64 * height as u64 * 3;
    let mut channels: Vec<u8> = Vec::with_capacity(expected as usize);
    while let Some(token) = tok.next_token() {
        let value: u32 = token.parse().map_err(|_| MakoError::NonNumericToken)?;
        if value > 255 {
            return Err(MakoError::NonNumericToken);
        }
        channels.push(value as u8);
    }

    if channels.len() as u64 != expected {
        return Err(MakoError::PixelCountMismatch { expected, found: channels.len() as u64 });
    }

    let pixels = channels.chunks_exact(3).map(|c| (c[0], c[1], c[2])).collect();

    Ok(ParsedPpm { width, height, pixels, comments: tok.into_comments() })
}

/// Whitespace/token scanner that treats `#` as starting a comment
/// terminated by the next newline, and opportunistically records
/// `MAKOCODE_KEY VALUE` pairs found inside those comments.
struct Tokenizer<'a> {
    bytes: &'a [u8],
    pos: usize,
    comments: HashMap<String, u64>,
}

impl<'a> Tokenizer<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0, comments: HashMap::new() }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.bytes.len() && self.bytes[self.pos] == b'#' {
                let start = self.pos + 1;
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                let line = self.bytes[start..self.pos].to_vec();
                self.record_comment(&line);
                continue;
            }
            break;
        }
    }

    fn record_comment(&mut self, line: &[u8]) {
        let text = String::from_utf8_lossy(line);
        let trimmed = text.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let Some(key) = parts.next() else { return };
        if !key.starts_with("MAKOCODE_") {
            return;
        }
        if let Some(value) = parts.next().and_then(|v| v.trim().parse::<u64>().ok()) {
            self.comments.insert(key.to_string(), value);
        }
    }

    fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace_and_comments();
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
    }

    fn into_comments(self) -> HashMap<String, u64> {
        self.comments
    }
}
