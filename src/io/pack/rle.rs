//! Run-length codec of the game's packed files.
//!
//! The stream is a sequence of runs, each introduced by a control byte:
//!
//! - `0..=127`: literal run, the next `b` bytes are copied verbatim;
//! - `128..=255`: fill run, the next byte is repeated `257 - b` times
//!   (2..=129 copies).
//!
//! The encoder is a greedy single pass. A repeat always starts a fill run;
//! a literal run stops as soon as the next position could start one. Its
//! output matches the game's own tools byte for byte.

use super::{Compressor, Decompressor};
use crate::error::{JnseError, Result};

/// Longest fill run
pub const MAX_FILL_RUN: usize = 129;

/// Longest literal run
pub const MAX_LITERAL_RUN: usize = 127;

/// First control byte of a fill run
const FILL_BASE: usize = 257;

/// Expand an RLE stream.
///
/// A run reaching past the end of `payload` is a `MalformedRecord`.
pub fn expand(payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(payload.len() * 2);
    expand_into(payload, &mut out)?;
    Ok(out)
}

/// Expand an RLE stream, appending to `out`.
pub fn expand_into(payload: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let mut pos = 0;
    while pos < payload.len() {
        let control = payload[pos] as usize;
        if control < 128 {
            let literal = payload.get(pos + 1..pos + 1 + control).ok_or_else(|| {
                JnseError::MalformedRecord(format!(
                    "literal run of {control} bytes at offset {pos} passes end of stream"
                ))
            })?;
            out.extend_from_slice(literal);
            pos += control + 1;
        } else {
            let value = *payload.get(pos + 1).ok_or_else(|| {
                JnseError::MalformedRecord(format!(
                    "fill run at offset {pos} has no value byte"
                ))
            })?;
            out.resize(out.len() + (FILL_BASE - control), value);
            pos += 2;
        }
    }
    Ok(())
}

/// Compress `data` into an RLE stream.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let len = data.len();
    let mut out = Vec::with_capacity(len / 2 + 2);
    let mut i = 0;

    while i < len {
        let mut run = 1;
        while i + run < len && run < MAX_FILL_RUN && data[i + run] == data[i] {
            run += 1;
        }

        if run > 1 {
            out.push((FILL_BASE - run) as u8);
            out.push(data[i]);
        } else {
            // Stop before a byte that repeats its predecessor; it starts a
            // fill run. The last input byte is never pulled into a literal.
            while i + run + 1 < len
                && run < MAX_LITERAL_RUN
                && data[i + 1] != data[i]
                && data[i + run + 1] != data[i + run]
            {
                run += 1;
            }
            out.push(run as u8);
            out.extend_from_slice(&data[i..i + run]);
        }
        i += run;
    }
    out
}

/// The run-length codec behind the `"bs"` pack tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLength;

impl Compressor for RunLength {
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>> {
        Ok(compress(source))
    }
}

impl Decompressor for RunLength {
    fn decompress(&self, source: &[u8], size_hint: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(size_hint);
        expand_into(source, &mut out)?;
        Ok(out)
    }
}
