//! Packed-file wrapper.
//!
//! Plot, hole and panorama files are stored as a 4-byte header followed by
//! a compressed payload:
//!
//! | Offset | Size | Content |
//! |---|---|---|
//! | 0 | 2 | ASCII tag, `"bs"` (run-length) or `"pk"` |
//! | 2 | 2 | declared size, little-endian u16 |
//! | 4 | .. | payload |
//!
//! Only `"bs"` has a decoder. The declared size is never needed to
//! unpack; what it counts is configurable for writing (see
//! [`DeclaredSize`]).

pub mod rle;

pub use rle::RunLength;

use crate::error::{JnseError, Result};
use crate::notification::NotificationCollection;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Header size in bytes
pub const PACK_HEADER_SIZE: usize = 4;

/// Tag of run-length packed files
pub const RLE_TAG: [u8; 2] = *b"bs";

/// Tag of the alternate format, recognised but not decoded
pub const PK_TAG: [u8; 2] = *b"pk";

/// Trait for compressing data.
pub trait Compressor {
    /// Compress a whole source buffer.
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for decompressing data.
pub trait Decompressor {
    /// Decompress a source buffer; `size_hint` is the expected output size.
    fn decompress(&self, source: &[u8], size_hint: usize) -> Result<Vec<u8>>;
}

/// Payload formats a pack header can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackFormat {
    /// `"bs"`
    RunLength,
    /// `"pk"`, no decoder
    Pk,
}

impl PackFormat {
    pub fn from_tag(tag: [u8; 2]) -> Option<Self> {
        match &tag {
            b"bs" => Some(PackFormat::RunLength),
            b"pk" => Some(PackFormat::Pk),
            _ => None,
        }
    }

    pub fn tag(&self) -> [u8; 2] {
        match self {
            PackFormat::RunLength => RLE_TAG,
            PackFormat::Pk => PK_TAG,
        }
    }
}

/// What the header's size field counts when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclaredSize {
    /// Header plus payload, as the game's own tools write it
    #[default]
    TotalLength,
    /// Payload only
    PayloadLength,
}

/// Configuration for writing packed files
#[derive(Debug, Clone, Default)]
pub struct PackConfiguration {
    pub declared_size: DeclaredSize,
}

/// The 4-byte header of a packed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackHeader {
    pub tag: [u8; 2],
    pub declared_size: u16,
}

impl PackHeader {
    /// Read the header at the start of `data`
    pub fn read(data: &[u8]) -> Result<Self> {
        if data.len() < PACK_HEADER_SIZE {
            return Err(JnseError::MalformedRecord(format!(
                "packed file is {} bytes, shorter than its {PACK_HEADER_SIZE}-byte header",
                data.len()
            )));
        }
        Ok(PackHeader {
            tag: [data[0], data[1]],
            declared_size: LittleEndian::read_u16(&data[2..4]),
        })
    }

    /// The payload format, if it has a decoder
    pub fn format(&self) -> Result<PackFormat> {
        match PackFormat::from_tag(self.tag) {
            Some(PackFormat::RunLength) => Ok(PackFormat::RunLength),
            _ => Err(JnseError::UnsupportedPackFormat(
                String::from_utf8_lossy(&self.tag).into_owned(),
            )),
        }
    }
}

/// Unpack a packed file into the raw record bytes.
///
/// A declared size that matches neither the file length, the payload
/// length nor the unpacked length (all modulo 2^16) is reported as a
/// warning.
pub fn unpack(data: &[u8], notifications: &mut NotificationCollection) -> Result<Vec<u8>> {
    let header = PackHeader::read(data)?;
    header.format()?;

    let payload = &data[PACK_HEADER_SIZE..];
    let expanded = rle::expand(payload)?;

    let candidates = [data.len(), payload.len(), expanded.len()];
    if !candidates
        .iter()
        .any(|&len| len as u16 == header.declared_size)
    {
        notifications.warn(format!(
            "declared size {} matches neither file ({}), payload ({}) nor unpacked ({}) length",
            header.declared_size,
            data.len(),
            payload.len(),
            expanded.len()
        ));
    }
    Ok(expanded)
}

/// Pack record bytes with the run-length codec.
pub fn pack(data: &[u8], config: &PackConfiguration) -> Result<Vec<u8>> {
    pack_with(&RunLength, PackFormat::RunLength, data, config)
}

/// Pack record bytes with any codec under the given tag.
pub fn pack_with(
    codec: &impl Compressor,
    format: PackFormat,
    data: &[u8],
    config: &PackConfiguration,
) -> Result<Vec<u8>> {
    let payload = codec.compress(data)?;
    let declared = match config.declared_size {
        DeclaredSize::TotalLength => payload.len() + PACK_HEADER_SIZE,
        DeclaredSize::PayloadLength => payload.len(),
    };

    let mut out = Vec::with_capacity(payload.len() + PACK_HEADER_SIZE);
    out.write_all(&format.tag())?;
    // Stored modulo 2^16
    out.write_u16::<LittleEndian>(declared as u16)?;
    out.write_all(&payload)?;
    Ok(out)
}
