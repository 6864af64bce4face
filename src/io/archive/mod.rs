//! Stored-only ZIP archive writer.
//!
//! Game files are already run-length packed, so entries are written with
//! the "stored" method (no compression). The layout is the classic PKZIP
//! one: a local header and the raw bytes per entry, then a central
//! directory and the end-of-central-directory record. No ZIP64.

pub mod crc;

pub use crc::crc32;

use crate::error::{JnseError, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use indexmap::IndexMap;
use std::io::Write;

pub const LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4b50;
pub const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4b50;
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50;

/// Version 2.0: the minimum for stored entries with directory support
const ZIP_VERSION: u16 = 20;
const METHOD_STORED: u16 = 0;
/// MS-DOS archive attribute
const EXTERNAL_ATTRIBUTES: u32 = 32;

pub const LOCAL_HEADER_SIZE: usize = 30;
pub const CENTRAL_HEADER_SIZE: usize = 46;
pub const END_OF_CENTRAL_DIRECTORY_SIZE: usize = 22;

/// A file to be stored in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
    /// Local modification time, stored with two-second resolution
    pub modified: NaiveDateTime,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, data: Vec<u8>, modified: NaiveDateTime) -> Self {
        ArchiveEntry {
            name: name.into(),
            data,
            modified,
        }
    }
}

/// Collects entries in insertion order and writes them as one archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveWriter {
    entries: IndexMap<String, ArchiveEntry>,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. An entry with the same name is replaced in place and
    /// returned.
    pub fn add(&mut self, entry: ArchiveEntry) -> Option<ArchiveEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Shorthand for [`add`](Self::add)
    pub fn add_file(
        &mut self,
        name: impl Into<String>,
        data: Vec<u8>,
        modified: NaiveDateTime,
    ) -> Option<ArchiveEntry> {
        self.add(ArchiveEntry::new(name, data, modified))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ArchiveEntry> {
        self.entries.values()
    }

    /// Write the archive
    pub fn finish(&self) -> Result<Vec<u8>> {
        write_archive(self.entries.values().collect())
    }
}

/// Write `entries` as an archive, in the given order.
pub fn build(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    write_archive(entries.iter().collect())
}

/// Pack a timestamp into MS-DOS `(date, time)` words.
///
/// Instants outside 1980..=2107 are clamped to the nearest representable
/// one. Seconds are halved.
pub fn dos_date_time(at: &NaiveDateTime) -> (u16, u16) {
    let at = clamp_dos_range(*at);
    let date = (((at.year() - 1980) as u16) << 9) | ((at.month() as u16) << 5) | at.day() as u16;
    let time = ((at.hour() as u16) << 11) | ((at.minute() as u16) << 5) | (at.second() / 2) as u16;
    (date, time)
}

fn clamp_dos_range(at: NaiveDateTime) -> NaiveDateTime {
    let first = NaiveDate::from_ymd_opt(1980, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let last = NaiveDate::from_ymd_opt(2107, 12, 31).and_then(|d| d.and_hms_opt(23, 59, 58));
    match (first, last) {
        (Some(first), _) if at < first => first,
        (_, Some(last)) if at > last => last,
        _ => at,
    }
}

fn to_u16(value: usize, field: &'static str) -> Result<u16> {
    u16::try_from(value).map_err(|_| JnseError::CapacityExceeded {
        field,
        len: value,
        capacity: u16::MAX as usize,
    })
}

fn to_u32(value: usize, field: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| JnseError::CapacityExceeded {
        field,
        len: value,
        capacity: u32::MAX as usize,
    })
}

fn write_archive(entries: Vec<&ArchiveEntry>) -> Result<Vec<u8>> {
    let count = to_u16(entries.len(), "archive entries")?;

    let mut out = Vec::new();
    let mut central = Vec::new();
    for entry in &entries {
        if !entry.name.is_ascii() {
            return Err(JnseError::InvalidEntryName(entry.name.clone()));
        }
        let name_len = to_u16(entry.name.len(), "archive entry name")?;
        let size = to_u32(entry.data.len(), "archive entry size")?;
        let offset = to_u32(out.len(), "archive size")?;
        let crc = crc32(0, &entry.data);
        let (date, time) = dos_date_time(&entry.modified);

        out.write_u32::<LittleEndian>(LOCAL_HEADER_SIGNATURE)?;
        out.write_u16::<LittleEndian>(ZIP_VERSION)?;
        out.write_u16::<LittleEndian>(0)?; // flags
        out.write_u16::<LittleEndian>(METHOD_STORED)?;
        out.write_u16::<LittleEndian>(time)?;
        out.write_u16::<LittleEndian>(date)?;
        out.write_u32::<LittleEndian>(crc)?;
        out.write_u32::<LittleEndian>(size)?;
        out.write_u32::<LittleEndian>(size)?;
        out.write_u16::<LittleEndian>(name_len)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_all(entry.name.as_bytes())?;
        out.write_all(&entry.data)?;

        central.write_u32::<LittleEndian>(CENTRAL_HEADER_SIGNATURE)?;
        central.write_u16::<LittleEndian>(ZIP_VERSION)?; // made by
        central.write_u16::<LittleEndian>(ZIP_VERSION)?; // needed
        central.write_u16::<LittleEndian>(0)?; // flags
        central.write_u16::<LittleEndian>(METHOD_STORED)?;
        central.write_u16::<LittleEndian>(time)?;
        central.write_u16::<LittleEndian>(date)?;
        central.write_u32::<LittleEndian>(crc)?;
        central.write_u32::<LittleEndian>(size)?;
        central.write_u32::<LittleEndian>(size)?;
        central.write_u16::<LittleEndian>(name_len)?;
        central.write_u16::<LittleEndian>(0)?; // extra field length
        central.write_u16::<LittleEndian>(0)?; // comment length
        central.write_u16::<LittleEndian>(0)?; // disk number start
        central.write_u16::<LittleEndian>(0)?; // internal attributes
        central.write_u32::<LittleEndian>(EXTERNAL_ATTRIBUTES)?;
        central.write_u32::<LittleEndian>(offset)?;
        central.write_all(entry.name.as_bytes())?;
    }

    let directory_offset = to_u32(out.len(), "archive size")?;
    let directory_size = to_u32(central.len(), "archive size")?;
    out.extend_from_slice(&central);
    to_u32(out.len() + END_OF_CENTRAL_DIRECTORY_SIZE, "archive size")?;

    out.write_u32::<LittleEndian>(END_OF_CENTRAL_DIRECTORY_SIGNATURE)?;
    out.write_u16::<LittleEndian>(0)?; // this disk
    out.write_u16::<LittleEndian>(0)?; // directory disk
    out.write_u16::<LittleEndian>(count)?;
    out.write_u16::<LittleEndian>(count)?;
    out.write_u32::<LittleEndian>(directory_size)?;
    out.write_u32::<LittleEndian>(directory_offset)?;
    out.write_u16::<LittleEndian>(0)?; // comment length

    log::debug!("archive built: {} entries, {} bytes", entries.len(), out.len());
    Ok(out)
}
