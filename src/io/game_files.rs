//! Game files: which record lives in which file, and whole-course import
//! and export.
//!
//! A course named `STEM` is spread over these files (extensions are
//! case-insensitive on import):
//!
//! | File | Content | Packed |
//! |---|---|---|
//! | `STEM.PRC` | [`Course`] record | no |
//! | `STEM.LDM` | [`Plot`] record | yes |
//! | `STEM.H1` .. `STEM.H18` | [`Hole`] records | yes |
//! | `STEM.DZV` | [`Panorama`] record | yes |
//! | `STEM.OMM`, `STEM.MIN` | object library, minimap | not decoded |

use super::archive::ArchiveWriter;
use super::pack::{pack, unpack, PackConfiguration};
use super::record::{RecordCodec, RecordReaderConfiguration};
use crate::course::{Course, Hole, Panorama, Plot, HOLE_COUNT};
use crate::error::{JnseError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use std::fmt;

/// Longest file stem the game accepts (MS-DOS 8.3 names)
pub const STEM_CAPACITY: usize = 8;

/// The kind of a game file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFileKind {
    Course,
    Plot,
    /// Hole by 0-based index; `H1` is `Hole(0)`
    Hole(usize),
    Panorama,
    ObjectLibrary,
    Minimap,
}

impl GameFileKind {
    /// Parse an extension (without the dot), ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_uppercase();
        match ext.as_str() {
            "PRC" => Some(Self::Course),
            "LDM" => Some(Self::Plot),
            "DZV" => Some(Self::Panorama),
            "OMM" => Some(Self::ObjectLibrary),
            "MIN" => Some(Self::Minimap),
            _ => {
                let digits = ext.strip_prefix('H')?;
                if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let number: usize = digits.parse().ok()?;
                (1..=HOLE_COUNT)
                    .contains(&number)
                    .then(|| Self::Hole(number - 1))
            }
        }
    }

    /// Split a file name into its stem (upper-cased) and kind
    pub fn from_file_name(name: &str) -> Option<(String, Self)> {
        let (stem, ext) = name.rsplit_once('.')?;
        let kind = Self::from_extension(ext)?;
        Some((stem.to_ascii_uppercase(), kind))
    }

    /// Upper-case extension, without the dot
    pub fn extension(&self) -> String {
        match self {
            Self::Course => "PRC".to_string(),
            Self::Plot => "LDM".to_string(),
            Self::Hole(index) => format!("H{}", index + 1),
            Self::Panorama => "DZV".to_string(),
            Self::ObjectLibrary => "OMM".to_string(),
            Self::Minimap => "MIN".to_string(),
        }
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }

    /// Whether the file is stored with the pack wrapper
    pub fn is_packed(&self) -> bool {
        matches!(self, Self::Plot | Self::Hole(_) | Self::Panorama)
    }

    /// Whether files of this kind can be decoded
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::ObjectLibrary | Self::Minimap)
    }
}

impl fmt::Display for GameFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => write!(f, "course"),
            Self::Plot => write!(f, "plot"),
            Self::Hole(index) => write!(f, "hole {}", index + 1),
            Self::Panorama => write!(f, "panorama"),
            Self::ObjectLibrary => write!(f, "object library"),
            Self::Minimap => write!(f, "minimap"),
        }
    }
}

/// Configuration for importing and exporting game files
#[derive(Debug, Clone, Default)]
pub struct GameFileConfiguration {
    pub reader: RecordReaderConfiguration,
    pub pack: PackConfiguration,
}

/// Upper-case a stem and cut it to the 8 characters the game accepts
pub fn dos_stem(stem: &str) -> String {
    stem.chars()
        .take(STEM_CAPACITY)
        .collect::<String>()
        .to_ascii_uppercase()
}

fn decode_fresh<T: RecordCodec>(
    data: &[u8],
    packed: bool,
    config: &GameFileConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<T> {
    let mut entity = T::default();
    if packed {
        let raw = unpack(data, notifications)?;
        if raw.len() != T::RECORD_SIZE && !config.reader.failsafe {
            return Err(JnseError::MalformedRecord(format!(
                "{} unpacks to {} bytes, expected {}",
                T::RECORD_NAME,
                raw.len(),
                T::RECORD_SIZE
            )));
        }
        entity.decode_from(&raw, &config.reader, notifications)?;
    } else {
        entity.decode_from(data, &config.reader, notifications)?;
    }
    Ok(entity)
}

fn encode_packed<T: RecordCodec>(entity: &T, config: &PackConfiguration) -> Result<Vec<u8>> {
    pack(&entity.encode()?, config)
}

impl Course {
    /// Import one game file by name.
    ///
    /// The file is decoded into a fresh entity which replaces the course's
    /// own only when decoding succeeds; a failing file leaves the course
    /// untouched. A packed file must unpack to exactly the record size
    /// unless the reader is failsafe. Files that are recognised but not
    /// decoded, or not recognised at all, only produce a `NotSupported`
    /// notification.
    pub fn import_file(
        &mut self,
        name: &str,
        data: &[u8],
        config: &GameFileConfiguration,
    ) -> Result<NotificationCollection> {
        let mut notifications = NotificationCollection::new();
        let Some((_, kind)) = GameFileKind::from_file_name(name) else {
            notifications.notify(
                NotificationType::NotSupported,
                format!("{name}: not a course file"),
            );
            return Ok(notifications);
        };

        match kind {
            GameFileKind::Course => {
                self.decode_from(data, &config.reader, &mut notifications)?;
            }
            GameFileKind::Plot => {
                self.plot = decode_fresh::<Plot>(data, true, config, &mut notifications)?;
            }
            GameFileKind::Hole(index) => {
                self.holes[index] = decode_fresh::<Hole>(data, true, config, &mut notifications)?;
            }
            GameFileKind::Panorama => {
                self.panorama = decode_fresh::<Panorama>(data, true, config, &mut notifications)?;
            }
            GameFileKind::ObjectLibrary | GameFileKind::Minimap => {
                notifications.notify(
                    NotificationType::NotSupported,
                    format!("{name}: {kind} files are not decoded"),
                );
                return Ok(notifications);
            }
        }

        log::debug!(
            "imported {kind} from {name} ({} bytes, {} notifications)",
            data.len(),
            notifications.len()
        );
        Ok(notifications)
    }

    /// Encode every game file of the course.
    ///
    /// Returns `(file name, bytes)` pairs in the order PRC, LDM, H1..H18,
    /// DZV. Holes are encoded in parallel.
    pub fn export_files(
        &self,
        stem: &str,
        config: &GameFileConfiguration,
    ) -> Result<Vec<(String, Vec<u8>)>> {
        let stem = dos_stem(stem);

        let holes = self.holes[..]
            .par_iter()
            .map(|hole| encode_packed(hole, &config.pack))
            .collect::<Result<Vec<_>>>()?;

        let mut files = Vec::with_capacity(HOLE_COUNT + 3);
        files.push((GameFileKind::Course.file_name(&stem), self.encode()?));
        files.push((
            GameFileKind::Plot.file_name(&stem),
            encode_packed(&self.plot, &config.pack)?,
        ));
        for (index, data) in holes.into_iter().enumerate() {
            files.push((GameFileKind::Hole(index).file_name(&stem), data));
        }
        files.push((
            GameFileKind::Panorama.file_name(&stem),
            encode_packed(&self.panorama, &config.pack)?,
        ));

        log::debug!("exported {} files for {stem}", files.len());
        Ok(files)
    }

    /// Encode every game file and store them in a ZIP archive.
    pub fn export_archive(
        &self,
        stem: &str,
        modified: NaiveDateTime,
        config: &GameFileConfiguration,
    ) -> Result<Vec<u8>> {
        let mut writer = ArchiveWriter::new();
        for (name, data) in self.export_files(stem, config)? {
            writer.add_file(name, data, modified);
        }
        writer.finish()
    }
}
