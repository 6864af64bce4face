//! Reading and writing the game's files.
//!
//! - [`record`]: fixed-offset record codecs for each entity
//! - [`pack`]: the packed-file wrapper and its run-length codec
//! - [`archive`]: stored-only ZIP writer
//! - [`game_files`]: file naming and whole-course import/export

pub mod archive;
pub mod game_files;
pub mod pack;
pub mod record;

pub use archive::{ArchiveEntry, ArchiveWriter};
pub use game_files::{GameFileConfiguration, GameFileKind};
pub use pack::{pack, unpack, DeclaredSize, PackConfiguration};
pub use record::{RecordCodec, RecordReaderConfiguration};
