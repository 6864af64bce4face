//! # jnse
//!
//! A pure Rust library for reading and writing the course files of the golf
//! game *Jack Nicklaus Signature Edition*.
//!
//! The game stores a course as a set of small DOS files: a course record
//! with the routing of each hole, a land plot, eighteen holes and a
//! panorama, most of them run-length packed. This crate decodes them into
//! plain structs, encodes them back byte for byte, fits hole frames to
//! hand-drawn routings, and bundles the result into a ZIP archive.
//!
//! ## Features
//!
//! - Fixed-offset codecs for the course, plot, hole and panorama records,
//!   keeping every unidentified byte
//! - The game's run-length codec and its `"bs"` file wrapper
//! - Routing frame fitting with par derived from the routed length
//! - Stored-only ZIP output with CRC-32
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jnse::{Course, io::GameFileConfiguration};
//!
//! let config = GameFileConfiguration::default();
//! let mut course = Course::new();
//! for (name, bytes) in files {
//!     for note in course.import_file(&name, &bytes, &config)? {
//!         println!("{note}");
//!     }
//! }
//!
//! course.routings[0].complete_edit(&points)?;
//! let zip = course.export_archive("dunes", modified, &config)?;
//! # Ok::<(), jnse::JnseError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`course`] - the in-memory entities
//! - [`routing`] - hole routings and the frame fitter
//! - [`io`] - record codecs, packing, archives and file dispatch
//! - [`types`] - geometry, frames, grids and palettes

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod course;
pub mod error;
pub mod io;
pub mod notification;
pub mod routing;
pub mod types;

// Re-export commonly used types
pub use error::{JnseError, Result};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Frame, Grid, GridPoint, Palette, TerrainPalette, Vector2};

// Re-export entity types
pub use course::{Course, Hole, Panorama, PlacedObject, Plot};
pub use routing::{fit_routing, HoleRouting, RoutingEdit, RoutingFit};

// Re-export I/O types
pub use io::{ArchiveWriter, GameFileConfiguration, GameFileKind, RecordCodec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
