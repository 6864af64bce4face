//! Fixed-offset record codecs for the game's entities.
//!
//! Each entity maps onto one record of fixed size. Decoding checks the
//! buffer length once, then reads every field through a
//! [`layout::RecordView`]; encoding writes into a zero-filled buffer of the
//! record size. Reserved byte ranges are kept on the entity and written
//! back unchanged.

pub mod course;
pub mod hole;
pub(crate) mod layout;
pub mod panorama;
pub mod plot;

pub use layout::{decode_text, encode_text, Field};

use crate::course::{PlacedObject, OBJECT_CAPACITY};
use crate::error::{JnseError, Result};
use crate::notification::NotificationCollection;
use crate::types::Grid;
use layout::{RecordBuilder, RecordView};

/// Configuration for decoding records
#[derive(Debug, Clone, Default)]
pub struct RecordReaderConfiguration {
    /// Zero-fill short records instead of failing; the shortfall is
    /// reported as an `Error` notification.
    pub failsafe: bool,
}

/// An entity stored as one fixed-size record.
pub trait RecordCodec: Sized + Default {
    /// Size of the record in bytes
    const RECORD_SIZE: usize;

    /// Name used in messages
    const RECORD_NAME: &'static str;

    /// Decode `data` into `self`.
    ///
    /// Nothing is written to `self` unless decoding succeeds.
    fn decode_from(
        &mut self,
        data: &[u8],
        config: &RecordReaderConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<()>;

    /// Encode into a new buffer of exactly `RECORD_SIZE` bytes
    fn encode(&self) -> Result<Vec<u8>>;

    /// Decode into a default entity with the default configuration
    fn decode(data: &[u8]) -> Result<Self> {
        let mut entity = Self::default();
        entity.decode_from(
            data,
            &RecordReaderConfiguration::default(),
            &mut NotificationCollection::new(),
        )?;
        Ok(entity)
    }
}

/// Field offsets of a parallel object list (kinds, x and y arrays).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectTable {
    pub count: usize,
    pub kinds: usize,
    pub xs: usize,
    pub ys: usize,
}

/// Plot and hole records share the same object table layout.
pub(crate) const OBJECT_TABLE: ObjectTable = ObjectTable {
    count: 0,
    kinds: 141,
    xs: 391,
    ys: 641,
};

impl ObjectTable {
    pub fn read(
        &self,
        view: &RecordView<'_>,
        what: &str,
        notifications: &mut NotificationCollection,
    ) -> Vec<PlacedObject> {
        let mut count = view.u8(self.count) as usize;
        if count > OBJECT_CAPACITY {
            notifications.warn(format!(
                "{what} object count {count} clamped to {OBJECT_CAPACITY}"
            ));
            count = OBJECT_CAPACITY;
        }
        (0..count)
            .map(|i| {
                PlacedObject::new(
                    view.u8(self.kinds + i),
                    view.u8(self.xs + i),
                    view.u8(self.ys + i),
                )
            })
            .collect()
    }

    pub fn write(&self, out: &mut RecordBuilder, objects: &[PlacedObject]) -> Result<()> {
        if objects.len() > OBJECT_CAPACITY {
            return Err(JnseError::CapacityExceeded {
                field: "objects",
                len: objects.len(),
                capacity: OBJECT_CAPACITY,
            });
        }
        out.put_u8(self.count, objects.len() as u8);
        for (i, object) in objects.iter().enumerate() {
            out.put_u8(self.kinds + i, object.kind);
            out.put_u8(self.xs + i, object.x);
            out.put_u8(self.ys + i, object.y);
        }
        Ok(())
    }
}

/// Cells of a grid whose dimensions must match the record's
pub(crate) fn grid_cells<'a>(
    grid: &'a Grid,
    width: usize,
    height: usize,
    what: &'static str,
) -> Result<&'a [u8]> {
    if grid.width() != width || grid.height() != height {
        return Err(JnseError::CapacityExceeded {
            field: what,
            len: grid.len(),
            capacity: width * height,
        });
    }
    Ok(grid.as_bytes())
}
