//! Hole record (`.H1`..`.H18` after unpacking), 39411 bytes.
//!
//! Tee and pin descriptors sit in the gaps after the object arrays: kinds
//! at 382, x at 632, y at 882, four tees followed by five pins each time.

use super::layout::{fit_record, Field, RecordBuilder, RecordView};
use super::{grid_cells, RecordCodec, RecordReaderConfiguration, OBJECT_TABLE};
use crate::course::{Hole, PlacedObject, HOLE_HEIGHT, HOLE_WIDTH, QUOTE_FIELD_LEN, TEE_COUNT};
use crate::error::Result;
use crate::notification::NotificationCollection;
use crate::types::Grid;

pub const HOLE_RECORD_SIZE: usize = 39411;

const UNKNOWN_HEADER: usize = 1;
const WALL_STYLE: usize = 9;
const UNKNOWN_FLAGS: usize = 10;
const QUOTE: Field = Field::new(20, QUOTE_FIELD_LEN);
const MARKER_KINDS: usize = 382;
const MARKER_XS: usize = 632;
const MARKER_YS: usize = 882;
const UNKNOWN_TAIL: Field = Field::new(891, 120);
const TERRAIN: Field = Field::new(1011, HOLE_WIDTH * HOLE_HEIGHT);
const ELEVATION: Field = Field::new(20211, HOLE_WIDTH * HOLE_HEIGHT);

fn read_marker(view: &RecordView<'_>, slot: usize) -> PlacedObject {
    PlacedObject::new(
        view.u8(MARKER_KINDS + slot),
        view.u8(MARKER_XS + slot),
        view.u8(MARKER_YS + slot),
    )
}

fn write_marker(out: &mut RecordBuilder, slot: usize, marker: &PlacedObject) {
    out.put_u8(MARKER_KINDS + slot, marker.kind);
    out.put_u8(MARKER_XS + slot, marker.x);
    out.put_u8(MARKER_YS + slot, marker.y);
}

impl RecordCodec for Hole {
    const RECORD_SIZE: usize = HOLE_RECORD_SIZE;
    const RECORD_NAME: &'static str = "Hole";

    fn decode_from(
        &mut self,
        data: &[u8],
        config: &RecordReaderConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let data = fit_record(
            Self::RECORD_NAME,
            data,
            HOLE_RECORD_SIZE,
            config.failsafe,
            notifications,
        )?;
        let view = RecordView::new(&data);

        let terrain = Grid::from_vec(HOLE_WIDTH, HOLE_HEIGHT, view.bytes(TERRAIN).to_vec())?;
        let elevation = Grid::from_vec(HOLE_WIDTH, HOLE_HEIGHT, view.bytes(ELEVATION).to_vec())?;
        let objects = OBJECT_TABLE.read(&view, Self::RECORD_NAME, notifications);

        *self = Hole {
            quote: view.text(QUOTE),
            wall_style: view.u8(WALL_STYLE),
            objects,
            tees: std::array::from_fn(|i| read_marker(&view, i)),
            pins: std::array::from_fn(|i| read_marker(&view, TEE_COUNT + i)),
            terrain,
            elevation,
            unknown_header: view.array(UNKNOWN_HEADER),
            unknown_flags: view.array(UNKNOWN_FLAGS),
            unknown_tail: view.array::<120>(UNKNOWN_TAIL.offset),
        };
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = RecordBuilder::new(HOLE_RECORD_SIZE);
        OBJECT_TABLE.write(&mut out, &self.objects)?;
        out.put_bytes(UNKNOWN_HEADER, &self.unknown_header);
        out.put_u8(WALL_STYLE, self.wall_style);
        out.put_bytes(UNKNOWN_FLAGS, &self.unknown_flags);
        out.put_text(QUOTE, &self.quote, "hole quote")?;

        for (slot, marker) in self.tees.iter().chain(self.pins.iter()).enumerate() {
            write_marker(&mut out, slot, marker);
        }

        out.put_bytes(UNKNOWN_TAIL.offset, &self.unknown_tail);
        out.put_bytes(
            TERRAIN.offset,
            grid_cells(&self.terrain, HOLE_WIDTH, HOLE_HEIGHT, "hole terrain")?,
        );
        out.put_bytes(
            ELEVATION.offset,
            grid_cells(&self.elevation, HOLE_WIDTH, HOLE_HEIGHT, "hole elevation")?,
        );
        Ok(out.finish())
    }
}
