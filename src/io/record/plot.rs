//! Plot record (`.LDM` after unpacking), 58611 bytes.

use super::layout::{fit_record, Field, RecordBuilder, RecordView};
use super::{grid_cells, RecordCodec, RecordReaderConfiguration, OBJECT_TABLE};
use crate::course::{Plot, PLOT_HEIGHT, PLOT_WIDTH, QUOTE_FIELD_LEN};
use crate::error::Result;
use crate::notification::NotificationCollection;
use crate::types::Grid;

pub const PLOT_RECORD_SIZE: usize = 58611;

const WIND_DIRECTION: usize = 1;
const WIND_SPEED: usize = 2;
const UNKNOWN_HEADER: usize = 3;
const QUOTE: Field = Field::new(20, QUOTE_FIELD_LEN);
const UNKNOWN_AFTER_KINDS: usize = 382;
const UNKNOWN_AFTER_X: usize = 632;
const UNKNOWN_TAIL: Field = Field::new(882, 129);
const TERRAIN: Field = Field::new(1011, PLOT_WIDTH * PLOT_HEIGHT);
const ELEVATION: Field = Field::new(29811, PLOT_WIDTH * PLOT_HEIGHT);

impl RecordCodec for Plot {
    const RECORD_SIZE: usize = PLOT_RECORD_SIZE;
    const RECORD_NAME: &'static str = "Plot";

    fn decode_from(
        &mut self,
        data: &[u8],
        config: &RecordReaderConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let data = fit_record(
            Self::RECORD_NAME,
            data,
            PLOT_RECORD_SIZE,
            config.failsafe,
            notifications,
        )?;
        let view = RecordView::new(&data);

        let terrain = Grid::from_vec(PLOT_WIDTH, PLOT_HEIGHT, view.bytes(TERRAIN).to_vec())?;
        let elevation = Grid::from_vec(PLOT_WIDTH, PLOT_HEIGHT, view.bytes(ELEVATION).to_vec())?;
        let objects = OBJECT_TABLE.read(&view, Self::RECORD_NAME, notifications);

        *self = Plot {
            quote: view.text(QUOTE),
            wind_direction: view.u8(WIND_DIRECTION),
            wind_speed: view.u8(WIND_SPEED),
            objects,
            terrain,
            elevation,
            unknown_header: view.array(UNKNOWN_HEADER),
            unknown_after_kinds: view.array(UNKNOWN_AFTER_KINDS),
            unknown_after_x: view.array(UNKNOWN_AFTER_X),
            unknown_tail: view.array::<129>(UNKNOWN_TAIL.offset),
        };
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = RecordBuilder::new(PLOT_RECORD_SIZE);
        OBJECT_TABLE.write(&mut out, &self.objects)?;
        out.put_u8(WIND_DIRECTION, self.wind_direction);
        out.put_u8(WIND_SPEED, self.wind_speed);
        out.put_bytes(UNKNOWN_HEADER, &self.unknown_header);
        out.put_text(QUOTE, &self.quote, "plot quote")?;
        out.put_bytes(UNKNOWN_AFTER_KINDS, &self.unknown_after_kinds);
        out.put_bytes(UNKNOWN_AFTER_X, &self.unknown_after_x);

        out.put_bytes(UNKNOWN_TAIL.offset, &self.unknown_tail);
        out.put_bytes(
            TERRAIN.offset,
            grid_cells(&self.terrain, PLOT_WIDTH, PLOT_HEIGHT, "plot terrain")?,
        );
        out.put_bytes(
            ELEVATION.offset,
            grid_cells(&self.elevation, PLOT_WIDTH, PLOT_HEIGHT, "plot elevation")?,
        );
        Ok(out.finish())
    }
}
