//! Panorama record (`.DZV` after unpacking): the raw 1200×47 image.

use super::layout::fit_record;
use super::{grid_cells, RecordCodec, RecordReaderConfiguration};
use crate::course::{Panorama, PANORAMA_HEIGHT, PANORAMA_WIDTH};
use crate::error::Result;
use crate::notification::NotificationCollection;
use crate::types::Grid;

pub const PANORAMA_RECORD_SIZE: usize = PANORAMA_WIDTH * PANORAMA_HEIGHT;

impl RecordCodec for Panorama {
    const RECORD_SIZE: usize = PANORAMA_RECORD_SIZE;
    const RECORD_NAME: &'static str = "Panorama";

    fn decode_from(
        &mut self,
        data: &[u8],
        config: &RecordReaderConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let data = fit_record(
            Self::RECORD_NAME,
            data,
            PANORAMA_RECORD_SIZE,
            config.failsafe,
            notifications,
        )?;
        self.image = Grid::from_vec(PANORAMA_WIDTH, PANORAMA_HEIGHT, data.into_owned())?;
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(grid_cells(&self.image, PANORAMA_WIDTH, PANORAMA_HEIGHT, "panorama")?.to_vec())
    }
}
