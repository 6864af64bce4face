//! Course record (`.PRC`), 1304 bytes, never packed.

use super::layout::{fit_record, Field, RecordBuilder, RecordView};
use super::{RecordCodec, RecordReaderConfiguration};
use crate::course::{Course, HOLE_COUNT, NAME_FIELD_LEN, OVERLAY_COUNT};
use crate::error::{JnseError, Result};
use crate::notification::NotificationCollection;
use crate::routing::{HoleRouting, VERTEX_CAPACITY};
use crate::types::{Frame, GridPoint, Palette, PALETTE_BYTES};

pub const COURSE_RECORD_SIZE: usize = 1304;

const NAME: Field = Field::new(0, NAME_FIELD_LEN);
const PARS: usize = 22;
const UNKNOWN_40: usize = 40;
const FRAME_X: usize = 41;
const FRAME_Y: usize = 77;
const FRAME_R: usize = 113;
const VERTEX_COUNTS: usize = 149;
const VERTEX_X: Field = Field::new(167, HOLE_COUNT * VERTEX_STRIDE);
const VERTEX_Y: Field = Field::new(347, HOLE_COUNT * VERTEX_STRIDE);
const VERTEX_STRIDE: usize = VERTEX_CAPACITY * 2;
const OUT_OF_BOUNDS: usize = 527;
const OVERLAY: usize = 528;
const PALETTE: Field = Field::new(536, PALETTE_BYTES);

fn read_routing(
    view: &RecordView<'_>,
    hole: usize,
    notifications: &mut NotificationCollection,
) -> HoleRouting {
    let mut count = view.u8(VERTEX_COUNTS + hole) as usize;
    if count > VERTEX_CAPACITY {
        notifications.warn(format!(
            "hole {} vertex count {count} clamped to {VERTEX_CAPACITY}",
            hole + 1
        ));
        count = VERTEX_CAPACITY;
    }
    let xs = VERTEX_X.element(hole, VERTEX_STRIDE);
    let ys = VERTEX_Y.element(hole, VERTEX_STRIDE);

    HoleRouting {
        par: view.u8(PARS + hole),
        frame: Frame::new(
            view.i16(FRAME_X + hole * 2),
            view.i16(FRAME_Y + hole * 2),
            view.i16(FRAME_R + hole * 2),
        ),
        vertices: (0..count)
            .map(|v| GridPoint::new(view.i16(xs.offset + v * 2), view.i16(ys.offset + v * 2)))
            .collect(),
    }
}

fn write_routing(out: &mut RecordBuilder, hole: usize, routing: &HoleRouting) -> Result<()> {
    if routing.vertices.len() > VERTEX_CAPACITY {
        return Err(JnseError::CapacityExceeded {
            field: "routing vertices",
            len: routing.vertices.len(),
            capacity: VERTEX_CAPACITY,
        });
    }
    out.put_u8(PARS + hole, routing.par);
    out.put_i16(FRAME_X + hole * 2, routing.frame.x);
    out.put_i16(FRAME_Y + hole * 2, routing.frame.y);
    out.put_i16(FRAME_R + hole * 2, routing.frame.r);
    out.put_u8(VERTEX_COUNTS + hole, routing.vertices.len() as u8);

    let xs = VERTEX_X.element(hole, VERTEX_STRIDE);
    let ys = VERTEX_Y.element(hole, VERTEX_STRIDE);
    for (v, p) in routing.vertices.iter().enumerate() {
        out.put_i16(xs.offset + v * 2, p.x);
        out.put_i16(ys.offset + v * 2, p.y);
    }
    Ok(())
}

/// The course record holds the name, routing summaries, flags and
/// palette. Plot, holes and panorama live in their own files and are left
/// alone by this codec.
impl RecordCodec for Course {
    const RECORD_SIZE: usize = COURSE_RECORD_SIZE;
    const RECORD_NAME: &'static str = "Course";

    fn decode_from(
        &mut self,
        data: &[u8],
        config: &RecordReaderConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let data = fit_record(
            Self::RECORD_NAME,
            data,
            COURSE_RECORD_SIZE,
            config.failsafe,
            notifications,
        )?;
        let view = RecordView::new(&data);

        let routings: [HoleRouting; HOLE_COUNT] =
            std::array::from_fn(|hole| read_routing(&view, hole, notifications));

        self.name = view.text(NAME);
        self.routings = routings;
        self.unknown_40 = view.u8(UNKNOWN_40);
        self.out_of_bounds = view.u8(OUT_OF_BOUNDS);
        self.overlay = view.array::<OVERLAY_COUNT>(OVERLAY);
        self.palette = Palette::from_bytes(view.array::<PALETTE_BYTES>(PALETTE.offset));
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = RecordBuilder::new(COURSE_RECORD_SIZE);
        out.put_text(NAME, &self.name, "course name")?;
        for (hole, routing) in self.routings.iter().enumerate() {
            write_routing(&mut out, hole, routing)?;
        }
        out.put_u8(UNKNOWN_40, self.unknown_40);
        out.put_u8(OUT_OF_BOUNDS, self.out_of_bounds);
        out.put_bytes(OVERLAY, &self.overlay);
        out.put_bytes(PALETTE.offset, self.palette.as_bytes());
        Ok(out.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationType;

    fn sample() -> Course {
        let mut course = Course::new();
        course.name = "PEBBLE DUNES".to_string();
        course.unknown_40 = 0x5a;
        course.out_of_bounds = 1;
        course.overlay = [1, 0, 1, 0, 0, 0, 0, 7];
        course.palette.set_rgb(255, [1, 2, 3]);
        course.routings[0] = HoleRouting {
            par: 4,
            frame: Frame::new(-18, -10, 0),
            vertices: vec![GridPoint::new(72, 40), GridPoint::new(172, 40)],
        };
        course.routings[17] = HoleRouting {
            par: 5,
            frame: Frame::new(200, -300, -150),
            vertices: vec![GridPoint::new(-1, 0); 5],
        };
        course
    }

    #[test]
    fn test_layout_offsets() {
        let data = sample().encode().unwrap();
        assert_eq!(data.len(), COURSE_RECORD_SIZE);
        assert_eq!(&data[..12], b"PEBBLE DUNES");
        assert_eq!(data[12], 0);
        assert_eq!(data[22], 4);
        assert_eq!(data[39], 5);
        assert_eq!(data[40], 0x5a);
        assert_eq!(&data[41..43], &[0xee, 0xff]);
        assert_eq!(&data[77..79], &[0xf6, 0xff]);
        assert_eq!(data[149], 2);
        assert_eq!(&data[167..171], &[72, 0, 172, 0]);
        assert_eq!(&data[347..351], &[40, 0, 40, 0]);
        assert_eq!(&data[113 + 34..113 + 36], &[0x6a, 0xff]);
        assert_eq!(data[527], 1);
        assert_eq!(data[535], 7);
        assert_eq!(&data[1301..], &[1, 2, 3]);
    }

    #[test]
    fn test_unused_vertex_slots_are_zero() {
        let data = sample().encode().unwrap();
        assert!(data[171..177].iter().all(|&b| b == 0));
        assert!(data[351..357].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_round_trip() {
        let course = sample();
        let decoded = Course::decode(&course.encode().unwrap()).unwrap();
        assert_eq!(decoded.name, course.name);
        assert_eq!(decoded.routings, course.routings);
        assert_eq!(decoded.unknown_40, course.unknown_40);
        assert_eq!(decoded.overlay, course.overlay);
        assert_eq!(decoded.palette, course.palette);
    }

    #[test]
    fn test_short_record_leaves_course_untouched() {
        let mut course = sample();
        let err = course
            .decode_from(
                &[0u8; 100],
                &RecordReaderConfiguration::default(),
                &mut NotificationCollection::new(),
            )
            .unwrap_err();
        assert!(matches!(err, JnseError::MalformedRecord(_)));
        assert_eq!(course, sample());
    }

    #[test]
    fn test_failsafe_zero_fills() {
        let mut course = sample();
        let mut notes = NotificationCollection::new();
        let config = RecordReaderConfiguration { failsafe: true };
        course.decode_from(b"SHORT", &config, &mut notes).unwrap();
        assert_eq!(course.name, "SHORT");
        assert_eq!(course.total_par(), 0);
        assert!(notes.has_type(NotificationType::Error));
    }

    #[test]
    fn test_vertex_count_clamped() {
        let mut data = sample().encode().unwrap();
        data[149 + 3] = 9;
        let mut course = Course::new();
        let mut notes = NotificationCollection::new();
        course
            .decode_from(&data, &RecordReaderConfiguration::default(), &mut notes)
            .unwrap();
        assert_eq!(course.routings[3].vertices.len(), VERTEX_CAPACITY);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_too_many_vertices() {
        let mut course = sample();
        course.routings[2].vertices = vec![GridPoint::new(0, 0); 6];
        assert!(matches!(
            course.encode(),
            Err(JnseError::CapacityExceeded { len: 6, .. })
        ));
    }
}
