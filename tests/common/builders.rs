//! Test course builders.
//!
//! `create_sample_course()` fills every part of a course with recognisable,
//! non-default values so round trips catch any field that is dropped.

#![allow(dead_code)]

use jnse::course::{BoundsStyle, WallStyle, WindDirection, WindSpeed};
use jnse::{Course, Frame, GridPoint, HoleRouting, PlacedObject};

/// Deterministic pseudo-terrain: long runs with scattered single cells
pub fn terrain_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 11 == 0 {
                (state >> 24) as u8
            } else {
                (i / 97) as u8 ^ (seed as u8)
            }
        })
        .collect()
}

/// Create a course with every record populated.
pub fn create_sample_course() -> Course {
    let mut course = Course::new();
    course.name = "BAYSIDE LINKS".to_string();
    course.unknown_40 = 0x11;
    course.set_bounds_style(BoundsStyle::HeavyRough);
    course.overlay = [0, 1, 0, 1, 1, 0, 0, 1];
    for i in 0..=255u8 {
        course.palette.set_rgb(i, [i, 255 - i, i / 2]);
    }

    for (i, routing) in course.routings.iter_mut().enumerate() {
        let i = i as i32;
        *routing = HoleRouting {
            par: 3 + (i % 3) as u8,
            frame: Frame::new(-40 + i * 13, 25 - i * 7, (i * 37) % 600 - 300),
            vertices: (0..(i as usize % 5) + 1)
                .map(|v| GridPoint::new(20 + v as i32 * 45, 40 - v as i32))
                .collect(),
        };
    }

    let plot = &mut course.plot;
    plot.quote = "Wind off the bay decides everything here.".to_string();
    plot.set_wind_direction(WindDirection::Northeast);
    plot.set_wind_speed(WindSpeed::Gentle);
    plot.objects = (0..30)
        .map(|i| PlacedObject::new(i as u8 + 1, (i * 7) as u8, (i * 3) as u8))
        .collect();
    plot.terrain
        .copy_from(&terrain_pattern(plot.terrain.len(), 7))
        .expect("plot terrain size");
    plot.elevation
        .copy_from(&terrain_pattern(plot.elevation.len(), 8))
        .expect("plot elevation size");
    plot.unknown_header[16] = 0x42;
    plot.unknown_after_kinds = [9; 9];
    plot.unknown_tail[0] = 0x77;

    for (i, hole) in course.holes.iter_mut().enumerate() {
        hole.quote = format!("Hole {} quote", i + 1);
        hole.set_wall_style(if i % 2 == 0 {
            WallStyle::StoneWalls
        } else {
            WallStyle::NoWalls
        });
        hole.objects = (0..i)
            .map(|k| PlacedObject::new(50 + k as u8, (k * 11) as u8, (k * 4) as u8))
            .collect();
        for (t, tee) in hole.tees.iter_mut().enumerate() {
            *tee = PlacedObject::new(t as u8 + 1, 10 + t as u8 * 4, 40);
        }
        for (p, pin) in hole.pins.iter_mut().enumerate() {
            *pin = PlacedObject::new(p as u8 + 1, 200 + p as u8, 35 + p as u8 * 2);
        }
        hole.terrain
            .copy_from(&terrain_pattern(hole.terrain.len(), 100 + i as u32))
            .expect("hole terrain size");
        hole.elevation
            .copy_from(&terrain_pattern(hole.elevation.len(), 200 + i as u32))
            .expect("hole elevation size");
        hole.unknown_flags[0] = i as u8;
    }

    course
        .panorama
        .image
        .copy_from(&terrain_pattern(course.panorama.image.len(), 99))
        .expect("panorama size");
    course
}
