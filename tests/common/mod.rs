//! Shared test utilities for jnse integration tests.
//!
//! Every test crate imports this via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use byteorder::{ByteOrder, LittleEndian};
use chrono::{NaiveDate, NaiveDateTime};

// ===========================================================================
// Timestamps
// ===========================================================================

/// A fixed modification time so archives are reproducible
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1996, 7, 14)
        .and_then(|d| d.and_hms_opt(9, 30, 12))
        .expect("valid date")
}

// ===========================================================================
// Byte helpers
// ===========================================================================

pub fn u16_at(data: &[u8], offset: usize) -> u16 {
    LittleEndian::read_u16(&data[offset..offset + 2])
}

pub fn u32_at(data: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&data[offset..offset + 4])
}

/// First offset where two buffers differ, or `None` if they are identical
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    (0..a.len().max(b.len())).find(|&i| a.get(i) != b.get(i))
}

/// Assert two encoded records are byte-identical, reporting the first
/// differing offset.
pub fn assert_same_bytes(label: &str, a: &[u8], b: &[u8]) {
    if let Some(offset) = first_difference(a, b) {
        panic!(
            "{label}: buffers differ at byte {offset} (lengths {} and {}): {:?} vs {:?}",
            a.len(),
            b.len(),
            a.get(offset),
            b.get(offset)
        );
    }
}
