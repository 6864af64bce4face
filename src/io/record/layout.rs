//! Length-checked views for fixed-offset records.
//!
//! Every record format is described by [`Field`] constants (offset and
//! size). [`RecordView`] reads them from a buffer whose length has already
//! been checked against the record size; [`RecordBuilder`] writes them into
//! a zero-filled buffer of the record size. Multi-byte integers are
//! little-endian (`byteorder`), text is Windows-1252 (`encoding_rs`).

use crate::error::{JnseError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// A byte range inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub len: usize,
}

impl Field {
    pub const fn new(offset: usize, len: usize) -> Self {
        Field { offset, len }
    }

    /// One past the last byte
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Sub-field of `len` bytes starting `index * len` bytes into this one
    pub const fn element(&self, index: usize, len: usize) -> Field {
        Field::new(self.offset + index * len, len)
    }
}

/// Bring `data` to exactly `size` bytes or fail.
///
/// Short input is a `MalformedRecord` unless `failsafe` is set, in which
/// case it is zero-filled and reported. Surplus bytes are ignored and
/// reported.
pub(crate) fn fit_record<'a>(
    name: &str,
    data: &'a [u8],
    size: usize,
    failsafe: bool,
    notifications: &mut NotificationCollection,
) -> Result<Cow<'a, [u8]>> {
    if data.len() < size {
        if !failsafe {
            return Err(JnseError::short_record(name, data.len(), size));
        }
        notifications.notify(
            NotificationType::Error,
            format!(
                "{name} record is {} bytes, zero-filled to {size}",
                data.len()
            ),
        );
        let mut padded = data.to_vec();
        padded.resize(size, 0);
        return Ok(Cow::Owned(padded));
    }
    if data.len() > size {
        notifications.warn(format!(
            "{name} record has {} surplus bytes",
            data.len() - size
        ));
    }
    Ok(Cow::Borrowed(&data[..size]))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read-only view of a record buffer of verified length.
pub(crate) struct RecordView<'a> {
    data: &'a [u8],
}

impl<'a> RecordView<'a> {
    /// Wrap a buffer; callers must have checked its length with
    /// [`fit_record`].
    pub fn new(data: &'a [u8]) -> Self {
        RecordView { data }
    }

    pub fn u8(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    /// Signed 16-bit little-endian value, sign-extended
    pub fn i16(&self, offset: usize) -> i32 {
        LittleEndian::read_i16(&self.data[offset..offset + 2]) as i32
    }

    pub fn bytes(&self, field: Field) -> &'a [u8] {
        &self.data[field.offset..field.end()]
    }

    /// Copy a field into a fixed-size array
    pub fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[offset..offset + N]);
        out
    }

    /// Null-terminated text; the whole field when no null byte is present
    pub fn text(&self, field: Field) -> String {
        decode_text(self.bytes(field))
    }
}

/// Decode null-terminated Windows-1252 text
pub fn decode_text(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&raw[..end]);
    text.into_owned()
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Zero-filled record buffer being populated field by field.
pub(crate) struct RecordBuilder {
    data: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(size: usize) -> Self {
        RecordBuilder {
            data: vec![0; size],
        }
    }

    pub fn put_u8(&mut self, offset: usize, value: u8) {
        self.data[offset] = value;
    }

    /// Truncate to 16 bits and write little-endian
    pub fn put_i16(&mut self, offset: usize, value: i32) {
        LittleEndian::write_i16(&mut self.data[offset..offset + 2], value as i16);
    }

    pub fn put_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Write null-terminated text into `field`, zero-padded.
    ///
    /// The last byte of the field is reserved for the terminator, so at
    /// most `field.len - 1` characters fit.
    pub fn put_text(&mut self, field: Field, text: &str, what: &'static str) -> Result<()> {
        let encoded = encode_text(text, field.len.saturating_sub(1), what)?;
        self.put_bytes(field.offset, &encoded);
        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// Encode text as Windows-1252, one byte per character.
///
/// Characters with no Windows-1252 byte (and embedded nulls) become `?`.
/// Text longer than `capacity` characters is rejected.
pub fn encode_text(text: &str, capacity: usize, what: &'static str) -> Result<Vec<u8>> {
    let len = text.chars().count();
    if len > capacity {
        return Err(JnseError::CapacityExceeded {
            field: what,
            len,
            capacity,
        });
    }

    let mut out = Vec::with_capacity(len);
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let (bytes, _, had_errors) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        match bytes.as_ref() {
            [b] if !had_errors && *b != 0 => out.push(*b),
            _ => out.push(b'?'),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed16_decode() {
        let data = [0x34, 0x12, 0xff, 0xff, 0x00, 0x80];
        let view = RecordView::new(&data);
        assert_eq!(view.i16(0), 0x1234);
        assert_eq!(view.i16(2), -1);
        assert_eq!(view.i16(4), -32768);
    }

    #[test]
    fn test_signed16_encode_truncates() {
        let mut b = RecordBuilder::new(4);
        b.put_i16(0, -2);
        b.put_i16(2, 0x1_2345);
        assert_eq!(b.finish(), vec![0xfe, 0xff, 0x45, 0x23]);
    }

    #[test]
    fn test_text_stops_at_null() {
        assert_eq!(decode_text(b"PEBBLE\0XYZ"), "PEBBLE");
        assert_eq!(decode_text(b"FULL"), "FULL");
        assert_eq!(decode_text(b"\0abc"), "");
    }

    #[test]
    fn test_text_windows_1252() {
        assert_eq!(decode_text(&[0x43, 0x61, 0x66, 0xe9]), "Café");
        assert_eq!(encode_text("Café", 10, "t").unwrap(), vec![0x43, 0x61, 0x66, 0xe9]);
        assert_eq!(encode_text("a\u{4e2d}b", 10, "t").unwrap(), b"a?b".to_vec());
    }

    #[test]
    fn test_text_capacity() {
        assert!(encode_text("abc", 3, "t").is_ok());
        let err = encode_text("abcd", 3, "t").unwrap_err();
        assert!(matches!(err, JnseError::CapacityExceeded { len: 4, capacity: 3, .. }));
    }

    #[test]
    fn test_put_text_zero_pads() {
        let mut b = RecordBuilder::new(6);
        b.put_text(Field::new(0, 6), "AB", "t").unwrap();
        assert_eq!(b.finish(), vec![b'A', b'B', 0, 0, 0, 0]);
    }

    #[test]
    fn test_put_text_keeps_terminator() {
        let mut b = RecordBuilder::new(4);
        b.put_text(Field::new(0, 4), "XYZ", "t").unwrap();
        let err = b.put_text(Field::new(0, 4), "WXYZ", "t").unwrap_err();
        assert!(matches!(err, JnseError::CapacityExceeded { len: 4, capacity: 3, .. }));
        assert_eq!(b.finish(), b"XYZ\0".to_vec());
    }

    #[test]
    fn test_fit_record() {
        let mut notes = NotificationCollection::new();
        let data = [1u8, 2, 3];

        assert!(fit_record("Test", &data, 4, false, &mut notes).is_err());

        let fitted = fit_record("Test", &data, 4, true, &mut notes).unwrap();
        assert_eq!(fitted.as_ref(), &[1, 2, 3, 0]);
        assert!(notes.has_type(NotificationType::Error));

        let fitted = fit_record("Test", &data, 2, false, &mut notes).unwrap();
        assert_eq!(fitted.as_ref(), &[1, 2]);
        assert!(notes.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_field_element() {
        let f = Field::new(167, 180);
        assert_eq!(f.element(2, 10), Field::new(187, 10));
        assert_eq!(f.end(), 347);
    }
}
