//! Binary stage of the file-id codec: fixed-width little-endian records.
//!
//! Records are not self-describing beyond the leading discriminant, so
//! the reader is strict: reading past the end and leftover trailing
//! bytes are both decode failures.

use crate::error::InvalidFileId;

/// Cursor over a raw record, reading fixed-width little-endian fields.
pub struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], InvalidFileId> {
        let end = self.pos.checked_add(n).ok_or(InvalidFileId)?;
        let slice = self.buf.get(self.pos..end).ok_or(InvalidFileId)?;
        self.pos = end;
        Ok(slice)
    }

    pub fn i32(&mut self) -> Result<i32, InvalidFileId> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn i64(&mut self) -> Result<i64, InvalidFileId> {
        let bytes = self.take(8)?;
        Ok(i64::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn u8(&mut self) -> Result<u8, InvalidFileId> {
        Ok(self.take(1)?[0])
    }

    /// Fails unless every byte of the record has been consumed.
    pub fn finish(self) -> Result<(), InvalidFileId> {
        if self.pos == self.buf.len() {
            Ok(())
        } else {
            Err(InvalidFileId)
        }
    }
}

/// Builder for raw records, the structural inverse of [`RecordReader`].
#[derive(Default)]
pub struct RecordWriter {
    buf: Vec<u8>,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i64(&mut self, v: i64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
