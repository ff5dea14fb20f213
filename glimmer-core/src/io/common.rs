//! Scalar readers and writers shared by every codec.
//!
//! Both sides keep a cursor of how many bytes have passed through them, so errors can report
//! where in a stream they happened and encoders can report their size.

use az::CheckedAs;
use std::io::{ErrorKind as IOErrorKind, Read, Write};

use super::{
    error::{DecodeError, EncodeError},
    ByteOrder, Layout,
};

/// Upper bound on how many elements a decoder reserves ahead of time from a count it read.
///
/// Counts come from the file and can't be trusted! Longer sequences still decode, they just
/// grow as elements actually arrive.
pub const PREALLOCATION_LIMIT: usize = 4096;

/// Reads fixed-width scalars in the byte order of a [`Layout`].
pub struct WireReader<R> {
    reader: R,
    layout: Layout,
    /// Bytes consumed since construction.
    cursor: u64,
}

macro_rules! read_scalar {
    ($name:ident, $ty:ty) => {
        pub fn $name(&mut self) -> Result<$ty, DecodeError> {
            let bytes = self.read_bytes::<{ std::mem::size_of::<$ty>() }>()?;
            Ok(match self.layout.byte_order {
                ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                ByteOrder::Native => <$ty>::from_ne_bytes(bytes),
            })
        }
    };
}

impl<R: Read> WireReader<R> {
    pub fn new(reader: R, layout: Layout) -> Self {
        Self {
            reader,
            layout,
            cursor: 0,
        }
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    /// Switch layouts mid-stream, eg. once a header has named one.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }
    /// Bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.cursor
    }
    pub fn into_inner(self) -> R {
        self.reader
    }
    /// Read exactly `N` bytes.
    /// # Errors
    /// [`DecodeError::Truncated`] if the stream ends first.
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut bytes = [0; N];
        match self.reader.read_exact(&mut bytes) {
            Ok(()) => {
                self.cursor += N as u64;
                Ok(bytes)
            }
            Err(e) if e.kind() == IOErrorKind::UnexpectedEof => Err(DecodeError::Truncated {
                offset: self.cursor,
            }),
            Err(e) => Err(DecodeError::Io(e)),
        }
    }
    read_scalar!(read_u8, u8);
    read_scalar!(read_u32, u32);
    read_scalar!(read_i32, i32);
    read_scalar!(read_u64, u64);
    read_scalar!(read_f32, f32);
    /// A one-byte bool. Anything but zero or one is rejected rather than guessed at.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidFlag(other)),
        }
    }
    /// A 64-bit element count, checked to be addressable.
    pub fn read_count(&mut self) -> Result<usize, DecodeError> {
        let count = self.read_u64()?;
        count.checked_as().ok_or(DecodeError::CountOverflow(count))
    }
    /// Consume whatever is left in the stream, returning how many bytes that was.
    pub fn drain(&mut self) -> Result<u64, DecodeError> {
        let drained = std::io::copy(&mut self.reader, &mut std::io::sink())?;
        self.cursor = self.cursor.saturating_add(drained);
        Ok(drained)
    }
}

/// Writes fixed-width scalars in the byte order of a [`Layout`].
pub struct WireWriter<W> {
    writer: W,
    layout: Layout,
    /// Bytes written since construction.
    cursor: u64,
}

macro_rules! write_scalar {
    ($name:ident, $ty:ty) => {
        pub fn $name(&mut self, value: $ty) -> Result<(), EncodeError> {
            let bytes = match self.layout.byte_order {
                ByteOrder::Little => value.to_le_bytes(),
                ByteOrder::Native => value.to_ne_bytes(),
            };
            self.write_bytes(&bytes)
        }
    };
}

impl<W: Write> WireWriter<W> {
    pub fn new(writer: W, layout: Layout) -> Self {
        Self {
            writer,
            layout,
            cursor: 0,
        }
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    /// Bytes written so far.
    pub fn position(&self) -> u64 {
        self.cursor
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.writer.write_all(bytes)?;
        self.cursor += bytes.len() as u64;
        Ok(())
    }
    write_scalar!(write_u8, u8);
    write_scalar!(write_u32, u32);
    write_scalar!(write_i32, i32);
    write_scalar!(write_u64, u64);
    write_scalar!(write_f32, f32);
    pub fn write_bool(&mut self, value: bool) -> Result<(), EncodeError> {
        self.write_u8(u8::from(value))
    }
    /// Write the length of a sequence about to be encoded.
    pub fn write_count(&mut self, len: usize) -> Result<(), EncodeError> {
        let count: u64 = len.checked_as().ok_or(EncodeError::CountOverflow(len))?;
        self.write_u64(count)
    }
    pub fn flush(&mut self) -> Result<(), EncodeError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{WireReader, WireWriter};
    use crate::io::{ByteOrder, DecodeError, Layout};
    use std::io::Cursor;

    fn layout(byte_order: ByteOrder) -> Layout {
        Layout {
            byte_order,
            ..Layout::CURRENT
        }
    }
    #[test]
    fn byte_orders() {
        let mut little = WireWriter::new(Vec::new(), layout(ByteOrder::Little));
        little.write_u32(0x0102_0304).unwrap();
        little.write_i32(-2).unwrap();
        assert_eq!(
            little.into_inner(),
            [0x04, 0x03, 0x02, 0x01, 0xFE, 0xFF, 0xFF, 0xFF]
        );

        let mut native = WireWriter::new(Vec::new(), layout(ByteOrder::Native));
        native.write_u64(7).unwrap();
        native.write_f32(1.0).unwrap();
        assert_eq!(native.position(), 12);
        let bytes = native.into_inner();
        assert_eq!(bytes[..8], 7u64.to_ne_bytes());
        assert_eq!(bytes[8..], 1.0f32.to_ne_bytes());
    }
    #[test]
    fn truncation_reports_offset() {
        let mut reader = WireReader::new(Cursor::new([1u8, 0, 0, 0, 9, 9]), Layout::CURRENT);
        assert_eq!(reader.read_u32().unwrap(), 1);
        assert!(matches!(
            reader.read_u32(),
            Err(DecodeError::Truncated { offset: 4 })
        ));
    }
    #[test]
    fn bools_are_strict() {
        let mut reader = WireReader::new(Cursor::new([0u8, 1, 2]), Layout::CURRENT);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(matches!(
            reader.read_bool(),
            Err(DecodeError::InvalidFlag(2))
        ));
    }
    #[test]
    fn drain_counts_leftovers() {
        let mut reader = WireReader::new(Cursor::new([0u8; 11]), Layout::CURRENT);
        reader.read_u64().unwrap();
        assert_eq!(reader.drain().unwrap(), 3);
        assert_eq!(reader.position(), 11);
    }
}
