//! Byte-level cursor shared by the WKB and TWKB codecs.
//!
//! [`BinaryReader`] walks a borrowed buffer, decoding fixed-width primitives
//! in the byte order currently selected on the reader plus base-128 varints.
//! [`BinaryWriter`] is the mirror image. It is created either with a fixed
//! capacity (WKB, whose size is always known up front) or in growable mode
//! (TWKB, whose varint body length is not).

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{GeoCodecError, Result};

/// Longest legal encoding of a `u64` varint.
const MAX_VARINT_LEN: usize = 10;

/// Byte order of multi-byte WKB fields, as announced by the leading marker byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl Endianness {
    /// Decode a WKB byte-order marker (`0` = XDR / big, `1` = NDR / little).
    pub fn from_marker(marker: u8) -> Result<Self> {
        match marker {
            0x00 => Ok(Endianness::BigEndian),
            0x01 => Ok(Endianness::LittleEndian),
            other => Err(GeoCodecError::invalid(format!(
                "invalid byte order marker 0x{other:02x}"
            ))),
        }
    }

    pub const fn marker(self) -> u8 {
        match self {
            Endianness::BigEndian => 0x00,
            Endianness::LittleEndian => 0x01,
        }
    }
}

/// A fixed-width value that can be moved through a [`BinaryReader`] /
/// [`BinaryWriter`].
pub trait Primitive: Copy {
    const SIZE: usize;

    fn decode(bytes: &[u8], endianness: Endianness) -> Self;

    fn encode(self, bytes: &mut [u8], endianness: Endianness);
}

impl Primitive for u8 {
    const SIZE: usize = 1;

    fn decode(bytes: &[u8], _endianness: Endianness) -> Self {
        bytes[0]
    }

    fn encode(self, bytes: &mut [u8], _endianness: Endianness) {
        bytes[0] = self;
    }
}

macro_rules! impl_primitive {
    ($ty:ty, $size:expr, $read:ident, $write:ident) => {
        impl Primitive for $ty {
            const SIZE: usize = $size;

            fn decode(bytes: &[u8], endianness: Endianness) -> Self {
                match endianness {
                    Endianness::BigEndian => BigEndian::$read(bytes),
                    Endianness::LittleEndian => LittleEndian::$read(bytes),
                }
            }

            fn encode(self, bytes: &mut [u8], endianness: Endianness) {
                match endianness {
                    Endianness::BigEndian => BigEndian::$write(bytes, self),
                    Endianness::LittleEndian => LittleEndian::$write(bytes, self),
                }
            }
        }
    };
}

impl_primitive!(u32, 4, read_u32, write_u32);
impl_primitive!(i32, 4, read_i32, write_i32);
impl_primitive!(f64, 8, read_f64, write_f64);

/// Cursor over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    position: usize,
    endianness: Endianness,
}

impl<'a> BinaryReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            endianness: Endianness::LittleEndian,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        if needed > self.remaining() {
            return Err(GeoCodecError::Bounds {
                offset: self.position,
                needed,
                len: self.buffer.len(),
            });
        }
        let bytes = &self.buffer[self.position..self.position + needed];
        self.position += needed;
        Ok(bytes)
    }

    /// Read one primitive in the reader's current byte order.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        let endianness = self.endianness;
        let bytes = self.take(T::SIZE)?;
        Ok(T::decode(bytes, endianness))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read::<u8>()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read::<u32>()
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read::<f64>()
    }

    /// Read an unsigned base-128 varint (7 payload bits per byte, low bits first).
    pub fn read_var_int(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for i in 0..MAX_VARINT_LEN {
            let byte = self.read_u8()?;
            let payload = u64::from(byte & 0x7f);
            if i == MAX_VARINT_LEN - 1 && payload > 1 {
                return Err(GeoCodecError::invalid("varint overflows 64 bits"));
            }
            value |= payload << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(GeoCodecError::invalid("varint longer than 10 bytes"))
    }

    /// Validate an element count read from the wire before allocating for it.
    ///
    /// Every element occupies at least `min_element_size` bytes, so a count
    /// the remaining buffer cannot possibly hold is rejected as out of bounds.
    pub fn checked_count(&self, count: u64, min_element_size: usize) -> Result<usize> {
        let needed = usize::try_from(count)
            .ok()
            .and_then(|c| c.checked_mul(min_element_size.max(1)));
        match needed {
            Some(needed) if needed <= self.remaining() => Ok(count as usize),
            _ => Err(GeoCodecError::Bounds {
                offset: self.position,
                needed: needed.unwrap_or(usize::MAX),
                len: self.buffer.len(),
            }),
        }
    }
}

/// Cursor writing into an owned buffer.
#[derive(Debug, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
    position: usize,
    growable: bool,
    endianness: Endianness,
}

impl BinaryWriter {
    /// A writer over exactly `size` bytes; writing past the end is a
    /// [`GeoCodecError::Bounds`] error.
    pub fn fixed(size: usize) -> Self {
        Self {
            buffer: vec![0; size],
            position: 0,
            growable: false,
            endianness: Endianness::LittleEndian,
        }
    }

    /// A writer that reallocates whenever a write would overflow.
    pub fn growable(initial_capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(initial_capacity),
            position: 0,
            growable: true,
            endianness: Endianness::LittleEndian,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    fn ensure_size(&mut self, size: usize) -> Result<()> {
        let needed_len = self.position + size;
        if needed_len <= self.buffer.len() {
            return Ok(());
        }
        if self.growable {
            self.buffer.resize(needed_len, 0);
            Ok(())
        } else {
            Err(GeoCodecError::Bounds {
                offset: self.position,
                needed: size,
                len: self.buffer.len(),
            })
        }
    }

    /// Write one primitive in the writer's current byte order.
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.ensure_size(T::SIZE)?;
        value.encode(
            &mut self.buffer[self.position..self.position + T::SIZE],
            self.endianness,
        );
        self.position += T::SIZE;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(value)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write(value)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write(value)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_size(bytes.len())?;
        self.buffer[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        Ok(())
    }

    /// Write an unsigned base-128 varint, returning the number of bytes used.
    pub fn write_var_int(&mut self, mut value: u64) -> Result<usize> {
        let mut length = 1;
        while value & !0x7f != 0 {
            self.write_u8((value & 0x7f) as u8 | 0x80)?;
            value >>= 7;
            length += 1;
        }
        self.write_u8(value as u8)?;
        Ok(length)
    }

    /// Consume the writer, returning the bytes written so far.
    pub fn into_inner(mut self) -> Vec<u8> {
        self.buffer.truncate(self.position);
        self.buffer
    }
}

/// Number of bytes [`BinaryWriter::write_var_int`] spends on `value`.
pub fn var_int_len(mut value: u64) -> usize {
    let mut length = 1;
    while value & !0x7f != 0 {
        value >>= 7;
        length += 1;
    }
    length
}
