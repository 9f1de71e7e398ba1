//! Typed field value, dipakai bersama oleh decoder dan encoder
//!
//! `Value` meminjam string/bytes langsung dari source (zero-copy),
//! jadi hanya valid selama callback berjalan. Sink yang ingin menyimpan
//! harus meng-copy sendiri.

use std::iter::FusedIterator;

use crate::error::{Error, Malformed, Result};
use crate::schema::FieldType;
use crate::source::{ByteSource, SliceSource};
use crate::wire::{self, varint};

/// Satu value scalar hasil decode (atau input encode)
///
/// Mapping dari `FieldType`:
/// - Int32 / SInt32 / SFixed32 -> `Int32`
/// - UInt32 / Fixed32 -> `UInt32`
/// - Int64 / SInt64 / SFixed64 -> `Int64`
/// - UInt64 / Fixed64 -> `UInt64`
/// - Enum -> `Enum` (ordinal, tanpa validasi domain)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Double(f64),
    Float(f32),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Bool(bool),
    Enum(i32),
    String(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Value<'a> {
    /// True jika value sama dengan zero value tipenya (di-elide saat encode)
    #[inline]
    pub fn is_default(&self) -> bool {
        match *self {
            Self::Double(v) => v == 0.0,
            Self::Float(v) => v == 0.0,
            Self::Int32(v) | Self::Enum(v) => v == 0,
            Self::Int64(v) => v == 0,
            Self::UInt32(v) => v == 0,
            Self::UInt64(v) => v == 0,
            Self::Bool(v) => !v,
            Self::String(v) => v.is_empty(),
            Self::Bytes(v) => v.is_empty(),
        }
    }

    /// Zero value untuk tipe tertentu, `None` untuk Message
    pub fn default_for(field_type: FieldType) -> Option<Value<'static>> {
        let value = match field_type {
            FieldType::Double => Value::Double(0.0),
            FieldType::Float => Value::Float(0.0),
            FieldType::Int32 | FieldType::SInt32 | FieldType::SFixed32 => Value::Int32(0),
            FieldType::Int64 | FieldType::SInt64 | FieldType::SFixed64 => Value::Int64(0),
            FieldType::UInt32 | FieldType::Fixed32 => Value::UInt32(0),
            FieldType::UInt64 | FieldType::Fixed64 => Value::UInt64(0),
            FieldType::Bool => Value::Bool(false),
            FieldType::Enum => Value::Enum(0),
            FieldType::String => Value::String(""),
            FieldType::Bytes => Value::Bytes(&[]),
            FieldType::Message => return None,
        };
        Some(value)
    }

    /// Apakah variant ini cocok untuk field type tsb
    #[inline]
    pub fn fits(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (Self::Double(_), FieldType::Double)
                | (Self::Float(_), FieldType::Float)
                | (
                    Self::Int32(_),
                    FieldType::Int32 | FieldType::SInt32 | FieldType::SFixed32
                )
                | (
                    Self::Int64(_),
                    FieldType::Int64 | FieldType::SInt64 | FieldType::SFixed64
                )
                | (Self::UInt32(_), FieldType::UInt32 | FieldType::Fixed32)
                | (Self::UInt64(_), FieldType::UInt64 | FieldType::Fixed64)
                | (Self::Bool(_), FieldType::Bool)
                | (Self::Enum(_), FieldType::Enum)
                | (Self::String(_), FieldType::String)
                | (Self::Bytes(_), FieldType::Bytes)
        )
    }

    #[inline]
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Int32(v) | Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int64(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Self::UInt32(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt64(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Double(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }
}

/// Decode satu value non-message sesuai tipe yang dideklarasikan
///
/// `name` hanya untuk pesan error.
#[inline]
pub(crate) fn read_value<'s, S: ByteSource + ?Sized>(
    source: &'s mut S,
    field_type: FieldType,
    name: &str,
    max_length: usize,
) -> Result<Value<'s>> {
    match field_type {
        FieldType::String => {
            let length = wire::read_length(source, max_length)?;
            let bytes = source.read_exact(length)?;
            match std::str::from_utf8(bytes) {
                Ok(s) => Ok(Value::String(s)),
                Err(_) => Err(Malformed::InvalidUtf8 {
                    field: name.to_owned(),
                }
                .into()),
            }
        }
        FieldType::Bytes => {
            let length = wire::read_length(source, max_length)?;
            Ok(Value::Bytes(source.read_exact(length)?))
        }
        FieldType::Message => Err(Error::unsupported(
            name,
            "message fields are decoded through MessageReader",
        )),
        _ => read_numeric(source, field_type),
    }
}

/// Decode satu numeric scalar (varint / fixed32 / fixed64)
#[inline]
fn read_numeric<S: ByteSource + ?Sized>(
    source: &mut S,
    field_type: FieldType,
) -> Result<Value<'static>> {
    let value = match field_type {
        // 32-bit variant di-truncate
        FieldType::Int32 => Value::Int32(varint::read(source)? as i32),
        FieldType::Int64 => Value::Int64(varint::read(source)? as i64),
        FieldType::UInt32 => Value::UInt32(varint::read(source)? as u32),
        FieldType::UInt64 => Value::UInt64(varint::read(source)?),
        FieldType::SInt32 => Value::Int32(varint::zigzag_decode(varint::read(source)?) as i32),
        FieldType::SInt64 => Value::Int64(varint::zigzag_decode(varint::read(source)?)),
        FieldType::Enum => Value::Enum(varint::read(source)? as i32),
        FieldType::Bool => match varint::read(source)? {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            other => return Err(Malformed::InvalidBool(other).into()),
        },
        FieldType::Fixed32 => Value::UInt32(wire::read_fixed32(source)?),
        FieldType::SFixed32 => Value::Int32(wire::read_fixed32(source)? as i32),
        FieldType::Float => Value::Float(f32::from_bits(wire::read_fixed32(source)?)),
        FieldType::Fixed64 => Value::UInt64(wire::read_fixed64(source)?),
        FieldType::SFixed64 => Value::Int64(wire::read_fixed64(source)? as i64),
        FieldType::Double => Value::Double(f64::from_bits(wire::read_fixed64(source)?)),
        FieldType::String | FieldType::Bytes | FieldType::Message => {
            return Err(Error::unsupported("", "not a numeric field type"))
        }
    };
    Ok(value)
}

/// Lebar elemen tetap untuk packed list, `None` untuk varint
#[inline(always)]
fn fixed_width(field_type: FieldType) -> Option<usize> {
    field_type.wire_type().fixed_width()
}

/// Isi satu packed repeated field (sudah divalidasi)
///
/// Iterasi tidak bisa gagal: body sudah dicek saat `PackedList::parse`,
/// jadi tidak ada alokasi Vec untuk elemen.
#[derive(Debug, Clone)]
pub struct PackedList<'a> {
    field_type: FieldType,
    source: SliceSource<'a>,
    remaining: usize,
}

impl<'a> PackedList<'a> {
    /// Validasi body packed dan hitung jumlah elemen
    pub(crate) fn parse(field_type: FieldType, name: &str, body: &'a [u8]) -> Result<Self> {
        if !field_type.is_packable() {
            return Err(Error::unsupported(name, "only numeric fields can be packed"));
        }

        let count = match fixed_width(field_type) {
            Some(width) => {
                if body.len() % width != 0 {
                    return Err(Malformed::PackedWidth {
                        length: body.len(),
                        width,
                    }
                    .into());
                }
                body.len() / width
            }
            None => {
                let mut count = 0;
                let mut rest = body;
                while !rest.is_empty() {
                    let (value, used) = varint::decode_slice(rest)?;
                    if field_type == FieldType::Bool && value > 1 {
                        return Err(Malformed::InvalidBool(value).into());
                    }
                    rest = &rest[used..];
                    count += 1;
                }
                count
            }
        };

        Ok(Self {
            field_type,
            source: SliceSource::new(body),
            remaining: count,
        })
    }

    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

impl<'a> Iterator for PackedList<'a> {
    type Item = Value<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match read_numeric(&mut self.source, self.field_type) {
            Ok(value) => Some(value),
            Err(_) => {
                self.remaining = 0;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PackedList<'_> {}

impl FusedIterator for PackedList<'_> {}
