//! Wire Layer: grammar level protobuf
//!
//! Message = nol atau lebih pasangan `(tag, payload)`.
//! - Tag: varint `(field_number << 3) | wire_type`
//! - Payload shape ditentukan oleh `tag & 0x7`
//!
//! Layer ini tidak tahu soal schema, hanya bytes.

pub mod varint;

use crate::error::{Malformed, Result};
use crate::source::ByteSource;

/// Jumlah bit rendah di tag yang menyimpan wire type
pub const TAG_TYPE_BITS: u32 = 3;

/// Mask untuk mengambil wire type dari tag
pub const TAG_TYPE_MASK: u64 = 0b0000_0111;

/// Field number terbesar yang masih muat di tag 32-bit
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Cara sebuah value di-encode di wire
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Varint (termasuk zigzag)
    Varint = 0,
    /// 8 byte little-endian
    Fixed64 = 1,
    /// Length prefix varint + bytes
    Delimited = 2,
    /// Deprecated group start, selalu ditolak
    GroupStart = 3,
    /// Deprecated group end, selalu ditolak
    GroupEnd = 4,
    /// 4 byte little-endian
    Fixed32 = 5,
}

impl WireType {
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::Delimited),
            3 => Some(Self::GroupStart),
            4 => Some(Self::GroupEnd),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }

    /// Ukuran payload tetap, jika ada
    #[inline(always)]
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Fixed32 => Some(4),
            Self::Fixed64 => Some(8),
            _ => None,
        }
    }
}

/// Gabungkan field number dan wire type menjadi tag
#[inline(always)]
pub const fn make_tag(field_number: u32, wire_type: WireType) -> u64 {
    ((field_number as u64) << TAG_TYPE_BITS) | wire_type as u64
}

/// Pecah tag menjadi (field number, wire type) dengan validasi
///
/// Malformed jika field number 0 atau terlalu besar, wire type > 5,
/// atau wire type group (tidak didukung).
#[inline]
pub fn split_tag(tag: u64) -> Result<(u32, WireType)> {
    let field_number = tag >> TAG_TYPE_BITS;
    if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
        return Err(Malformed::InvalidFieldNumber(field_number).into());
    }

    let raw = (tag & TAG_TYPE_MASK) as u8;
    match WireType::from_u8(raw) {
        Some(WireType::GroupStart | WireType::GroupEnd) => {
            Err(Malformed::GroupUnsupported(raw).into())
        }
        Some(wire_type) => Ok((field_number as u32, wire_type)),
        None => Err(Malformed::InvalidWireType(raw).into()),
    }
}

/// Baca 4 byte little-endian
#[inline(always)]
pub fn read_fixed32<S: ByteSource + ?Sized>(source: &mut S) -> Result<u32> {
    let bytes = source.read_exact(4)?;
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    Ok(u32::from_le_bytes(raw))
}

/// Baca 8 byte little-endian
#[inline(always)]
pub fn read_fixed64<S: ByteSource + ?Sized>(source: &mut S) -> Result<u64> {
    let bytes = source.read_exact(8)?;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(bytes);
    Ok(u64::from_le_bytes(raw))
}

/// Lewati satu payload berdasarkan wire type yang ada di wire
///
/// Dipakai untuk unknown field (forward compatibility).
pub fn skip_payload<S: ByteSource + ?Sized>(
    source: &mut S,
    wire_type: WireType,
    max_length: usize,
) -> Result<()> {
    match wire_type {
        WireType::Varint => varint::read(source).map(|_| ()),
        WireType::Fixed64 => source.skip(8),
        WireType::Fixed32 => source.skip(4),
        WireType::Delimited => {
            let length = read_length(source, max_length)?;
            source.skip(length)
        }
        WireType::GroupStart | WireType::GroupEnd => {
            Err(Malformed::GroupUnsupported(wire_type as u8).into())
        }
    }
}

/// Baca length prefix dan cek terhadap limit
#[inline]
pub fn read_length<S: ByteSource + ?Sized>(source: &mut S, max_length: usize) -> Result<usize> {
    let length = varint::read(source)?;
    if length > max_length as u64 {
        return Err(Malformed::LengthLimit {
            length,
            limit: max_length,
        }
        .into());
    }
    Ok(length as usize)
}
