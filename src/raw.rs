//! Raw wire walker tanpa schema
//!
//! Membaca `(field number, wire type, payload)` apa adanya dari buffer.
//! Dipakai untuk inspeksi / debugging (lihat `protoparse_dump`): tidak ada
//! interpretasi tipe, delimited payload dikembalikan sebagai bytes mentah.

use std::iter::FusedIterator;

use crate::config::DEFAULT_MAX_LENGTH;
use crate::error::{Malformed, Result};
use crate::source::{ByteSource, SliceSource};
use crate::wire::{self, varint, WireType};

/// Payload satu field, bentuknya hanya dari wire type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    Delimited(&'a [u8]),
}

/// Satu occurrence field di wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    /// Offset tag di buffer
    pub offset: usize,
    pub number: u32,
    pub wire_type: WireType,
    pub value: RawValue<'a>,
}

/// Iterator field-by-field atas satu message
///
/// Berhenti setelah error pertama (fused).
#[derive(Debug, Clone)]
pub struct RawFields<'a> {
    source: SliceSource<'a>,
    max_length: usize,
    failed: bool,
}

impl<'a> RawFields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_max_length(bytes, DEFAULT_MAX_LENGTH)
    }

    pub fn with_max_length(bytes: &'a [u8], max_length: usize) -> Self {
        Self {
            source: SliceSource::new(bytes),
            max_length,
            failed: false,
        }
    }

    fn read_field(&mut self) -> Result<RawField<'a>> {
        let offset = self.source.position() as usize;
        let tag = varint::read(&mut self.source)?;
        let (number, wire_type) = wire::split_tag(tag)?;

        let value = match wire_type {
            WireType::Varint => RawValue::Varint(varint::read(&mut self.source)?),
            WireType::Fixed64 => RawValue::Fixed64(wire::read_fixed64(&mut self.source)?),
            WireType::Fixed32 => RawValue::Fixed32(wire::read_fixed32(&mut self.source)?),
            WireType::Delimited => {
                let length = wire::read_length(&mut self.source, self.max_length)?;
                RawValue::Delimited(self.source.take(length)?)
            }
            // split_tag sudah menolak group
            WireType::GroupStart | WireType::GroupEnd => {
                return Err(Malformed::GroupUnsupported(wire_type as u8).into())
            }
        };

        Ok(RawField {
            offset,
            number,
            wire_type,
            value,
        })
    }
}

impl<'a> Iterator for RawFields<'a> {
    type Item = Result<RawField<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.source.remaining().is_empty() {
            return None;
        }
        let field = self.read_field();
        self.failed = field.is_err();
        Some(field)
    }
}

impl FusedIterator for RawFields<'_> {}
