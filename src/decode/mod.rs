//! Decode Dispatcher: bytes -> field callbacks
//!
//! State machine per message:
//! `AWAIT_TAG -> (dispatch by type) -> AWAIT_TAG -> ... -> DONE`
//!
//! Prinsip desain:
//! - Schema-driven: tipe field datang dari `Lookup`, bukan dari wire
//! - Zero-copy: string/bytes dipinjam langsung dari source
//! - No-Allocation: nested message memakai cursor di source yang sama
//! - Forward compatible: unknown field di-skip berdasarkan wire type di wire

mod cursor;
mod sink;

pub use sink::{FieldSink, MessageReader};

use tracing::{debug, trace};

use self::cursor::Cursor;
use crate::config::DecodeConfig;
use crate::error::{Malformed, Result};
use crate::schema::{FieldDefinition, FieldType, Lookup};
use crate::source::{ByteSource, SliceSource};
use crate::value::{read_value, PackedList};
use crate::wire::{self, varint, WireType};

/// Decoder dengan konfigurasi limit
///
/// Tidak menyimpan state parse, jadi satu `Decoder` bisa dipakai berulang
/// dan dibagi antar thread. State mutable hanya ada di sink milik caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Consume source sampai habis, memanggil sink untuk setiap known field
    ///
    /// Gagal pada input malformed atau I/O error. Tidak ada rewind: field
    /// yang sudah dikirim ke sink sebelum error tetap tercatat di sink.
    pub fn decode<S, L, K>(&self, source: &mut S, schema: &L, sink: &mut K) -> Result<()>
    where
        S: ByteSource + ?Sized,
        L: Lookup + ?Sized,
        K: FieldSink,
    {
        let result = {
            let mut cursor = Cursor::unbounded(&mut *source);
            run(&mut cursor, schema, sink, self.config, 0)
        };

        if let Err(ref e) = result {
            debug!(
                kind = ?e.kind(),
                position = source.position(),
                error = %e,
                "protobuf decode aborted"
            );
        }
        result
    }

    /// Shortcut untuk buffer in-memory
    #[inline]
    pub fn decode_slice<L, K>(&self, bytes: &[u8], schema: &L, sink: &mut K) -> Result<()>
    where
        L: Lookup + ?Sized,
        K: FieldSink,
    {
        self.decode(&mut SliceSource::new(bytes), schema, sink)
    }
}

/// Decode dengan `DecodeConfig::default()`
#[inline]
pub fn decode<S, L, K>(source: &mut S, schema: &L, sink: &mut K) -> Result<()>
where
    S: ByteSource + ?Sized,
    L: Lookup + ?Sized,
    K: FieldSink,
{
    Decoder::default().decode(source, schema, sink)
}

/// Decode buffer in-memory dengan `DecodeConfig::default()`
#[inline]
pub fn decode_slice<L, K>(bytes: &[u8], schema: &L, sink: &mut K) -> Result<()>
where
    L: Lookup + ?Sized,
    K: FieldSink,
{
    Decoder::default().decode_slice(bytes, schema, sink)
}

/// Main parse loop untuk satu message (atau sub-message)
pub(crate) fn run<S, L, K>(
    cursor: &mut Cursor<'_, S>,
    schema: &L,
    sink: &mut K,
    config: DecodeConfig,
    depth: u32,
) -> Result<()>
where
    S: ByteSource + ?Sized,
    L: Lookup + ?Sized,
    K: FieldSink,
{
    // EOF di batas tag = DONE
    while !cursor.is_exhausted()? {
        let tag = varint::read(cursor)?;
        let (number, wire_type) = wire::split_tag(tag)?;

        let Some(field) = schema.lookup(number) else {
            trace!(field = number, ?wire_type, depth, "skipping unknown field");
            wire::skip_payload(cursor, wire_type, config.max_length)?;
            continue;
        };

        dispatch(cursor, field, wire_type, sink, config, depth)?;
    }
    Ok(())
}

/// Decode payload satu known field sesuai tipe yang dideklarasikan
#[inline]
fn dispatch<S, K>(
    cursor: &mut Cursor<'_, S>,
    field: &FieldDefinition,
    wire_type: WireType,
    sink: &mut K,
    config: DecodeConfig,
    depth: u32,
) -> Result<()>
where
    S: ByteSource + ?Sized,
    K: FieldSink,
{
    let declared = field.field_type();

    match declared {
        FieldType::Message => {
            expect_wire_type(field, wire_type)?;
            let length = wire::read_length(cursor, config.max_length)?;
            if depth >= config.recursion_limit {
                return Err(Malformed::RecursionLimit(config.recursion_limit).into());
            }
            trace!(field = field.name(), length, depth = depth + 1, "entering nested message");

            let mut reader = MessageReader::new(cursor.nested(length)?, config, depth + 1, length);
            sink.message(field, &mut reader)?;
            reader.finish()
        }
        _ if wire_type == WireType::Delimited && declared.is_packable() => {
            // Packed repeated: satu body berisi elemen back-to-back
            if !field.repeated() {
                return expect_wire_type(field, wire_type);
            }
            let length = wire::read_length(cursor, config.max_length)?;
            let body = cursor.read_exact(length)?;
            let values = PackedList::parse(declared, field.name(), body)?;
            sink.packed(field, values)
        }
        _ => {
            expect_wire_type(field, wire_type)?;
            let value = read_value(cursor, declared, field.name(), config.max_length)?;
            sink.scalar(field, value)
        }
    }
}

#[inline(always)]
fn expect_wire_type(field: &FieldDefinition, actual: WireType) -> Result<()> {
    if field.wire_type() == actual {
        return Ok(());
    }
    Err(Malformed::WireTypeMismatch {
        field: field.name().to_owned(),
        declared: field.field_type(),
        actual: actual as u8,
    }
    .into())
}
