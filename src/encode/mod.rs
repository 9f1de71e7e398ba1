//! Encode Engine: typed values -> bytes
//!
//! Kebalikan dari decoder, grammar yang sama byte-for-byte:
//! `[tag][payload]` per field, urutan field mengikuti urutan pemanggilan.
//!
//! Aturan:
//! - Default elision: zero value tidak menulis apa pun (tag juga tidak)
//! - Repeated numeric selalu packed: satu tag + length + elemen back-to-back
//! - Repeated string/bytes/message unpacked: satu tag per elemen
//! - Nested message di-encode ke scratch buffer dulu, lalu length prefix
//!   (tidak ada forward-patching)

use std::io::Write;
use std::mem;

use crate::error::{Error, Result};
use crate::schema::{FieldDefinition, FieldType};
use crate::value::Value;
use crate::wire::{make_tag, varint, WireType};

/// Default kapasitas awal output buffer
const DEFAULT_CAPACITY: usize = 256;

/// Message yang bisa menulis dirinya sendiri ke `Encoder`
pub trait Encode {
    /// Tulis semua field (dalam urutan yang diinginkan) ke `out`
    fn encode(&self, out: &mut Encoder) -> Result<()>;

    /// Encode ke Vec baru
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Encoder::new();
        self.encode(&mut out)?;
        Ok(out.into_bytes())
    }
}

/// Encode satu field langsung ke `out`, dengan default elision
///
/// Bentuk paling dasar dari engine: satu panggilan per field.
/// Message field tidak bisa lewat sini (pakai `Encoder::message`).
/// Repeated field juga ditolak: pakai list helper (`packed`, `*_list`).
pub fn encode_field(out: &mut Vec<u8>, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
    if field.repeated() {
        return Err(Error::unsupported(
            field.name(),
            "repeated field needs a list helper",
        ));
    }
    check_value(field, &value)?;
    if value.is_default() {
        return Ok(());
    }
    varint::write(out, field.tag());
    write_payload(out, field.field_type(), value)
}

/// Growable output buffer + pool scratch buffer untuk nested payload
///
/// Setelah warm-up (buffer dan pool sudah cukup besar), encode message
/// dengan bentuk yang sama tidak alokasi lagi. Panggil `reset` untuk reuse.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    pool: Vec<Vec<u8>>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            pool: Vec::new(),
        }
    }

    /// Kosongkan output, kapasitas dan pool tetap
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Flush seluruh output ke writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.buf)?;
        Ok(())
    }

    // ========================================================================
    // SCALAR
    // ========================================================================

    /// Tulis satu field non-message, zero value di-skip
    #[inline]
    pub fn field(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        encode_field(&mut self.buf, field, value)
    }

    /// INT32 / SINT32 / SFIXED32
    #[inline]
    pub fn int32(&mut self, field: &FieldDefinition, value: i32) -> Result<()> {
        self.field(field, Value::Int32(value))
    }

    /// INT64 / SINT64 / SFIXED64
    #[inline]
    pub fn int64(&mut self, field: &FieldDefinition, value: i64) -> Result<()> {
        self.field(field, Value::Int64(value))
    }

    /// UINT32 / FIXED32
    #[inline]
    pub fn uint32(&mut self, field: &FieldDefinition, value: u32) -> Result<()> {
        self.field(field, Value::UInt32(value))
    }

    /// UINT64 / FIXED64
    #[inline]
    pub fn uint64(&mut self, field: &FieldDefinition, value: u64) -> Result<()> {
        self.field(field, Value::UInt64(value))
    }

    #[inline]
    pub fn float(&mut self, field: &FieldDefinition, value: f32) -> Result<()> {
        self.field(field, Value::Float(value))
    }

    #[inline]
    pub fn double(&mut self, field: &FieldDefinition, value: f64) -> Result<()> {
        self.field(field, Value::Double(value))
    }

    #[inline]
    pub fn bool(&mut self, field: &FieldDefinition, value: bool) -> Result<()> {
        self.field(field, Value::Bool(value))
    }

    /// Enum ordinal
    #[inline]
    pub fn enumeration(&mut self, field: &FieldDefinition, ordinal: i32) -> Result<()> {
        self.field(field, Value::Enum(ordinal))
    }

    #[inline]
    pub fn string(&mut self, field: &FieldDefinition, value: &str) -> Result<()> {
        self.field(field, Value::String(value))
    }

    #[inline]
    pub fn bytes(&mut self, field: &FieldDefinition, value: &[u8]) -> Result<()> {
        self.field(field, Value::Bytes(value))
    }

    // ========================================================================
    // REPEATED
    // ========================================================================

    /// Packed repeated numeric: `[tag][length][elem][elem]...`
    ///
    /// List kosong tidak menulis apa pun. Elemen bernilai nol tetap ditulis
    /// (elision hanya berlaku untuk list secara keseluruhan).
    pub fn packed<'v, I>(&mut self, field: &FieldDefinition, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value<'v>>,
    {
        let field_type = field.field_type();
        if !field.repeated() || !field_type.is_packable() {
            return Err(Error::unsupported(
                field.name(),
                "packed encoding needs a repeated numeric field",
            ));
        }

        let mut body = self.scratch();
        let result = values.into_iter().try_for_each(|value| {
            check_value(field, &value)?;
            write_payload(&mut body, field_type, value)
        });

        if result.is_ok() && !body.is_empty() {
            self.delimited(field, &body);
        }
        self.recycle(body);
        result
    }

    pub fn int32_list(&mut self, field: &FieldDefinition, values: &[i32]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::Int32(v)))
    }

    pub fn int64_list(&mut self, field: &FieldDefinition, values: &[i64]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::Int64(v)))
    }

    pub fn uint32_list(&mut self, field: &FieldDefinition, values: &[u32]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::UInt32(v)))
    }

    pub fn uint64_list(&mut self, field: &FieldDefinition, values: &[u64]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::UInt64(v)))
    }

    pub fn float_list(&mut self, field: &FieldDefinition, values: &[f32]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::Float(v)))
    }

    pub fn double_list(&mut self, field: &FieldDefinition, values: &[f64]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::Double(v)))
    }

    pub fn bool_list(&mut self, field: &FieldDefinition, values: &[bool]) -> Result<()> {
        self.packed(field, values.iter().map(|&v| Value::Bool(v)))
    }

    pub fn enumeration_list(&mut self, field: &FieldDefinition, ordinals: &[i32]) -> Result<()> {
        self.packed(field, ordinals.iter().map(|&v| Value::Enum(v)))
    }

    /// Repeated STRING, satu tag per elemen (string kosong tetap ditulis)
    pub fn string_list<I>(&mut self, field: &FieldDefinition, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.expect_repeated(field, FieldType::String)?;
        for value in values {
            self.delimited(field, value.as_ref().as_bytes());
        }
        Ok(())
    }

    /// Repeated BYTES, satu tag per elemen
    pub fn bytes_list<I>(&mut self, field: &FieldDefinition, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.expect_repeated(field, FieldType::Bytes)?;
        for value in values {
            self.delimited(field, value.as_ref());
        }
        Ok(())
    }

    /// Repeated MESSAGE, satu tag per elemen (message kosong tetap ditulis)
    pub fn message_list<T: Encode>(&mut self, field: &FieldDefinition, values: &[T]) -> Result<()> {
        self.expect_repeated(field, FieldType::Message)?;
        for value in values {
            self.nested(field, |out| value.encode(out))?;
        }
        Ok(())
    }

    // ========================================================================
    // MESSAGE
    // ========================================================================

    /// Nested message; `None` tidak menulis apa pun
    ///
    /// `Some` dengan message kosong tetap menulis tag + length 0,
    /// supaya decoder bisa membedakan "ada tapi kosong" dari "tidak ada".
    pub fn message<T: Encode + ?Sized>(
        &mut self,
        field: &FieldDefinition,
        value: Option<&T>,
    ) -> Result<()> {
        match value {
            Some(message) => self.message_with(field, |out| message.encode(out)),
            None => {
                expect_message(field)?;
                Ok(())
            }
        }
    }

    /// Nested message yang isinya ditulis oleh closure
    pub fn message_with<F>(&mut self, field: &FieldDefinition, body: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        expect_message(field)?;
        self.nested(field, body)
    }

    /// Encode body ke scratch buffer (swap dengan output), lalu prefix
    fn nested<F>(&mut self, field: &FieldDefinition, body: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        let scratch = self.scratch();
        let parent = mem::replace(&mut self.buf, scratch);
        let result = body(self);
        let child = mem::replace(&mut self.buf, parent);

        if result.is_ok() {
            self.delimited(field, &child);
        }
        self.recycle(child);
        result
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    #[inline(always)]
    fn delimited(&mut self, field: &FieldDefinition, payload: &[u8]) {
        varint::write(&mut self.buf, make_tag(field.number(), WireType::Delimited));
        varint::write(&mut self.buf, payload.len() as u64);
        self.buf.extend_from_slice(payload);
    }

    #[inline(always)]
    fn scratch(&mut self) -> Vec<u8> {
        self.pool.pop().unwrap_or_default()
    }

    #[inline(always)]
    fn recycle(&mut self, mut buffer: Vec<u8>) {
        buffer.clear();
        self.pool.push(buffer);
    }

    fn expect_repeated(&self, field: &FieldDefinition, expected: FieldType) -> Result<()> {
        if field.repeated() && field.field_type() == expected {
            return Ok(());
        }
        Err(Error::unsupported(
            field.name(),
            format!("expected repeated {:?} field", expected),
        ))
    }
}

#[inline]
fn expect_message(field: &FieldDefinition) -> Result<()> {
    if field.field_type() == FieldType::Message {
        return Ok(());
    }
    Err(Error::unsupported(
        field.name(),
        format!("{:?} field cannot hold a message", field.field_type()),
    ))
}

#[inline]
fn check_value(field: &FieldDefinition, value: &Value<'_>) -> Result<()> {
    if value.fits(field.field_type()) {
        return Ok(());
    }
    Err(Error::unsupported(
        field.name(),
        format!("{:?} value does not fit {:?}", value, field.field_type()),
    ))
}

/// Payload satu value tanpa tag (inverse dari tabel decode)
#[inline]
fn write_payload(out: &mut Vec<u8>, field_type: FieldType, value: Value<'_>) -> Result<()> {
    match (field_type, value) {
        // Negatif di-sign-extend ke 64 bit -> selalu 10 byte
        (FieldType::Int32, Value::Int32(v)) | (FieldType::Enum, Value::Enum(v)) => {
            varint::write(out, i64::from(v) as u64)
        }
        (FieldType::SInt32, Value::Int32(v)) => {
            varint::write(out, varint::zigzag_encode(i64::from(v)))
        }
        (FieldType::SFixed32, Value::Int32(v)) => out.extend_from_slice(&v.to_le_bytes()),

        (FieldType::Int64, Value::Int64(v)) => varint::write(out, v as u64),
        (FieldType::SInt64, Value::Int64(v)) => varint::write(out, varint::zigzag_encode(v)),
        (FieldType::SFixed64, Value::Int64(v)) => out.extend_from_slice(&v.to_le_bytes()),

        (FieldType::UInt32, Value::UInt32(v)) => varint::write(out, u64::from(v)),
        (FieldType::Fixed32, Value::UInt32(v)) => out.extend_from_slice(&v.to_le_bytes()),

        (FieldType::UInt64, Value::UInt64(v)) => varint::write(out, v),
        (FieldType::Fixed64, Value::UInt64(v)) => out.extend_from_slice(&v.to_le_bytes()),

        (FieldType::Float, Value::Float(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (FieldType::Double, Value::Double(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (FieldType::Bool, Value::Bool(v)) => out.push(u8::from(v)),

        (FieldType::String, Value::String(v)) => {
            varint::write(out, v.len() as u64);
            out.extend_from_slice(v.as_bytes());
        }
        (FieldType::Bytes, Value::Bytes(v)) => {
            varint::write(out, v.len() as u64);
            out.extend_from_slice(v);
        }

        (field_type, value) => {
            return Err(Error::unsupported(
                "",
                format!("no encoder for {:?} as {:?}", value, field_type),
            ))
        }
    }
    Ok(())
}
