//! Callback target untuk decoder
//!
//! Satu method per kategori value: scalar, packed list, nested message.
//! Semua method punya default no-op, sink cukup override yang relevan.

use super::cursor::Cursor;
use super::run;
use crate::config::DecodeConfig;
use crate::error::Result;
use crate::schema::{FieldDefinition, Lookup};
use crate::source::ByteSource;
use crate::value::{PackedList, Value};

/// Penerima field hasil decode untuk satu message type
///
/// Sink dimiliki caller dan hanya dipakai oleh satu parse pada satu waktu.
/// Untuk reuse, reset state sink sebelum parse berikutnya.
pub trait FieldSink {
    /// Satu occurrence field scalar (termasuk string/bytes)
    ///
    /// Repeated field yang tidak di-pack memanggil ini sekali per occurrence;
    /// sink yang bertanggung jawab append ke list-nya sendiri.
    fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        let _ = (field, value);
        Ok(())
    }

    /// Packed repeated field, semua elemen dari satu length-delimited body
    ///
    /// Default meneruskan tiap elemen ke `scalar`, jadi sink yang append di
    /// `scalar` otomatis menerima bentuk packed maupun unpacked.
    fn packed(&mut self, field: &FieldDefinition, values: PackedList<'_>) -> Result<()> {
        for value in values {
            self.scalar(field, value)?;
        }
        Ok(())
    }

    /// Nested message
    ///
    /// Sink membuat sink anak lalu memanggil `reader.decode(...)`.
    /// Default mengabaikan payload (di-skip oleh decoder).
    fn message<S: ByteSource + ?Sized>(
        &mut self,
        field: &FieldDefinition,
        reader: &mut MessageReader<'_, S>,
    ) -> Result<()> {
        let _ = (field, reader);
        Ok(())
    }
}

impl<K: FieldSink> FieldSink for &mut K {
    #[inline(always)]
    fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
        (**self).scalar(field, value)
    }

    #[inline(always)]
    fn packed(&mut self, field: &FieldDefinition, values: PackedList<'_>) -> Result<()> {
        (**self).packed(field, values)
    }

    #[inline(always)]
    fn message<S: ByteSource + ?Sized>(
        &mut self,
        field: &FieldDefinition,
        reader: &mut MessageReader<'_, S>,
    ) -> Result<()> {
        (**self).message(field, reader)
    }
}

/// Handle ke payload satu nested message
///
/// Terikat ke rentang byte sub-message di source yang sama (tanpa copy).
pub struct MessageReader<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
    config: DecodeConfig,
    depth: u32,
    length: usize,
}

impl<'a, S: ByteSource + ?Sized> MessageReader<'a, S> {
    pub(crate) fn new(cursor: Cursor<'a, S>, config: DecodeConfig, depth: u32, length: usize) -> Self {
        Self {
            cursor,
            config,
            depth,
            length,
        }
    }

    /// Panjang payload yang dideklarasikan di wire
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Kedalaman nesting (top-level message = 0)
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Decode payload dengan schema dan sink milik sub-message
    pub fn decode<L, K>(&mut self, schema: &L, sink: &mut K) -> Result<()>
    where
        L: Lookup + ?Sized,
        K: FieldSink,
    {
        run(&mut self.cursor, schema, sink, self.config, self.depth)
    }

    /// Decode ke sink baru yang dibuat dari `Default`
    pub fn decode_into<L, K>(&mut self, schema: &L) -> Result<K>
    where
        L: Lookup + ?Sized,
        K: FieldSink + Default,
    {
        let mut sink = K::default();
        self.decode(schema, &mut sink)?;
        Ok(sink)
    }

    /// Raw payload yang belum dibaca, untuk parsing lazy
    pub fn bytes(&mut self) -> Result<&[u8]> {
        let left = self.cursor.limit().unwrap_or(0);
        self.cursor.read_exact(left)
    }

    /// Skip sisa payload yang tidak dibaca sink
    pub(crate) fn finish(mut self) -> Result<()> {
        match self.cursor.limit() {
            Some(left) if left > 0 => self.cursor.skip(left),
            _ => Ok(()),
        }
    }
}
