//! Source yang memiliki buffer-nya sendiri

use super::{take, ByteSource};
use crate::error::Result;

/// Owned byte array, bisa di-reset untuk parse berikutnya
#[derive(Debug, Clone, Default)]
pub struct OwnedSource {
    data: Box<[u8]>,
    pos: usize,
}

impl OwnedSource {
    pub fn new(data: impl Into<Box<[u8]>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Ganti isi buffer dan mulai dari awal
    #[inline]
    pub fn reset(&mut self, data: impl Into<Box<[u8]>>) {
        self.data = data.into();
        self.pos = 0;
    }

    /// Kembali ke awal tanpa mengganti data
    #[inline(always)]
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Box<[u8]> {
        self.data
    }
}

impl From<Vec<u8>> for OwnedSource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ByteSource for OwnedSource {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        take(&self.data, &mut self.pos, n)
    }

    #[inline(always)]
    fn skip(&mut self, n: usize) -> Result<()> {
        take(&self.data, &mut self.pos, n).map(|_| ())
    }

    #[inline(always)]
    fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.pos >= self.data.len())
    }

    #[inline(always)]
    fn remaining_hint(&self) -> Option<usize> {
        Some(self.data.len() - self.pos)
    }

    #[inline(always)]
    fn position(&self) -> u64 {
        self.pos as u64
    }
}
