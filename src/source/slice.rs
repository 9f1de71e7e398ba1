//! Bounded view ke buffer milik caller (zero-copy)

use std::ops::Range;

use super::{take, ByteSource};
use crate::error::Result;

/// Source di atas slice pinjaman
///
/// Tidak ada alokasi, semua read meminjam langsung dari buffer caller.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    #[inline(always)]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// View terbatas ke `buf[range]`, `None` jika range di luar buffer
    #[inline]
    pub fn window(buf: &'a [u8], range: Range<usize>) -> Option<Self> {
        buf.get(range).map(Self::new)
    }

    /// Sisa bytes yang belum dibaca
    #[inline(always)]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Seperti `read_exact` tapi lifetime ikut buffer, bukan source
    #[inline(always)]
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        take(self.buf, &mut self.pos, n)
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.buf.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        self.take(n)
    }

    #[inline(always)]
    fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    #[inline(always)]
    fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.pos >= self.buf.len())
    }

    #[inline(always)]
    fn remaining_hint(&self) -> Option<usize> {
        Some(self.buf.len() - self.pos)
    }

    #[inline(always)]
    fn position(&self) -> u64 {
        self.pos as u64
    }
}
