//! Cursor yang membatasi source ke rentang byte tertentu
//!
//! Nested message tidak meng-copy buffer: cursor anak meminjam source
//! yang sama dengan limit sepanjang length prefix.

use crate::error::{Malformed, Result};
use crate::source::ByteSource;

pub(crate) struct Cursor<'a, S: ?Sized> {
    inner: &'a mut S,
    // None = sampai source habis (top-level)
    limit: Option<usize>,
}

impl<'a, S: ByteSource + ?Sized> Cursor<'a, S> {
    #[inline(always)]
    pub(crate) fn unbounded(inner: &'a mut S) -> Self {
        Self { inner, limit: None }
    }

    /// Sisa byte di rentang ini, `None` jika top-level
    #[inline(always)]
    pub(crate) fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Cursor anak untuk `length` byte berikutnya
    ///
    /// Limit parent langsung dikurangi; pemanggil wajib memastikan anak
    /// mengonsumsi (atau skip) seluruh rentangnya.
    pub(crate) fn nested(&mut self, length: usize) -> Result<Cursor<'_, S>> {
        if let Some(available) = self.remaining_hint() {
            if length > available {
                return Err(Malformed::Truncated {
                    needed: length,
                    available,
                }
                .into());
            }
        }
        if let Some(limit) = self.limit.as_mut() {
            *limit -= length;
        }
        Ok(Cursor {
            inner: &mut *self.inner,
            limit: Some(length),
        })
    }

    #[inline(always)]
    fn check(&self, n: usize) -> Result<()> {
        match self.limit {
            Some(available) if n > available => Err(Malformed::Truncated {
                needed: n,
                available,
            }
            .into()),
            _ => Ok(()),
        }
    }

    #[inline(always)]
    fn consume(&mut self, n: usize) {
        if let Some(limit) = self.limit.as_mut() {
            *limit -= n;
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Cursor<'_, S> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.limit == Some(0) {
            return Ok(None);
        }
        let byte = self.inner.read_byte()?;
        if byte.is_some() {
            self.consume(1);
        }
        Ok(byte)
    }

    #[inline(always)]
    fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        self.check(n)?;
        if let Some(limit) = self.limit.as_mut() {
            *limit -= n;
        }
        self.inner.read_exact(n)
    }

    #[inline(always)]
    fn skip(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.inner.skip(n)?;
        self.consume(n);
        Ok(())
    }

    #[inline(always)]
    fn is_exhausted(&mut self) -> Result<bool> {
        match self.limit {
            // Bounded: EOF source sebelum limit habis = truncated, bukan selesai
            Some(limit) => Ok(limit == 0),
            None => self.inner.is_exhausted(),
        }
    }

    #[inline(always)]
    fn remaining_hint(&self) -> Option<usize> {
        match (self.limit, self.inner.remaining_hint()) {
            (Some(limit), Some(inner)) => Some(limit.min(inner)),
            (limit, inner) => limit.or(inner),
        }
    }

    #[inline(always)]
    fn position(&self) -> u64 {
        self.inner.position()
    }
}
