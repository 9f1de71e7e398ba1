//! Blocking stream source dengan buffered I/O
//!
//! Pre-allocated buffer untuk zero-allocation pada hot path.
//! Buffer hanya tumbuh jika satu payload lebih besar dari kapasitasnya.

use std::io::{self, Read};

use super::ByteSource;
use crate::error::{Malformed, Result};

/// Default buffer size - cukup untuk kebanyakan message
pub const DEFAULT_STREAM_BUFFER: usize = 64 * 1024; // 64KB

/// Source di atas `Read` yang blocking
///
/// Read bisa memblok thread pemanggil. Tidak ada timeout atau cancellation,
/// error dari reader langsung diteruskan sebagai `Error::Io`.
pub struct StreamSource<R> {
    reader: R,
    buffer: Vec<u8>,
    read_pos: usize,
    read_len: usize,
    consumed: u64,
    eof: bool,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_STREAM_BUFFER)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; capacity.max(16)],
            read_pos: 0,
            read_len: 0,
            consumed: 0,
            eof: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    #[inline(always)]
    fn available(&self) -> usize {
        self.read_len - self.read_pos
    }

    /// Isi buffer sampai minimal `min` byte tersedia atau EOF
    ///
    /// Returns jumlah bytes yang tersedia untuk dibaca.
    fn fill(&mut self, min: usize) -> Result<usize> {
        if self.available() >= min || self.eof {
            return Ok(self.available());
        }

        // Compact buffer jika perlu
        if self.read_pos > 0 {
            let remaining = self.available();
            if remaining > 0 {
                self.buffer.copy_within(self.read_pos..self.read_len, 0);
            }
            self.read_len = remaining;
            self.read_pos = 0;
        }

        while self.read_len < min {
            // Payload lebih besar dari buffer: tumbuh bertahap (x2, max `min`)
            // seiring bytes datang, length prefix palsu tidak langsung alokasi
            if self.read_len == self.buffer.len() {
                let grown = self.buffer.len().saturating_mul(2).min(min);
                self.buffer.resize(grown, 0);
            }
            match self.reader.read(&mut self.buffer[self.read_len..]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(n) => self.read_len += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(self.available())
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.read_pos += n;
        self.consumed += n as u64;
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.available() == 0 && self.fill(1)? == 0 {
            return Ok(None);
        }
        let byte = self.buffer[self.read_pos];
        self.advance(1);
        Ok(Some(byte))
    }

    fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        let available = self.fill(n)?;
        if available < n {
            return Err(Malformed::Truncated {
                needed: n,
                available,
            }
            .into());
        }
        let start = self.read_pos;
        self.advance(n);
        Ok(&self.buffer[start..start + n])
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        let mut left = n;
        while left > 0 {
            // Jangan tumbuhkan buffer hanya untuk membuang bytes
            let available = self.fill(1)?;
            if available == 0 {
                return Err(Malformed::Truncated {
                    needed: n,
                    available: n - left,
                }
                .into());
            }
            let step = available.min(left);
            self.advance(step);
            left -= step;
        }
        Ok(())
    }

    #[inline]
    fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.available() == 0 && self.fill(1)? == 0)
    }

    #[inline(always)]
    fn position(&self) -> u64 {
        self.consumed
    }
}
