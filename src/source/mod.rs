//! Byte Source Layer: satu kontrak untuk semua input
//!
//! Prinsip desain:
//! - Source-agnostic: dispatcher tidak peduli bytes datang dari mana
//! - Zero-Copy: source in-memory meminjamkan slice langsung, tanpa copy
//! - Buffered: stream source memakai buffer pre-allocated yang di-reuse
//!
//! Source kosong langsung EOF dan itu input valid ("tidak ada field").

mod mmap;
mod owned;
mod slice;
mod stream;

pub use mmap::MappedFile;
pub use owned::OwnedSource;
pub use slice::SliceSource;
pub use stream::{StreamSource, DEFAULT_STREAM_BUFFER};

use crate::error::{Malformed, Result};

/// Kontrak pull-based untuk membaca bytes protobuf
pub trait ByteSource {
    /// Baca satu byte, `None` berarti EOF
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Baca tepat `n` byte
    ///
    /// Slice yang dikembalikan hanya valid sampai pemanggilan berikutnya.
    /// Malformed (Truncated) jika sisa bytes kurang dari `n`.
    fn read_exact(&mut self, n: usize) -> Result<&[u8]>;

    /// Lewati tepat `n` byte
    fn skip(&mut self, n: usize) -> Result<()>;

    /// True jika tidak ada byte lagi
    fn is_exhausted(&mut self) -> Result<bool>;

    /// Sisa bytes jika diketahui tanpa membaca (source in-memory)
    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        None
    }

    /// Jumlah byte yang sudah dikonsumsi
    fn position(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn read_exact(&mut self, n: usize) -> Result<&[u8]> {
        (**self).read_exact(n)
    }

    #[inline(always)]
    fn skip(&mut self, n: usize) -> Result<()> {
        (**self).skip(n)
    }

    #[inline(always)]
    fn is_exhausted(&mut self) -> Result<bool> {
        (**self).is_exhausted()
    }

    #[inline(always)]
    fn remaining_hint(&self) -> Option<usize> {
        (**self).remaining_hint()
    }

    #[inline(always)]
    fn position(&self) -> u64 {
        (**self).position()
    }
}

/// Ambil `n` byte dari `buf[*pos..]` dan majukan posisi
#[inline(always)]
pub(crate) fn take<'a>(buf: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8]> {
    let available = buf.len() - *pos;
    if n > available {
        return Err(Malformed::Truncated {
            needed: n,
            available,
        }
        .into());
    }
    let start = *pos;
    *pos += n;
    Ok(&buf[start..start + n])
}
