//! Memory-Mapped File untuk Zero-Copy parsing
//!
//! File di-mmap read-only langsung ke virtual memory:
//! - Zero-copy read: bytes langsung dari page cache ke parser
//! - Kernel-managed paging: OS yang load halaman sesuai kebutuhan

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::{Mmap, MmapOptions};

use super::SliceSource;

/// File read-only yang di-mmap
pub struct MappedFile {
    // None untuk file kosong (mmap panjang 0 tidak portable)
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Buka dan mmap file
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len == 0 {
            return Ok(Self { mmap: None });
        }

        // SAFETY: mapping read-only. Caller tidak boleh memodifikasi file
        // selama MappedFile masih hidup.
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        Ok(Self { mmap: Some(mmap) })
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounded view ke seluruh isi file
    #[inline(always)]
    pub fn source(&self) -> SliceSource<'_> {
        SliceSource::new(self.as_bytes())
    }
}
