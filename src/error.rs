//! Error taxonomy untuk parser dan writer
//!
//! Tiga kategori:
//! - Malformed: bytes di wire tidak valid
//! - Io: byte source gagal membaca
//! - UnsupportedSchema: salah konfigurasi schema / pemakaian API (bug di caller)

use std::io;

use thiserror::Error;

use crate::schema::FieldType;

/// Result alias untuk seluruh crate
pub type Result<T> = std::result::Result<T, Error>;

/// Semua error yang bisa keluar dari decode/encode
#[derive(Debug, Error)]
pub enum Error {
    /// Input bukan protobuf yang valid
    #[error("malformed protobuf: {0}")]
    Malformed(#[from] Malformed),

    /// Byte source gagal (stream-level read error), tidak di-retry
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    /// Programming defect: field type dan value tidak cocok
    #[error("unsupported schema for field `{field}`: {reason}")]
    UnsupportedSchema { field: String, reason: String },
}

/// Kategori error, mengikuti taksonomi Malformed / Io / UnsupportedSchema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    Io,
    UnsupportedSchema,
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed(_) => ErrorKind::Malformed,
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedSchema { .. } => ErrorKind::UnsupportedSchema,
        }
    }

    /// Detail malformed, jika error ini berasal dari data
    pub fn as_malformed(&self) -> Option<&Malformed> {
        match self {
            Self::Malformed(m) => Some(m),
            _ => None,
        }
    }

    pub(crate) fn unsupported(field: &str, reason: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Detail kenapa bytes ditolak
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("invalid field number {0}")]
    InvalidFieldNumber(u64),

    #[error("invalid wire type {0}")]
    InvalidWireType(u8),

    #[error("group wire type {0} is not supported")]
    GroupUnsupported(u8),

    #[error("varint has the continuation bit set on its 10th byte")]
    VarintOverflow,

    #[error("input ended in the middle of a varint")]
    TruncatedVarint,

    #[error("boolean value {0} is neither 0 nor 1")]
    InvalidBool(u64),

    #[error("truncated input: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("string field `{field}` is not valid UTF-8")]
    InvalidUtf8 { field: String },

    #[error("field `{field}` declared as {declared:?} arrived with wire type {actual}")]
    WireTypeMismatch {
        field: String,
        declared: FieldType,
        actual: u8,
    },

    #[error("declared length {length} exceeds the limit of {limit} bytes")]
    LengthLimit { length: u64, limit: usize },

    #[error("message nesting exceeds the recursion limit of {0}")]
    RecursionLimit(u32),

    #[error("packed body of {length} bytes is not a multiple of {width}")]
    PackedWidth { length: usize, width: usize },
}
