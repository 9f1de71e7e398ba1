//! Protoparse - Schema-Driven Protocol Buffers Wire Engine
//!
//! Arsitektur:
//! - Wire: varint/zigzag codec, tag, fixed little-endian
//! - Source: satu kontrak `ByteSource` untuk slice, owned, stream, mmap
//! - Decode: state machine `AWAIT_TAG -> dispatch -> AWAIT_TAG`, callback ke `FieldSink`
//! - Encode: kebalikan decoder dengan default elision dan packed numeric
//!
//! Schema tidak di-generate dari `.proto`: caller menyusun `FieldDefinition`
//! per message type dan mengopernya ke decode/encode.
//!
//! ```
//! use protoparse::{decode_slice, FieldDefinition, FieldSink, FieldType, Result, Value};
//!
//! static SECONDS: FieldDefinition = FieldDefinition::of("seconds", FieldType::Int64, false, 1);
//! static NANOS: FieldDefinition = FieldDefinition::of("nanos", FieldType::Int32, false, 2);
//!
//! fn timestamp(number: u32) -> Option<&'static FieldDefinition> {
//!     match number {
//!         1 => Some(&SECONDS),
//!         2 => Some(&NANOS),
//!         _ => None,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Timestamp {
//!     seconds: i64,
//!     nanos: i32,
//! }
//!
//! impl FieldSink for Timestamp {
//!     fn scalar(&mut self, field: &FieldDefinition, value: Value<'_>) -> Result<()> {
//!         match field.number() {
//!             1 => self.seconds = value.as_i64().unwrap_or_default(),
//!             2 => self.nanos = value.as_i32().unwrap_or_default(),
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut ts = Timestamp::default();
//! decode_slice(&[0x08, 0xAE, 0x2C, 0x10, 0xD2, 0x09], &timestamp, &mut ts)?;
//! assert_eq!((ts.seconds, ts.nanos), (5678, 1234));
//! # Ok::<(), protoparse::Error>(())
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod oneof;
pub mod raw;
pub mod schema;
pub mod source;
pub mod value;
pub mod wire;

pub use config::DecodeConfig;
pub use decode::{decode, decode_slice, Decoder, FieldSink, MessageReader};
pub use encode::{encode_field, Encode, Encoder};
pub use error::{Error, ErrorKind, Malformed, Result};
pub use oneof::OneOf;
pub use raw::{RawField, RawFields, RawValue};
pub use schema::{FieldDefinition, FieldType, Lookup, Schema};
pub use source::{ByteSource, MappedFile, OwnedSource, SliceSource, StreamSource};
pub use value::{PackedList, Value};
pub use wire::WireType;
