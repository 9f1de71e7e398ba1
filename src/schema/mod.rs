//! Field Schema: metadata per field dan lookup per message type
//!
//! Prinsip desain:
//! - Immutable: dibuat sekali per message type, read-only setelahnya
//! - Explicit: schema dioper ke decode/encode, tidak ada registry global
//! - Shareable: `Schema` aman dibagi antar thread (read-only)

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::wire::{make_tag, WireType, MAX_FIELD_NUMBER};

/// Tipe field yang dideklarasikan di schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    Enum,
    String,
    Bytes,
    Message,
}

impl FieldType {
    /// Wire type yang dipakai saat encode field tunggal
    #[inline(always)]
    pub const fn wire_type(self) -> WireType {
        match self {
            Self::Int32
            | Self::Int64
            | Self::UInt32
            | Self::UInt64
            | Self::SInt32
            | Self::SInt64
            | Self::Bool
            | Self::Enum => WireType::Varint,
            Self::Fixed64 | Self::SFixed64 | Self::Double => WireType::Fixed64,
            Self::Fixed32 | Self::SFixed32 | Self::Float => WireType::Fixed32,
            Self::String | Self::Bytes | Self::Message => WireType::Delimited,
        }
    }

    /// Numeric scalar yang boleh di-pack
    #[inline(always)]
    pub const fn is_packable(self) -> bool {
        !matches!(self, Self::String | Self::Bytes | Self::Message)
    }
}

/// Metadata immutable untuk satu field
///
/// Invariant: `number` di rentang `1..=MAX_FIELD_NUMBER`, nama tidak kosong.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinition {
    name: Cow<'static, str>,
    field_type: FieldType,
    repeated: bool,
    number: u32,
}

impl FieldDefinition {
    /// Constructor untuk `const`/`static` schema
    ///
    /// # Panics
    /// Panic (compile error di const context) jika number di luar rentang
    /// atau nama kosong.
    pub const fn of(name: &'static str, field_type: FieldType, repeated: bool, number: u32) -> Self {
        assert!(
            number > 0 && number <= MAX_FIELD_NUMBER,
            "field number out of range"
        );
        assert!(!name.is_empty(), "field name must not be empty");
        Self {
            name: Cow::Borrowed(name),
            field_type,
            repeated,
            number,
        }
    }

    /// Constructor runtime dengan validasi
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        field_type: FieldType,
        repeated: bool,
        number: i32,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::unsupported("", "field name must not be empty"));
        }
        if number <= 0 || number as u32 > MAX_FIELD_NUMBER {
            return Err(Error::unsupported(
                &name,
                format!("field number {number} is out of range"),
            ));
        }
        Ok(Self {
            name,
            field_type,
            repeated,
            number: number as u32,
        })
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[inline(always)]
    pub fn repeated(&self) -> bool {
        self.repeated
    }

    #[inline(always)]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline(always)]
    pub fn wire_type(&self) -> WireType {
        self.field_type.wire_type()
    }

    /// Tag untuk satu occurrence field ini (bentuk non-packed)
    #[inline(always)]
    pub fn tag(&self) -> u64 {
        make_tag(self.number, self.wire_type())
    }
}

/// Lookup dari field number ke definisi, `None` untuk unknown field
///
/// Harus pure dan stateless. Closure `Fn(u32) -> Option<&'static FieldDefinition>`
/// otomatis memenuhi trait ini, cocok untuk schema berbasis `match`.
pub trait Lookup {
    fn lookup(&self, field_number: u32) -> Option<&FieldDefinition>;
}

impl<F> Lookup for F
where
    F: Fn(u32) -> Option<&'static FieldDefinition>,
{
    #[inline(always)]
    fn lookup(&self, field_number: u32) -> Option<&FieldDefinition> {
        self(field_number)
    }
}

/// Field number maksimal yang masih memakai index langsung
const DENSE_LIMIT: u32 = 1024;

/// Tabel field immutable untuk satu message type
#[derive(Debug, Clone)]
pub struct Schema {
    // Urut berdasarkan number
    fields: Box<[FieldDefinition]>,
    // dense[n] = posisi + 1 di `fields`, 0 = tidak ada. Kosong jika sparse.
    dense: Box<[u16]>,
}

impl Schema {
    /// Membuat schema dari kumpulan field
    ///
    /// UnsupportedSchema jika ada field number duplikat.
    pub fn new(fields: impl IntoIterator<Item = FieldDefinition>) -> Result<Self> {
        let mut fields: Vec<FieldDefinition> = fields.into_iter().collect();
        fields.sort_by_key(FieldDefinition::number);

        if let Some(pair) = fields.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(Error::unsupported(
                pair[1].name(),
                format!("field number {} is used twice", pair[1].number),
            ));
        }

        let max = fields.last().map_or(0, FieldDefinition::number);
        let dense = if max <= DENSE_LIMIT {
            let mut dense = vec![0u16; max as usize + 1];
            for (i, f) in fields.iter().enumerate() {
                dense[f.number as usize] = i as u16 + 1;
            }
            dense.into_boxed_slice()
        } else {
            Box::default()
        };

        Ok(Self {
            fields: fields.into_boxed_slice(),
            dense,
        })
    }

    /// Semua field, urut berdasarkan number
    #[inline]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name() == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Lookup for Schema {
    #[inline(always)]
    fn lookup(&self, field_number: u32) -> Option<&FieldDefinition> {
        if !self.dense.is_empty() {
            return match self.dense.get(field_number as usize) {
                Some(&slot) if slot > 0 => Some(&self.fields[slot as usize - 1]),
                _ => None,
            };
        }
        self.fields
            .binary_search_by_key(&field_number, FieldDefinition::number)
            .ok()
            .map(|i| &self.fields[i])
    }
}
