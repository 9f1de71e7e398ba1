//! OneOf: satu nilai dari sekelompok field yang saling eksklusif
//!
//! Decoder tidak punya special-case untuk oneof. Sink cukup menimpa slot
//! `Option<OneOf<..>>` setiap kali member mana pun terlihat di wire,
//! jadi occurrence terakhir yang menang (bukan field number terbesar).

/// Member oneof yang terakhir terlihat: field number, kind, dan value
///
/// `K` adalah enum discriminant milik caller, `V` tipe value-nya
/// (biasanya enum juga kalau member punya tipe berbeda-beda).
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<K, V> {
    field_number: u32,
    kind: K,
    value: V,
}

impl<K, V> OneOf<K, V> {
    #[inline]
    pub fn new(field_number: u32, kind: K, value: V) -> Self {
        Self {
            field_number,
            kind,
            value,
        }
    }

    /// Simpan member baru ke slot, return member sebelumnya
    ///
    /// Last-wins: selalu menimpa, apa pun kind yang lama.
    #[inline]
    pub fn replace(slot: &mut Option<Self>, field_number: u32, kind: K, value: V) -> Option<Self> {
        slot.replace(Self::new(field_number, kind, value))
    }

    #[inline]
    pub fn field_number(&self) -> u32 {
        self.field_number
    }

    #[inline]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (u32, K, V) {
        (self.field_number, self.kind, self.value)
    }
}

impl<K: PartialEq, V> OneOf<K, V> {
    /// Cek kind tanpa destructure
    #[inline]
    pub fn is(&self, kind: &K) -> bool {
        self.kind == *kind
    }
}
