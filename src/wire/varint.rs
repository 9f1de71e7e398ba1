//! Varint dan ZigZag codec
//!
//! Format: 7 data bits per byte, low-order group duluan,
//! continuation bit (0x80) di semua byte kecuali yang terakhir.
//! Nilai 64-bit butuh maksimal 10 byte.

use crate::error::{Malformed, Result};
use crate::source::ByteSource;

/// Maksimal panjang varint 64-bit
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION_BIT: u8 = 0b1000_0000;
const DATA_MASK: u8 = 0b0111_1111;

/// Jumlah byte yang dibutuhkan untuk encode `value`
#[inline(always)]
pub const fn encoded_len(value: u64) -> usize {
    // bits 1..=64 -> ceil(bits / 7), nol tetap 1 byte
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Encode varint ke stack buffer, return (buffer, panjang)
///
/// Tidak ada alokasi. Nol selalu menghasilkan satu byte 0x00.
#[inline(always)]
pub fn encode(mut value: u64) -> ([u8; MAX_VARINT_LEN], usize) {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = (value as u8 & DATA_MASK) | CONTINUATION_BIT;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    (buf, i + 1)
}

/// Append varint ke Vec
#[inline(always)]
pub fn write(out: &mut Vec<u8>, value: u64) {
    // Fast path untuk nilai kecil (tag dan length biasanya < 128)
    if value < 0x80 {
        out.push(value as u8);
        return;
    }
    let (buf, len) = encode(value);
    out.extend_from_slice(&buf[..len]);
}

/// Decode satu varint dari byte source
///
/// Malformed jika byte ke-10 masih punya continuation bit,
/// atau input habis di tengah varint.
#[inline]
pub fn read<S: ByteSource + ?Sized>(source: &mut S) -> Result<u64> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for count in 1..=MAX_VARINT_LEN {
        let byte = match source.read_byte()? {
            Some(b) => b,
            None => return Err(Malformed::TruncatedVarint.into()),
        };

        value |= u64::from(byte & DATA_MASK) << shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(value);
        }
        if count == MAX_VARINT_LEN {
            break;
        }
        shift += 7;
    }

    Err(Malformed::VarintOverflow.into())
}

/// Decode varint dari awal slice, return (value, bytes consumed)
///
/// Dipakai oleh packed list dan raw walker yang sudah pegang slice.
#[inline]
pub fn decode_slice(buf: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;

    for (i, &byte) in buf.iter().take(MAX_VARINT_LEN).enumerate() {
        value |= u64::from(byte & DATA_MASK) << (7 * i as u32);
        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, i + 1));
        }
    }

    if buf.len() >= MAX_VARINT_LEN {
        Err(Malformed::VarintOverflow.into())
    } else {
        Err(Malformed::TruncatedVarint.into())
    }
}

/// ZigZag encode: signed kecil -> unsigned kecil
///
/// `(value << 1) ^ (value >> 63)` dengan arithmetic shift.
#[inline(always)]
pub const fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// ZigZag decode: logical shift lalu sign-extend dari bit terendah
#[inline(always)]
pub const fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
