//! LZW (Lempel–Ziv–Welch) byte-stream codec.
//!
//! 12-bit codes packed little-endian into the output byte stream, with the
//! final byte zero-padded. Codes 0–255 alias single bytes, 4095 is the
//! reserved END marker, and phrase entries are assigned from 256 up to and
//! including 4094; once the table is full the dictionary stops growing (no
//! reset). The encoder keys phrases as `(prefix_code, byte)` pairs; the
//! decoder keeps the phrase table explicitly and resolves the classic
//! `KwKwK` self-referencing code.

use crate::config::{LZW_CODE_BITS, LZW_END_CODE, LZW_FIRST_FREE_CODE};
use std::collections::HashMap;

/// Compresses a byte sequence. The output always ends with the END marker.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut dict: HashMap<(u16, u8), u16> = HashMap::new();
    let mut next_code = LZW_FIRST_FREE_CODE;
    let mut codes: Vec<u16> = Vec::new();
    let mut w: Option<u16> = None;

    for &c in input {
        match w {
            None => w = Some(c as u16),
            Some(prefix) => {
                if let Some(&code) = dict.get(&(prefix, c)) {
                    w = Some(code);
                } else {
                    codes.push(prefix);
                    if next_code < LZW_END_CODE {
                        dict.insert((prefix, c), next_code);
                        next_code += 1;
                    }
                    w = Some(c as u16);
                }
            }
        }
    }

    if let Some(prefix) = w {
        codes.push(prefix);
    }
    codes.push(LZW_END_CODE);
    pack_codes(&codes)
}

/// Decompresses an LZW byte stream. A malformed stream (a code referencing
/// a dictionary entry that cannot exist yet) yields an empty result.
pub fn decompress(data: &[u8]) -> Vec<u8> {
    let codes = unpack_codes(data);
    let Some((&first, rest)) = codes.split_first() else {
        return Vec::new();
    };
    if first == LZW_END_CODE {
        return Vec::new();
    }
    // The first code must be a single-byte alias.
    if first >= LZW_FIRST_FREE_CODE {
        return Vec::new();
    }

    let mut dict: Vec<Vec<u8>> = (0u16..LZW_FIRST_FREE_CODE)
        .map(|i| vec![i as u8])
        .collect();
    let mut next_code = LZW_FIRST_FREE_CODE;

    let mut w = dict[first as usize].clone();
    let mut out = w.clone();

    for &k in rest {
        if k == LZW_END_CODE {
            break;
        }

        let entry: Vec<u8> = if (k as usize) < dict.len() {
            dict[k as usize].clone()
        } else if k == next_code && !w.is_empty() {
            // KwKwK: the code being defined right now.
            let mut e = w.clone();
            e.push(w[0]);
            e
        } else {
            return Vec::new();
        };

        out.extend_from_slice(&entry);

        if next_code < LZW_END_CODE && !w.is_empty() && !entry.is_empty() {
            let mut phrase = w.clone();
            phrase.push(entry[0]);
            dict.push(phrase);
            next_code += 1;
        }

        w = entry;
    }

    out
}

/// Packs codes little-endian, `LZW_CODE_BITS` bits each, zero-padding the
/// final byte.
fn pack_codes(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * LZW_CODE_BITS as usize / 8 + 1);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &code in codes {
        buffer |= ((code as u32) & ((1 << LZW_CODE_BITS) - 1)) << bits;
        bits += LZW_CODE_BITS;
        while bits >= 8 {
            out.push((buffer & 0xFF) as u8);
            buffer >>= 8;
            bits -= 8;
        }
    }

    if bits > 0 {
        out.push((buffer & 0xFF) as u8);
    }
    out
}

fn unpack_codes(data: &[u8]) -> Vec<u16> {
    let mut codes = Vec::with_capacity(data.len() * 8 / LZW_CODE_BITS as usize);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer |= (byte as u32) << bits;
        bits += 8;
        while bits >= LZW_CODE_BITS {
            codes.push((buffer & ((1 << LZW_CODE_BITS) - 1)) as u16);
            buffer >>= LZW_CODE_BITS;
            bits -= LZW_CODE_BITS;
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(input: &[u8]) {
        let compressed = compress(input);
        assert_eq!(decompress(&compressed), input);
    }

    #[test]
    fn test_empty_input() {
        round_trip(b"");
        assert_eq!(compress(b"").len(), 2);
    }

    #[test]
    fn test_round_trip_simple() {
        round_trip(b"hello world");
    }

    #[test]
    fn test_round_trip_single_byte() {
        round_trip(b"x");
    }

    #[test]
    fn test_round_trip_long_text() {
        let mut s = Vec::new();
        for _ in 0..5000 {
            s.extend_from_slice(b"the quick brown fox jumps over the lazy dog ");
        }
        round_trip(&s);
    }

    #[test]
    fn test_compression_helps_on_repetition() {
        let input = vec![b'a'; 20000];
        let compressed = compress(&input);
        assert!(compressed.len() < input.len());
        assert_eq!(decompress(&compressed), input);
    }

    #[test]
    fn test_kwkwk_self_reference() {
        // "aaaa" makes the encoder emit a code in the same step it is
        // defined, exercising the decoder's pending-code branch.
        round_trip(b"aaaa");
        round_trip(b"abababababab");
    }

    #[test]
    fn test_binary_like_data() {
        let mut s: Vec<u8> = (0..=255u8).collect();
        s.extend(0..=255u8);
        round_trip(&s);
    }

    #[test]
    fn test_dictionary_saturation() {
        // More distinct digrams than free codes; the table must clamp at
        // 4094 entries and keep encoding correctly.
        let mut s = Vec::new();
        for i in 0..=255u8 {
            for j in 0..=255u8 {
                s.push(i);
                s.push(j);
            }
        }
        round_trip(&s);
    }

    #[test]
    fn test_malformed_first_code() {
        // A phrase code before any phrase can exist.
        let data = pack_codes(&[300, LZW_END_CODE]);
        assert!(decompress(&data).is_empty());
    }

    #[test]
    fn test_malformed_future_code() {
        // 4000 is far beyond the next assignable code after one literal.
        let data = pack_codes(&[97, 4000, LZW_END_CODE]);
        assert!(decompress(&data).is_empty());
    }

    #[test]
    fn test_truncated_stream_without_end_marker() {
        let data = pack_codes(&[97, 98]);
        assert_eq!(decompress(&data), b"ab");
    }
}
