//! Decoding and encoding of the code units the algorithms run over.
//!
//! Every algorithm in this crate is written once, against [`CodeUnit`], and
//! instantiated for UTF-8 (`u8`), UTF-16 (`u16`), UTF-32 (`u32`) and plain
//! `char` slices.

use std::fmt;
use thiserror::Error;

/// An ill-formed code unit subsequence.
///
/// `len` is the length of the maximal ill-formed prefix, always at least 1,
/// so a decoder can resynchronize by skipping it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("ill-formed sequence of {len} code unit(s)")]
pub struct MalformedSequence {
    /// Number of code units that make up the ill-formed subsequence.
    pub len: usize,
}

/// A code unit of some Unicode encoding form.
pub trait CodeUnit: Copy + Default + fmt::Debug + private::Sealed {
    /// Upper bound on the number of units one scalar value occupies.
    const MAX_LEN: usize;

    /// Decodes the character at the start of `units`, returning it together
    /// with the number of units it occupies.
    ///
    /// `units` must not be empty.
    fn decode(units: &[Self]) -> Result<(char, usize), MalformedSequence>;

    /// Encodes `ch` into the front of `dst`, returning the number of units
    /// written. `dst` must hold at least [`Self::MAX_LEN`] units.
    fn encode(ch: char, dst: &mut [Self]) -> usize;
}

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const TAG_INVALID: u8 = 0b1111_1000;

const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

#[inline]
fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

/// Number of continuation bytes announced by a lead byte, or `None` if the
/// byte can't start a UTF-8 sequence.
fn cont_len_from_first_byte(v: u8) -> Option<usize> {
    if v < 0x80 {
        Some(0)
    } else if v & TAG_INVALID == TAG_FOUR_B {
        Some(3)
    } else if v & TAG_FOUR_B == TAG_THREE_B {
        Some(2)
    } else if v & TAG_THREE_B == TAG_TWO_B {
        Some(1)
    } else {
        None
    }
}

/// Range the second byte must fall in, given the lead byte. Narrower than
/// plain continuation bytes for the leads where overlong forms, surrogates
/// or values beyond U+10FFFF would otherwise slip through.
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

#[inline]
fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_VALUE_MASK) as u32
}

impl CodeUnit for u8 {
    const MAX_LEN: usize = 4;

    fn decode(units: &[u8]) -> Result<(char, usize), MalformedSequence> {
        let lead = units[0];
        let cont_len = match cont_len_from_first_byte(lead) {
            Some(0) => return Ok((lead as char, 1)),
            // C0 and C1 only ever start overlong two-byte forms, F5..F7 start
            // values beyond U+10FFFF.
            Some(_) if matches!(lead, 0xC0 | 0xC1) || lead > 0xF4 => {
                return Err(MalformedSequence { len: 1 })
            }
            Some(n) => n,
            None => return Err(MalformedSequence { len: 1 }),
        };
        let mut value = (lead & (0x7F >> (cont_len + 1))) as u32;
        for i in 1..=cont_len {
            let byte = match units.get(i) {
                Some(&b) => b,
                None => return Err(MalformedSequence { len: i }),
            };
            let well_formed = if i == 1 {
                let (lo, hi) = second_byte_range(lead);
                (lo..=hi).contains(&byte)
            } else {
                is_cont_byte(byte)
            };
            if !well_formed {
                return Err(MalformedSequence { len: i });
            }
            value = utf8_acc_cont_byte(value, byte);
        }
        char::from_u32(value)
            .map(|ch| (ch, cont_len + 1))
            .ok_or(MalformedSequence { len: cont_len + 1 })
    }

    fn encode(ch: char, dst: &mut [u8]) -> usize {
        ch.encode_utf8(dst).len()
    }
}

impl CodeUnit for u16 {
    const MAX_LEN: usize = 2;

    fn decode(units: &[u16]) -> Result<(char, usize), MalformedSequence> {
        let first = units[0];
        match first {
            0xD800..=0xDBFF => match units.get(1) {
                Some(&second @ 0xDC00..=0xDFFF) => {
                    let value =
                        0x10000 + (((first as u32) - 0xD800) << 10) + ((second as u32) - 0xDC00);
                    char::from_u32(value)
                        .map(|ch| (ch, 2))
                        .ok_or(MalformedSequence { len: 2 })
                }
                _ => Err(MalformedSequence { len: 1 }),
            },
            0xDC00..=0xDFFF => Err(MalformedSequence { len: 1 }),
            _ => char::from_u32(first as u32)
                .map(|ch| (ch, 1))
                .ok_or(MalformedSequence { len: 1 }),
        }
    }

    fn encode(ch: char, dst: &mut [u16]) -> usize {
        ch.encode_utf16(dst).len()
    }
}

impl CodeUnit for u32 {
    const MAX_LEN: usize = 1;

    fn decode(units: &[u32]) -> Result<(char, usize), MalformedSequence> {
        char::from_u32(units[0])
            .map(|ch| (ch, 1))
            .ok_or(MalformedSequence { len: 1 })
    }

    fn encode(ch: char, dst: &mut [u32]) -> usize {
        dst[0] = ch as u32;
        1
    }
}

impl CodeUnit for char {
    const MAX_LEN: usize = 1;

    fn decode(units: &[char]) -> Result<(char, usize), MalformedSequence> {
        Ok((units[0], 1))
    }

    fn encode(ch: char, dst: &mut [char]) -> usize {
        dst[0] = ch;
        1
    }
}

/// Decodes the character at the start of `units`, substituting U+FFFD for an
/// ill-formed subsequence.
pub(crate) fn decode_lossy<U: CodeUnit>(units: &[U]) -> (char, usize) {
    match U::decode(units) {
        Ok(decoded) => decoded,
        Err(MalformedSequence { len }) => {
            log::trace!("replacing {} ill-formed code unit(s) with U+FFFD", len);
            (char::REPLACEMENT_CHARACTER, len)
        }
    }
}

/// Iterator over the characters of a code unit slice, yielding each
/// character with its offset and length in units. Ill-formed subsequences
/// come out as U+FFFD.
#[derive(Clone, Debug)]
pub(crate) struct LossyChars<'a, U> {
    units: &'a [U],
    offset: usize,
}

impl<'a, U: CodeUnit> LossyChars<'a, U> {
    pub(crate) fn new(units: &'a [U]) -> Self {
        LossyChars { units, offset: 0 }
    }
}

impl<'a, U: CodeUnit> Iterator for LossyChars<'a, U> {
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.units.get(self.offset..).filter(|r| !r.is_empty())?;
        let (ch, len) = decode_lossy(rest);
        let offset = self.offset;
        self.offset += len;
        Some((offset, ch, len))
    }
}

/// Iterator over the characters of a code unit slice that stops at the first
/// ill-formed subsequence, reporting its offset.
#[derive(Clone, Debug)]
pub(crate) struct StrictChars<'a, U> {
    units: &'a [U],
    offset: usize,
}

impl<'a, U: CodeUnit> StrictChars<'a, U> {
    pub(crate) fn new(units: &'a [U]) -> Self {
        StrictChars { units, offset: 0 }
    }
}

impl<'a, U: CodeUnit> Iterator for StrictChars<'a, U> {
    type Item = Result<(usize, char, usize), usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.units.get(self.offset..).filter(|r| !r.is_empty())?;
        let offset = self.offset;
        match U::decode(rest) {
            Ok((ch, len)) => {
                self.offset += len;
                Some(Ok((offset, ch, len)))
            }
            Err(_) => {
                self.offset = self.units.len();
                Some(Err(offset))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lossy<U: CodeUnit>(units: &[U]) -> Vec<(usize, char, usize)> {
        LossyChars::new(units).collect()
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(Ok(('a', 1)), u8::decode(b"a"));
        assert_eq!(Ok(('\u{E9}', 2)), u8::decode("\u{E9}".as_bytes()));
        assert_eq!(Ok(('\u{20AC}', 3)), u8::decode("\u{20AC}".as_bytes()));
        assert_eq!(Ok(('\u{1F600}', 4)), u8::decode("\u{1F600}".as_bytes()));
    }

    #[test]
    fn test_decode_utf8_ill_formed() {
        // overlong
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0xC0, 0xAF]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0xE0, 0x80, 0x80]));
        // surrogate
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0xED, 0xA0, 0x80]));
        // beyond U+10FFFF
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0xF4, 0x90, 0x80, 0x80]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0xF5]));
        // truncated
        assert_eq!(Err(MalformedSequence { len: 2 }), u8::decode(&[0xE2, 0x82]));
        assert_eq!(Err(MalformedSequence { len: 2 }), u8::decode(&[0xE2, 0x82, b'a']));
        // stray continuation byte
        assert_eq!(Err(MalformedSequence { len: 1 }), u8::decode(&[0x80]));
    }

    #[test]
    fn test_lossy_chars_utf8() {
        assert_eq!(
            vec![
                (0, 'a', 1),
                (1, char::REPLACEMENT_CHARACTER, 2),
                (3, 'b', 1),
                (4, char::REPLACEMENT_CHARACTER, 1)
            ],
            lossy(&[b'a', 0xE2, 0x82, b'b', 0xFF])
        );
    }

    #[test]
    fn test_decode_utf16() {
        let units: Vec<u16> = "a\u{1F600}".encode_utf16().collect();
        assert_eq!(vec![(0, 'a', 1), (1, '\u{1F600}', 2)], lossy(&units));
        assert_eq!(Err(MalformedSequence { len: 1 }), u16::decode(&[0xDC00]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u16::decode(&[0xD800, 0x0041]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u16::decode(&[0xD800]));
    }

    #[test]
    fn test_decode_utf32() {
        assert_eq!(Ok(('A', 1)), u32::decode(&[0x41]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u32::decode(&[0xD800]));
        assert_eq!(Err(MalformedSequence { len: 1 }), u32::decode(&[0x110000]));
    }

    #[test]
    fn test_encode() {
        let mut buf8 = [0u8; 4];
        assert_eq!(3, u8::encode('\u{20AC}', &mut buf8));
        assert_eq!(&[0xE2, 0x82, 0xAC], &buf8[..3]);
        let mut buf16 = [0u16; 2];
        assert_eq!(2, u16::encode('\u{1F600}', &mut buf16));
        assert_eq!([0xD83D, 0xDE00], buf16);
        let mut buf32 = [0u32; 1];
        assert_eq!(1, u32::encode('\u{1F600}', &mut buf32));
        assert_eq!([0x1F600], buf32);
    }

    #[test]
    fn test_strict_chars() {
        let chars: Vec<_> = StrictChars::new(&[b'a', 0xFF, b'b'][..]).collect();
        assert_eq!(vec![Ok((0, 'a', 1)), Err(1)], chars);
    }
}
