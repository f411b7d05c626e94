//! Word boundaries (UAX #29, section 4).

use crate::code_unit::{CodeUnit, LossyChars};
use crate::properties::{Ucd, UnicodeProperties, WordBreak};

/// Determines the word boundaries of `s`.
///
/// The result has one entry per code unit of `s`; an entry is `true` when a
/// word boundary lies immediately before that unit. Entry 0 is `true` for
/// non-empty input and the units inside a multi-unit character are always
/// `false`.
///
/// ```
/// let s: Vec<char> = "can't stop".chars().collect();
/// let breaks = unitext::word_breaks(&s);
/// assert_eq!(
///     vec![true, false, false, false, false, true, true, false, false, false],
///     breaks
/// );
/// ```
pub fn word_breaks<U: CodeUnit>(s: &[U]) -> Vec<bool> {
    let mut p = vec![false; s.len()];
    word_breaks_into(&Ucd, s, &mut p);
    p
}

/// Like [`word_breaks`], but looks character properties up through `props`
/// and writes into a caller-provided array.
///
/// # Panics
///
/// Panics if `p` and `s` differ in length.
pub fn word_breaks_into<U, P>(props: &P, s: &[U], p: &mut [bool])
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
{
    use WordBreak::*;

    assert_eq!(
        s.len(),
        p.len(),
        "word_breaks_into: break array must match the input length"
    );
    p.fill(false);

    // Format, Extend and ZWJ characters are ignored (WB4), so most rules see
    // complex characters: a character together with the ignorable characters
    // that follow it.
    let mut last_char_prop: Option<WordBreak> = None;
    // Class of the last complex character and the index of its slot in `p`,
    // so that a tentative boundary in front of it can be retracted.
    let mut last_compchar: Option<(WordBreak, usize)> = None;
    let mut secondlast_compchar_prop: Option<WordBreak> = None;
    let mut ri_count = 0usize;

    for (offset, ch, _) in LossyChars::new(s) {
        let prop = props.word_break(ch);
        let ignorable = matches!(prop, Extend | Format | ZWJ);

        match last_char_prop {
            // WB1
            None => p[offset] = true,
            // WB3
            Some(CR) if prop == LF => {}
            // WB3a, WB3b
            Some(CR | LF | Newline) => p[offset] = true,
            _ if matches!(prop, CR | LF | Newline) => p[offset] = true,
            // WB3c
            Some(ZWJ) if props.is_extended_pictographic(ch) => {}
            // WB3d
            Some(WSegSpace) if prop == WSegSpace => {}
            // WB4
            _ if ignorable => {}
            Some(_) => {
                let last_compchar_prop = last_compchar.map(|(prop, _)| prop);
                if ends_mid_word_sequence(secondlast_compchar_prop, last_compchar_prop, prop) {
                    // WB6, WB7, WB7b, WB7c, WB11, WB12: the boundary recorded
                    // in front of the middle character was premature.
                    if let Some((_, slot)) = last_compchar {
                        log::trace!("retracting word boundary at unit {}", slot);
                        p[slot] = false;
                    }
                } else if last_compchar_prop == Some(RegionalIndicator)
                    && prop == RegionalIndicator
                {
                    // WB15, WB16
                    p[offset] = ri_count % 2 == 0;
                } else if matches!(last_compchar_prop, Some(Extend | Format)) {
                    p[offset] = true;
                } else {
                    p[offset] = last_compchar_prop.map_or(true, |last| pair_breaks(last, prop));
                }
            }
        }

        last_char_prop = Some(prop);

        if !ignorable || matches!(last_compchar, None | Some((CR | LF | Newline, _))) {
            secondlast_compchar_prop = last_compchar.map(|(prop, _)| prop);
            last_compchar = Some((prop, offset));
            if prop == RegionalIndicator {
                ri_count += 1;
            } else {
                ri_count = 0;
            }
        }
    }
}

/// Whether `secondlast last current` is one of the three-character sequences
/// that must not be broken inside:
///
/// ```text
/// (ALetter | HL)  (MidLetter | MidNumLet | SQ)  (ALetter | HL)
/// Numeric         (MidNum | MidNumLet | SQ)     Numeric
/// HL              DQ                            HL
/// ```
fn ends_mid_word_sequence(
    secondlast: Option<WordBreak>,
    last: Option<WordBreak>,
    current: WordBreak,
) -> bool {
    use WordBreak::*;

    let (secondlast, last) = match (secondlast, last) {
        (Some(secondlast), Some(last)) => (secondlast, last),
        _ => return false,
    };
    (matches!(current, ALetter | HebrewLetter)
        && matches!(last, MidLetter | MidNumLet | SingleQuote)
        && matches!(secondlast, ALetter | HebrewLetter))
        || (current == Numeric
            && matches!(last, MidNum | MidNumLet | SingleQuote)
            && secondlast == Numeric)
        || (current == HebrewLetter && last == DoubleQuote && secondlast == HebrewLetter)
}

const WBP_COUNT: usize = WordBreak::EBaseGaz as usize + 1;

/// Pairs of adjacent complex characters with no boundary between them.
/// Everything else breaks (WB999).
const NO_BREAK_PAIRS: &[(WordBreak, WordBreak)] = {
    use WordBreak::*;
    &[
        // WB5
        (ALetter, ALetter),
        (ALetter, HebrewLetter),
        (HebrewLetter, ALetter),
        (HebrewLetter, HebrewLetter),
        // WB7a
        (HebrewLetter, SingleQuote),
        // WB8
        (Numeric, Numeric),
        // WB9
        (ALetter, Numeric),
        (HebrewLetter, Numeric),
        // WB10
        (Numeric, ALetter),
        (Numeric, HebrewLetter),
        // WB13
        (Katakana, Katakana),
        // WB13a
        (ALetter, ExtendNumLet),
        (HebrewLetter, ExtendNumLet),
        (Numeric, ExtendNumLet),
        (Katakana, ExtendNumLet),
        (ExtendNumLet, ExtendNumLet),
        // WB13b
        (ExtendNumLet, ALetter),
        (ExtendNumLet, HebrewLetter),
        (ExtendNumLet, Numeric),
        (ExtendNumLet, Katakana),
    ]
};

const fn build_pair_table() -> [[bool; WBP_COUNT]; WBP_COUNT] {
    let mut table = [[true; WBP_COUNT]; WBP_COUNT];
    let mut i = 0;
    while i < NO_BREAK_PAIRS.len() {
        let (last, current) = NO_BREAK_PAIRS[i];
        table[last as usize][current as usize] = false;
        i += 1;
    }
    table
}

static PAIR_TABLE: [[bool; WBP_COUNT]; WBP_COUNT] = build_pair_table();

#[inline]
fn pair_breaks(last: WordBreak, current: WordBreak) -> bool {
    PAIR_TABLE[last as usize][current as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn breaks(s: &str) -> Vec<bool> {
        word_breaks(&s.chars().collect::<Vec<_>>())
    }

    fn starts(s: &str) -> Vec<usize> {
        word_breaks(s.as_bytes())
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then(|| i))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(Vec::<bool>::new(), word_breaks::<char>(&[]));
    }

    #[test]
    fn test_crlf() {
        // WB3 keeps CR LF together; WB3a/WB3b break around it.
        assert_eq!(vec![T, T, F, T], word_breaks(&['\u{41}', '\u{0D}', '\u{0A}', '\u{42}']));
        assert_eq!(vec![T, T, T], breaks("\n\r\r"));
    }

    #[test]
    fn test_letters_and_spaces() {
        assert_eq!(vec![T, F, F, T, T, F], breaks("abc de"));
        // WB3d
        assert_eq!(vec![T, T, F, F, T], breaks("a   b"));
    }

    #[test]
    fn test_mid_letter_retraction() {
        assert_eq!(vec![T, F, F, F, F], breaks("can't"));
        assert_eq!(vec![T, F, F], breaks("a.b"));
        assert_eq!(vec![T, T], breaks("a."));
        assert_eq!(vec![T, T, T], breaks("a.."));
        assert_eq!(vec![T, F, F, T, T, T], breaks("e.g. x"));
    }

    #[test]
    fn test_mid_num_retraction() {
        assert_eq!(vec![T, F, F, F, F], breaks("3.141"));
        assert_eq!(vec![T, F, F, F, F, F, F, F, F], breaks("1,000,000"));
        assert_eq!(vec![T, F, T, T], breaks("12,,"));
        assert_eq!(vec![T, T, T], breaks("1,a"));
    }

    #[test]
    fn test_hebrew_letters() {
        // WB7b, WB7c
        assert_eq!(vec![T, F, F], breaks("\u{05D0}\"\u{05D1}"));
        assert_eq!(vec![T, T, T], breaks("a\"b"));
        // WB7a
        assert_eq!(vec![T, F], breaks("\u{05D0}'"));
    }

    #[test]
    fn test_ignored_characters() {
        // WB4: the accent belongs to the word, and the rules see through it.
        assert_eq!(vec![T, F, F, F], breaks("e\u{0301}.b"));
        assert_eq!(vec![T, F, F, F, F], breaks("a\u{00AD}b\u{200D}c"));
        // After a newline the ignorable character stands on its own.
        assert_eq!(vec![T, T, T], breaks("\n\u{0301}a"));
    }

    #[test]
    fn test_numbers_letters_and_connectors() {
        assert_eq!(vec![T, F, F, F, F, F, F], breaks("foo_bar"));
        assert_eq!(vec![T, F, F, F], breaks("a1b2"));
        assert_eq!(vec![T, F, T], breaks("\u{30A2}\u{30A4}\u{3042}"));
    }

    #[test]
    fn test_regional_indicators() {
        assert_eq!(
            vec![T, F, T, F, T],
            breaks("\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}\u{1F1EE}")
        );
    }

    #[test]
    fn test_emoji_zwj() {
        // WB3c
        assert_eq!(vec![T, F, F], breaks("\u{1F468}\u{200D}\u{1F469}"));
        assert_eq!(vec![T, F, F], breaks("a\u{200D}\u{1F469}"));
    }

    #[test]
    fn test_code_units() {
        assert_eq!(vec![0, 5, 6], starts("\u{00E9}t\u{00E9} x"));
        let utf16: Vec<u16> = "\u{00E9}t\u{00E9} x".encode_utf16().collect();
        assert_eq!(vec![T, F, F, T, T], word_breaks(&utf16));
    }

    #[test]
    fn test_matches_unicode_segmentation() {
        use unicode_segmentation::UnicodeSegmentation;

        let samples = [
            "The quick (\"brown\") fox can't jump 32.3 feet, right?",
            "hello, world",
            "3.14 and 1,000,000 and 1.2.3",
            "e\u{0301}tude cafe\u{0301} na\u{00EF}ve",
            "foo_bar  baz\tqux",
            "\u{05D0}\"\u{05D1} \u{05D2}'",
            "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}",
            "line\r\nbreak\u{2028}done",
            "\u{30AB}\u{30BF}\u{30AB}\u{30CA} \u{4E2D}\u{6587}",
        ];
        for sample in samples {
            let expected: Vec<usize> = sample
                .split_word_bound_indices()
                .map(|(i, _)| i)
                .collect();
            assert_eq!(expected, starts(sample), "{:?}", sample);
        }
    }

    #[test]
    fn test_pair_table() {
        assert!(!pair_breaks(WordBreak::ALetter, WordBreak::ALetter));
        assert!(pair_breaks(WordBreak::ALetter, WordBreak::MidLetter));
        assert!(pair_breaks(WordBreak::Other, WordBreak::Other));
        assert!(pair_breaks(WordBreak::Katakana, WordBreak::ALetter));
    }
}
