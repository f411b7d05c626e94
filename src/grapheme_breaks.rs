//! Extended grapheme cluster boundaries (UAX #29, section 3).

use crate::code_unit::{CodeUnit, LossyChars};
use crate::properties::{GraphemeBreak, IndicConjunctBreak, Ucd, UnicodeProperties};

/// Determines the grapheme cluster boundaries of `s`.
///
/// The result has one entry per code unit of `s`; an entry is `true` when a
/// grapheme cluster starts at that unit. Entry 0 is `true` for non-empty
/// input and the units inside a multi-unit character are always `false`.
///
/// ```
/// let breaks = unitext::grapheme_breaks(&['A', '\r', '\n', 'B']);
/// assert_eq!(vec![true, true, false, true], breaks);
/// ```
pub fn grapheme_breaks<U: CodeUnit>(s: &[U]) -> Vec<bool> {
    let mut p = vec![false; s.len()];
    grapheme_breaks_into(&Ucd, s, &mut p);
    p
}

/// Like [`grapheme_breaks`], but looks character properties up through
/// `props` and writes into a caller-provided array.
///
/// # Panics
///
/// Panics if `p` and `s` differ in length.
pub fn grapheme_breaks_into<U, P>(props: &P, s: &[U], p: &mut [bool])
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
{
    assert_eq!(
        s.len(),
        p.len(),
        "grapheme_breaks_into: break array must match the input length"
    );
    let mut scanner = GraphemeScanner::default();
    for (offset, ch, len) in LossyChars::new(s) {
        p[offset] = scanner.next_char(props, ch);
        p[offset + 1..offset + len].fill(false);
    }
}

/// Scan state carried from one character to the next.
#[derive(Debug, Default)]
struct GraphemeScanner {
    /// `None` before the first character.
    last_char_prop: Option<GraphemeBreak>,

    /// Progress through `Consonant (Extend | Linker)* Linker (Extend | Linker)*`.
    incb_consonant_extended: bool,
    incb_consonant_extended_linker: bool,
    incb_consonant_extended_linker_extended: bool,

    /// Whether the text so far ends in `Extended_Pictographic Extend*`.
    emoji_modifier_sequence: bool,
    emoji_modifier_sequence_before_last_char: bool,

    /// Number of regional indicators immediately before the current position.
    ri_count: usize,
}

impl GraphemeScanner {
    /// Feeds one character and returns whether a boundary precedes it.
    fn next_char<P: UnicodeProperties + ?Sized>(&mut self, props: &P, ch: char) -> bool {
        use GraphemeBreak::*;

        let prop = props.grapheme_break(ch);
        let incb_prop = props.indic_conjunct_break(ch);
        let is_extended_pictographic = props.is_extended_pictographic(ch);

        let is_break = match self.last_char_prop {
            // GB1
            None => true,
            // GB3
            Some(CR) if prop == LF => false,
            // GB4, GB5
            Some(CR | LF | Control) => true,
            _ if matches!(prop, CR | LF | Control) => true,
            // GB6, GB7, GB8
            Some(L) if matches!(prop, L | V | LV | LVT) => false,
            Some(LV | V) if matches!(prop, V | T) => false,
            Some(LVT | T) if prop == T => false,
            // GB9
            _ if matches!(prop, Extend | ZWJ) => false,
            // GB9a
            _ if prop == SpacingMark => false,
            // GB9b
            Some(Prepend) => false,
            // GB9c
            _ if self.incb_consonant_extended_linker_extended
                && incb_prop == IndicConjunctBreak::Consonant =>
            {
                false
            }
            // GB11
            Some(ZWJ) if self.emoji_modifier_sequence_before_last_char && is_extended_pictographic => {
                false
            }
            // GB12, GB13
            _ if prop == RegionalIndicator && self.ri_count % 2 != 0 => false,
            // GB999
            _ => true,
        };

        self.incb_consonant_extended_linker =
            self.incb_consonant_extended && incb_prop == IndicConjunctBreak::Linker;
        self.incb_consonant_extended_linker_extended = self.incb_consonant_extended_linker
            || (self.incb_consonant_extended_linker_extended
                && incb_prop >= IndicConjunctBreak::Linker);
        self.incb_consonant_extended = incb_prop == IndicConjunctBreak::Consonant
            || (self.incb_consonant_extended && incb_prop >= IndicConjunctBreak::Linker);

        self.emoji_modifier_sequence_before_last_char = self.emoji_modifier_sequence;
        self.emoji_modifier_sequence =
            (self.emoji_modifier_sequence && prop == Extend) || is_extended_pictographic;

        self.last_char_prop = Some(prop);
        if prop == RegionalIndicator {
            self.ri_count += 1;
        } else {
            self.ri_count = 0;
        }

        is_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn breaks(s: &str) -> Vec<bool> {
        grapheme_breaks(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_empty() {
        assert_eq!(Vec::<bool>::new(), grapheme_breaks::<char>(&[]));
        assert_eq!(Vec::<bool>::new(), grapheme_breaks::<u8>(&[]));
    }

    #[test]
    fn test_crlf() {
        assert_eq!(
            vec![T, T, F, T],
            grapheme_breaks(&['\u{41}', '\u{0D}', '\u{0A}', '\u{42}'])
        );
        assert_eq!(vec![T, T, T], breaks("\n\r\r"));
    }

    #[test]
    fn test_control_overrides_extend() {
        // GB4 wins over GB9.
        assert_eq!(vec![T, T], breaks("\r\u{0301}"));
        assert_eq!(vec![T, T], breaks("\u{0}\u{0301}"));
    }

    #[test]
    fn test_regional_indicators_pair_up() {
        assert_eq!(
            vec![T, F, T, F],
            grapheme_breaks(&['\u{1F1E9}', '\u{1F1EA}', '\u{1F1EB}', '\u{1F1F7}'])
        );
        assert_eq!(vec![T, F, T], breaks("\u{1F1E9}\u{1F1EA}\u{1F1EB}"));
        assert_eq!(vec![T, T, F], breaks("a\u{1F1E9}\u{1F1EA}"));
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(vec![T, F, F, T], breaks("e\u{0301}\u{0327}x"));
        // GB9a, GB9b
        assert_eq!(vec![T, F], breaks("\u{0915}\u{093F}"));
        assert_eq!(vec![T, F], breaks("\u{0600}1"));
    }

    #[test]
    fn test_hangul() {
        assert_eq!(vec![T, F, F], breaks("\u{1100}\u{1161}\u{11A8}"));
        assert_eq!(vec![T, F], breaks("\u{AC00}\u{11A8}"));
        assert_eq!(vec![T, T], breaks("\u{AC01}\u{1161}"));
        assert_eq!(vec![T, T], breaks("\u{11A8}\u{1100}"));
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        // man, ZWJ, woman, ZWJ, girl
        assert_eq!(vec![T, F, F, F, F], breaks("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"));
        // with a skin tone modifier (Extend) inside
        assert_eq!(vec![T, F, F, F], breaks("\u{1F468}\u{1F3FB}\u{200D}\u{1F469}"));
        // ZWJ not preceded by a pictographic sequence
        assert_eq!(vec![T, F, T], breaks("a\u{200D}\u{1F469}"));
    }

    #[test]
    fn test_indic_conjunct() {
        // ka, virama, ssa: one cluster
        assert_eq!(vec![T, F, F], breaks("\u{0915}\u{094D}\u{0937}"));
        // ka, nukta, virama, ZWJ, ka
        assert_eq!(vec![T, F, F, F, F], breaks("\u{0915}\u{093C}\u{094D}\u{200D}\u{0915}"));
        // without a linker the consonants split
        assert_eq!(vec![T, F, T], breaks("\u{0915}\u{093C}\u{0915}"));
    }

    #[test]
    fn test_code_units() {
        let s = "e\u{0301}\u{1F1E9}\u{1F1EA}x";
        let utf8 = grapheme_breaks(s.as_bytes());
        assert_eq!(s.len(), utf8.len());
        let starts: Vec<usize> = utf8
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then(|| i))
            .collect();
        assert_eq!(vec![0, 3, 11], starts);

        let utf16: Vec<u16> = s.encode_utf16().collect();
        assert_eq!(vec![T, F, T, F, F, F, T], grapheme_breaks(&utf16));

        let utf32: Vec<u32> = s.chars().map(|c| c as u32).collect();
        assert_eq!(vec![T, F, T, F, T], grapheme_breaks(&utf32));
    }

    #[test]
    fn test_ill_formed_input_is_replaced() {
        assert_eq!(vec![T, T, T], grapheme_breaks(&[b'a', 0xFF, b'b']));
    }

    #[test]
    fn test_matches_unicode_segmentation() {
        use unicode_segmentation::UnicodeSegmentation;

        let samples = [
            "The quick brown fox",
            "e\u{0301}le\u{0300}ve",
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} family",
            "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}\u{1F1EE}",
            "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8}",
            "line\r\nbreak\n\rdone",
            "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}",
        ];
        for sample in samples {
            let expected: Vec<usize> = sample.grapheme_indices(true).map(|(i, _)| i).collect();
            let actual: Vec<usize> = grapheme_breaks(sample.as_bytes())
                .iter()
                .enumerate()
                .filter_map(|(i, &b)| b.then(|| i))
                .collect();
            assert_eq!(expected, actual, "{:?}", sample);
        }
    }

    #[test]
    fn test_custom_properties() {
        // Every character a control: every position is a boundary.
        struct AllControl;
        impl UnicodeProperties for AllControl {
            fn grapheme_break(&self, _: char) -> GraphemeBreak {
                GraphemeBreak::Control
            }
            fn word_break(&self, _: char) -> crate::WordBreak {
                crate::WordBreak::Other
            }
            fn indic_conjunct_break(&self, _: char) -> IndicConjunctBreak {
                IndicConjunctBreak::None
            }
            fn combining_class(&self, _: char) -> u8 {
                0
            }
            fn is_extended_pictographic(&self, _: char) -> bool {
                false
            }
            fn is_soft_dotted(&self, _: char) -> bool {
                false
            }
            fn is_cased(&self, _: char) -> bool {
                false
            }
            fn is_case_ignorable(&self, _: char) -> bool {
                false
            }
        }
        let mut p = [false; 3];
        grapheme_breaks_into(&AllControl, &['e', '\u{0301}', 'x'], &mut p);
        assert_eq!([T, T, T], p);
    }
}
