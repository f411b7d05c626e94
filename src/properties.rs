use crate::tables;
use std::cmp::Ordering;

/// Values of the **Grapheme_Cluster_Break** property (UAX #29, section 3.1).
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphemeBreak {
    Other,
    CR,
    LF,
    Control,
    Extend,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    RegionalIndicator,
    ZWJ,
    /// Obsolete since Unicode 11; kept so older tailorings still map.
    EBase,
    /// Obsolete since Unicode 11.
    EModifier,
    /// Obsolete since Unicode 11.
    GlueAfterZwj,
    /// Obsolete since Unicode 11.
    EBaseGaz,
}

/// Values of the **Word_Break** property (UAX #29, section 4.1).
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordBreak {
    Other,
    CR,
    LF,
    Newline,
    Extend,
    Format,
    Katakana,
    ALetter,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    RegionalIndicator,
    DoubleQuote,
    SingleQuote,
    HebrewLetter,
    ZWJ,
    WSegSpace,
    /// Obsolete since Unicode 11; kept so older tailorings still map.
    EBase,
    /// Obsolete since Unicode 11.
    EModifier,
    /// Obsolete since Unicode 11.
    GlueAfterZwj,
    /// Obsolete since Unicode 11.
    EBaseGaz,
}

/// Values of the **Indic_Conjunct_Break** property.
///
/// The variants are ordered so that `incb >= IndicConjunctBreak::Linker`
/// selects both linkers and extenders, which is how rule GB9c is tracked.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndicConjunctBreak {
    None,
    Consonant,
    Linker,
    Extend,
}

/// Combining class 0, "Not_Reordered".
pub const CCC_NOT_REORDERED: u8 = 0;
/// Combining class 230, "Above".
pub const CCC_ABOVE: u8 = 230;

/// The character properties consumed by the segmentation and case mapping
/// algorithms.
///
/// Implementations must be pure functions of the character. [`Ucd`] is the
/// implementation backed by this crate's tables; a tailored implementation
/// can be passed to the `*_with`/`*_into` entry points instead.
pub trait UnicodeProperties {
    /// Grapheme_Cluster_Break class of `ch`.
    fn grapheme_break(&self, ch: char) -> GraphemeBreak;
    /// Word_Break class of `ch`.
    fn word_break(&self, ch: char) -> WordBreak;
    /// Indic_Conjunct_Break class of `ch`.
    fn indic_conjunct_break(&self, ch: char) -> IndicConjunctBreak;
    /// Canonical combining class of `ch`.
    fn combining_class(&self, ch: char) -> u8;
    /// Whether `ch` has the Extended_Pictographic property.
    fn is_extended_pictographic(&self, ch: char) -> bool;
    /// Whether `ch` has the Soft_Dotted property.
    fn is_soft_dotted(&self, ch: char) -> bool;
    /// Whether `ch` has the Cased property.
    fn is_cased(&self, ch: char) -> bool;
    /// Whether `ch` has the Case_Ignorable property.
    fn is_case_ignorable(&self, ch: char) -> bool;
}

/// Character properties from the Unicode Character Database version
/// reported by [`unicode_version`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Ucd;

impl UnicodeProperties for Ucd {
    fn grapheme_break(&self, ch: char) -> GraphemeBreak {
        search_range_value_table(ch, tables::grapheme::GRAPHEME_BREAK_TABLE)
            .unwrap_or(GraphemeBreak::Other)
    }

    fn word_break(&self, ch: char) -> WordBreak {
        search_range_value_table(ch, tables::word::WORD_BREAK_TABLE).unwrap_or(WordBreak::Other)
    }

    fn indic_conjunct_break(&self, ch: char) -> IndicConjunctBreak {
        search_range_value_table(ch, tables::indic::INDIC_CONJUNCT_BREAK_TABLE)
            .unwrap_or(IndicConjunctBreak::None)
    }

    fn combining_class(&self, ch: char) -> u8 {
        unicode_normalization::char::canonical_combining_class(ch)
    }

    fn is_extended_pictographic(&self, ch: char) -> bool {
        search_range_table(ch, tables::derived::EXTENDED_PICTOGRAPHIC)
    }

    fn is_soft_dotted(&self, ch: char) -> bool {
        search_range_table(ch, tables::derived::SOFT_DOTTED)
    }

    fn is_cased(&self, ch: char) -> bool {
        search_range_table(ch, tables::derived::CASED)
    }

    fn is_case_ignorable(&self, ch: char) -> bool {
        search_range_table(ch, tables::derived::CASE_IGNORABLE)
    }
}

/// Returns the version of the Unicode Character Database the built-in tables
/// were generated from, as `(major, minor, update)`.
pub fn unicode_version() -> (u8, u8, u8) {
    tables::UNICODE_VERSION
}

/// Simple (single character) lowercase mapping.
pub fn simple_lowercase(ch: char) -> char {
    search_mapping_table(ch, tables::case::LOWERCASE_TABLE).unwrap_or(ch)
}

/// Simple (single character) uppercase mapping.
pub fn simple_uppercase(ch: char) -> char {
    search_mapping_table(ch, tables::case::UPPERCASE_TABLE).unwrap_or(ch)
}

/// Simple (single character) titlecase mapping.
pub fn simple_titlecase(ch: char) -> char {
    search_mapping_table(ch, tables::case::TITLECASE_EXCEPTIONS)
        .unwrap_or_else(|| simple_uppercase(ch))
}

/// Simple (single character) case folding, the `C` and `S` entries of
/// CaseFolding.txt.
pub fn simple_casefold(ch: char) -> char {
    search_mapping_table(ch, tables::case::CASEFOLD_TABLE).unwrap_or(ch)
}

fn range_ordering(ch: u32, start: u32, end: u32) -> Ordering {
    if ch < start {
        Ordering::Greater
    } else if end < ch {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

fn search_range_value_table<T: Copy>(ch: char, table: &'static [(u32, u32, T)]) -> Option<T> {
    let ch = ch as u32;
    let pos = table
        .binary_search_by(|&(start, end, _)| range_ordering(ch, start, end))
        .ok()?;
    let (_, _, value) = table[pos];
    Some(value)
}

fn search_range_table(ch: char, table: &'static [(u32, u32)]) -> bool {
    let ch = ch as u32;
    table
        .binary_search_by(|&(start, end)| range_ordering(ch, start, end))
        .is_ok()
}

fn search_mapping_table(ch: char, table: &'static [(u32, u32)]) -> Option<char> {
    let pos = table
        .binary_search_by_key(&(ch as u32), |&(from, _)| from)
        .ok()?;
    char::from_u32(table[pos].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_break() {
        assert_eq!(GraphemeBreak::CR, Ucd.grapheme_break('\r'));
        assert_eq!(GraphemeBreak::LF, Ucd.grapheme_break('\n'));
        assert_eq!(GraphemeBreak::Control, Ucd.grapheme_break('\u{0}'));
        assert_eq!(GraphemeBreak::Other, Ucd.grapheme_break('a'));
        assert_eq!(GraphemeBreak::Extend, Ucd.grapheme_break('\u{0301}'));
        assert_eq!(GraphemeBreak::ZWJ, Ucd.grapheme_break('\u{200D}'));
        assert_eq!(GraphemeBreak::L, Ucd.grapheme_break('\u{1100}'));
        assert_eq!(GraphemeBreak::LV, Ucd.grapheme_break('\u{AC00}'));
        assert_eq!(GraphemeBreak::LVT, Ucd.grapheme_break('\u{AC01}'));
        assert_eq!(
            GraphemeBreak::RegionalIndicator,
            Ucd.grapheme_break('\u{1F1E9}')
        );
        assert_eq!(GraphemeBreak::Other, Ucd.grapheme_break('\u{10FFFF}'));
    }

    #[test]
    fn test_word_break() {
        assert_eq!(WordBreak::ALetter, Ucd.word_break('a'));
        assert_eq!(WordBreak::Numeric, Ucd.word_break('7'));
        assert_eq!(WordBreak::MidNumLet, Ucd.word_break('.'));
        assert_eq!(WordBreak::MidLetter, Ucd.word_break(':'));
        assert_eq!(WordBreak::MidNum, Ucd.word_break(','));
        assert_eq!(WordBreak::SingleQuote, Ucd.word_break('\''));
        assert_eq!(WordBreak::DoubleQuote, Ucd.word_break('"'));
        assert_eq!(WordBreak::HebrewLetter, Ucd.word_break('\u{05D0}'));
        assert_eq!(WordBreak::Katakana, Ucd.word_break('\u{30A2}'));
        assert_eq!(WordBreak::ExtendNumLet, Ucd.word_break('_'));
        assert_eq!(WordBreak::WSegSpace, Ucd.word_break(' '));
        assert_eq!(WordBreak::Other, Ucd.word_break('\t'));
        assert_eq!(WordBreak::Newline, Ucd.word_break('\u{2028}'));
        assert_eq!(WordBreak::Format, Ucd.word_break('\u{00AD}'));
    }

    #[test]
    fn test_indic_conjunct_break() {
        assert_eq!(IndicConjunctBreak::Consonant, Ucd.indic_conjunct_break('\u{0915}'));
        assert_eq!(IndicConjunctBreak::Linker, Ucd.indic_conjunct_break('\u{094D}'));
        assert_eq!(IndicConjunctBreak::Extend, Ucd.indic_conjunct_break('\u{093C}'));
        assert_eq!(IndicConjunctBreak::Extend, Ucd.indic_conjunct_break('\u{200D}'));
        assert_eq!(IndicConjunctBreak::None, Ucd.indic_conjunct_break('a'));
        assert!(IndicConjunctBreak::Extend >= IndicConjunctBreak::Linker);
        assert!(IndicConjunctBreak::Consonant < IndicConjunctBreak::Linker);
    }

    #[test]
    fn test_binary_properties() {
        assert!(Ucd.is_extended_pictographic('\u{1F600}'));
        assert!(Ucd.is_extended_pictographic('\u{00A9}'));
        assert!(!Ucd.is_extended_pictographic('a'));
        assert!(Ucd.is_soft_dotted('i'));
        assert!(Ucd.is_soft_dotted('j'));
        assert!(!Ucd.is_soft_dotted('I'));
        assert!(Ucd.is_cased('A'));
        assert!(Ucd.is_cased('\u{03A3}'));
        assert!(!Ucd.is_cased('1'));
        assert!(Ucd.is_case_ignorable('\''));
        assert!(Ucd.is_case_ignorable('\u{0301}'));
        assert!(!Ucd.is_case_ignorable('a'));
        assert_eq!(CCC_ABOVE, Ucd.combining_class('\u{0301}'));
        assert_eq!(CCC_NOT_REORDERED, Ucd.combining_class('a'));
    }

    #[test]
    fn test_simple_case_mappings() {
        assert_eq!('a', simple_lowercase('A'));
        assert_eq!('A', simple_uppercase('a'));
        assert_eq!('1', simple_uppercase('1'));
        assert_eq!('\u{03C3}', simple_lowercase('\u{03A3}'));
        assert_eq!('\u{01C5}', simple_titlecase('\u{01C4}'));
        assert_eq!('\u{01C5}', simple_titlecase('\u{01C6}'));
        assert_eq!('\u{01C4}', simple_uppercase('\u{01C6}'));
        assert_eq!('A', simple_titlecase('a'));
        assert_eq!('\u{00DF}', simple_uppercase('\u{00DF}'));
        assert_eq!('\u{03C3}', simple_casefold('\u{03C2}'));
        assert_eq!('k', simple_casefold('\u{212A}'));
        assert_eq!((14, 0, 0), unicode_version());
    }
}
