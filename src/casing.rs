//! Whole-string case operations: conversion, case predicates and caseless
//! comparison.

use crate::case_map::{self, case_map, CaseMapOptions, Casing, NormalizationForm};
use crate::code_unit::CodeUnit;
use crate::error::CaseMapError;
use crate::language_ty::Language;
use crate::properties::{Ucd, UnicodeProperties};
use crate::word_breaks::word_breaks_into;
use std::cmp::Ordering;

/// Converts `s` to lowercase.
pub fn to_lowercase<U: CodeUnit>(s: &[U], options: &CaseMapOptions) -> Result<Vec<U>, CaseMapError> {
    case_map(s, &Casing::LOWER, options)
}

/// Converts `s` to uppercase.
pub fn to_uppercase<U: CodeUnit>(s: &[U], options: &CaseMapOptions) -> Result<Vec<U>, CaseMapError> {
    case_map(s, &Casing::UPPER, options)
}

/// Applies full case folding to `s`.
pub fn to_casefold<U: CodeUnit>(s: &[U], options: &CaseMapOptions) -> Result<Vec<U>, CaseMapError> {
    case_map(s, &Casing::FOLD, options)
}

/// Converts `s` to titlecase.
///
/// In every word the first cased character takes its titlecase mapping and
/// the characters after it their lowercase mapping. Words are delimited by
/// the word boundaries of [`word_breaks`](fn@crate::word_breaks). In Dutch, a
/// word starting with "ij" capitalizes both letters.
///
/// ```
/// use unitext::{to_titlecase, CaseMapOptions, Language};
///
/// let title = to_titlecase("hello wORLD".as_bytes(), &CaseMapOptions::new()).unwrap();
/// assert_eq!(b"Hello World", &title[..]);
///
/// let dutch = CaseMapOptions::new().language(Language::new("nl"));
/// let title = to_titlecase("ijsselmeer".as_bytes(), &dutch).unwrap();
/// assert_eq!(b"IJsselmeer", &title[..]);
/// ```
pub fn to_titlecase<U: CodeUnit>(s: &[U], options: &CaseMapOptions) -> Result<Vec<U>, CaseMapError> {
    let mut breaks = Vec::new();
    breaks.try_reserve_exact(s.len())?;
    breaks.resize(s.len(), false);
    word_breaks_into(&Ucd, s, &mut breaks);

    let dutch = options.language == Language::new("nl");
    // Before the first cased character of the current word.
    let mut in_word_first_part = false;
    let mut dutch_ij = false;
    let casing_at = |offset: usize, ch: char| {
        if breaks[offset] {
            in_word_first_part = true;
            dutch_ij = false;
        }
        if dutch_ij {
            dutch_ij = false;
            if matches!(ch, 'j' | 'J') {
                return Casing::UPPER;
            }
        }
        if !in_word_first_part {
            return Casing::LOWER;
        }
        if Ucd.is_cased(ch) {
            in_word_first_part = false;
            dutch_ij = dutch && matches!(ch, 'i' | 'I');
        }
        Casing::TITLE
    };

    let mut out = Vec::new();
    case_map::map_case(&Ucd, s, options, casing_at, &mut out)?;
    Ok(out)
}

type CharMapping = fn(&[char], &CaseMapOptions) -> Result<Vec<char>, CaseMapError>;

/// Whether `s` is unchanged by `mapping`, after bringing both sides into
/// normalization form D.
fn is_invariant<U: CodeUnit>(
    s: &[U],
    mapping: CharMapping,
    language: Option<Language>,
) -> Result<bool, CaseMapError> {
    let nfd = case_map::decompose(s)?;
    let options = CaseMapOptions::new()
        .language(language)
        .normalize_after(NormalizationForm::Nfd);
    Ok(mapping(&nfd, &options)? == nfd)
}

/// Whether `s` is unchanged by [`to_uppercase`].
pub fn is_uppercase<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<bool, CaseMapError> {
    is_invariant(s, to_uppercase::<char>, language)
}

/// Whether `s` is unchanged by [`to_lowercase`].
pub fn is_lowercase<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<bool, CaseMapError> {
    is_invariant(s, to_lowercase::<char>, language)
}

/// Whether `s` is unchanged by [`to_titlecase`].
pub fn is_titlecase<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<bool, CaseMapError> {
    is_invariant(s, to_titlecase::<char>, language)
}

/// Whether `s` is unchanged by [`to_casefold`].
pub fn is_casefolded<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<bool, CaseMapError> {
    is_invariant(s, to_casefold::<char>, language)
}

/// Whether case matters for `s`: some of [`to_lowercase`], [`to_uppercase`]
/// and [`to_titlecase`] would change it.
pub fn is_cased<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<bool, CaseMapError> {
    Ok(!is_lowercase(s, language)?
        || !is_uppercase(s, language)?
        || !is_titlecase(s, language)?)
}

/// Compares `a` and `b` ignoring case: both are decomposed, case folded and
/// decomposed again, then compared code point by code point.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(
///     Ordering::Equal,
///     unitext::casecmp("Stra\u{00DF}e".as_bytes(), "STRASSE".as_bytes(), None).unwrap()
/// );
/// ```
pub fn casecmp<U: CodeUnit>(
    a: &[U],
    b: &[U],
    language: Option<Language>,
) -> Result<Ordering, CaseMapError> {
    let a = casefold_nfd(a, language)?;
    let b = casefold_nfd(b, language)?;
    Ok(a.cmp(&b))
}

fn casefold_nfd<U: CodeUnit>(s: &[U], language: Option<Language>) -> Result<Vec<char>, CaseMapError> {
    let nfd = case_map::decompose(s)?;
    let options = CaseMapOptions::new()
        .language(language)
        .normalize_after(NormalizationForm::Nfd);
    to_casefold(&nfd, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> String {
        title_in(s, None)
    }

    fn title_in(s: &str, language: Option<Language>) -> String {
        let options = CaseMapOptions::new().language(language);
        String::from_utf8(to_titlecase(s.as_bytes(), &options).unwrap()).unwrap()
    }

    #[test]
    fn test_conversions() {
        let options = CaseMapOptions::new();
        assert_eq!(b"hello", &to_lowercase(b"HeLLo", &options).unwrap()[..]);
        assert_eq!(b"HELLO", &to_uppercase(b"HeLLo", &options).unwrap()[..]);
        assert_eq!(b"strasse", &to_casefold("Stra\u{00DF}e".as_bytes(), &options).unwrap()[..]);
    }

    #[test]
    fn test_titlecase() {
        assert_eq!("Hello World", title("hello wORLD"));
        assert_eq!("Can't Stop", title("CAN'T STOP"));
        assert_eq!("\u{01C5}emal", title("\u{01C4}EMAL"));
        assert_eq!("Stra\u{00DF}e", title("stra\u{00DF}e"));
        assert_eq!("Ssa", title("\u{00DF}a"));
        assert_eq!("'Twas", title("'twas"));
        assert_eq!("Οδυσσευς", title("ΟΔΥΣΣΕΥΣ"));
        assert_eq!("", title(""));
    }

    #[test]
    fn test_titlecase_languages() {
        assert_eq!("İstanbul", title_in("istanbul", Language::new("tr")));
        assert_eq!("IJsselmeer", title_in("ijsselmeer", Language::new("nl")));
        assert_eq!("IJssel", title_in("IJSSEL", Language::new("nl")));
        assert_eq!("Ijsselmeer", title_in("ijsselmeer", None));
        assert_eq!("Iris", title_in("iris", Language::new("nl")));
    }

    #[test]
    fn test_titlecase_code_units() {
        let utf16: Vec<u16> = "\u{00E9}t\u{00E9} \u{00E0} paris".encode_utf16().collect();
        let titled = to_titlecase(&utf16, &CaseMapOptions::new()).unwrap();
        assert_eq!(
            "\u{00C9}t\u{00E9} \u{00C0} Paris",
            String::from_utf16(&titled).unwrap()
        );
    }

    #[test]
    fn test_predicates() {
        assert_eq!(Ok(true), is_uppercase(b"HELLO", None));
        assert_eq!(Ok(false), is_uppercase(b"Hello", None));
        assert_eq!(Ok(true), is_uppercase(b"123", None));
        assert_eq!(Ok(true), is_lowercase(b"hello", None));
        assert_eq!(Ok(true), is_lowercase("\u{00DF}".as_bytes(), None));
        assert_eq!(Ok(true), is_titlecase(b"Hello World", None));
        assert_eq!(Ok(false), is_titlecase(b"hello", None));
        assert_eq!(Ok(false), is_titlecase(b"HELLO", None));
        assert_eq!(Ok(true), is_casefolded(b"strasse", None));
        assert_eq!(Ok(false), is_casefolded("stra\u{00DF}e".as_bytes(), None));
        assert_eq!(Ok(false), is_casefolded("\u{03C2}".as_bytes(), None));
    }

    #[test]
    fn test_predicates_see_through_composition() {
        assert_eq!(Ok(true), is_lowercase("\u{00E9}".as_bytes(), None));
        assert_eq!(Ok(true), is_uppercase("\u{00C9}".as_bytes(), None));
        assert_eq!(Ok(true), is_uppercase("E\u{0301}".as_bytes(), None));
    }

    #[test]
    fn test_is_cased() {
        assert_eq!(Ok(true), is_cased(b"abc", None));
        assert_eq!(Ok(true), is_cased(b"ABC", None));
        assert_eq!(Ok(false), is_cased(b"123 !", None));
        assert_eq!(Ok(true), is_cased("\u{01C5}".as_bytes(), None));
        assert_eq!(Ok(false), is_cased::<u8>(&[], None));
    }

    #[test]
    fn test_casecmp() {
        assert_eq!(Ok(Ordering::Equal), casecmp(b"Hello", b"hELLO", None));
        assert_eq!(Ok(Ordering::Less), casecmp(b"a", b"B", None));
        assert_eq!(Ok(Ordering::Greater), casecmp(b"b", b"A", None));
        assert_eq!(
            Ok(Ordering::Equal),
            casecmp("caf\u{00E9}".as_bytes(), "CAFE\u{0301}".as_bytes(), None)
        );
        assert_eq!(
            Ok(Ordering::Equal),
            casecmp("I".as_bytes(), "\u{0131}".as_bytes(), Language::new("tr"))
        );
        assert_eq!(
            Ok(Ordering::Less),
            casecmp("I".as_bytes(), "\u{0131}".as_bytes(), None)
        );
        assert_eq!(Ok(Ordering::Less), casecmp(b"", b"a", None));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            Err(CaseMapError::InvalidEncoding { offset: 1 }),
            is_uppercase(&[b'A', 0xFF], None)
        );
        assert_eq!(
            Err(CaseMapError::InvalidEncoding { offset: 0 }),
            casecmp(&[0xDC00u16], &[0x41], None)
        );
    }
}
