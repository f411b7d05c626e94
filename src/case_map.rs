//! Context-sensitive case mapping (Unicode 3.13, "Default Case Algorithms").
//!
//! Each character maps either through the special casing table, when one of
//! its rules applies in the current language and context, or through a
//! simple one-to-one mapping. The result of one character is zero to three
//! characters.

use crate::code_unit::{CodeUnit, LossyChars, StrictChars};
use crate::error::CaseMapError;
use crate::language_ty::Language;
use crate::properties::{self, Ucd, UnicodeProperties, CCC_ABOVE, CCC_NOT_REORDERED};
use crate::special_casing::{special_casing_rules, CasingContext, SpecialCasingRule};
use smallvec::{smallvec, SmallVec};
use std::collections::TryReserveError;
use unicode_normalization::UnicodeNormalization;

const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Selects which mapping of a special casing rule is used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaseField {
    /// The lowercase mapping.
    Lower,
    /// The uppercase mapping.
    Upper,
    /// The titlecase mapping.
    Title,
    /// The full case folding.
    Fold,
}

impl CaseField {
    fn select(self, rule: &SpecialCasingRule) -> &'static [char] {
        match self {
            CaseField::Lower => rule.lower,
            CaseField::Upper => rule.upper,
            CaseField::Title => rule.title,
            CaseField::Fold => rule.fold,
        }
    }
}

/// A case mapping: the simple mapping to fall back on together with the
/// special casing field to consult first.
#[derive(Copy, Clone, Debug)]
pub struct Casing {
    simple_map: fn(char) -> char,
    field: CaseField,
}

impl Casing {
    /// Full lowercase mapping.
    pub const LOWER: Casing = Casing::new(properties::simple_lowercase, CaseField::Lower);
    /// Full uppercase mapping.
    pub const UPPER: Casing = Casing::new(properties::simple_uppercase, CaseField::Upper);
    /// Full titlecase mapping.
    pub const TITLE: Casing = Casing::new(properties::simple_titlecase, CaseField::Title);
    /// Full case folding.
    pub const FOLD: Casing = Casing::new(properties::simple_casefold, CaseField::Fold);

    /// Creates a mapping from a simple map and a special casing field.
    pub const fn new(simple_map: fn(char) -> char, field: CaseField) -> Self {
        Casing { simple_map, field }
    }

    /// The special casing field this mapping consults.
    pub fn field(&self) -> CaseField {
        self.field
    }
}

#[inline]
fn is_normal_or_above(ccc: u8) -> bool {
    ccc == CCC_NOT_REORDERED || ccc == CCC_ABOVE
}

/// What the case mapper needs to know about the text preceding the mapped
/// string. The default value stands for the start of the text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CasingPrefixContext {
    /// The last character that is not case-ignorable.
    pub last_char_except_ignorable: Option<char>,
    /// The last character with combining class 0 or 230.
    pub last_char_normal_or_above: Option<char>,
}

impl CasingPrefixContext {
    /// The context established by the text `s`.
    pub fn of<U: CodeUnit>(s: &[U]) -> Self {
        Self::default().extend(s)
    }

    /// The context established by the text `s` following the text this
    /// context was computed from.
    pub fn extend<U: CodeUnit>(mut self, s: &[U]) -> Self {
        for (_, ch, _) in LossyChars::new(s) {
            self.update(&Ucd, ch);
        }
        self
    }

    fn update<P: UnicodeProperties + ?Sized>(&mut self, props: &P, ch: char) {
        if !props.is_case_ignorable(ch) {
            self.last_char_except_ignorable = Some(ch);
        }
        if is_normal_or_above(props.combining_class(ch)) {
            self.last_char_normal_or_above = Some(ch);
        }
    }
}

/// What the case mapper needs to know about the text following the mapped
/// string. The default value stands for the end of the text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CasingSuffixContext {
    /// The first character that is not case-ignorable.
    pub first_char_except_ignorable: Option<char>,
    /// Whether the first character with combining class 0 or 230 has
    /// combining class 230.
    pub more_above: bool,
    /// Whether the first character with combining class 0 or 230 is
    /// U+0307 COMBINING DOT ABOVE.
    pub before_dot: bool,
}

impl CasingSuffixContext {
    /// The context established by the text `s`.
    pub fn of<U: CodeUnit>(s: &[U]) -> Self {
        Self::default().prepend(s)
    }

    /// The context established by the text `s` preceding the text this
    /// context was computed from.
    pub fn prepend<U: CodeUnit>(self, s: &[U]) -> Self {
        let mut first_char_except_ignorable = None;
        let mut first_char_normal_or_above = None;
        for (_, ch, _) in LossyChars::new(s) {
            if first_char_except_ignorable.is_none() && !Ucd.is_case_ignorable(ch) {
                first_char_except_ignorable = Some(ch);
            }
            if first_char_normal_or_above.is_none() && is_normal_or_above(Ucd.combining_class(ch)) {
                first_char_normal_or_above = Some(ch);
            }
            if first_char_except_ignorable.is_some() && first_char_normal_or_above.is_some() {
                break;
            }
        }
        CasingSuffixContext {
            first_char_except_ignorable: first_char_except_ignorable
                .or(self.first_char_except_ignorable),
            more_above: first_char_normal_or_above
                .map_or(self.more_above, |ch| Ucd.combining_class(ch) == CCC_ABOVE),
            before_dot: first_char_normal_or_above
                .map_or(self.before_dot, |ch| ch == COMBINING_DOT_ABOVE),
        }
    }
}

/// Unicode normalization forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

/// Options of a case mapping call.
///
/// ```
/// use unitext::{CaseMapOptions, Language, NormalizationForm};
///
/// let options = CaseMapOptions::new()
///     .language(Language::new("tr"))
///     .normalize_after(NormalizationForm::Nfc);
/// assert_eq!(Some("tr"), options.language.as_ref().map(|l| l.as_str()));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseMapOptions {
    /// Language whose special casing rules are eligible, besides the
    /// language independent ones.
    pub language: Option<Language>,
    /// Normalization applied to the mapped string.
    pub normalize_after: Option<NormalizationForm>,
    /// The text before the mapped string.
    pub prefix: CasingPrefixContext,
    /// The text after the mapped string.
    pub suffix: CasingSuffixContext,
}

impl CaseMapOptions {
    /// Language independent mapping of a complete text, without
    /// normalization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language.
    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// Sets the normalization form applied to the result.
    pub fn normalize_after(mut self, form: NormalizationForm) -> Self {
        self.normalize_after = Some(form);
        self
    }

    /// Sets the context of the preceding text.
    pub fn prefix(mut self, prefix: CasingPrefixContext) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the context of the following text.
    pub fn suffix(mut self, suffix: CasingSuffixContext) -> Self {
        self.suffix = suffix;
        self
    }
}

/// Maps `s` through `casing`, returning a new buffer in the same encoding.
///
/// ```
/// use unitext::{case_map, CaseMapOptions, Casing};
///
/// let lower = case_map("ΟΔΥΣΣΕΥΣ".as_bytes(), &Casing::LOWER, &CaseMapOptions::new()).unwrap();
/// assert_eq!("οδυσσευς".as_bytes(), &lower[..]);
/// ```
pub fn case_map<U: CodeUnit>(
    s: &[U],
    casing: &Casing,
    options: &CaseMapOptions,
) -> Result<Vec<U>, CaseMapError> {
    let mut out = Vec::new();
    case_map_into(s, casing, options, &mut out)?;
    Ok(out)
}

/// Like [`case_map`], but writes into `out`, replacing its contents and
/// reusing its capacity. On failure `out` is left empty.
pub fn case_map_into<U: CodeUnit>(
    s: &[U],
    casing: &Casing,
    options: &CaseMapOptions,
    out: &mut Vec<U>,
) -> Result<(), CaseMapError> {
    case_map_with(&Ucd, s, casing, options, out)
}

/// Like [`case_map_into`], but looks character properties up through
/// `props`.
pub fn case_map_with<U, P>(
    props: &P,
    s: &[U],
    casing: &Casing,
    options: &CaseMapOptions,
    out: &mut Vec<U>,
) -> Result<(), CaseMapError>
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
{
    let casing = *casing;
    map_case(props, s, options, |_, _| casing, out)
}

/// The case mapping loop. `casing_at` picks the mapping for the character
/// at the given code unit offset.
pub(crate) fn map_case<U, P, F>(
    props: &P,
    s: &[U],
    options: &CaseMapOptions,
    mut casing_at: F,
    out: &mut Vec<U>,
) -> Result<(), CaseMapError>
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
    F: FnMut(usize, char) -> Casing,
{
    out.clear();
    let result = match options.normalize_after {
        None => map_chars(props, s, options, &mut casing_at, &mut Accumulator::new(out)),
        Some(form) => map_and_normalize(props, s, options, &mut casing_at, form, out),
    };
    if let Err(err) = &result {
        log::debug!("case mapping of {} code unit(s) failed: {}", s.len(), err);
        out.clear();
    }
    result
}

fn map_and_normalize<U, P, F>(
    props: &P,
    s: &[U],
    options: &CaseMapOptions,
    casing_at: &mut F,
    form: NormalizationForm,
    out: &mut Vec<U>,
) -> Result<(), CaseMapError>
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
    F: FnMut(usize, char) -> Casing,
{
    let mut mapped: Vec<char> = Vec::new();
    map_chars(props, s, options, casing_at, &mut Accumulator::new(&mut mapped))?;
    normalize(form, &mapped, &mut Accumulator::new(out))
}

fn map_chars<U, T, P, F>(
    props: &P,
    s: &[U],
    options: &CaseMapOptions,
    casing_at: &mut F,
    acc: &mut Accumulator<'_, T>,
) -> Result<(), CaseMapError>
where
    U: CodeUnit,
    T: CodeUnit,
    P: UnicodeProperties + ?Sized,
    F: FnMut(usize, char) -> Casing,
{
    let mut prefix = options.prefix;
    for decoded in StrictChars::new(s) {
        let (offset, ch, len) =
            decoded.map_err(|offset| CaseMapError::InvalidEncoding { offset })?;
        let casing = casing_at(offset, ch);
        let position = Position {
            props,
            prefix: &prefix,
            rest: &s[offset + len..],
            suffix: &options.suffix,
        };
        for mapped in position.map(ch, &casing, options.language) {
            acc.push_char(mapped)?;
        }
        prefix.update(props, ch);
    }
    Ok(())
}

/// Decodes `s` and brings it into normalization form D.
pub(crate) fn decompose<U: CodeUnit>(s: &[U]) -> Result<Vec<char>, CaseMapError> {
    if let Some(Err(offset)) = StrictChars::new(s).find(Result::is_err) {
        return Err(CaseMapError::InvalidEncoding { offset });
    }
    let mut out = Vec::new();
    Accumulator::new(&mut out).push_all(LossyChars::new(s).map(|(_, ch, _)| ch).nfd())?;
    Ok(out)
}

fn normalize<U: CodeUnit>(
    form: NormalizationForm,
    chars: &[char],
    acc: &mut Accumulator<'_, U>,
) -> Result<(), CaseMapError> {
    let chars = chars.iter().copied();
    match form {
        NormalizationForm::Nfc => acc.push_all(chars.nfc()),
        NormalizationForm::Nfd => acc.push_all(chars.nfd()),
        NormalizationForm::Nfkc => acc.push_all(chars.nfkc()),
        NormalizationForm::Nfkd => acc.push_all(chars.nfkd()),
    }?;
    Ok(())
}

/// A character being mapped, seen together with its surroundings.
struct Position<'a, U, P: ?Sized> {
    props: &'a P,
    prefix: &'a CasingPrefixContext,
    /// The input after the character.
    rest: &'a [U],
    suffix: &'a CasingSuffixContext,
}

impl<'a, U, P> Position<'a, U, P>
where
    U: CodeUnit,
    P: UnicodeProperties + ?Sized,
{
    fn map(&self, ch: char, casing: &Casing, language: Option<Language>) -> SmallVec<[char; 3]> {
        for rule in special_casing_rules(ch) {
            if rule.applies_to_language(language) && self.holds(rule.context) != rule.negated {
                log::trace!(
                    "special casing rule {:?}{} applies to U+{:04X}",
                    rule.context,
                    if rule.negated { " (negated)" } else { "" },
                    ch as u32
                );
                return SmallVec::from_slice(casing.field.select(rule));
            }
        }
        smallvec![(casing.simple_map)(ch)]
    }

    fn holds(&self, context: CasingContext) -> bool {
        let props = self.props;
        match context {
            CasingContext::Always => true,
            CasingContext::FinalSigma => {
                self.prefix
                    .last_char_except_ignorable
                    .map_or(false, |c| props.is_cased(c))
                    && !self.followed_by_cased()
            }
            CasingContext::AfterSoftDotted => self
                .prefix
                .last_char_normal_or_above
                .map_or(false, |c| props.is_soft_dotted(c)),
            CasingContext::MoreAbove => match self.next_char_normal_or_above() {
                Some(c) => props.combining_class(c) == CCC_ABOVE,
                None => self.suffix.more_above,
            },
            CasingContext::BeforeDot => match self.next_char_normal_or_above() {
                Some(c) => c == COMBINING_DOT_ABOVE,
                None => self.suffix.before_dot,
            },
            CasingContext::AfterI => self.prefix.last_char_normal_or_above == Some('I'),
        }
    }

    /// Characters after the current one. An ill-formed sequence ends the
    /// scan; the main loop reports it when it gets there.
    fn following(&self) -> impl Iterator<Item = char> + 'a {
        StrictChars::new(self.rest)
            .map_while(Result::ok)
            .map(|(_, ch, _)| ch)
    }

    fn followed_by_cased(&self) -> bool {
        let props = self.props;
        match self.following().find(|&c| !props.is_case_ignorable(c)) {
            Some(c) => props.is_cased(c),
            None => self
                .suffix
                .first_char_except_ignorable
                .map_or(false, |c| props.is_cased(c)),
        }
    }

    fn next_char_normal_or_above(&self) -> Option<char> {
        let props = self.props;
        self.following()
            .find(|&c| is_normal_or_above(props.combining_class(c)))
    }
}

const MIN_CAPACITY: usize = 64;

/// Output buffer that grows by doubling and reports allocation failure
/// instead of aborting.
struct Accumulator<'a, U> {
    buf: &'a mut Vec<U>,
}

impl<'a, U: CodeUnit> Accumulator<'a, U> {
    fn new(buf: &'a mut Vec<U>) -> Self {
        Accumulator { buf }
    }

    fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let len = self.buf.len();
        let needed = len.saturating_add(additional);
        if needed <= self.buf.capacity() {
            return Ok(());
        }
        let capacity = needed
            .max(self.buf.capacity().saturating_mul(2))
            .max(MIN_CAPACITY);
        self.buf.try_reserve_exact(capacity - len)
    }

    fn push_char(&mut self, ch: char) -> Result<(), TryReserveError> {
        let mut units = [U::default(); 4];
        let len = U::encode(ch, &mut units);
        self.reserve(len)?;
        self.buf.extend_from_slice(&units[..len]);
        Ok(())
    }

    fn push_all<I: Iterator<Item = char>>(&mut self, chars: I) -> Result<(), TryReserveError> {
        for ch in chars {
            self.push_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str, casing: &Casing, options: &CaseMapOptions) -> String {
        let units = case_map(s.as_bytes(), casing, options).unwrap();
        String::from_utf8(units).unwrap()
    }

    fn lower(s: &str) -> String {
        map(s, &Casing::LOWER, &CaseMapOptions::new())
    }

    fn upper(s: &str) -> String {
        map(s, &Casing::UPPER, &CaseMapOptions::new())
    }

    fn in_language(language: &str) -> CaseMapOptions {
        CaseMapOptions::new().language(Language::new(language))
    }

    #[test]
    fn test_empty() {
        for casing in [Casing::LOWER, Casing::UPPER, Casing::TITLE, Casing::FOLD] {
            assert_eq!(Ok(vec![]), case_map::<u8>(&[], &casing, &CaseMapOptions::new()));
            assert_eq!(Ok(vec![]), case_map::<char>(&[], &casing, &CaseMapOptions::new()));
        }
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!("οδυσσευς", lower("ΟΔΥΣΣΕΥΣ"));
        assert_eq!("ας β", lower("ΑΣ Β"));
        assert_eq!("σ", lower("Σ"));
        // an apostrophe is case-ignorable, so the sigma is not final
        assert_eq!("ασ'β", lower("ΑΣ'Β"));
        assert_eq!("ας'", lower("ΑΣ'"));
        assert_eq!("ΟΔΥΣΣΕΥΣ", upper("οδυσσευς"));
    }

    #[test]
    fn test_final_sigma_per_code_point() {
        let s: Vec<char> = "ΟΔΥΣΣΕΥΣ".chars().collect();
        let lower = case_map(&s, &Casing::LOWER, &CaseMapOptions::new()).unwrap();
        assert_eq!('\u{03C3}', lower[3]);
        assert_eq!('\u{03C3}', lower[4]);
        assert_eq!('\u{03C2}', lower[7]);
    }

    #[test]
    fn test_multi_char_mappings() {
        assert_eq!("STRASSE", upper("straße"));
        assert_eq!("ʼN", upper("ŉ"));
        assert_eq!("FI", upper("ﬁ"));
        assert_eq!("i\u{0307}stanbul", lower("İstanbul"));
        assert_eq!("Ss", map("ß", &Casing::TITLE, &CaseMapOptions::new()));
        assert_eq!("ǅ", map("ǆ", &Casing::TITLE, &CaseMapOptions::new()));
    }

    #[test]
    fn test_case_folding() {
        let fold = |s| map(s, &Casing::FOLD, &CaseMapOptions::new());
        assert_eq!("strasse", fold("Straße"));
        assert_eq!("ss", fold("ẞ"));
        assert_eq!("σασ", fold("ΣΑΣ"));
        assert_eq!("k", fold("\u{212A}"));
        assert_eq!("ı", map("I", &Casing::FOLD, &in_language("tr")));
        assert_eq!("i", map("I", &Casing::FOLD, &in_language("lt")));
    }

    #[test]
    fn test_turkish() {
        let tr = in_language("tr");
        assert_eq!("İSTANBUL", map("istanbul", &Casing::UPPER, &tr));
        assert_eq!("ıstanbul", map("ISTANBUL", &Casing::LOWER, &tr));
        assert_eq!("istanbul", map("İSTANBUL", &Casing::LOWER, &tr));
        // I followed by a combining dot above lowercases to plain i
        assert_eq!("i", map("I\u{0307}", &Casing::LOWER, &tr));
        assert_eq!("i\u{0316}", map("I\u{0316}\u{0307}", &Casing::LOWER, &tr));
        // an intervening class 230 mark blocks the dot
        assert_eq!(
            "ı\u{0301}\u{0307}",
            map("I\u{0301}\u{0307}", &Casing::LOWER, &tr)
        );
        let az = in_language("az");
        assert_eq!("ı", map("I", &Casing::LOWER, &az));
        assert_eq!("i", map("I", &Casing::LOWER, &CaseMapOptions::new()));
    }

    #[test]
    fn test_lithuanian() {
        let lt = in_language("lt");
        assert_eq!("i\u{0307}\u{0300}", map("I\u{0300}", &Casing::LOWER, &lt));
        assert_eq!("i", map("I", &Casing::LOWER, &lt));
        assert_eq!("i\u{0307}\u{0300}", map("Ì", &Casing::LOWER, &lt));
        assert_eq!("I", map("i\u{0307}", &Casing::UPPER, &lt));
        assert_eq!("J\u{0301}", map("j\u{0307}\u{0301}", &Casing::UPPER, &lt));
        assert_eq!("I\u{0307}", map("i\u{0307}", &Casing::UPPER, &CaseMapOptions::new()));
    }

    #[test]
    fn test_chunked_contexts() {
        let prefix = CasingPrefixContext::of("Α".as_bytes());
        let options = CaseMapOptions::new().prefix(prefix);
        assert_eq!("ς", map("Σ", &Casing::LOWER, &options));

        let suffix = CasingSuffixContext::of("Β".as_bytes());
        let options = options.suffix(suffix);
        assert_eq!("σ", map("Σ", &Casing::LOWER, &options));

        let suffix = CasingSuffixContext::of("\u{0307}".as_bytes());
        assert!(suffix.before_dot);
        let options = in_language("tr").suffix(suffix);
        assert_eq!("i", map("I", &Casing::LOWER, &options));

        let prefix = CasingPrefixContext::of("I".as_bytes());
        let options = in_language("tr").prefix(prefix);
        assert_eq!("", map("\u{0307}", &Casing::LOWER, &options));
    }

    #[test]
    fn test_prefix_context() {
        let prefix = CasingPrefixContext::of("a\u{0301}'".as_bytes());
        assert_eq!(Some('a'), prefix.last_char_except_ignorable);
        assert_eq!(Some('\''), prefix.last_char_normal_or_above);
        let prefix = prefix.extend(&['\u{0316}']);
        assert_eq!(Some('\''), prefix.last_char_normal_or_above);
        assert_eq!(CasingPrefixContext::default(), CasingPrefixContext::of::<u8>(&[]));
    }

    #[test]
    fn test_suffix_context() {
        let suffix = CasingSuffixContext::of("\u{0301}x".as_bytes());
        assert_eq!(Some('x'), suffix.first_char_except_ignorable);
        assert!(suffix.more_above);
        assert!(!suffix.before_dot);

        let suffix = CasingSuffixContext::of("x".as_bytes()).prepend("'\u{0316}".as_bytes());
        assert_eq!(Some('x'), suffix.first_char_except_ignorable);
        assert!(!suffix.more_above);

        let suffix = CasingSuffixContext::of("\u{0307}".as_bytes()).prepend(&['\u{0316}']);
        assert!(suffix.before_dot);
        assert!(suffix.more_above);
        assert_eq!(None, suffix.first_char_except_ignorable);
    }

    #[test]
    fn test_normalize_after() {
        let nfc = CaseMapOptions::new().normalize_after(NormalizationForm::Nfc);
        assert_eq!("\u{00E5}", map("A\u{030A}", &Casing::LOWER, &nfc));
        let nfd = CaseMapOptions::new().normalize_after(NormalizationForm::Nfd);
        assert_eq!("E\u{0301}", map("\u{00E9}", &Casing::UPPER, &nfd));
        let nfkc = CaseMapOptions::new().normalize_after(NormalizationForm::Nfkc);
        assert_eq!("fi", map("\u{FB01}", &Casing::LOWER, &nfkc));
    }

    #[test]
    fn test_code_units() {
        let utf16: Vec<u16> = "ÀÉ\u{10400}".encode_utf16().collect();
        let lower = case_map(&utf16, &Casing::LOWER, &CaseMapOptions::new()).unwrap();
        assert_eq!("àé\u{10428}", String::from_utf16(&lower).unwrap());

        let utf32: Vec<u32> = "straße".chars().map(|c| c as u32).collect();
        let upper = case_map(&utf32, &Casing::UPPER, &CaseMapOptions::new()).unwrap();
        let upper: String = upper.into_iter().filter_map(char::from_u32).collect();
        assert_eq!("STRASSE", upper);
    }

    #[test]
    fn test_invalid_encoding() {
        assert_eq!(
            Err(CaseMapError::InvalidEncoding { offset: 1 }),
            case_map(&[b'a', 0xFF, b'b'], &Casing::UPPER, &CaseMapOptions::new())
        );
        assert_eq!(
            Err(CaseMapError::InvalidEncoding { offset: 0 }),
            case_map(&[0xD800u16], &Casing::LOWER, &CaseMapOptions::new())
        );
        let mut out = b"stale".to_vec();
        let result =
            case_map_into(&[b'A', 0xC0], &Casing::LOWER, &CaseMapOptions::new(), &mut out);
        assert_eq!(Err(CaseMapError::InvalidEncoding { offset: 1 }), result);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reuses_buffer() {
        let mut out: Vec<u8> = Vec::with_capacity(256);
        out.extend_from_slice(b"leftover");
        case_map_into(b"Hello", &Casing::UPPER, &CaseMapOptions::new(), &mut out).unwrap();
        assert_eq!(b"HELLO", &out[..]);
        assert!(out.capacity() >= 256);
    }

    #[test]
    fn test_accumulator_growth() {
        let mut buf: Vec<char> = Vec::new();
        let mut acc = Accumulator::new(&mut buf);
        acc.push_char('a').unwrap();
        assert!(acc.buf.capacity() >= MIN_CAPACITY);
        acc.push_all(std::iter::repeat('b').take(199)).unwrap();
        assert_eq!(200, buf.len());

        let long = "A".repeat(1000);
        assert_eq!("a".repeat(1000), lower(&long));
    }

    #[test]
    fn test_ascii_round_trip() {
        for c in ('a'..='z').chain('A'..='Z') {
            let c = c.to_string();
            assert_eq!(upper(&c), upper(&lower(&c)));
            assert_eq!(lower(&c), lower(&upper(&c)));
        }
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Hello, Wörld",
            "ΟΔΥΣΣΕΥΣ",
            "straße ẞ",
            "İstanbul",
            "ﬁ ŉ ǰ ǅ",
            "\u{10400}\u{1E900}",
        ];
        for casing in [Casing::LOWER, Casing::UPPER, Casing::FOLD] {
            for sample in samples {
                let once = map(sample, &casing, &CaseMapOptions::new());
                let twice = map(&once, &casing, &CaseMapOptions::new());
                assert_eq!(once, twice, "{:?} {:?}", casing.field(), sample);
            }
        }
    }

    #[test]
    fn test_custom_casing() {
        let identity = Casing::new(|c| c, CaseField::Upper);
        assert_eq!("aSS", map("aß", &identity, &CaseMapOptions::new()));
    }
}
