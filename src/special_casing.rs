use crate::language_ty::Language;
use crate::tables::special_casing::SPECIAL_CASING_TABLE;

/// The context a special casing rule is conditioned on (SpecialCasing.txt,
/// Unicode 3.13 table 3-17).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CasingContext {
    Always,
    /// Preceded by a cased letter and case-ignorable characters, and not
    /// followed by case-ignorable characters and a cased letter.
    FinalSigma,
    /// A Soft_Dotted character precedes, with no combining class 0 or 230
    /// character in between.
    AfterSoftDotted,
    /// A combining class 230 character follows, with no combining class 0 or
    /// 230 character in between.
    MoreAbove,
    /// U+0307 follows, with no combining class 0 or 230 character in between.
    BeforeDot,
    /// U+0049 precedes, with no combining class 0 or 230 character in between.
    AfterI,
}

/// One entry of the special casing table.
///
/// Rules for the same code point are adjacent in the table and ordered
/// language-specific first, then context-conditional, then unconditional;
/// the first rule that applies wins.
#[derive(Debug)]
pub(crate) struct SpecialCasingRule {
    pub(crate) code: u16,
    /// `None` applies to every language.
    pub(crate) language: Option<Language>,
    pub(crate) context: CasingContext,
    /// The rule applies when the context does *not* hold.
    pub(crate) negated: bool,
    pub(crate) lower: &'static [char],
    pub(crate) title: &'static [char],
    pub(crate) upper: &'static [char],
    pub(crate) fold: &'static [char],
}

impl SpecialCasingRule {
    pub(crate) fn applies_to_language(&self, language: Option<Language>) -> bool {
        match self.language {
            None => true,
            Some(rule_language) => language == Some(rule_language),
        }
    }
}

/// Returns the rules for `ch`, in the order they must be tried.
///
/// The table only covers the Basic Multilingual Plane.
pub(crate) fn special_casing_rules(ch: char) -> &'static [SpecialCasingRule] {
    let code = match u16::try_from(ch as u32) {
        Ok(code) => code,
        Err(_) => return &[],
    };
    let start = SPECIAL_CASING_TABLE.partition_point(|rule| rule.code < code);
    let len = SPECIAL_CASING_TABLE[start..]
        .iter()
        .take_while(|rule| rule.code == code)
        .count();
    &SPECIAL_CASING_TABLE[start..start + len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(SPECIAL_CASING_TABLE
            .windows(2)
            .all(|pair| pair[0].code <= pair[1].code));
    }

    #[test]
    fn test_language_rules_come_first() {
        let rules = special_casing_rules('\u{0130}');
        assert_eq!(3, rules.len());
        assert_eq!(Language::new("tr"), rules[0].language);
        assert_eq!(Language::new("az"), rules[1].language);
        assert_eq!(None, rules[2].language);
        assert_eq!(&['i', '\u{0307}'], rules[2].lower);
    }

    #[test]
    fn test_rule_lookup() {
        assert!(special_casing_rules('a').is_empty());
        assert!(special_casing_rules('\u{1F600}').is_empty());

        let sharp_s = special_casing_rules('\u{00DF}');
        assert_eq!(1, sharp_s.len());
        assert_eq!(&['S', 'S'], sharp_s[0].upper);
        assert_eq!(&['S', 's'], sharp_s[0].title);
        assert_eq!(&['s', 's'], sharp_s[0].fold);

        let sigma = special_casing_rules('\u{03A3}');
        assert_eq!(CasingContext::FinalSigma, sigma[0].context);
        assert_eq!(&['\u{03C2}'], sigma[0].lower);

        let dotless = special_casing_rules('I');
        assert!(dotless
            .iter()
            .any(|rule| rule.context == CasingContext::BeforeDot && rule.negated));
    }

    #[test]
    fn test_applies_to_language() {
        let rules = special_casing_rules('\u{0130}');
        assert!(rules[0].applies_to_language(Language::new("tr")));
        assert!(!rules[0].applies_to_language(Language::new("az")));
        assert!(!rules[0].applies_to_language(None));
        assert!(rules[2].applies_to_language(None));
        assert!(rules[2].applies_to_language(Language::new("tr")));
    }
}
