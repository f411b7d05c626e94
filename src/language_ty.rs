use std::{fmt, str};

/// A two-letter ISO 639 language code, used to select language-specific
/// case mapping rules (Turkish, Azeri, Lithuanian, Dutch).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Language([u8; 2]);

impl Language {
    /// Creates a language from a two-letter code such as `"tr"`.
    ///
    /// The code is case-insensitive. Returns `None` for anything that isn't
    /// exactly two ASCII letters.
    pub fn new(code: &str) -> Option<Self> {
        match *code.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Some(Language([a.to_ascii_lowercase(), b.to_ascii_lowercase()]))
            }
            _ => None,
        }
    }

    /// Extracts the language part of a POSIX locale name.
    ///
    /// `"tr_TR.UTF-8"`, `"lt_LT"` and `"nl@euro"` yield `tr`, `lt` and `nl`.
    /// The `C` and `POSIX` locales, as well as three-letter codes, yield `None`.
    pub fn from_locale_name(locale: &str) -> Option<Self> {
        let end = locale
            .find(|c: char| matches!(c, '_' | '.' | '@' | '-'))
            .unwrap_or(locale.len());
        Self::new(&locale[..end])
    }

    pub(crate) const fn from_code(code: [u8; 2]) -> Self {
        Language(code)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ever constructed from ASCII letters.
        str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn test_new() {
        assert_eq!("tr", Language::new("tr").unwrap().as_str());
        assert_eq!("lt", Language::new("LT").unwrap().as_str());
        assert_eq!(None, Language::new("tur"));
        assert_eq!(None, Language::new(""));
        assert_eq!(None, Language::new("t1"));
    }

    #[test]
    fn test_from_locale_name() {
        assert_eq!(Language::new("tr"), Language::from_locale_name("tr_TR.UTF-8"));
        assert_eq!(Language::new("nl"), Language::from_locale_name("nl@euro"));
        assert_eq!(Language::new("az"), Language::from_locale_name("az"));
        assert_eq!(None, Language::from_locale_name("C"));
        assert_eq!(None, Language::from_locale_name("POSIX"));
        assert_eq!(None, Language::from_locale_name("ast_ES"));
    }

    #[test]
    fn test_debug_fmt_language() {
        assert_eq!("Language(\"tr\")", format!("{:?}", Language::new("tr").unwrap()));
        assert_eq!("lt", Language::new("lt").unwrap().to_string());
    }
}
