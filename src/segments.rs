use crate::grapheme_breaks::grapheme_breaks;
use crate::word_breaks::word_breaks;

/// Iterator over the segments of a string between consecutive boundaries.
///
/// Created by [`graphemes`] and [`words`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    s: &'a str,
    breaks: Vec<bool>,
    start: usize,
}

impl<'a> Segments<'a> {
    fn new(s: &'a str, breaks: Vec<bool>) -> Self {
        Segments { s, breaks, start: 0 }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.start >= self.s.len() {
            return None;
        }
        let end = self.breaks[self.start + 1..]
            .iter()
            .position(|&is_break| is_break)
            .map_or(self.s.len(), |pos| self.start + 1 + pos);
        let segment = &self.s[self.start..end];
        self.start = end;
        Some(segment)
    }
}

/// Splits `s` into extended grapheme clusters.
///
/// ```
/// let clusters: Vec<&str> = unitext::graphemes("e\u{0301}\r\n!").collect();
/// assert_eq!(vec!["e\u{0301}", "\r\n", "!"], clusters);
/// ```
pub fn graphemes(s: &str) -> Segments<'_> {
    Segments::new(s, grapheme_breaks(s.as_bytes()))
}

/// Splits `s` at its word boundaries. Every piece of the input is yielded,
/// including whitespace and punctuation between words.
///
/// ```
/// let words: Vec<&str> = unitext::words("can't stop.").collect();
/// assert_eq!(vec!["can't", " ", "stop", "."], words);
/// ```
pub fn words(s: &str) -> Segments<'_> {
    Segments::new(s, word_breaks(s.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(None, graphemes("").next());
        assert_eq!(None, words("").next());
    }

    #[test]
    fn test_graphemes() {
        assert_eq!(
            vec!["\u{1F1E9}\u{1F1EA}", "\u{1F1EB}\u{1F1F7}", "a"],
            graphemes("\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}a").collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["\u{1F468}\u{200D}\u{1F469}"],
            graphemes("\u{1F468}\u{200D}\u{1F469}").collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_words() {
        assert_eq!(
            vec!["3.14", " ", "\u{00E9}t\u{00E9}", ",", " ", "foo_bar"],
            words("3.14 \u{00E9}t\u{00E9}, foo_bar").collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_segments_cover_input() {
        use unicode_segmentation::UnicodeSegmentation;

        let s = "Hello, \u{4E16}\u{754C}! \u{1F44B}\u{1F3FD} na\u{0131}ve  r\u{00E9}sum\u{00E9}\r\n";
        assert_eq!(s, graphemes(s).collect::<String>());
        assert_eq!(s, words(s).collect::<String>());
        assert_eq!(
            s.split_word_bounds().collect::<Vec<_>>(),
            words(s).collect::<Vec<_>>()
        );
        assert_eq!(
            s.graphemes(true).collect::<Vec<_>>(),
            graphemes(s).collect::<Vec<_>>()
        );
    }
}
