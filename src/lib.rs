#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Text segmentation and case mapping over Unicode strings.
//!
//! This crate provides the boundary and casing algorithms of the Unicode
//! standard, independent of any particular string type:
//!
//! * extended grapheme cluster boundaries, following UAX #29 section 3
//!   (rules GB1 to GB999, including the Indic conjunct rule GB9c);
//! * word boundaries, following UAX #29 section 4 (rules WB1 to WB999);
//! * full, language and context sensitive case mapping, following the
//!   "Default Case Algorithms" of chapter 3.13 of the standard together with
//!   the conditional rules of SpecialCasing.txt.
//!
//! # Code units
//!
//! All algorithms accept a slice of code units: `[u8]` (UTF-8), `[u16]`
//! (UTF-16), `[u32]` (UTF-32) or `[char]`. Break arrays have one entry per
//! code unit. The break scanners replace ill-formed sequences with U+FFFD and
//! never fail; the case mapper rejects them with
//! [`CaseMapError::InvalidEncoding`].
//!
//! # Break arrays
//!
//! ```
//! let s = "A\r\nB";
//! assert_eq!(vec![true, true, false, true], unitext::grapheme_breaks(s.as_bytes()));
//! assert_eq!(vec![true, true, false, true], unitext::word_breaks(s.as_bytes()));
//! ```
//!
//! # Case mapping
//!
//! The special casing rules that depend on the language (Turkish and
//! Azerbaijani dotted and dotless i, Lithuanian retained dots) are enabled
//! through [`CaseMapOptions::language()`]. A string mapped in pieces keeps its
//! context-sensitive rules (such as the Greek final sigma) correct when the
//! surrounding text is described with [`CasingPrefixContext`] and
//! [`CasingSuffixContext`].
//!
//! ```
//! use unitext::{to_uppercase, CaseMapOptions, Language};
//!
//! let options = CaseMapOptions::new().language(Language::new("tr"));
//! let upper = to_uppercase("istanbul".as_bytes(), &options).unwrap();
//! assert_eq!("\u{0130}STANBUL".as_bytes(), &upper[..]);
//! ```

pub(crate) mod tables;

pub(crate) mod properties;

pub(crate) mod code_unit;

pub(crate) mod grapheme_breaks;

pub(crate) mod word_breaks;

pub(crate) mod segments;

pub(crate) mod language_ty;

pub(crate) mod special_casing;

pub(crate) mod case_map;

pub(crate) mod casing;

pub(crate) mod error;

pub use properties::{
    simple_casefold, simple_lowercase, simple_titlecase, simple_uppercase, unicode_version,
    GraphemeBreak, IndicConjunctBreak, Ucd, UnicodeProperties, WordBreak, CCC_ABOVE,
    CCC_NOT_REORDERED,
};

pub use code_unit::{CodeUnit, MalformedSequence};

pub use grapheme_breaks::{grapheme_breaks, grapheme_breaks_into};

pub use word_breaks::{word_breaks, word_breaks_into};

pub use segments::{graphemes, words, Segments};

pub use language_ty::Language;

pub use case_map::{
    case_map, case_map_into, case_map_with, CaseField, CaseMapOptions, Casing,
    CasingPrefixContext, CasingSuffixContext, NormalizationForm,
};

pub use casing::{
    casecmp, is_cased, is_casefolded, is_lowercase, is_titlecase, is_uppercase, to_casefold,
    to_lowercase, to_titlecase, to_uppercase,
};

pub use error::CaseMapError;
