//! Singlish-to-Sinhala transliteration engine.
//!
//! Converts colloquial Latin-alphabet spellings of Sinhala into Sinhala
//! Unicode via longest-match grapheme rules, while leaving digits,
//! punctuation, acronyms, and lexicon-listed foreign words untouched.
//! Input that already contains Sinhala script is rejected as a whole
//! rather than partially converted.

pub mod convert;
pub mod lexicon;
pub mod rules;
pub mod script;
pub mod tokenizer;
pub mod transliterate;
pub mod unicode;

pub use convert::{convert, ConversionResult, ConverterSession};
pub use script::MixedScript;
