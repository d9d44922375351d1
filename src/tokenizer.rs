//! Splits input into transliteration candidates and pass-through spans.
//!
//! Token spans are byte ranges that partition the input exactly: no gaps,
//! no overlaps, no character loss. Reassembling token texts in order must
//! reproduce the input byte for byte.

use std::ops::Range;

use crate::lexicon::PassLexicon;
use crate::unicode::{is_latin, is_sinhala};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Latin-letter run that is a transliteration candidate.
    Roman,
    /// Latin-letter run preserved verbatim: an all-uppercase acronym or a
    /// pass-through lexicon word.
    Foreign,
    Digits,
    Whitespace,
    /// Pre-existing Sinhala run. Unreachable through the full pipeline
    /// (the script guard rejects such input first) but produced when the
    /// tokenizer is used standalone.
    Native,
    Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

impl Token<'_> {
    /// Everything except a Roman token contributes its raw text verbatim.
    pub fn is_pass_through(&self) -> bool {
        self.kind != TokenKind::Roman
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Space,
    Native,
    Other,
}

fn classify(c: char) -> CharClass {
    if is_latin(c) {
        CharClass::Letter
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_whitespace() {
        CharClass::Space
    } else if is_sinhala(c) {
        CharClass::Native
    } else {
        CharClass::Other
    }
}

/// All-uppercase runs of two or more letters are treated as acronyms
/// (API, URL, OTP, AM) and never transliterated.
fn is_acronym(s: &str) -> bool {
    s.len() >= 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Linear scan grouping maximal same-class character runs into tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0usize;
    let mut run_class: Option<CharClass> = None;

    for (idx, c) in input.char_indices() {
        let class = classify(c);
        match run_class {
            Some(rc) if rc == class => {}
            Some(rc) => {
                push_token(&mut tokens, input, run_start..idx, rc);
                run_start = idx;
                run_class = Some(class);
            }
            None => {
                run_class = Some(class);
            }
        }
    }
    if let Some(rc) = run_class {
        push_token(&mut tokens, input, run_start..input.len(), rc);
    }
    tokens
}

fn push_token<'a>(
    tokens: &mut Vec<Token<'a>>,
    input: &'a str,
    span: Range<usize>,
    class: CharClass,
) {
    let text = &input[span.clone()];
    let kind = match class {
        CharClass::Letter => {
            if is_acronym(text) || PassLexicon::global().contains(text) {
                TokenKind::Foreign
            } else {
                TokenKind::Roman
            }
        }
        CharClass::Digit => TokenKind::Digits,
        CharClass::Space => TokenKind::Whitespace,
        CharClass::Native => TokenKind::Native,
        CharClass::Other => TokenKind::Symbol,
    };
    tokens.push(Token { kind, text, span });
}
