//! Script Guard: rejects input that already contains Sinhala script.
//!
//! The converter's whole purpose is Latin→Sinhala, so native codepoints in
//! the input are ambiguous and conversion is withheld entirely rather than
//! partially performed.

use std::fmt;
use std::ops::Range;

use crate::unicode::is_sinhala;

/// Mixed-script condition: the romanized input already contains Sinhala
/// codepoints. Carries the contiguous offending byte spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct MixedScript {
    pub spans: Vec<Range<usize>>,
}

impl fmt::Display for MixedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sinhala characters are not allowed in Singlish input ({} span{})",
            self.spans.len(),
            if self.spans.len() == 1 { "" } else { "s" }
        )
    }
}

/// Scan the full input for Sinhala codepoints.
///
/// Returns `Err(MixedScript)` with every contiguous Sinhala run as a byte
/// span, or `Ok(())` when the input is free of native script. Empty and
/// whitespace-only inputs trivially pass.
pub fn check(input: &str) -> Result<(), MixedScript> {
    let mut spans: Vec<Range<usize>> = Vec::new();

    for (idx, c) in input.char_indices() {
        if !is_sinhala(c) {
            continue;
        }
        let end = idx + c.len_utf8();
        match spans.last_mut() {
            Some(last) if last.end == idx => last.end = end,
            _ => spans.push(idx..end),
        }
    }

    if spans.is_empty() {
        Ok(())
    } else {
        Err(MixedScript { spans })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_latin_passes() {
        assert_eq!(check("mama gedhara yanavaa."), Ok(()));
    }

    #[test]
    fn test_empty_and_whitespace_pass() {
        assert_eq!(check(""), Ok(()));
        assert_eq!(check("          "), Ok(()));
    }

    #[test]
    fn test_digits_symbols_pass() {
        assert_eq!(check("12345!@#$% 67890"), Ok(()));
    }

    #[test]
    fn test_mixed_input_rejected() {
        let err = check("Hello මම yanavaa to the gedhara.").unwrap_err();
        assert_eq!(err.spans.len(), 1);
        let span = err.spans[0].clone();
        assert_eq!(&"Hello මම yanavaa to the gedhara."[span], "මම");
    }

    #[test]
    fn test_contiguous_run_is_one_span() {
        // මම is two codepoints but one contiguous run
        let err = check("මම").unwrap_err();
        assert_eq!(err.spans, vec![0..6]);
    }

    #[test]
    fn test_separate_runs_are_separate_spans() {
        let err = check("a ම b ම").unwrap_err();
        assert_eq!(err.spans.len(), 2);
    }

    #[test]
    fn test_combining_marks_count_as_sinhala() {
        assert!(check("x\u{0DCA}").is_err());
    }

    #[test]
    fn test_display_message() {
        let err = check("ම").unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }
}
