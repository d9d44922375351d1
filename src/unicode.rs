//! Character-level Unicode classification for Singlish input.

/// Check the full Sinhala block (U+0D80..U+0DFF). This includes a few
/// unassigned codepoints, but none of them can appear in converter output
/// or pasted Sinhala text, so the block-level check is preferred over an
/// exact assigned-range list for clarity.
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_sinhala('ම'));
        assert!(is_sinhala('\u{0DCA}')); // al-lakuna
        assert!(is_sinhala('ං'));
        assert!(!is_sinhala('a'));
        assert!(!is_sinhala('あ'));
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('ම'));
        assert!(!is_latin('5'));
    }
}
