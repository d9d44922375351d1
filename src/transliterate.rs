//! Longest-match transliteration of a single Roman token.
//!
//! At each position the longest matching cluster in the grapheme rule
//! table is consumed. A consonant leaves a pending al-lakuna; the next
//! vowel replaces it with its dependent sign (empty for the inherent
//! vowel), so a consonant with no following vowel keeps its hal form
//! ("gaman" → ගමන්). Anything unmatched degrades to verbatim output.

use crate::rules::{GraphemeRule, RuleTrie};

/// Al-lakuna (hal kirima), the Sinhala vowel killer.
pub const AL_LAKUNA: char = '\u{0DCA}';

/// Transliterate one Roman token into Sinhala codepoints.
///
/// Pure function over the token text and the global rule table; never
/// fails. Unmatched characters are emitted unchanged, except that an
/// unmatched uppercase letter first retries its single-letter lowercase
/// rule ("MaMa" → මම). Acronyms never reach this function, so the retry
/// cannot swallow them.
pub fn transliterate(token: &str) -> String {
    let trie = RuleTrie::global();
    let mut out = String::with_capacity(token.len() * 3);
    let mut pending_hal = false;
    let bytes = token.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Word-final realizations in the colloquial romanization: a short
        // "e" or the ending "-am" after a consonant both surface as the
        // long e sign ("inne" → ඉන්නේ, "ennam" → එන්නේ). Borrow the long
        // form from the "ee" rule so custom tables stay authoritative.
        if pending_hal && (&bytes[pos..] == b"e" || &bytes[pos..] == b"am") {
            if let Some((_, long_e)) = trie.longest_match(b"ee") {
                emit(long_e, &mut out, &mut pending_hal);
                break;
            }
        }

        if let Some((len, rule)) = trie.longest_match(&bytes[pos..]) {
            emit(rule, &mut out, &mut pending_hal);
            pos += len;
            continue;
        }

        let Some(ch) = token[pos..].chars().next() else {
            break;
        };
        if ch.is_ascii_uppercase() {
            let folded = [ch.to_ascii_lowercase() as u8];
            if let Some((_, rule)) = trie.longest_match(&folded) {
                emit(rule, &mut out, &mut pending_hal);
                pos += 1;
                continue;
            }
        }
        out.push(ch);
        pending_hal = false;
        pos += ch.len_utf8();
    }

    out
}

fn emit(rule: &GraphemeRule, out: &mut String, pending_hal: &mut bool) {
    match rule {
        GraphemeRule::Consonant(base) => {
            out.push_str(base);
            out.push(AL_LAKUNA);
            *pending_hal = true;
        }
        GraphemeRule::Vowel {
            independent,
            dependent,
        } => {
            if *pending_hal {
                out.pop();
                out.push_str(dependent);
            } else {
                out.push_str(independent);
            }
            *pending_hal = false;
        }
        GraphemeRule::Sign(mark) => {
            if *pending_hal {
                out.pop();
            }
            out.push_str(mark);
            *pending_hal = false;
        }
    }
}
