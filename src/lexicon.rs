//! Pass-through lexicon: Latin words that must never be transliterated.
//!
//! Covers borrowed English/technical words that appear verbatim inside
//! Singlish sentences ("library ekata yamu"). All-uppercase acronyms are
//! handled by the tokenizer's case heuristic instead, so that lowercase
//! Sinhala homographs ("api" vs "API") still convert.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Default word list, embedded at build time. Matching is case-insensitive.
pub const DEFAULT_TOML: &str = r#"
words = [
    # month names and meridiem markers seen in date/time spans
    "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
    # currency prefix ("Rs.1500")
    "rs",
    # borrowed/technical words observed in colloquial use
    "assignment", "attach", "campus", "check", "documents", "download",
    "email", "file", "folder", "generate", "internet", "key", "laptop",
    "late", "library", "mall", "meeting", "mobile", "office", "online",
    "password", "phone", "plan", "project", "software", "submit",
    "system", "test", "traffic", "upload", "zoom",
]
"#;

#[derive(Deserialize)]
struct LexiconConfig {
    words: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("word list is empty")]
    Empty,
    #[error("non-ASCII word: {0}")]
    NonAsciiWord(String),
    #[error("empty word in list")]
    EmptyWord,
    #[error("pass-through lexicon already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the lowercased word set.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<HashSet<String>, LexiconError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    if config.words.is_empty() {
        return Err(LexiconError::Empty);
    }

    let mut words = HashSet::with_capacity(config.words.len());
    for word in config.words {
        if word.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        if !word.is_ascii() {
            return Err(LexiconError::NonAsciiWord(word));
        }
        words.insert(word.to_ascii_lowercase());
    }
    Ok(words)
}

/// Case-insensitive pass-through word set, shared process-wide and
/// immutable after first use.
pub struct PassLexicon {
    words: HashSet<String>,
}

impl PassLexicon {
    /// Set custom lexicon TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        // Validate eagerly
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PassLexicon {
        static INSTANCE: OnceLock<PassLexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let words = parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid");
            PassLexicon { words }
        })
    }

    pub fn contains(&self, token: &str) -> bool {
        token.is_ascii() && self.words.contains(&token.to_ascii_lowercase())
    }
}
