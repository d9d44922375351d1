use std::collections::BTreeMap;

use serde::Deserialize;

/// Longest cluster key the table may contain, in bytes.
pub(crate) const MAX_CLUSTER_LEN: usize = 3;

/// A single grapheme rule: how one romanized cluster contributes Sinhala
/// codepoints. The three kinds combine differently with a preceding
/// consonant, which is why the table is not a flat string→string map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphemeRule {
    /// Base consonant letter. The scanner appends al-lakuna after it and
    /// the next vowel sign replaces that al-lakuna.
    Consonant(String),
    /// Vowel with an independent letter (at a non-consonant position) and
    /// a dependent sign (after a consonant). The inherent vowel `a` has an
    /// empty dependent sign.
    Vowel {
        independent: String,
        dependent: String,
    },
    /// Standalone combining mark (anusvara): replaces a pending al-lakuna
    /// without adding one of its own.
    Sign(String),
}

#[derive(Deserialize)]
struct VowelEntry {
    independent: String,
    dependent: String,
}

#[derive(Deserialize)]
struct RuleConfig {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, VowelEntry>,
    #[serde(default)]
    signs: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rule tables are empty")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("key exceeds {MAX_CLUSTER_LEN} bytes: {0}")]
    KeyTooLong(String),
    #[error("key appears in more than one section: {0}")]
    DuplicateKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("grapheme rule table already initialized")]
    AlreadyInitialized,
}

fn validate_key(key: &str) -> Result<(), RuleConfigError> {
    if !key.is_ascii() {
        return Err(RuleConfigError::NonAsciiKey(key.to_string()));
    }
    if key.is_empty() || key.len() > MAX_CLUSTER_LEN {
        return Err(RuleConfigError::KeyTooLong(key.to_string()));
    }
    Ok(())
}

/// Parse TOML text into a sorted `BTreeMap<cluster, GraphemeRule>`.
///
/// Keys must be ASCII, 1–3 bytes, and unique across the `[consonants]`,
/// `[vowels]`, and `[signs]` sections. All values must be non-empty except
/// a vowel's dependent sign (empty for the inherent vowel).
pub fn parse_rules_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, GraphemeRule>, RuleConfigError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() && config.vowels.is_empty() && config.signs.is_empty() {
        return Err(RuleConfigError::Empty);
    }

    let mut rules: BTreeMap<String, GraphemeRule> = BTreeMap::new();

    for (key, value) in config.consonants {
        validate_key(&key)?;
        if value.is_empty() {
            return Err(RuleConfigError::EmptyValue(key));
        }
        if rules
            .insert(key.clone(), GraphemeRule::Consonant(value))
            .is_some()
        {
            return Err(RuleConfigError::DuplicateKey(key));
        }
    }

    for (key, entry) in config.vowels {
        validate_key(&key)?;
        if entry.independent.is_empty() {
            return Err(RuleConfigError::EmptyValue(key));
        }
        let rule = GraphemeRule::Vowel {
            independent: entry.independent,
            dependent: entry.dependent,
        };
        if rules.insert(key.clone(), rule).is_some() {
            return Err(RuleConfigError::DuplicateKey(key));
        }
    }

    for (key, value) in config.signs {
        validate_key(&key)?;
        if value.is_empty() {
            return Err(RuleConfigError::EmptyValue(key));
        }
        if rules.insert(key.clone(), GraphemeRule::Sign(value)).is_some() {
            return Err(RuleConfigError::DuplicateKey(key));
        }
    }

    Ok(rules)
}
