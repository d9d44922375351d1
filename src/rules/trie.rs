use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_rules_toml, GraphemeRule, RuleConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(GraphemeRule),
    ExactAndPrefix(GraphemeRule),
}

struct Node {
    children: HashMap<u8, Node>,
    rule: Option<GraphemeRule>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rule: None,
        }
    }
}

/// Byte trie over the grapheme rule table, shared process-wide and
/// immutable after first use.
pub struct RuleTrie {
    root: Node,
}

impl RuleTrie {
    /// Set custom rule TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RuleConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuleConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTrie {
        static INSTANCE: OnceLock<RuleTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let rules = parse_rules_toml(toml_str).expect("grapheme rule TOML must be valid");
            let mut trie = RuleTrie { root: Node::new() };
            for (cluster, rule) in rules {
                trie.insert(&cluster, rule);
            }
            trie
        })
    }

    pub fn lookup(&self, cluster: &str) -> TrieLookupResult {
        let mut node = &self.root;
        for &b in cluster.as_bytes() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match &node.rule {
            Some(rule) => {
                if has_children {
                    TrieLookupResult::ExactAndPrefix(rule.clone())
                } else {
                    TrieLookupResult::Exact(rule.clone())
                }
            }
            None => {
                if has_children {
                    TrieLookupResult::Prefix
                } else {
                    TrieLookupResult::None
                }
            }
        }
    }

    /// Longest-match resolution: walk the trie from the start of `input`
    /// and return the longest cluster with a rule, with its byte length.
    /// A cluster of length n is always preferred over any proper prefix.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, &GraphemeRule)> {
        let mut node = &self.root;
        let mut best: Option<(usize, &GraphemeRule)> = None;
        for (i, &b) in input.iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => {
                    node = child;
                    if let Some(rule) = &node.rule {
                        best = Some((i + 1, rule));
                    }
                }
                None => break,
            }
        }
        best
    }

    fn insert(&mut self, cluster: &str, rule: GraphemeRule) {
        let mut node = &mut self.root;
        for &b in cluster.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.rule = Some(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_exact() {
        let trie = RuleTrie::global();
        assert_eq!(
            trie.lookup("k"),
            TrieLookupResult::ExactAndPrefix(GraphemeRule::Consonant("ක".into()))
        );
    }

    #[test]
    fn test_vowel_exact() {
        let trie = RuleTrie::global();
        match trie.lookup("ii") {
            TrieLookupResult::Exact(GraphemeRule::Vowel {
                independent,
                dependent,
            }) => {
                assert_eq!(independent, "ඊ");
                assert_eq!(dependent, "ී");
            }
            other => panic!("expected long-vowel rule, got {other:?}"),
        }
    }

    #[test]
    fn test_none_for_unknown() {
        let trie = RuleTrie::global();
        assert_eq!(trie.lookup("xyz"), TrieLookupResult::None);
        assert_eq!(trie.lookup("z"), TrieLookupResult::None);
    }

    #[test]
    fn test_anusvara_sign() {
        let trie = RuleTrie::global();
        match trie.lookup("QQ") {
            TrieLookupResult::Exact(GraphemeRule::Sign(s)) => assert_eq!(s, "ං"),
            other => panic!("expected sign rule, got {other:?}"),
        }
    }

    #[test]
    fn test_longest_match_prefers_digraph() {
        let trie = RuleTrie::global();
        // "dh" must win over "d" at the same position
        let (len, rule) = trie.longest_match(b"dhara").unwrap();
        assert_eq!(len, 2);
        assert_eq!(rule, &GraphemeRule::Consonant("ද".into()));
    }

    #[test]
    fn test_longest_match_prefers_trigraph() {
        let trie = RuleTrie::global();
        let (len, rule) = trie.longest_match(b"thra").unwrap();
        assert_eq!(len, 3);
        assert_eq!(rule, &GraphemeRule::Consonant("ත\u{0DCA}\u{200D}ර".into()));
    }

    #[test]
    fn test_longest_match_doubled_vowel() {
        let trie = RuleTrie::global();
        let (len, _) = trie.longest_match(b"aa").unwrap();
        assert_eq!(len, 2);
        let (len, _) = trie.longest_match(b"ax").unwrap();
        assert_eq!(len, 1);
    }

    #[test]
    fn test_longest_match_case_sensitive() {
        let trie = RuleTrie::global();
        let (_, lower) = trie.longest_match(b"n").unwrap();
        let (_, upper) = trie.longest_match(b"N").unwrap();
        assert_eq!(lower, &GraphemeRule::Consonant("න".into()));
        assert_eq!(upper, &GraphemeRule::Consonant("ණ".into()));
    }

    #[test]
    fn test_longest_match_none() {
        let trie = RuleTrie::global();
        assert!(trie.longest_match(b"5").is_none());
        assert!(trie.longest_match(b"").is_none());
    }

    #[test]
    fn init_custom_validates_eagerly() {
        // rejected before the global is touched, so other tests keep the
        // default table
        assert!(RuleTrie::init_custom("not valid toml {{{".into()).is_err());
    }

    #[test]
    fn test_all_rules_reachable() {
        let trie = RuleTrie::global();
        let rules = parse_rules_toml(DEFAULT_TOML).unwrap();
        for (cluster, rule) in &rules {
            match trie.lookup(cluster) {
                TrieLookupResult::Exact(ref r) | TrieLookupResult::ExactAndPrefix(ref r) => {
                    assert_eq!(r, rule, "rule mismatch for cluster={cluster}");
                }
                other => panic!("expected Exact/ExactAndPrefix for {cluster}, got {other:?}"),
            }
        }
    }
}
