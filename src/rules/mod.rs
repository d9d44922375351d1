mod config;
mod table;
mod trie;

pub use config::{parse_rules_toml, GraphemeRule, RuleConfigError};
pub use table::DEFAULT_TOML;
pub use trie::{RuleTrie, TrieLookupResult};
