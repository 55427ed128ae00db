//! Rule files: a TOML document listing rules to use instead of the built-in set.
//!
//! ```toml
//! target = "src/test/java/FooTest.java"
//!
//! [[rule]]
//! name = "rename-bar"
//! pattern = 'bar\((\w+)\)'
//! replacement = 'baz($1)'
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::internal::patch::{self, PatchError, PatchResult, Rule, RuleSet};

/// Raw rule entry as written in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    /// Defaults to `rule-<n>`, counting from 1.
    #[serde(default)]
    pub name: Option<String>,
    pub pattern: String,
    pub replacement: String,
}

/// Top-level rule file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// File patched when the command line does not name one.
    #[serde(default)]
    pub target: Option<PathBuf>,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDefinition>,
}

impl RulesConfig {
    /// Parse a rule file from its text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &Path) -> PatchResult<Self> {
        let config: RulesConfig = toml::from_str(content).map_err(|e| PatchError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if config.rules.is_empty() {
            return Err(PatchError::Config {
                path: path.to_path_buf(),
                message: "no [[rule]] entries".to_string(),
            });
        }
        Ok(config)
    }

    /// Read and parse the rule file at `path`.
    pub fn load(path: &Path) -> PatchResult<Self> {
        let content = patch::load(path).map_err(|e| PatchError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("loaded rule file {}", path.display());
        Self::from_toml(&content, path)
    }

    /// Compile every entry, in file order.
    pub fn rule_set(&self) -> PatchResult<RuleSet> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let name = def.name.clone().unwrap_or_else(|| format!("rule-{}", i + 1));
                Rule::new(name, &def.pattern, def.replacement.clone())
            })
            .collect::<PatchResult<Vec<_>>>()?;
        Ok(RuleSet::new(rules))
    }
}

/// Rules and target resolved from the command line.
#[derive(Debug)]
pub struct Resolved {
    pub rules: RuleSet,
    pub target: PathBuf,
}

/// Pick the rule set and the file to patch.
///
/// An explicit `path` wins over the rule file's `target`, which wins over
/// [`patch::DEFAULT_TARGET`]. Without a rule file the built-in rules are used.
pub fn resolve(path: Option<&Path>, rules_file: Option<&Path>) -> PatchResult<Resolved> {
    let (rules, file_target) = match rules_file {
        Some(rules_file) => {
            let config = RulesConfig::load(rules_file)?;
            (config.rule_set()?, config.target)
        }
        None => (RuleSet::builtin(), None),
    };
    let target = path
        .map(Path::to_path_buf)
        .or(file_target)
        .unwrap_or_else(|| PathBuf::from(patch::DEFAULT_TARGET));
    Ok(Resolved { rules, target })
}
