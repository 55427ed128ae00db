//! Core rewrite logic.
//!
//! Text is loaded whole, every rule is applied in order with
//! [`Regex::replace_all`](regex::Regex::replace_all), and the result is
//! written back over the original file. No backup is kept.

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Read, Write},
    path::Path,
};

use super::{
    error::{PatchError, PatchResult},
    rule::{Rule, RuleSet},
};

/// How a rule that matches zero or several times is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Zero matches is a no-op, several matches are all replaced.
    #[default]
    Lenient,
    /// Every rule must match exactly once.
    Strict,
}

/// Match count of a single rule, measured against the text the rule saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub matches: usize,
}

/// Result of running a rule set over some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub outcomes: Vec<RuleOutcome>,
    pub text: String,
    pub changed: bool,
}

impl PatchReport {
    /// Rules that found nothing to replace.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.matches == 0)
    }
}

/// Apply every rule of `rules` to `text` in order and return the new text.
pub fn apply(text: &str, rules: &RuleSet) -> String {
    rules
        .iter()
        .fold(text.to_string(), |current, rule| apply_rule(&current, rule))
}

fn apply_rule(text: &str, rule: &Rule) -> String {
    rule.pattern
        .replace_all(text, rule.replacement.as_str())
        .into_owned()
}

/// Like [`apply`], recording how often each rule matched.
///
/// Under [`MatchPolicy::Strict`] the first rule whose count is not exactly one
/// aborts with [`PatchError::AnchorNotFound`].
pub fn apply_with_report(
    text: &str,
    rules: &RuleSet,
    policy: MatchPolicy,
) -> PatchResult<PatchReport> {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let matches = rule.count_matches(&current);
        tracing::debug!("rule '{}' matched {} time(s)", rule.name, matches);

        if policy == MatchPolicy::Strict && matches != 1 {
            return Err(PatchError::AnchorNotFound {
                rule: rule.name.clone(),
                matches,
            });
        }
        if matches == 0 {
            tracing::warn!("rule '{}' found no anchor, skipping", rule.name);
        } else {
            current = apply_rule(&current, rule);
        }

        outcomes.push(RuleOutcome {
            rule: rule.name.clone(),
            matches,
        });
    }

    let changed = current != text;
    Ok(PatchReport {
        outcomes,
        text: current,
        changed,
    })
}

/// Read the whole file at `path` as UTF-8.
///
/// `\r\n` and lone `\r` are normalized to `\n`, so text written back by
/// [`save`] always uses `\n` line endings.
pub fn load(path: &Path) -> PatchResult<String> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PatchError::FileNotFound(path.to_path_buf())
        } else {
            PatchError::io(format!("Failed to open {}", path.display()), e)
        }
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| PatchError::io(format!("Failed to read {}", path.display()), e))?;
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Overwrite the file at `path` with `text`.
///
/// The handle is dropped on every return path. A failure partway through
/// leaves the file truncated or partially written.
pub fn save(path: &Path, text: &str) -> PatchResult<()> {
    let file = File::create(path)
        .map_err(|e| PatchError::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| PatchError::io(format!("Failed to write {}", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| PatchError::io(format!("Failed to flush {}", path.display()), e))?;
    Ok(())
}

/// Load `path`, run `rules` over it and write the result back.
///
/// With [`MatchPolicy::Strict`] nothing is written unless every rule matched
/// exactly once.
pub fn patch_file(path: &Path, rules: &RuleSet, policy: MatchPolicy) -> PatchResult<PatchReport> {
    let original = load(path)?;
    let report = apply_with_report(&original, rules, policy)?;
    tracing::debug!(
        "writing {} ({} bytes, changed: {})",
        path.display(),
        report.text.len(),
        report.changed
    );
    save(path, &report.text)?;
    Ok(report)
}
