//! Implements `check`, which reports how often each rule matches without writing.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::internal::{
    config,
    patch::{self, MatchPolicy, PatchError, PatchReport, PatchResult},
};

#[derive(Parser, Debug, Clone, Default)]
pub struct CheckArgs {
    /// File to inspect; defaults to the rule file's target, then the built-in path
    pub path: Option<PathBuf>,

    /// TOML file with [[rule]] entries to use instead of the built-in rules
    #[clap(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// Returns the report, or [`PatchError::AnchorMissing`] for the first rule
/// with no match.
pub fn execute(args: CheckArgs) -> PatchResult<PatchReport> {
    let resolved = config::resolve(args.path.as_deref(), args.rules.as_deref())?;
    let text = patch::load(&resolved.target)?;
    let report = patch::apply_with_report(&text, &resolved.rules, MatchPolicy::Lenient)?;

    println!("{}", resolved.target.display());
    for outcome in &report.outcomes {
        let count = match outcome.matches {
            0 => "no match".red(),
            1 => "1 match".green(),
            n => format!("{n} matches").yellow(),
        };
        println!("  {:<32} {}", outcome.rule, count);
    }

    if let Some(missing) = report.unmatched().next() {
        return Err(PatchError::AnchorMissing {
            rule: missing.rule.clone(),
        });
    }
    Ok(report)
}
