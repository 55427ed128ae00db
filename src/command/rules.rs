//! Implements `rules`, which lists the active rule set.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::internal::{
    config::RulesConfig,
    patch::{PatchResult, RuleSet},
};

#[derive(Parser, Debug, Clone, Default)]
pub struct RulesArgs {
    /// TOML file with [[rule]] entries; lists the built-in rules when omitted
    #[clap(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

pub fn execute(args: RulesArgs) -> PatchResult<()> {
    let rules = load_rules(&args)?;
    print!("{}", format_rules(&rules));
    Ok(())
}

fn load_rules(args: &RulesArgs) -> PatchResult<RuleSet> {
    match &args.rules {
        Some(path) => RulesConfig::load(path)?.rule_set(),
        None => Ok(RuleSet::builtin()),
    }
}

/// One block per rule, in application order.
pub fn format_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    for (i, rule) in rules.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, rule.name.bold()));
        out.push_str(&format!("   pattern:     {}\n", rule.pattern.as_str()));
        out.push_str(&format!(
            "   replacement: {}\n",
            rule.replacement.escape_debug()
        ));
    }
    out
}
