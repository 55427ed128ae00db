//! Implements `apply`, which rewrites the target file in place.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    internal::{
        config,
        patch::{self, MatchPolicy, PatchResult},
    },
    utils::diff,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct ApplyArgs {
    /// File to patch; defaults to the rule file's target, then the built-in path
    pub path: Option<PathBuf>,

    /// TOML file with [[rule]] entries to use instead of the built-in rules
    #[clap(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Fail without writing unless every rule matches exactly once
    #[clap(long)]
    pub strict: bool,

    /// Print the resulting diff instead of writing the file
    #[clap(short = 'n', long)]
    pub dry_run: bool,
}

pub fn execute(args: ApplyArgs) -> PatchResult<()> {
    let resolved = config::resolve(args.path.as_deref(), args.rules.as_deref())?;
    let policy = if args.strict {
        MatchPolicy::Strict
    } else {
        MatchPolicy::Lenient
    };
    tracing::debug!(
        "applying {} rule(s) to {} ({:?})",
        resolved.rules.len(),
        resolved.target.display(),
        policy
    );

    if args.dry_run {
        let original = patch::load(&resolved.target)?;
        let report = patch::apply_with_report(&original, &resolved.rules, policy)?;
        let rendered = diff::render_unified(
            &resolved.target.display().to_string(),
            &original,
            &report.text,
        );
        if rendered.is_empty() {
            println!("No changes for {}", resolved.target.display());
        } else {
            print!("{rendered}");
        }
        return Ok(());
    }

    patch::patch_file(&resolved.target, &resolved.rules, policy)?;
    println!("File fixed successfully");
    Ok(())
}
