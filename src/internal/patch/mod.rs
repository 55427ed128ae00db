//! Regex-driven source patching.
//!
//! - [`Rule`] / [`RuleSet`]: ordered pattern/replacement pairs
//! - [`apply`] / [`apply_with_report`]: pure text rewriting
//! - [`load`] / [`save`] / [`patch_file`]: file round trip, overwriting in place

mod core;
mod error;
mod rule;

pub use self::core::{
    MatchPolicy, PatchReport, RuleOutcome, apply, apply_with_report, load, patch_file, save,
};

pub use error::{PatchError, PatchResult};
pub use rule::{DEFAULT_TARGET, Rule, RuleSet};
