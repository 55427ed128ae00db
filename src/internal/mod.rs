//! Internal layer: the patch engine and rule-file configuration.

pub mod config;
pub mod patch;
