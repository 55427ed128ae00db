//! Subcommand implementations: each module defines its clap `*Args` and an `execute` entry point.

pub mod apply;
pub mod check;
pub mod rules;
