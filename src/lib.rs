//! fix-tests: rewrites a Java test source in place with an ordered list of regex rules.

pub mod cli;
pub mod command;
pub mod internal;
pub mod utils;
