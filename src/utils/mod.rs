//! Utilities module aggregator exposing diff rendering and testing helpers.

pub mod diff;
