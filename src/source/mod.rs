// src/source/mod.rs
// =============================================================================
// This module talks to the upstream project source.
//
// Submodules:
// - fetch: builds the endpoint URL and GETs the project list
// - cache: the time-windowed slot that lets most requests skip the network
// =============================================================================

mod cache;
mod fetch;

pub use cache::{Freshness, RevalidatingCache};
pub use fetch::{ProjectSource, SourceSettings};
