// src/lib.rs
// =============================================================================
// Library side of project-showcase.
//
// The binary (src/main.rs) is a thin CLI over these modules:
// - projects: data model, views, classification, presentation shape
// - source: fetching project records from upstream, with a freshness window
// - showcase: page-level view that degrades to a "coming soon" placeholder
// - server: the read-only HTTP endpoint
// - error: the two error kinds callers can see
// =============================================================================

pub mod error;
pub mod projects;
pub mod server;
pub mod showcase;
pub mod source;

#[cfg(test)]
mod test_support;

pub use error::ProjectError;
