// src/showcase.rs
// =============================================================================
// What a page shows for one view.
//
// A page never errors because the upstream source is down. Instead:
// - source unavailable -> ComingSoon (the failure is logged)
// - nothing in the view -> ComingSoon
// - otherwise           -> the summaries to render
// =============================================================================

use tracing::warn;

use crate::projects::{summarize, ProjectSummary, View};
use crate::source::ProjectSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Projects(Vec<ProjectSummary>),
    ComingSoon,
}

pub async fn load_section(source: &ProjectSource, view: View) -> Section {
    let selected = match source.fetch_view(view).await {
        Ok(selected) => selected,
        Err(e) => {
            warn!("Showing placeholder for '{}' view: {}", view, e);
            return Section::ComingSoon;
        }
    };

    if selected.is_empty() {
        Section::ComingSoon
    } else {
        Section::Projects(summarize(&selected, view))
    }
}
