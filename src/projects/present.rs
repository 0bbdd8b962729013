// src/projects/present.rs
// =============================================================================
// The simplified project shape handed to the presentation layer.
//
// This is the only place formatting happens. Status is upper-cased here
// and nowhere else; the record itself is borrowed, never modified, so
// formatting the same record twice gives the same result.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::record::ProjectRecord;
use super::view::View;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Primary language, if the record names one
    pub stack: Option<String>,
    pub status: String,
    pub live_url: Option<String>,
    pub github_url: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    // Only filled in for the `all` view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
}

impl ProjectSummary {
    pub fn from_record(record: &ProjectRecord, view: View) -> Self {
        let detailed = view == View::All;

        ProjectSummary {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            stack: record.main_language().map(str::to_string),
            status: record.metadata.status.to_uppercase(),
            live_url: record.demo_url().map(str::to_string),
            github_url: record.github_url.clone(),
            tags: record.metadata.tags.clone(),
            kind: record.metadata.kind.clone(),
            categories: detailed.then(|| record.metadata.categories.clone()),
            priority: if detailed {
                record.metadata.priority.clone()
            } else {
                None
            },
        }
    }
}

/// Formats a whole selection for one view
pub fn summarize(records: &[ProjectRecord], view: View) -> Vec<ProjectSummary> {
    records
        .iter()
        .map(|r| ProjectSummary::from_record(r, view))
        .collect()
}
