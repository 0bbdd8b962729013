// src/projects/mod.rs
// =============================================================================
// Everything about project records that does not touch the network.
//
// Submodules:
// - record: the ProjectRecord data model as the upstream source sends it
// - view: the named views (featured, now, ..., all) and their categories
// - classify: pure filters that pick the records for a view
// - present: the simplified shape returned to the presentation layer
// =============================================================================

mod classify;
mod present;
mod record;
mod view;

pub use classify::{
    filter_by, filter_by_category, filter_by_security_category, filter_by_sketch_category,
    get_featured_projects, select,
};
pub use present::{summarize, ProjectSummary};
pub use record::{DemoFace, Faces, Metadata, ProjectRecord, TechFace};
pub use view::{Category, View};
