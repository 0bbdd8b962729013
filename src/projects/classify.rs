// src/projects/classify.rs
// =============================================================================
// Picks the projects that belong in a view.
//
// Everything here is a pure function over a slice of records:
// - no I/O, no shared state, no errors
// - the input order is kept (we filter, we never sort)
// - membership comes only from metadata.categories
//
// The string-keyed entry point (filter_by_category) returns an empty list
// for a category name it does not know. Callers that take names from users
// should parse a View first so the bad name is reported instead.
// =============================================================================

use super::record::ProjectRecord;
use super::view::{Category, View};

/// Projects tagged with the category named `category`.
///
/// Unknown names match nothing.
pub fn filter_by_category(projects: &[ProjectRecord], category: &str) -> Vec<ProjectRecord> {
    match Category::from_name(category) {
        Some(category) => filter_by(projects, category),
        None => Vec::new(),
    }
}

/// Typed form of filter_by_category
pub fn filter_by(projects: &[ProjectRecord], category: Category) -> Vec<ProjectRecord> {
    projects
        .iter()
        .filter(|p| p.in_category(category))
        .cloned()
        .collect()
}

/// The landing view
pub fn get_featured_projects(projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
    filter_by(projects, Category::Featured)
}

pub fn filter_by_security_category(projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
    filter_by(projects, Category::SecumilateEligible)
}

pub fn filter_by_sketch_category(projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
    filter_by(projects, Category::Sketches)
}

/// Applies a view. `all` hands back every record unchanged.
pub fn select(projects: &[ProjectRecord], view: View) -> Vec<ProjectRecord> {
    match view {
        View::All => projects.to_vec(),
        View::Category(Category::Featured) => get_featured_projects(projects),
        View::Category(Category::SecumilateEligible) => filter_by_security_category(projects),
        View::Category(Category::Sketches) => filter_by_sketch_category(projects),
        View::Category(category) => filter_by(projects, category),
    }
}
