// src/projects/view.rs
// =============================================================================
// Names of the buckets a project can be shown in.
//
// Two related types:
// - Category: the closed set of category strings an author can put in
//   metadata.categories and that we know how to filter on
// - View: what a caller asks for. Every category has a view, plus `all`.
//   The security view is spelled "security" by callers but selects the
//   "secumilate-eligible" category.
//
// Parsing a View from text is the only place a bad name becomes an error
// (ProjectError::InvalidView). Past that point the type system guarantees
// the name was one we know.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::ProjectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Featured,
    Now,
    Creations,
    Sketches,
    OpenSource,
    SecumilateEligible,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Featured,
        Category::Now,
        Category::Creations,
        Category::Sketches,
        Category::OpenSource,
        Category::SecumilateEligible,
    ];

    /// The string as it appears in metadata.categories
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Featured => "featured",
            Category::Now => "now",
            Category::Creations => "creations",
            Category::Sketches => "sketches",
            Category::OpenSource => "open-source",
            Category::SecumilateEligible => "secumilate-eligible",
        }
    }

    /// Looks up a category by its metadata string. No partial matching.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Category(Category),
    All,
}

impl View {
    /// Every accepted view name, in the order error messages list them
    pub const NAMES: [&'static str; 7] = [
        "featured",
        "now",
        "creations",
        "sketches",
        "open-source",
        "security",
        "all",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::All => "all",
            View::Category(Category::SecumilateEligible) => "security",
            View::Category(c) => c.as_str(),
        }
    }
}

impl Default for View {
    // featured is the landing view
    fn default() -> Self {
        View::Category(Category::Featured)
    }
}

impl FromStr for View {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(View::All),
            "security" => Ok(View::Category(Category::SecumilateEligible)),
            // "secumilate-eligible" is a category string, not a view name
            "secumilate-eligible" => Err(ProjectError::InvalidView(s.to_string())),
            other => Category::from_name(other)
                .map(View::Category)
                .ok_or_else(|| ProjectError::InvalidView(s.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_name_parses_and_round_trips() {
        for name in View::NAMES {
            let view: View = name.parse().unwrap();
            assert_eq!(view.name(), name);
        }
    }

    #[test]
    fn test_security_view_selects_secumilate_category() {
        let view: View = "security".parse().unwrap();
        assert_eq!(view, View::Category(Category::SecumilateEligible));
    }

    #[test]
    fn test_unknown_views_are_rejected() {
        for bad in ["", "Featured", "blog", "open_source", "secumilate-eligible"] {
            let result = bad.parse::<View>();
            assert!(matches!(result, Err(ProjectError::InvalidView(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("open-source"), Some(Category::OpenSource));
        assert_eq!(Category::from_name("feat"), None);
        assert_eq!(Category::from_name("all"), None);
    }

    #[test]
    fn test_default_view_is_featured() {
        assert_eq!(View::default(), View::Category(Category::Featured));
    }
}
