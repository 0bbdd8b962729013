// src/projects/record.rs
// =============================================================================
// The shape of one portfolio entry as the upstream source delivers it.
//
// Field names on the wire are camelCase (githubUrl, mainLanguage), so the
// structs use #[serde(rename_all = "camelCase")] and keep snake_case in Rust.
//
// Missing blocks are tolerated: a record without `metadata` simply has no
// categories, which means it shows up in no category view. Nothing here
// guesses a category from other fields.
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::view::Category;

/// One project as returned by the upstream source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Opaque identifier; upstream sends either a string or a number
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faces: Faces,
}

/// Author-curated metadata; the only input to classification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Free-form ("active", "archived", ...), never normalized here
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Any JSON number; kept as sent so 2 stays 2 and 1.5 stays 1.5
    #[serde(default)]
    pub priority: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faces {
    #[serde(default)]
    pub tech: Option<TechFace>,
    #[serde(default)]
    pub demo: Option<DemoFace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechFace {
    #[serde(default)]
    pub main_language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoFace {
    #[serde(default)]
    pub url: Option<String>,
}

impl ProjectRecord {
    /// True when the author tagged this record with `category`.
    ///
    /// Exact, case-sensitive match against metadata.categories.
    pub fn in_category(&self, category: Category) -> bool {
        self.metadata
            .categories
            .iter()
            .any(|c| c == category.as_str())
    }

    pub fn main_language(&self) -> Option<&str> {
        self.faces
            .tech
            .as_ref()
            .and_then(|t| t.main_language.as_deref())
    }

    pub fn demo_url(&self) -> Option<&str> {
        self.faces.demo.as_ref().and_then(|d| d.url.as_deref())
    }
}

// `#[serde(default)]` only covers a missing key. Upstream sources also send
// an explicit null (e.g. "description": null), which must not sink the
// whole record.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Upstream ids are sometimes numeric (e.g. repository ids) and sometimes
// strings. Either way we keep them as opaque text.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "p-1",
            "name": "tiny-lisp",
            "description": "A lisp in a weekend",
            "githubUrl": "https://github.com/someone/tiny-lisp",
            "metadata": {
                "status": "active",
                "categories": ["now", "featured"],
                "tags": ["lang", "interpreter"],
                "type": "tool",
                "priority": 2
            },
            "faces": {
                "tech": { "mainLanguage": "Rust" },
                "demo": { "url": "https://tiny-lisp.example.com" }
            }
        }))
        .unwrap();

        assert_eq!(record.id, "p-1");
        assert_eq!(record.metadata.kind, "tool");
        assert_eq!(record.metadata.priority, Some(Number::from(2)));
        assert_eq!(record.main_language(), Some("Rust"));
        assert_eq!(record.demo_url(), Some("https://tiny-lisp.example.com"));
        assert!(record.in_category(Category::Now));
        assert!(record.in_category(Category::Featured));
        assert!(!record.in_category(Category::Sketches));
    }

    #[test]
    fn test_numeric_id_is_kept_as_text() {
        let record: ProjectRecord =
            serde_json::from_value(json!({ "id": 123456, "name": "x" })).unwrap();
        assert_eq!(record.id, "123456");
    }

    #[test]
    fn test_missing_metadata_means_no_categories() {
        let record: ProjectRecord =
            serde_json::from_value(json!({ "id": "bare", "faces": { "tech": null } })).unwrap();

        assert!(record.metadata.categories.is_empty());
        assert_eq!(record.main_language(), None);
        assert_eq!(record.demo_url(), None);
        for category in Category::ALL {
            assert!(!record.in_category(category));
        }
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "x",
            "description": null,
            "githubUrl": null,
            "metadata": {
                "status": null,
                "categories": null,
                "tags": null,
                "type": null,
                "priority": null
            }
        }))
        .unwrap();

        assert_eq!(record.description, "");
        assert_eq!(record.github_url, "");
        assert!(record.metadata.categories.is_empty());
        assert!(record.metadata.tags.is_empty());
        assert_eq!(record.metadata.priority, None);
    }

    #[test]
    fn test_null_metadata_and_faces_blocks() {
        let record: ProjectRecord =
            serde_json::from_value(json!({ "id": "n", "metadata": null, "faces": null })).unwrap();

        assert_eq!(record.metadata, Metadata::default());
        assert_eq!(record.faces, Faces::default());
    }

    #[test]
    fn test_fractional_priority() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "a",
            "metadata": { "categories": ["featured"], "priority": 1.5 }
        }))
        .unwrap();

        assert_eq!(record.metadata.priority.as_ref().and_then(|p| p.as_f64()), Some(1.5));
        assert!(record.in_category(Category::Featured));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "c",
            "metadata": { "categories": ["Featured", "open source"] }
        }))
        .unwrap();

        assert!(!record.in_category(Category::Featured));
        assert!(!record.in_category(Category::OpenSource));
    }
}
