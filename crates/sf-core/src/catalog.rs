//! The fixed, ordered catalog of test categories and items.
//!
//! A test item is identified by its description text. Descriptions must be
//! unique across the whole catalog: the item state store is keyed by them,
//! so a collision would silently merge two items' state. [`Catalog::new`]
//! rejects such catalogs outright.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::errors::CatalogError;

/// Report caption of the built-in script.
pub const DEFAULT_TITLE: &str = "Store and Forward Testing Script";

// ---------------------------------------------------------------------------
// Definitions (serialized form)
// ---------------------------------------------------------------------------

/// Serialized catalog as it appears in a catalog TOML file.
///
/// ```toml
/// [[categories]]
/// name = "Enabling Offline Mode"
/// tests = ["Disconnect the terminal from Wi-Fi and mobile data."]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

impl CategoryDefinition {
    pub fn new<I, S>(name: impl Into<String>, tests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tests: tests.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A single test to be checked off or explained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TestItem {
    description: String,
}

impl TestItem {
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A named, ordered group of test items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    items: Vec<TestItem>,
}

impl Category {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[TestItem] {
        &self.items
    }
}

/// Validated, immutable catalog. Category order is report section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    /// description -> position of the owning category
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from category definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] when a description appears
    /// twice anywhere in the catalog, [`CatalogError::EmptyItem`] for blank
    /// descriptions and [`CatalogError::EmptyCategory`] for blank names.
    pub fn new(definitions: Vec<CategoryDefinition>) -> Result<Self, CatalogError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut categories = Vec::with_capacity(definitions.len());

        for (position, definition) in definitions.into_iter().enumerate() {
            if definition.name.trim().is_empty() {
                return Err(CatalogError::EmptyCategory {
                    position: position + 1,
                });
            }

            let mut items = Vec::with_capacity(definition.tests.len());
            for description in definition.tests {
                if description.trim().is_empty() {
                    return Err(CatalogError::EmptyItem {
                        category: definition.name,
                    });
                }
                if let Some(&first) = index.get(&description) {
                    let first_category: &Category = &categories[first];
                    return Err(CatalogError::DuplicateItem {
                        description,
                        first_category: first_category.name.clone(),
                        second_category: definition.name,
                    });
                }
                // Duplicate inside the category currently being built.
                if items.iter().any(|item: &TestItem| item.description == description) {
                    return Err(CatalogError::DuplicateItem {
                        first_category: definition.name.clone(),
                        second_category: definition.name,
                        description,
                    });
                }
                items.push(TestItem { description });
            }

            for item in &items {
                index.insert(item.description.clone(), position);
            }
            categories.push(Category {
                name: definition.name,
                items,
            });
        }

        Ok(Self { categories, index })
    }

    /// The built-in EMV store-and-forward (offline mode) test script.
    ///
    /// # Panics
    ///
    /// Panics if the built-in definitions stop being a valid catalog.
    #[must_use]
    pub fn store_and_forward() -> Self {
        Self::new(builtin::store_and_forward())
            .expect("built-in store-and-forward catalog is valid")
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML and any integrity
    /// error from [`Catalog::new`].
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = toml::from_str(source)?;
        Self::new(definition.categories)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read, otherwise
    /// the same errors as [`Catalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All test items, flattened in report order.
    pub fn items(&self) -> impl Iterator<Item = &TestItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn contains(&self, description: &str) -> bool {
        self.index.contains_key(description)
    }

    /// Name of the category owning `description`, if it is in the catalog.
    #[must_use]
    pub fn category_of(&self, description: &str) -> Option<&str> {
        self.index
            .get(description)
            .map(|&position| self.categories[position].name.as_str())
    }

    /// Convert back into the serialized form.
    #[must_use]
    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            categories: self
                .categories
                .iter()
                .map(|category| CategoryDefinition {
                    name: category.name.clone(),
                    tests: category
                        .items
                        .iter()
                        .map(|item| item.description.clone())
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_shape() {
        let catalog = Catalog::store_and_forward();
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.item_count(), 26);
        assert_eq!(catalog.items().count(), 26);
        assert_eq!(catalog.categories()[0].name(), "Enabling Offline Mode");
        assert_eq!(catalog.categories()[7].name(), "Final Review");
    }

    #[test]
    fn preserves_definition_order() {
        let catalog = Catalog::new(vec![
            CategoryDefinition::new("B", ["b2", "b1"]),
            CategoryDefinition::new("A", ["a1"]),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.categories().iter().map(Category::name).collect();
        assert_eq!(names, vec!["B", "A"]);
        let items: Vec<&str> = catalog.items().map(TestItem::description).collect();
        assert_eq!(items, vec!["b2", "b1", "a1"]);
        assert_eq!(catalog.category_of("a1"), Some("A"));
        assert_eq!(catalog.category_of("zzz"), None);
    }

    #[test]
    fn rejects_duplicate_across_categories() {
        let err = Catalog::new(vec![
            CategoryDefinition::new("First", ["same"]),
            CategoryDefinition::new("Second", ["other", "same"]),
        ])
        .unwrap_err();

        match err {
            CatalogError::DuplicateItem {
                description,
                first_category,
                second_category,
            } => {
                assert_eq!(description, "same");
                assert_eq!(first_category, "First");
                assert_eq!(second_category, "Second");
            }
            other => panic!("expected DuplicateItem, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_within_category() {
        let err = Catalog::new(vec![CategoryDefinition::new("Only", ["x", "x"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { .. }));
    }

    #[test]
    fn rejects_blank_item_and_category() {
        let err = Catalog::new(vec![CategoryDefinition::new("C", ["ok", "  "])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyItem { category } if category == "C"));

        let err = Catalog::new(vec![
            CategoryDefinition::new("C", ["ok"]),
            CategoryDefinition::new(" ", ["fine"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategory { position: 2 }));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.item_count(), 0);
    }

    #[test]
    fn parses_toml_definition() {
        let catalog = Catalog::from_toml_str(
            r#"
[[categories]]
name = "Offline"
tests = ["Unplug the network.", "Run a sale."]

[[categories]]
name = "Online"
tests = ["Reconnect."]
"#,
        )
        .unwrap();

        assert_eq!(catalog.item_count(), 3);
        assert!(catalog.contains("Run a sale."));
        assert_eq!(catalog.to_definition().categories[1].tests, vec!["Reconnect."]);
    }

    #[test]
    fn toml_duplicates_are_rejected() {
        let err = Catalog::from_toml_str(
            r#"
[[categories]]
name = "A"
tests = ["dup"]

[[categories]]
name = "B"
tests = ["dup"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("[[categories]]\ntests = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
