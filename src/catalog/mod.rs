mod errors;
pub mod models;

pub use errors::CatalogError;
pub use models::{Item, Tags};

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

const BUILTIN_CATALOG: &str = include_str!("../../data/fonts.json");

/// Read-only, ordered collection of typeface records.
///
/// Loaded once at startup; catalog order is significant because the
/// distractor selector breaks ties by it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// The catalog bundled with the binary (`data/fonts.json`)
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        debug!(item_count = items.len(), "Parsed catalog JSON");
        Self::new(items)
    }

    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(item_count = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    pub fn item(id: &str, kind: &str, style: &str) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            letter: None,
            year: None,
            author: String::new(),
            description: String::new(),
            tags: Tags {
                kind: kind.to_string(),
                style: style.to_string(),
            },
        }
    }

    /// Eight items: three serifs similar to `bodoni`, four with nothing in common
    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            item("garamond", "serif", "old-style"),
            item("baskerville", "serif", "transitional"),
            item("bodoni", "serif", "didone"),
            item("didot", "serif", "didone"),
            item("helvetica", "sans-serif", "neo-grotesque"),
            item("futura", "sans-serif", "geometric"),
            item("courier", "monospace", "typewriter"),
            item("brush-script", "script", "casual"),
        ])
        .expect("sample catalog is valid")
    }

    /// `count` items spread over a handful of tag combinations
    pub fn numbered_catalog(count: usize) -> Catalog {
        const KINDS: [&str; 3] = ["serif", "sans-serif", "script"];
        const STYLES: [&str; 4] = ["old-style", "geometric", "humanist", "casual"];

        let items = (0..count)
            .map(|i| {
                item(
                    &format!("font-{i}"),
                    KINDS[i % KINDS.len()],
                    STYLES[i % STYLES.len()],
                )
            })
            .collect();
        Catalog::new(items).expect("numbered catalog is valid")
    }
}
