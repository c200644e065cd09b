use fontgame::catalog::{Catalog, Item, Tags};

// ============================================================================
// Catalog Builders
// ============================================================================

pub struct CatalogBuilder {
    items: Vec<Item>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_item(mut self, id: &str, kind: &str, style: &str) -> Self {
        self.items.push(Item {
            id: id.to_string(),
            name: format!("Font {}", id),
            letter: Some("Aa".to_string()),
            year: None,
            author: "Test Foundry".to_string(),
            description: String::new(),
            tags: Tags {
                kind: kind.to_string(),
                style: style.to_string(),
            },
        });
        self
    }

    /// Items cycle through three types and four styles
    pub fn with_numbered_items(mut self, count: usize) -> Self {
        const KINDS: [&str; 3] = ["serif", "sans-serif", "display"];
        const STYLES: [&str; 4] = ["classic", "modern", "geometric", "humanist"];

        for index in 0..count {
            let id = format!("font-{:02}", index);
            self = self.with_item(&id, KINDS[index % KINDS.len()], STYLES[index % STYLES.len()]);
        }
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.items).expect("test catalog should be valid")
    }
}
