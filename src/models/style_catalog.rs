//! Static catalog of available design styles.
//!
//! The catalog is read-only reference data used for presentation: each style
//! carries a display name, representative imagery, a fixed color palette, and
//! a fixed material list. It is never derived from user input.

use serde::{Deserialize, Serialize};

/// The complete catalog of selectable design styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleCatalog {
    /// The available styles, in display order.
    pub styles: Vec<StyleOption>,
}

/// A single selectable design style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleOption {
    /// Stable style identifier (e.g. "modern").
    pub id: String,
    /// Display name (e.g. "Modern").
    pub name: String,
    /// Representative imagery reference.
    pub image: String,
    /// Fixed palette of hex colors associated with the style.
    pub colors: Vec<String>,
    /// Fixed list of materials associated with the style.
    pub materials: Vec<MaterialOption>,
}

/// A material offered by a style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialOption {
    /// Display name of the material (e.g. "Glass").
    pub name: String,
    /// Representative imagery reference.
    pub image: String,
}

impl StyleCatalog {
    /// Loads the catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/style_catalog.json");
        let catalog: Self = serde_json::from_str(json_data)?;
        Ok(catalog)
    }

    /// Looks up a style by id.
    #[must_use]
    pub fn find(&self, style_id: &str) -> Option<&StyleOption> {
        self.styles.iter().find(|s| s.id == style_id)
    }

    /// Gets a style by index.
    #[must_use]
    pub fn style_at(&self, index: usize) -> Option<&StyleOption> {
        self.styles.get(index)
    }

    /// Gets the number of styles.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { styles: Vec::new() })
    }
}
