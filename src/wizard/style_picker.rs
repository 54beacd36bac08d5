//! Style picker: single-select style plus append-only color and material
//! accumulators.

use crate::models::StyleCatalog;

/// Notification emitted by a style mutation.
///
/// Sequence-carrying events hold the full updated sequence, never a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEvent {
    /// A new style id was selected, replacing the previous one.
    StyleSelected(String),
    /// A color was appended; carries the full accumulated sequence.
    ColorsChanged(Vec<String>),
    /// A material was appended; carries the full accumulated sequence.
    MaterialsChanged(Vec<String>),
}

/// Tracks the selected style and accumulated color/material choices.
///
/// Colors and materials are append-only within a wizard session: repeated
/// selection of the same value appends a duplicate entry, and no removal
/// operation is exposed.
#[derive(Debug, Clone)]
pub struct StylePicker {
    catalog: StyleCatalog,
    selected: String,
    colors: Vec<String>,
    materials: Vec<String>,
}

impl StylePicker {
    /// Creates a picker with the embedded catalog and "modern" preselected.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(StyleCatalog::default())
    }

    /// Creates a picker backed by a specific catalog.
    #[must_use]
    pub fn with_catalog(catalog: StyleCatalog) -> Self {
        Self {
            catalog,
            selected: "modern".to_string(),
            colors: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Selects a style, replacing the current selection.
    ///
    /// At most one style id is active at a time. The id is not required to
    /// exist in the catalog; an unknown id simply renders without catalog
    /// imagery.
    pub fn select_style(&mut self, style_id: impl Into<String>) -> StyleEvent {
        self.selected = style_id.into();
        StyleEvent::StyleSelected(self.selected.clone())
    }

    /// Appends a color to the accumulated palette.
    pub fn select_color(&mut self, color: impl Into<String>) -> StyleEvent {
        self.colors.push(color.into());
        StyleEvent::ColorsChanged(self.colors.clone())
    }

    /// Appends a material name to the accumulated list.
    pub fn select_material(&mut self, material: impl Into<String>) -> StyleEvent {
        self.materials.push(material.into());
        StyleEvent::MaterialsChanged(self.materials.clone())
    }

    /// The currently selected style id.
    #[must_use]
    pub fn selected_style(&self) -> &str {
        &self.selected
    }

    /// Colors accumulated so far, in selection order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Materials accumulated so far, in selection order.
    #[must_use]
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// The read-only style catalog.
    #[must_use]
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }
}

impl Default for StylePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_modern() {
        let picker = StylePicker::new();
        assert_eq!(picker.selected_style(), "modern");
        assert!(picker.colors().is_empty());
    }

    #[test]
    fn test_select_style_replaces() {
        let mut picker = StylePicker::new();
        let event = picker.select_style("bohemian");
        assert_eq!(event, StyleEvent::StyleSelected("bohemian".to_string()));

        picker.select_style("traditional");
        assert_eq!(picker.selected_style(), "traditional");
    }

    #[test]
    fn test_colors_accumulate_with_duplicates() {
        let mut picker = StylePicker::new();
        picker.select_color("#F8F9FA");
        picker.select_color("#212529");
        let event = picker.select_color("#F8F9FA");

        assert_eq!(
            event,
            StyleEvent::ColorsChanged(vec![
                "#F8F9FA".to_string(),
                "#212529".to_string(),
                "#F8F9FA".to_string(),
            ])
        );
    }

    #[test]
    fn test_materials_accumulate_in_order() {
        let mut picker = StylePicker::new();
        picker.select_material("Glass");
        let event = picker.select_material("Steel");

        assert_eq!(
            event,
            StyleEvent::MaterialsChanged(vec!["Glass".to_string(), "Steel".to_string()])
        );
        assert_eq!(picker.materials(), ["Glass", "Steel"]);
    }

    #[test]
    fn test_catalog_is_available() {
        let picker = StylePicker::new();
        assert_eq!(picker.catalog().style_count(), 3);
    }
}
