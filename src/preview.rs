//! Read-only preview projection of the aggregated design record.

use crate::models::{format_feet, RoomDesign, StyleCatalog};

/// Shown when no style has been chosen yet.
const NO_STYLE_LABEL: &str = "No style selected";

/// Display-ready summary of a room design.
///
/// A pure function of the current record: no state of its own, no side
/// effects, and tolerant of a record with any subset of fields populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignSummary {
    /// Width as a display string (e.g. "12ft").
    pub width: String,
    /// Length as a display string.
    pub length: String,
    /// Height as a display string.
    pub height: String,
    /// Style display label, resolved against the catalog when possible.
    pub style: String,
    /// Chosen color swatches in selection order.
    pub swatches: Vec<String>,
    /// Chosen material names in selection order.
    pub materials: Vec<String>,
    /// Number of objects placed on the plan.
    pub object_count: usize,
}

impl DesignSummary {
    /// Projects a design record into its display summary.
    #[must_use]
    pub fn project(design: &RoomDesign, catalog: &StyleCatalog) -> Self {
        let style = if design.style.is_empty() {
            NO_STYLE_LABEL.to_string()
        } else {
            catalog
                .find(&design.style)
                .map_or_else(|| design.style.clone(), |option| option.name.clone())
        };

        Self {
            width: format!("{}ft", format_feet(design.dimensions.width)),
            length: format!("{}ft", format_feet(design.dimensions.length)),
            height: format!("{}ft", format_feet(design.dimensions.height)),
            style,
            swatches: design.color_palette.clone(),
            materials: design.materials.clone(),
            object_count: design.layout.len(),
        }
    }
}
