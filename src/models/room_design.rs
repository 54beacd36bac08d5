//! The aggregated room design record.

use serde::{Deserialize, Serialize};

use super::{ObjectKind, RoomDimensions, RoomObject};

/// The single accumulating record the wizard builds across its steps.
///
/// Every field holds a component-supplied default until the user changes it;
/// fields are never absent once the wizard exists. The record is assembled by
/// shallow-merging each step's emissions, so a field untouched by the current
/// step always carries over unchanged from the prior record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDesign {
    /// Snapshot of the placed room objects.
    #[serde(default)]
    pub layout: Vec<RoomObject>,
    /// Room dimensions in feet.
    #[serde(default)]
    pub dimensions: RoomDimensions,
    /// Selected style id (e.g. "modern"); empty until a style is chosen.
    #[serde(default)]
    pub style: String,
    /// Chosen colors in selection order; duplicates are kept.
    #[serde(default)]
    pub color_palette: Vec<String>,
    /// Chosen material names in selection order; duplicates are kept.
    #[serde(default)]
    pub materials: Vec<String>,
}

impl RoomDesign {
    /// The distinct object kinds present in the layout, in first-occurrence
    /// order.
    #[must_use]
    pub fn distinct_kinds(&self) -> Vec<ObjectKind> {
        let mut kinds = Vec::new();
        for object in &self.layout {
            if !kinds.contains(&object.kind) {
                kinds.push(object.kind);
            }
        }
        kinds
    }
}

impl Default for RoomDesign {
    fn default() -> Self {
        Self {
            layout: Vec::new(),
            dimensions: RoomDimensions::default(),
            style: String::new(),
            color_palette: Vec::new(),
            materials: Vec::new(),
        }
    }
}
