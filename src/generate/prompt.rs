//! Deterministic prompt construction for the image collaborator.

use crate::models::{format_feet, RoomDesign};

/// Builds the natural-language generation prompt from a design record.
///
/// The template is fixed and the interpolation deterministic: dimensions as
/// `WxL feet`, the style id, the color palette joined in selection order, and
/// the distinct object kinds present in the layout in first-occurrence order.
#[must_use]
pub fn build_prompt(design: &RoomDesign) -> String {
    let features = design
        .distinct_kinds()
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Generate a high-quality interior room design with these details:\n\
         - Dimensions: {width}x{length} feet\n\
         - Style: {style}\n\
         - Color Palette: {palette}\n\
         - Features: {features}",
        width = format_feet(design.dimensions.width),
        length = format_feet(design.dimensions.length),
        style = design.style,
        palette = design.color_palette.join(", "),
        features = features,
    )
}
