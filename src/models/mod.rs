//! Data models for room designs, layout objects, and the style catalog.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of transport and
//! business logic.

pub mod dimensions;
pub mod room_design;
pub mod room_object;
pub mod style_catalog;

// Re-export all model types
pub use dimensions::{format_feet, DimensionError, RoomDimensions};
pub use room_design::RoomDesign;
pub use room_object::{ObjectKind, PlanPosition, RoomObject, DEFAULT_POSITION};
pub use style_catalog::{MaterialOption, StyleCatalog, StyleOption};
