//! Placeable objects on the 2D room plan.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of placeable room object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A door.
    Door,
    /// A window.
    Window,
    /// An architectural feature (column, alcove, fireplace, ...).
    Feature,
}

impl ObjectKind {
    /// Lowercase label matching the wire format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position on the plan canvas, in pixel coordinates.
///
/// Coordinates are unbounded; the plan canvas is a free-form surface and
/// no business rule constrains where objects may sit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PlanPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Default canvas position for newly added objects.
pub const DEFAULT_POSITION: PlanPosition = PlanPosition::new(50.0, 50.0);

/// A single placeable object in the room plan.
///
/// Objects are owned exclusively by the layout editor; everything else works
/// with snapshot copies. Ids are UUID v4 strings, so collisions within a
/// session are not a practical concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomObject {
    /// Unique object identifier.
    pub id: String,
    /// What the object is.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Where the object sits on the plan canvas.
    pub position: PlanPosition,
}

impl RoomObject {
    /// Creates a new object of the given kind at the default position,
    /// assigning a fresh id.
    #[must_use]
    pub fn new(kind: ObjectKind) -> Self {
        Self::at(kind, DEFAULT_POSITION)
    }

    /// Creates a new object of the given kind at a specific position.
    #[must_use]
    pub fn at(kind: ObjectKind, position: PlanPosition) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            position,
        }
    }
}
