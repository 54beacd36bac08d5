//! Layout editor: the stateful owner of room objects and dimensions.

use crate::models::{
    DimensionError, ObjectKind, PlanPosition, RoomDimensions, RoomObject, DEFAULT_POSITION,
};

/// Notification emitted by a layout mutation.
///
/// Every event carries the entire new collection or value, never a delta;
/// consumers replace their copy wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// The object set changed; carries a full snapshot.
    ObjectsChanged(Vec<RoomObject>),
    /// The room dimensions changed; carries the full new value.
    DimensionsChanged(RoomDimensions),
}

/// Tracks the set of placeable room objects and the room dimensions.
///
/// The editor exclusively owns its objects; every emitted event carries
/// snapshot copies, so downstream holders never alias live state.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    objects: Vec<RoomObject>,
    dimensions: RoomDimensions,
}

impl LayoutEditor {
    /// Creates an editor with no objects and default dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            dimensions: RoomDimensions::default(),
        }
    }

    /// Creates an editor seeded with the starter plan: one door and one
    /// window, mirroring what a user sees before touching anything.
    #[must_use]
    pub fn with_starter_objects() -> Self {
        let mut editor = Self::new();
        editor.objects.push(RoomObject::new(ObjectKind::Door));
        editor
            .objects
            .push(RoomObject::at(ObjectKind::Window, PlanPosition::new(200.0, 50.0)));
        editor
    }

    /// Adds a new object of the given kind at the default canvas position,
    /// assigning it a fresh unique id.
    ///
    /// The kind is not checked against the room's physical bounds; the plan
    /// canvas is free-form.
    pub fn add_object(&mut self, kind: ObjectKind) -> LayoutEvent {
        self.objects.push(RoomObject::at(kind, DEFAULT_POSITION));
        LayoutEvent::ObjectsChanged(self.objects.clone())
    }

    /// Moves the object with the given id to a new position.
    ///
    /// Returns `None` when the id is unknown: an unknown id is a silent
    /// no-op by contract, not an error, and no notification is emitted.
    pub fn update_object_position(
        &mut self,
        id: &str,
        position: PlanPosition,
    ) -> Option<LayoutEvent> {
        let object = self.objects.iter_mut().find(|o| o.id == id)?;
        object.position = position;
        Some(LayoutEvent::ObjectsChanged(self.objects.clone()))
    }

    /// Removes every object from the plan.
    pub fn clear_all(&mut self) -> LayoutEvent {
        self.objects.clear();
        LayoutEvent::ObjectsChanged(self.objects.clone())
    }

    /// Replaces the room dimensions.
    ///
    /// Out-of-range input (non-positive or non-finite feet) is rejected here
    /// at the editor boundary and no state changes.
    pub fn set_dimensions(
        &mut self,
        dimensions: RoomDimensions,
    ) -> Result<LayoutEvent, DimensionError> {
        dimensions.validate()?;
        self.dimensions = dimensions;
        Ok(LayoutEvent::DimensionsChanged(self.dimensions))
    }

    /// The current object set.
    #[must_use]
    pub fn objects(&self) -> &[RoomObject] {
        &self.objects
    }

    /// The current room dimensions.
    #[must_use]
    pub fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    /// Number of objects currently placed.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new()
    }
}
