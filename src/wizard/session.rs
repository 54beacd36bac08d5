//! Wizard session: wires the child components to the controller.
//!
//! The session replaces the original's callback-based data flow with
//! explicit one-directional event routing: each user action mutates exactly
//! one child component, and the resulting event is forwarded to the
//! controller only while the wizard is on that child's step. The aggregated
//! record still retains fields from steps not currently displayed.

use thiserror::Error;

use crate::generate::{GenerateError, ImageGenerator};
use crate::models::{DimensionError, ObjectKind, PlanPosition, RoomDesign, StyleCatalog};
use crate::preview::DesignSummary;

use super::{
    AdvanceOutcome, LayoutEditor, LayoutEvent, StylePicker, WizardController, WizardStep,
};

/// Failure from a submission attempt driven through the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submission is only valid from the final step.
    #[error("cannot submit from step {0:?}; navigate to the review step first")]
    NotAtReview(WizardStep),
    /// A previous submission has not resolved yet.
    #[error("a generation request is already in flight")]
    AlreadyInFlight,
    /// The collaborator reported a failure.
    #[error(transparent)]
    Generation(#[from] GenerateError),
}

/// One user's run through the wizard.
///
/// Owns the layout editor, the style picker, and the controller, and routes
/// events between them. No shared mutable reference crosses a component
/// boundary; children hand the controller snapshot-carrying events.
pub struct WizardSession {
    controller: WizardController,
    layout: LayoutEditor,
    style: StylePicker,
}

impl WizardSession {
    /// Creates a session at the layout step with the starter plan (one door,
    /// one window) already placed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_step(WizardStep::Layout)
    }

    /// Creates a session starting at an externally supplied step.
    #[must_use]
    pub fn with_initial_step(step: WizardStep) -> Self {
        let mut session = Self {
            controller: WizardController::with_initial_step(step),
            layout: LayoutEditor::with_starter_objects(),
            style: StylePicker::new(),
        };
        // Seed the record so it matches what the editor shows before any
        // user action.
        let objects = session.layout.objects().to_vec();
        let dimensions = session.layout.dimensions();
        session
            .controller
            .apply_layout_event(LayoutEvent::ObjectsChanged(objects));
        session
            .controller
            .apply_layout_event(LayoutEvent::DimensionsChanged(dimensions));
        session
    }

    fn on_layout_step(&self) -> bool {
        self.controller.step() == WizardStep::Layout
    }

    fn on_style_step(&self) -> bool {
        self.controller.step() == WizardStep::Style
    }

    // ------------------------------------------------------------------
    // Layout step actions
    // ------------------------------------------------------------------

    /// Adds an object to the plan, returning its freshly assigned id.
    pub fn add_object(&mut self, kind: ObjectKind) -> String {
        let event = self.layout.add_object(kind);
        let id = self
            .layout
            .objects()
            .last()
            .map(|object| object.id.clone())
            .unwrap_or_default();
        if self.on_layout_step() {
            self.controller.apply_layout_event(event);
        }
        id
    }

    /// Moves an object; silently ignores unknown ids.
    pub fn update_object_position(&mut self, id: &str, position: PlanPosition) {
        if let Some(event) = self.layout.update_object_position(id, position) {
            if self.on_layout_step() {
                self.controller.apply_layout_event(event);
            }
        }
    }

    /// Clears every placed object.
    pub fn clear_objects(&mut self) {
        let event = self.layout.clear_all();
        if self.on_layout_step() {
            self.controller.apply_layout_event(event);
        }
    }

    /// Updates the room dimensions, rejecting out-of-range values.
    pub fn set_dimensions(
        &mut self,
        dimensions: crate::models::RoomDimensions,
    ) -> Result<(), DimensionError> {
        let event = self.layout.set_dimensions(dimensions)?;
        if self.on_layout_step() {
            self.controller.apply_layout_event(event);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Style step actions
    // ------------------------------------------------------------------

    /// Selects a style.
    pub fn select_style(&mut self, style_id: impl Into<String>) {
        let event = self.style.select_style(style_id);
        if self.on_style_step() {
            self.controller.apply_style_event(event);
        }
    }

    /// Appends a color choice.
    pub fn select_color(&mut self, color: impl Into<String>) {
        let event = self.style.select_color(color);
        if self.on_style_step() {
            self.controller.apply_style_event(event);
        }
    }

    /// Appends a material choice.
    pub fn select_material(&mut self, material: impl Into<String>) {
        let event = self.style.select_material(material);
        if self.on_style_step() {
            self.controller.apply_style_event(event);
        }
    }

    // ------------------------------------------------------------------
    // Navigation and submission
    // ------------------------------------------------------------------

    /// Moves one step forward; see [`WizardController::advance`].
    pub fn advance(&mut self) -> AdvanceOutcome {
        self.controller.advance()
    }

    /// Moves one step back; a no-op at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        self.controller.retreat()
    }

    /// Submits the aggregated record to the image collaborator.
    ///
    /// Valid only from the review step, and gated while a previous request
    /// is outstanding. The wizard stays interactive after a failure; the
    /// design record is never modified by submission.
    pub async fn generate(
        &mut self,
        generator: &dyn ImageGenerator,
    ) -> Result<String, SubmitError> {
        if self.controller.step() != WizardStep::Review {
            return Err(SubmitError::NotAtReview(self.controller.step()));
        }

        let design = match self.controller.advance() {
            AdvanceOutcome::Submit(design) => design,
            AdvanceOutcome::SubmissionPending => return Err(SubmitError::AlreadyInFlight),
            // advance() at Review never moves.
            AdvanceOutcome::Moved(step) => return Err(SubmitError::NotAtReview(step)),
        };

        let result = generator.generate(&design).await;
        self.controller.finish_submission(result.clone());
        result.map_err(SubmitError::from)
    }

    // ------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------

    /// The current wizard step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    /// Display fraction of wizard completion.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.controller.progress()
    }

    /// The aggregated design record.
    #[must_use]
    pub fn design(&self) -> &RoomDesign {
        self.controller.design()
    }

    /// The style catalog for presentation.
    #[must_use]
    pub fn catalog(&self) -> &StyleCatalog {
        self.style.catalog()
    }

    /// A display-ready projection of the current record.
    #[must_use]
    pub fn preview(&self) -> DesignSummary {
        DesignSummary::project(self.controller.design(), self.style.catalog())
    }

    /// URL of the most recently generated image, if any.
    #[must_use]
    pub fn last_image_url(&self) -> Option<&str> {
        self.controller.last_image_url()
    }

    /// Error from the most recent failed submission, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&GenerateError> {
        self.controller.last_error()
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
