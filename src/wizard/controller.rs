//! Wizard controller: step progression and design aggregation.
//!
//! The controller owns the authoritative [`RoomDesign`] record. Child
//! components (layout editor, style picker) emit events carrying full
//! snapshots; the controller shallow-merges each event into the record, so a
//! field untouched by the current step always carries over unchanged. That
//! merge-not-replace behavior is the defining invariant of this component.

use crate::generate::GenerateError;
use crate::models::RoomDesign;

use super::{LayoutEvent, StyleEvent, WizardStep};

/// Outcome of an [`WizardController::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved forward to the given step.
    Moved(WizardStep),
    /// At the final step: the aggregated record is ready to submit. The
    /// controller is now marked in flight; the caller must report the result
    /// via [`WizardController::finish_submission`].
    Submit(RoomDesign),
    /// At the final step with a submission still in flight; nothing was
    /// submitted.
    SubmissionPending,
}

/// Whether a generation request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmissionState {
    /// No request outstanding; advancing from Review submits.
    #[default]
    Idle,
    /// A request was dispatched and has not resolved yet.
    InFlight,
}

/// Owns the current wizard step and the aggregated design record.
///
/// All transitions are synchronous and in-memory; boundary moves are no-ops
/// rather than failures. The only asynchronous concern, the generation
/// request, is represented by an explicit in-flight flag that gates repeat
/// submission.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    design: RoomDesign,
    submission: SubmissionState,
    last_image_url: Option<String>,
    last_error: Option<GenerateError>,
}

impl WizardController {
    /// Creates a controller at the first step with a default record.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_step(WizardStep::Layout)
    }

    /// Creates a controller starting at an externally supplied step.
    #[must_use]
    pub fn with_initial_step(step: WizardStep) -> Self {
        Self {
            step,
            design: RoomDesign::default(),
            submission: SubmissionState::default(),
            last_image_url: None,
            last_error: None,
        }
    }

    /// The current wizard step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The aggregated design record.
    #[must_use]
    pub fn design(&self) -> &RoomDesign {
        &self.design
    }

    /// Display fraction of wizard completion (step / total).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / WizardStep::TOTAL as f64
    }

    /// Merges a layout event into the record. Only the field the event
    /// carries is replaced; everything else is retained.
    pub fn apply_layout_event(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::ObjectsChanged(objects) => self.design.layout = objects,
            LayoutEvent::DimensionsChanged(dimensions) => self.design.dimensions = dimensions,
        }
    }

    /// Merges a style event into the record. Only the field the event
    /// carries is replaced; everything else is retained.
    pub fn apply_style_event(&mut self, event: StyleEvent) {
        match event {
            StyleEvent::StyleSelected(style) => self.design.style = style,
            StyleEvent::ColorsChanged(colors) => self.design.color_palette = colors,
            StyleEvent::MaterialsChanged(materials) => self.design.materials = materials,
        }
    }

    /// Moves one step forward, or triggers submission at the final step.
    ///
    /// Below Review this is a plain transition. At Review the step never
    /// changes; each explicit call yields the record for submission exactly
    /// once, except while a previous submission is still in flight, in which
    /// case nothing is submitted.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                AdvanceOutcome::Moved(next)
            }
            None => match self.submission {
                SubmissionState::InFlight => AdvanceOutcome::SubmissionPending,
                SubmissionState::Idle => {
                    self.submission = SubmissionState::InFlight;
                    AdvanceOutcome::Submit(self.design.clone())
                }
            },
        }
    }

    /// Moves one step back; a no-op at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Whether a generation request is currently outstanding.
    #[must_use]
    pub fn submission_in_flight(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Records the result of a dispatched submission and returns the wizard
    /// to an interactive state.
    ///
    /// A failure never touches the design record, so the user can adjust and
    /// retry immediately.
    pub fn finish_submission(&mut self, result: Result<String, GenerateError>) {
        self.submission = SubmissionState::Idle;
        match result {
            Ok(url) => {
                self.last_image_url = Some(url);
                self.last_error = None;
            }
            Err(error) => {
                self.last_error = Some(error);
            }
        }
    }

    /// URL of the most recently generated image, if any.
    #[must_use]
    pub fn last_image_url(&self) -> Option<&str> {
        self.last_image_url.as_deref()
    }

    /// Error from the most recent failed submission, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&GenerateError> {
        self.last_error.as_ref()
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObjectKind, RoomDimensions, RoomObject};

    #[test]
    fn test_initial_state() {
        let controller = WizardController::new();
        assert_eq!(controller.step(), WizardStep::Layout);
        assert_eq!(controller.design(), &RoomDesign::default());
        assert!(!controller.submission_in_flight());
    }

    #[test]
    fn test_with_initial_step() {
        let controller = WizardController::with_initial_step(WizardStep::Style);
        assert_eq!(controller.step(), WizardStep::Style);
    }

    #[test]
    fn test_advance_and_retreat_bounds() {
        let mut controller = WizardController::new();
        assert_eq!(controller.retreat(), WizardStep::Layout);

        assert_eq!(
            controller.advance(),
            AdvanceOutcome::Moved(WizardStep::Style)
        );
        assert_eq!(
            controller.advance(),
            AdvanceOutcome::Moved(WizardStep::Review)
        );

        // At Review the step never changes.
        let outcome = controller.advance();
        assert!(matches!(outcome, AdvanceOutcome::Submit(_)));
        assert_eq!(controller.step(), WizardStep::Review);
    }

    #[test]
    fn test_progress_fraction() {
        let mut controller = WizardController::new();
        assert!((controller.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
        controller.advance();
        controller.advance();
        assert!((controller.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_retains_untouched_fields() {
        let mut controller = WizardController::new();

        let objects = vec![RoomObject::new(ObjectKind::Door)];
        controller.apply_layout_event(LayoutEvent::ObjectsChanged(objects.clone()));
        controller.apply_style_event(StyleEvent::StyleSelected("modern".to_string()));
        controller.apply_style_event(StyleEvent::ColorsChanged(vec!["#212529".to_string()]));

        // A later dimensions emission must not disturb any other field.
        controller.apply_layout_event(LayoutEvent::DimensionsChanged(RoomDimensions::new(
            10.0, 10.0, 9.0,
        )));

        let design = controller.design();
        assert_eq!(design.layout, objects);
        assert_eq!(design.style, "modern");
        assert_eq!(design.color_palette, ["#212529"]);
        assert_eq!(design.dimensions, RoomDimensions::new(10.0, 10.0, 9.0));
    }

    #[test]
    fn test_submission_gated_while_in_flight() {
        let mut controller = WizardController::with_initial_step(WizardStep::Review);

        let first = controller.advance();
        assert!(matches!(first, AdvanceOutcome::Submit(_)));
        assert!(controller.submission_in_flight());

        // Pressing complete again before the first request resolves submits
        // nothing.
        assert_eq!(controller.advance(), AdvanceOutcome::SubmissionPending);

        controller.finish_submission(Ok("https://img.example/room.png".to_string()));
        assert!(!controller.submission_in_flight());
        assert_eq!(
            controller.last_image_url(),
            Some("https://img.example/room.png")
        );

        // After resolution an explicit call submits again.
        assert!(matches!(controller.advance(), AdvanceOutcome::Submit(_)));
    }

    #[test]
    fn test_failed_submission_leaves_record_unmodified() {
        let mut controller = WizardController::with_initial_step(WizardStep::Review);
        controller.apply_style_event(StyleEvent::StyleSelected("bohemian".to_string()));
        let before = controller.design().clone();

        controller.advance();
        controller.finish_submission(Err(GenerateError::Provider(
            "upstream returned 500".to_string(),
        )));

        assert_eq!(controller.design(), &before);
        assert!(controller.last_error().is_some());
        assert!(!controller.submission_in_flight());
    }
}
