//! End-to-end tests for the wizard session: step navigation, record
//! aggregation, and gated submission.

use roomcraft::generate::{GenerateError, MockImageGenerator};
use roomcraft::models::{ObjectKind, PlanPosition, RoomDimensions};
use roomcraft::wizard::{AdvanceOutcome, SubmitError, WizardSession, WizardStep};

#[test]
fn test_full_flow_builds_complete_record() {
    let mut session = WizardSession::new();
    assert_eq!(session.step(), WizardStep::Layout);

    // Layout step: reshape the room and add a feature.
    session
        .set_dimensions(RoomDimensions::new(18.0, 22.0, 10.0))
        .expect("valid dimensions");
    let feature_id = session.add_object(ObjectKind::Feature);
    session.update_object_position(&feature_id, PlanPosition::new(310.0, 220.0));

    // Style step.
    session.advance();
    assert_eq!(session.step(), WizardStep::Style);
    session.select_style("traditional");
    session.select_color("#E9ECEF");
    session.select_color("#495057");
    session.select_material("Mahogany");

    // Review step.
    session.advance();
    assert_eq!(session.step(), WizardStep::Review);

    let design = session.design();
    assert_eq!(design.dimensions, RoomDimensions::new(18.0, 22.0, 10.0));
    assert_eq!(design.style, "traditional");
    assert_eq!(design.color_palette, ["#E9ECEF", "#495057"]);
    assert_eq!(design.materials, ["Mahogany"]);
    assert_eq!(design.layout.len(), 3); // starter door + window + feature
}

#[test]
fn test_retreat_preserves_accumulated_style_choices() {
    let mut session = WizardSession::new();
    session.advance();
    session.select_color("#FFF5F5");
    session.select_color("#862E9C");
    session.select_material("Rattan");

    // Back to Layout, then forward again.
    assert_eq!(session.retreat(), WizardStep::Layout);
    assert!(matches!(
        session.advance(),
        AdvanceOutcome::Moved(WizardStep::Style)
    ));

    // No loss, no reordering.
    assert_eq!(session.design().color_palette, ["#FFF5F5", "#862E9C"]);
    assert_eq!(session.design().materials, ["Rattan"]);
}

#[test]
fn test_retreat_at_first_step_is_noop() {
    let mut session = WizardSession::new();
    assert_eq!(session.retreat(), WizardStep::Layout);
    assert_eq!(session.retreat(), WizardStep::Layout);
}

#[test]
fn test_progress_fraction_tracks_steps() {
    let mut session = WizardSession::new();
    assert!((session.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
    session.advance();
    assert!((session.progress() - 2.0 / 3.0).abs() < f64::EPSILON);
    session.advance();
    assert!((session.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_dimensions_rejected_without_state_change() {
    let mut session = WizardSession::new();
    let before = session.design().dimensions;

    let result = session.set_dimensions(RoomDimensions::new(0.0, 15.0, 8.0));
    assert!(result.is_err());
    assert_eq!(session.design().dimensions, before);
}

#[tokio::test]
async fn test_submission_success_and_retry_after_failure() {
    let mut session = WizardSession::new();
    session.advance();
    session.select_style("modern");
    session.advance();

    // First attempt fails; the wizard must stay interactive.
    let failing = MockImageGenerator::failing(GenerateError::RateLimited("quota".to_string()));
    let result = session.generate(&failing).await;
    assert!(matches!(
        result,
        Err(SubmitError::Generation(GenerateError::RateLimited(_)))
    ));
    assert_eq!(session.step(), WizardStep::Review);
    assert_eq!(session.design().style, "modern");

    // Retry succeeds and the URL is returned unchanged.
    let succeeding = MockImageGenerator {
        image_url: "https://cdn.example.com/final.png".to_string(),
        ..MockImageGenerator::default()
    };
    let url = session.generate(&succeeding).await.expect("retry succeeds");
    assert_eq!(url, "https://cdn.example.com/final.png");
    assert_eq!(session.last_image_url(), Some("https://cdn.example.com/final.png"));
}

#[test]
fn test_preview_reflects_current_record() {
    let mut session = WizardSession::new();
    session
        .set_dimensions(RoomDimensions::new(12.5, 15.0, 8.0))
        .expect("valid dimensions");
    session.advance();
    session.select_style("modern");

    let summary = session.preview();
    assert_eq!(summary.width, "12.5ft");
    assert_eq!(summary.length, "15ft");
    assert_eq!(summary.style, "Modern");
    assert_eq!(summary.object_count, 2);
}
