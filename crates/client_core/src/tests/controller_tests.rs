use super::*;
use reqwest::StatusCode;
use shared::domain::{BiomarkerField, Classification};

use crate::validator::RawInput;

fn valid_input() -> RawInput {
    let mut raw = RawInput::default();
    raw.set(BiomarkerField::SerumCreatinine, "1.2");
    raw.set(BiomarkerField::Hemoglobin, "14.5");
    raw.set(BiomarkerField::Triglyceride, "150");
    raw.set(BiomarkerField::TotChole, "200");
    raw
}

fn dispatch(controller: &mut SubmissionController, raw: &RawInput) -> u64 {
    match controller.submit(raw) {
        SubmitAction::Dispatch { attempt, .. } => attempt,
        other => panic!("expected dispatch, got {other:?}"),
    }
}

#[test]
fn invalid_input_is_rejected_without_state_transition() {
    let mut controller = SubmissionController::new();
    let action = controller.submit(&RawInput::default());

    assert_eq!(action, SubmitAction::Rejected);
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.outcome(), Outcome::Idle);
    assert_eq!(controller.field_errors().len(), 4);
}

#[test]
fn valid_input_transitions_to_pending_and_clears_prior_outcome() {
    let mut controller = SubmissionController::new();
    let raw = valid_input();

    let attempt = dispatch(&mut controller, &raw);
    assert!(controller.settle(attempt, Ok(Classification::Clear)));
    assert_eq!(
        controller.outcome(),
        Outcome::Classification(Classification::Clear)
    );

    let attempt = dispatch(&mut controller, &raw);
    assert_eq!(controller.state(), SubmissionState::Pending { attempt });
    // Prior classification is hidden while the new attempt is in flight.
    assert_eq!(controller.outcome(), Outcome::Idle);
    assert!(controller.field_errors().is_empty());
}

#[test]
fn resubmission_while_pending_is_a_no_op() {
    let mut controller = SubmissionController::new();
    let raw = valid_input();

    let attempt = dispatch(&mut controller, &raw);
    let state_before = controller.state();

    assert_eq!(controller.submit(&raw), SubmitAction::AlreadyPending);
    assert_eq!(controller.state(), state_before);
    assert_eq!(controller.outcome(), Outcome::Idle);

    // The original attempt still settles normally afterwards.
    assert!(controller.settle(attempt, Ok(Classification::RiskDetected)));
    assert_eq!(controller.state(), SubmissionState::Settled);
}

#[test]
fn risk_label_settles_as_risk_classification() {
    let mut controller = SubmissionController::new();
    let attempt = dispatch(&mut controller, &valid_input());

    assert!(controller.settle(attempt, Ok(Classification::RiskDetected)));
    assert_eq!(controller.state(), SubmissionState::Settled);
    assert_eq!(
        controller.outcome(),
        Outcome::Classification(Classification::RiskDetected)
    );
}

#[test]
fn transport_failure_settles_with_generic_message_only() {
    let mut controller = SubmissionController::new();
    let attempt = dispatch(&mut controller, &valid_input());

    let raw_detail = "connection refused (os error 111)";
    let err = ClassifyError::MalformedResponse(raw_detail.to_string());
    assert!(controller.settle(attempt, Err(err)));

    assert_eq!(controller.state(), SubmissionState::Settled);
    match controller.outcome() {
        Outcome::Failure(message) => {
            assert_eq!(message, FAILURE_MESSAGE);
            assert!(!message.contains(raw_detail));
            assert!(!message.contains("os error"));
        }
        other => panic!("expected failure outcome, got {other:?}"),
    }
}

#[test]
fn server_status_failure_uses_the_same_generic_message() {
    let mut controller = SubmissionController::new();
    let attempt = dispatch(&mut controller, &valid_input());

    let err = ClassifyError::Status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(controller.settle(attempt, Err(err)));
    assert_eq!(controller.outcome(), Outcome::Failure(FAILURE_MESSAGE));
}

#[test]
fn stale_settlement_is_dropped() {
    let mut controller = SubmissionController::new();
    let raw = valid_input();

    let first = dispatch(&mut controller, &raw);
    assert!(controller.settle(first, Err(ClassifyError::UnknownLabel(9))));

    let second = dispatch(&mut controller, &raw);

    // A late response from the first attempt must not clobber the new one.
    assert!(!controller.settle(first, Ok(Classification::Clear)));
    assert_eq!(controller.state(), SubmissionState::Pending { attempt: second });
    assert_eq!(controller.outcome(), Outcome::Idle);

    assert!(controller.settle(second, Ok(Classification::Clear)));
    assert_eq!(
        controller.outcome(),
        Outcome::Classification(Classification::Clear)
    );
}

#[test]
fn settle_without_pending_attempt_changes_nothing() {
    let mut controller = SubmissionController::new();
    assert!(!controller.settle(1, Ok(Classification::Clear)));
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.outcome(), Outcome::Idle);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut controller = SubmissionController::new();
    let mut raw = valid_input();
    raw.set(BiomarkerField::SerumCreatinine, "");
    raw.set(BiomarkerField::Triglyceride, "abc");

    assert_eq!(controller.submit(&raw), SubmitAction::Rejected);
    assert_eq!(controller.field_errors().len(), 2);

    controller.clear_field_error(BiomarkerField::Triglyceride);
    assert_eq!(controller.field_errors().len(), 1);
    assert!(controller
        .field_errors()
        .get(BiomarkerField::SerumCreatinine)
        .is_some());
}

#[test]
fn aborted_attempt_settles_as_failure_and_allows_retry() {
    let mut controller = SubmissionController::new();
    let raw = valid_input();

    let attempt = dispatch(&mut controller, &raw);
    assert!(controller.abort(attempt));

    // The machine must not stay wedged in Pending waiting for a settlement
    // that can never arrive.
    assert_eq!(controller.state(), SubmissionState::Settled);
    assert_eq!(controller.outcome(), Outcome::Failure(FAILURE_MESSAGE));
    assert!(!controller.is_pending());

    // A late settlement for the aborted attempt is dropped.
    assert!(!controller.settle(attempt, Ok(Classification::Clear)));

    let next = dispatch(&mut controller, &raw);
    assert!(next > attempt);
    assert!(controller.settle(next, Ok(Classification::Clear)));
    assert_eq!(
        controller.outcome(),
        Outcome::Classification(Classification::Clear)
    );
}

#[test]
fn abort_ignores_stale_or_missing_attempts() {
    let mut controller = SubmissionController::new();

    assert!(!controller.abort(1));
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.outcome(), Outcome::Idle);

    let attempt = dispatch(&mut controller, &valid_input());
    assert!(!controller.abort(attempt + 1));
    assert_eq!(controller.state(), SubmissionState::Pending { attempt });
    assert_eq!(controller.outcome(), Outcome::Idle);
}

#[test]
fn attempt_numbers_increase_monotonically() {
    let mut controller = SubmissionController::new();
    let raw = valid_input();

    let first = dispatch(&mut controller, &raw);
    assert!(controller.settle(first, Ok(Classification::Clear)));
    let second = dispatch(&mut controller, &raw);
    assert!(second > first);
}
