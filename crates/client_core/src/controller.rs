use shared::{
    domain::{BiomarkerField, Classification},
    error::FieldErrors,
    protocol::PredictRequest,
};

use crate::predictor::ClassifyError;
use crate::validator::{validate, RawInput};

/// The one user-facing message for any transport-level failure. Raw error
/// detail goes to the log, never to the screen.
pub const FAILURE_MESSAGE: &str =
    "The analysis service could not be reached. Please try again.";

/// Where the current submission attempt stands.
///
/// `Pending` carries the attempt number so a late response from a superseded
/// attempt can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending { attempt: u64 },
    Settled,
}

/// Result of the most recent settled attempt. Replaced wholesale, never
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Classification(Classification),
    Failure(&'static str),
}

/// What the caller should do after [`SubmissionController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Validation failed; field errors are set, nothing was dispatched.
    Rejected,
    /// A previous attempt is still in flight; strict no-op.
    AlreadyPending,
    /// Dispatch this payload and report back via `settle` with the same
    /// attempt number.
    Dispatch { attempt: u64, payload: PredictRequest },
}

/// Owns the submission state machine.
///
/// `Idle --validate ok--> Pending --settle--> Settled --submit--> Pending`,
/// re-enterable indefinitely; a failed validation leaves the state untouched.
/// The controller is the only mutator of [`SubmissionState`], [`Outcome`],
/// and [`FieldErrors`]; the presentation layer observes them through the
/// accessors and feeds edits back through `submit` / `clear_field_error`.
#[derive(Debug)]
pub struct SubmissionController {
    state: SubmissionState,
    outcome: Outcome,
    field_errors: FieldErrors,
    attempts: u64,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            outcome: Outcome::Idle,
            field_errors: FieldErrors::new(),
            attempts: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending { .. })
    }

    /// Starts a submission attempt from the current raw input.
    ///
    /// Validation failures are absorbed here: the complete error map replaces
    /// the previous one and no network work is requested. While an attempt is
    /// pending, further calls do nothing.
    pub fn submit(&mut self, raw: &RawInput) -> SubmitAction {
        if self.is_pending() {
            tracing::debug!("submission ignored, attempt already pending");
            return SubmitAction::AlreadyPending;
        }

        match validate(raw) {
            Err(errors) => {
                tracing::debug!(error_count = errors.len(), "submission rejected by validation");
                self.field_errors = errors;
                SubmitAction::Rejected
            }
            Ok(payload) => {
                self.attempts += 1;
                let attempt = self.attempts;
                self.field_errors = FieldErrors::new();
                self.outcome = Outcome::Idle;
                self.state = SubmissionState::Pending { attempt };
                tracing::info!(attempt, "submission dispatched");
                SubmitAction::Dispatch { attempt, payload }
            }
        }
    }

    /// Applies the result of a dispatched attempt.
    ///
    /// Returns `false` without touching any state when the attempt number
    /// does not match the pending attempt (stale response, or nothing
    /// pending at all).
    pub fn settle(
        &mut self,
        attempt: u64,
        result: Result<Classification, ClassifyError>,
    ) -> bool {
        match self.state {
            SubmissionState::Pending { attempt: pending } if pending == attempt => {}
            _ => {
                tracing::debug!(attempt, "dropping stale or unexpected settlement");
                return false;
            }
        }

        self.outcome = match result {
            Ok(classification) => {
                tracing::info!(attempt, ?classification, "attempt settled");
                Outcome::Classification(classification)
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "attempt failed");
                Outcome::Failure(FAILURE_MESSAGE)
            }
        };
        self.state = SubmissionState::Settled;
        true
    }

    /// Abandons a dispatched attempt that never reached the transport (for
    /// example, the worker queue rejected it).
    ///
    /// Settles the matching pending attempt as a failure so the machine stays
    /// re-enterable instead of waiting for a settlement that cannot arrive.
    /// Returns `false` without touching any state for stale or unknown
    /// attempts.
    pub fn abort(&mut self, attempt: u64) -> bool {
        match self.state {
            SubmissionState::Pending { attempt: pending } if pending == attempt => {}
            _ => {
                tracing::debug!(attempt, "ignoring abort for non-pending attempt");
                return false;
            }
        }

        tracing::warn!(attempt, "attempt aborted before dispatch");
        self.outcome = Outcome::Failure(FAILURE_MESSAGE);
        self.state = SubmissionState::Settled;
        true
    }

    /// Per-keystroke partial update: removes the one field's inline error
    /// without re-validating the rest of the form.
    pub fn clear_field_error(&mut self, field: BiomarkerField) {
        self.field_errors.clear(field);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
